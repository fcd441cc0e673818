//! DHT12 temperature/humidity sensor driver
//!
//! The DHT12 exposes its measurements as a small register file over a
//! two-wire bus. A read is a register-pointer write transaction
//! followed by a fresh two-byte read transaction: integer part first,
//! fractional part second. An unacknowledged address byte means no
//! sensor is on the bus.

use ledcube_core::sensor::Reading;
use ledcube_core::traits::{MeteoSensor, SensorError};
use ledcube_hal::twi::{address_read, address_write, Ack, TwiBus};

/// Fixed 7-bit bus address of the DHT12
pub const DHT12_ADDRESS: u8 = 0x5c;

/// Humidity register, integer part (fraction follows at 0x01)
const REG_HUMIDITY: u8 = 0x00;
/// Temperature register, integer part (fraction follows at 0x03)
const REG_TEMPERATURE: u8 = 0x02;

/// DHT12 driver over any two-wire master
pub struct Dht12<B> {
    bus: B,
}

impl<B: TwiBus> Dht12<B> {
    pub const fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Release the underlying bus
    pub fn release(self) -> B {
        self.bus
    }

    /// Read one two-byte register pair
    ///
    /// Issues a stop on every exit path so a failed transfer never
    /// leaves the bus mid-transaction.
    fn read_register(&mut self, register: u8) -> Result<Reading, SensorError> {
        let result = self.try_read(register);
        if result.is_err() {
            self.bus.stop();
        }
        result
    }

    fn try_read(&mut self, register: u8) -> Result<Reading, SensorError> {
        // Only the initial address probe distinguishes an absent
        // sensor; later failures are bus faults.
        self.bus
            .start(address_write(DHT12_ADDRESS))
            .map_err(|_| SensorError::NotConnected)?;
        self.bus.write(register).map_err(|_| SensorError::Bus)?;
        self.bus.stop();

        self.bus
            .start(address_read(DHT12_ADDRESS))
            .map_err(|_| SensorError::Bus)?;
        let integer = self.bus.read(Ack::Ack).map_err(|_| SensorError::Bus)?;
        let fraction = self.bus.read(Ack::Nack).map_err(|_| SensorError::Bus)?;
        self.bus.stop();

        Ok(Reading::new(integer, fraction))
    }
}

impl<B: TwiBus> MeteoSensor for Dht12<B> {
    fn read_humidity(&mut self) -> Result<Reading, SensorError> {
        self.read_register(REG_HUMIDITY)
    }

    fn read_temperature(&mut self) -> Result<Reading, SensorError> {
        self.read_register(REG_TEMPERATURE)
    }
}

//! Bit-banged two-wire master
//!
//! Software implementation of the [`TwiBus`] primitives over two GPIO
//! lines with external pull-ups. SDA is open-drain style: `set_high`
//! releases the line (the pull-up raises it, or a slave holds it low
//! for an acknowledge), `set_low` drives it. SCL is driven push-pull;
//! clock stretching is not supported, which the DHT12 does not need.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use ledcube_hal::twi::{Ack, TwiBus, TwiError};

/// Half bit period, microseconds (~100 kHz standard mode)
pub const HALF_PERIOD_US: u32 = 5;

/// Software two-wire master
///
/// Between transfers both lines rest released/high. Within a transfer
/// SCL idles low and data changes only while SCL is low.
pub struct BitbangTwi<Sda, Scl, D> {
    sda: Sda,
    scl: Scl,
    delay: D,
}

impl<Sda, Scl, D> BitbangTwi<Sda, Scl, D>
where
    Sda: OutputPin + InputPin,
    Scl: OutputPin,
    D: DelayNs,
{
    /// Create a master with both lines released
    pub fn new(mut sda: Sda, mut scl: Scl, delay: D) -> Result<Self, TwiError> {
        sda.set_high().map_err(|_| TwiError::Bus)?;
        scl.set_high().map_err(|_| TwiError::Bus)?;
        Ok(Self { sda, scl, delay })
    }

    fn half_wait(&mut self) {
        self.delay.delay_us(HALF_PERIOD_US);
    }

    /// Clock one bit out; SCL must be low on entry and is low on exit
    fn write_bit(&mut self, bit: bool) -> Result<(), TwiError> {
        self.sda.set_state(bit.into()).map_err(|_| TwiError::Bus)?;
        self.half_wait();
        self.scl.set_high().map_err(|_| TwiError::Bus)?;
        self.half_wait();
        self.scl.set_low().map_err(|_| TwiError::Bus)?;
        Ok(())
    }

    /// Clock one bit in; SCL must be low on entry and is low on exit
    fn read_bit(&mut self) -> Result<bool, TwiError> {
        // SDA must be released while the slave drives it
        self.sda.set_high().map_err(|_| TwiError::Bus)?;
        self.half_wait();
        self.scl.set_high().map_err(|_| TwiError::Bus)?;
        self.half_wait();
        let bit = self.sda.is_high().map_err(|_| TwiError::Bus)?;
        self.scl.set_low().map_err(|_| TwiError::Bus)?;
        Ok(bit)
    }

    /// Write a raw byte and sample the slave's acknowledge
    fn write_raw(&mut self, byte: u8) -> Result<(), TwiError> {
        for i in 0..8 {
            self.write_bit((byte << i) & 0x80 != 0)?;
        }
        // Ninth clock: slave pulls SDA low to acknowledge
        if self.read_bit()? {
            return Err(TwiError::Nack);
        }
        Ok(())
    }
}

impl<Sda, Scl, D> TwiBus for BitbangTwi<Sda, Scl, D>
where
    Sda: OutputPin + InputPin,
    Scl: OutputPin,
    D: DelayNs,
{
    type Error = TwiError;

    fn start(&mut self, address_rw: u8) -> Result<(), TwiError> {
        // Start condition: SDA falls while SCL is high. Release both
        // first so a repeated start works from SCL-low state.
        self.sda.set_high().map_err(|_| TwiError::Bus)?;
        self.half_wait();
        self.scl.set_high().map_err(|_| TwiError::Bus)?;
        self.half_wait();
        self.sda.set_low().map_err(|_| TwiError::Bus)?;
        self.half_wait();
        self.scl.set_low().map_err(|_| TwiError::Bus)?;

        self.write_raw(address_rw)
    }

    fn write(&mut self, byte: u8) -> Result<(), TwiError> {
        self.write_raw(byte)
    }

    fn read(&mut self, ack: Ack) -> Result<u8, TwiError> {
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | self.read_bit()? as u8;
        }
        // Master acknowledge: drive low to continue, release to end
        self.write_bit(ack == Ack::Nack)?;
        // Leave SDA released for whatever follows
        self.sda.set_high().map_err(|_| TwiError::Bus)?;
        Ok(byte)
    }

    fn stop(&mut self) {
        // Stop condition: SDA rises while SCL is high. Pin errors are
        // ignored; there is nothing further to do with a broken line.
        let _ = self.sda.set_low();
        self.half_wait();
        let _ = self.scl.set_high();
        self.half_wait();
        let _ = self.sda.set_high();
        self.half_wait();
    }
}

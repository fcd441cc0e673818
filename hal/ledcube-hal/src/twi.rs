//! Two-wire bus abstractions
//!
//! Raw master primitives for an I2C-style shared clock+data bus. The
//! surface is deliberately low level (start/write/read/stop rather
//! than whole transactions): the sensor poll logic defines "device not
//! connected" as the start condition going unacknowledged, and the
//! DHT12 read sequence needs an explicit repeated start.

/// Direction bit appended to a 7-bit address for a write transfer
pub const TWI_WRITE: u8 = 0;

/// Direction bit appended to a 7-bit address for a read transfer
pub const TWI_READ: u8 = 1;

/// Compose the address byte for a write transfer
pub const fn address_write(address7: u8) -> u8 {
    (address7 << 1) | TWI_WRITE
}

/// Compose the address byte for a read transfer
pub const fn address_read(address7: u8) -> u8 {
    (address7 << 1) | TWI_READ
}

/// Acknowledge behaviour after a byte read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ack {
    /// Acknowledge the byte; the slave keeps transmitting
    Ack,
    /// Do not acknowledge; terminates the read transfer
    Nack,
}

/// Error from two-wire bus operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TwiError {
    /// No acknowledge from the slave (address or data byte)
    Nack,
    /// Bus fault (line stuck, lost arbitration)
    Bus,
}

/// Two-wire bus master
///
/// One transfer is `start`, then `write`/`read` calls, then `stop`.
/// A second `start` without an intervening `stop` is a repeated start.
pub trait TwiBus {
    /// Error type for bus operations
    type Error;

    /// Issue a start condition and send the address byte
    ///
    /// `address_rw` already carries the R/W bit (see [`address_write`]
    /// and [`address_read`]). An error means no device acknowledged
    /// the address.
    fn start(&mut self, address_rw: u8) -> Result<(), Self::Error>;

    /// Write one byte, checking the slave's acknowledge
    fn write(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Read one byte, then send the given acknowledge
    fn read(&mut self, ack: Ack) -> Result<u8, Self::Error>;

    /// Issue a stop condition, releasing the bus
    fn stop(&mut self);
}

//! Sensor readings and the poll state machine

pub mod poller;

pub use poller::{ScanState, SensorPoller};

/// One fixed-point sensor value as the DHT12 reports it
///
/// The device returns the integer and fractional parts as two separate
/// register bytes; they are kept that way rather than converted to a
/// wider fixed-point format, since the selector only looks at the
/// integer part and the report path prints both verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Integer part (degrees Celsius / percent RH)
    pub integer: u8,
    /// Fractional part (tenths)
    pub fraction: u8,
}

impl Reading {
    /// Create a reading
    pub const fn new(integer: u8, fraction: u8) -> Self {
        Self { integer, fraction }
    }
}

/// Last good readings from the meteo sensor
///
/// Written only by the poller's acquisition states and read by the
/// program selector, both on the same thread of control. A failed poll
/// cycle leaves the previous values untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeteoValues {
    /// Temperature in degrees Celsius
    pub temperature: Reading,
    /// Relative humidity in percent
    pub humidity: Reading,
}

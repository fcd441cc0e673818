//! Meteo sensor trait

use crate::sensor::Reading;

/// Errors that can occur when acquiring a sensor reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// The sensor did not acknowledge its address (unplugged or dead)
    NotConnected,
    /// The transfer started but failed partway through
    Bus,
}

/// Trait for combined temperature/humidity sensors
///
/// Implementations handle the specific device (DHT12 over two-wire in
/// this design). One call performs one complete acquisition; there is
/// no caching at this level.
pub trait MeteoSensor {
    /// Read the current relative humidity
    fn read_humidity(&mut self) -> Result<Reading, SensorError>;

    /// Read the current temperature in degrees Celsius
    fn read_temperature(&mut self) -> Result<Reading, SensorError>;
}

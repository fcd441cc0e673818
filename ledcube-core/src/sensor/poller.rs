//! Sensor poll state machine
//!
//! Non-blocking acquisition cycle for the meteo sensor. One call to
//! [`SensorPoller::step`] advances exactly one state transition, so
//! the super-loop interleaves polling with animation playback without
//! ever stalling on a dead sensor: a failed acquisition drops straight
//! back to [`ScanState::Idle`] and the cycle restarts on the next
//! pass, while the last good values stay available to the selector.

use core::fmt::Write;

use heapless::String;

use super::MeteoValues;
use crate::traits::{MeteoSensor, ReportSink, SensorError};

/// Poll cycle states
///
/// Transitions run strictly forward (`Idle → Humidity → Temperature →
/// Report → Idle`) or back to `Idle` on error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanState {
    /// Between cycles; unconditionally starts the next acquisition
    Idle,
    /// Fetch the humidity registers
    Humidity,
    /// Fetch the temperature registers
    Temperature,
    /// Emit the latest reading on the report sink
    Report,
}

/// Sensor poll state machine with its accumulated readings
///
/// Explicit context struct: the state and the values it produces
/// travel together instead of living in globals, which keeps the
/// single-writer discipline visible at the call site.
#[derive(Debug)]
pub struct SensorPoller {
    state: ScanState,
    values: MeteoValues,
}

impl SensorPoller {
    /// Create a poller in the idle state with zeroed readings
    pub const fn new() -> Self {
        Self {
            state: ScanState::Idle,
            values: MeteoValues {
                temperature: super::Reading::new(0, 0),
                humidity: super::Reading::new(0, 0),
            },
        }
    }

    /// Current state, for tests and diagnostics
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Last good readings
    ///
    /// Never cleared; a disconnected sensor leaves stale values in
    /// place rather than zeroing them.
    pub fn values(&self) -> &MeteoValues {
        &self.values
    }

    /// Advance the state machine by exactly one transition
    ///
    /// Acquisition states perform one complete sensor read each; the
    /// report state formats and emits the temperature. Failures are
    /// reported and return the machine to `Idle` with the previous
    /// values intact.
    pub fn step<S: MeteoSensor, R: ReportSink>(&mut self, sensor: &mut S, report: &mut R) {
        self.state = match self.state {
            ScanState::Idle => ScanState::Humidity,
            ScanState::Humidity => match sensor.read_humidity() {
                Ok(reading) => {
                    self.values.humidity = reading;
                    ScanState::Temperature
                }
                Err(e) => self.fail(report, "humidity", e),
            },
            ScanState::Temperature => match sensor.read_temperature() {
                Ok(reading) => {
                    self.values.temperature = reading;
                    ScanState::Report
                }
                Err(e) => self.fail(report, "temperature", e),
            },
            ScanState::Report => {
                let t = self.values.temperature;
                let mut line: String<32> = String::new();
                // Formatting into a 32-byte buffer cannot fail for
                // two u8 fields
                let _ = write!(line, "temperature: {}.{}", t.integer, t.fraction);
                report.report(&line);
                ScanState::Idle
            }
        };
    }

    fn fail<R: ReportSink>(&self, report: &mut R, what: &str, error: SensorError) -> ScanState {
        let mut line: String<48> = String::new();
        let _ = match error {
            SensorError::NotConnected => write!(line, "sensor not connected ({what})"),
            SensorError::Bus => write!(line, "sensor bus error ({what})"),
        };
        report.report(&line);
        ScanState::Idle
    }
}

impl Default for SensorPoller {
    fn default() -> Self {
        Self::new()
    }
}

//! Hardware abstraction traits
//!
//! These traits define the interface between the cube logic and
//! hardware-specific implementations.

pub mod display;
pub mod report;
pub mod sensor;

pub use display::FrameSink;
pub use report::ReportSink;
pub use sensor::{MeteoSensor, SensorError};

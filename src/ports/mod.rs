//! Ports (interfaces) defining the boundaries of the driver
//!
//! Ports are traits that define how the domain interacts with hardware.
//! They allow the numeric model to remain independent of specific boards.
//!
//! # Hexagonal Architecture
//!
//! - **AnalogInputPort**: How we sample the sensor (RP2350 ADC, closure, mock)
//! - **DiagnosticSink**: Where calibration progress goes (log, serial, nowhere)
//! - Delays come from `embedded_hal::delay::DelayNs` and
//!   `embedded_hal_async::delay::DelayNs` directly

pub mod diagnostics;
pub mod sensor;

pub use diagnostics::DiagnosticSink;
pub use sensor::{
    AnalogInputPort, SensorConfig, SensorError, DEFAULT_BASELINE_RESISTANCE,
    DEFAULT_CALIBRATION_INTERVAL_MS, DEFAULT_LOAD_RESISTANCE,
};

//! MQ131 Ozone Sensor Driver
//!
//! This library converts the MQ131 metal-oxide sensor's analog output into
//! an ozone concentration, with temperature/humidity compensation and a
//! clean-air calibration procedure. It uses a hexagonal architecture so the
//! numeric model can be tested without hardware.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                 │
//! │  - resistance / concentration model                             │
//! │  - Environment correction, ConcentrationUnit conversion         │
//! │  - Calibrator state machine                                     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                               │
//! │  - AnalogInputPort: sample the divider                          │
//! │  - DiagnosticSink: calibration progress                         │
//! │  - DelayNs (embedded-hal): calibration pacing                   │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Adapters                                     │
//! │  - RpAdcInput: RP2350 ADC channel                               │
//! │  - FnAnalogInput: any sampling closure                          │
//! │  - LogSink / WriteSink / NullSink                               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! let input = RpAdcInput::new(adc, AdcChannel::new_pin(p.PIN_26, Pull::None));
//! let mut sensor = Mq131::new(input, DEFAULT_LOAD_RESISTANCE)?;
//!
//! sensor.calibrate(&mut delay, &mut LogSink)?;
//! let ppb = sensor.get_o3(ConcentrationUnit::Ppb, &Environment::new(24.0, 45.0))?;
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

// This must go first so the logging macros are visible to every module
#[macro_use]
mod fmt;

/// Domain layer - pure numeric model
pub mod domain;

/// Ports - traits defining boundaries
pub mod ports;

/// Adapters - concrete implementations
pub mod adapters;

/// Driver wiring ports to the domain
pub mod driver;

// Re-export key domain types
pub use domain::{
    CalibrationProgress, CalibrationState, CalibrationStep, Calibrator, ConcentrationUnit,
    Environment, OzoneReading,
};

// Re-export key port traits
pub use ports::{
    AnalogInputPort, DiagnosticSink, SensorConfig, SensorError, DEFAULT_BASELINE_RESISTANCE,
    DEFAULT_LOAD_RESISTANCE,
};

// Re-export adapters
#[cfg(feature = "rp")]
pub use adapters::RpAdcInput;
pub use adapters::{FnAnalogInput, LogSink, NullSink, WriteSink};

pub use driver::Mq131;

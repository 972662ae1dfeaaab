//! Domain layer - the MQ131 numeric model, independent of hardware
//!
//! This module contains the conversion from raw samples to ozone
//! concentration, the environmental correction, unit conversion and the
//! clean-air calibration state machine. Nothing here reads a pin or waits.

pub mod calibration;
pub mod environment;
pub mod ozone;
pub mod reading;
pub mod unit;

pub use calibration::{
    CalibrationProgress, CalibrationState, CalibrationStep, Calibrator, CALIBRATION_WINDOW,
};
pub use environment::{correction_ratio, Environment};
pub use ozone::{concentration, ratio_to_ppm, sensor_resistance};
pub use reading::OzoneReading;
pub use unit::{convert, ConcentrationUnit};

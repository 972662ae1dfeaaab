//! Adapters - concrete implementations of ports
//!
//! Adapters connect the driver to the outside world by implementing the
//! port traits.
//!
//! # Available Adapters
//!
//! - **fn_input**: any sampling closure as an analog input
//! - **rp_adc**: RP2350 ADC channel (feature `rp`)
//! - **sinks**: calibration progress to log, a text writer, or nowhere

pub mod fn_input;
#[cfg(feature = "rp")]
pub mod rp_adc;
pub mod sinks;

pub use fn_input::FnAnalogInput;
#[cfg(feature = "rp")]
pub use rp_adc::RpAdcInput;
pub use sinks::{LogSink, NullSink, WriteSink};

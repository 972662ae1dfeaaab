//! Closure-backed analog input
//!
//! Lets any HAL's one-shot ADC read be plugged into the driver without a
//! dedicated adapter type.

use core::marker::PhantomData;

use crate::ports::sensor::{AnalogInputPort, SensorError};

/// Analog input backed by a closure returning 10-bit samples
///
/// Errors from the closure are mapped to [`SensorError::ReadFailed`].
pub struct FnAnalogInput<F, E> {
    read: F,
    last_raw: Option<u16>,
    _error: PhantomData<fn() -> E>,
}

impl<F, E> FnAnalogInput<F, E>
where
    F: FnMut() -> Result<u16, E>,
{
    /// Wrap a sampling closure
    pub const fn new(read: F) -> Self {
        Self {
            read,
            last_raw: None,
            _error: PhantomData,
        }
    }
}

impl<F, E> AnalogInputPort for FnAnalogInput<F, E>
where
    F: FnMut() -> Result<u16, E>,
{
    fn read_raw(&mut self) -> Result<u16, SensorError> {
        let raw = (self.read)().map_err(|_| SensorError::ReadFailed)?;
        self.last_raw = Some(raw);
        Ok(raw)
    }

    fn last_raw_value(&self) -> Option<u16> {
        self.last_raw
    }
}

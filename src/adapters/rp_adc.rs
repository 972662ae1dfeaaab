//! RP2350 ADC adapter
//!
//! This adapter implements the AnalogInputPort trait for an RP2350 ADC
//! channel wired to the MQ131 breakout's analog output.

use crate::ports::sensor::{AnalogInputPort, SensorError};
use core::sync::atomic::{AtomicU16, Ordering};
use embassy_rp::adc::{Adc, Blocking, Channel as AdcChannel};

/// RP2350 ADC input for the MQ131
///
/// The RP2350 ADC is 12-bit; samples are shifted down to the 10-bit range
/// the divider formula is written for.
pub struct RpAdcInput<'a> {
    /// ADC peripheral (blocking mode to avoid DMA conflicts with flash)
    adc: Adc<'a, Blocking>,
    /// Sensor ADC channel
    channel: AdcChannel<'a>,
    /// Last 10-bit value (for diagnostics)
    last_raw: AtomicU16,
}

impl<'a> RpAdcInput<'a> {
    /// Create a new RP2350 ADC input
    ///
    /// # Arguments
    ///
    /// * `adc` - ADC peripheral in blocking mode
    /// * `channel` - ADC channel the sensor's AO pin is wired to
    pub fn new(adc: Adc<'a, Blocking>, channel: AdcChannel<'a>) -> Self {
        Self {
            adc,
            channel,
            last_raw: AtomicU16::new(0),
        }
    }

    /// Release the ADC peripheral and channel
    pub fn release(self) -> (Adc<'a, Blocking>, AdcChannel<'a>) {
        (self.adc, self.channel)
    }
}

impl<'a> AnalogInputPort for RpAdcInput<'a> {
    fn read_raw(&mut self) -> Result<u16, SensorError> {
        let adc_value = self
            .adc
            .blocking_read(&mut self.channel)
            .map_err(|_| SensorError::ReadFailed)?;

        let raw = adc_value >> 2;
        self.last_raw.store(raw, Ordering::Relaxed);
        Ok(raw)
    }

    fn last_raw_value(&self) -> Option<u16> {
        Some(self.last_raw.load(Ordering::Relaxed))
    }
}

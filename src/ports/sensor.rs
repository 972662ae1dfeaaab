//! Analog input port - abstraction for sampling the sensor's divider
//!
//! This trait allows the driver to read the MQ131 without knowing the
//! specific ADC implementation (RP2350, ESP32, mock, etc.)

/// Error type for sensor operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Failed to read from the analog input
    ReadFailed,
    /// Input not configured
    NotInitialized,
    /// Sample cannot be converted (e.g. a zero reading)
    InvalidData,
    /// Rejected configuration value
    InvalidConfig,
    /// Hardware error
    HardwareError,
}

impl core::fmt::Display for SensorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::ReadFailed => "analog read failed",
            Self::NotInitialized => "analog input not configured",
            Self::InvalidData => "sample cannot be converted",
            Self::InvalidConfig => "invalid configuration value",
            Self::HardwareError => "hardware error",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SensorError {}

/// Default load resistor on MQ131 breakout boards (ohms)
pub const DEFAULT_LOAD_RESISTANCE: u32 = 10_000;

/// Placeholder baseline until the sensor is calibrated (ohms)
pub const DEFAULT_BASELINE_RESISTANCE: f32 = 30_000.0;

/// Pause between calibration samples (milliseconds)
pub const DEFAULT_CALIBRATION_INTERVAL_MS: u32 = 1000;

/// Configuration for driver behavior
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorConfig {
    /// Load resistor in the voltage divider (ohms)
    pub load_resistance_ohms: u32,
    /// Initial baseline resistance R0 (ohms)
    pub baseline_resistance_ohms: f32,
    /// Real-time pause between calibration samples (milliseconds)
    pub calibration_interval_ms: u32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOAD_RESISTANCE)
    }
}

impl SensorConfig {
    /// Config with the given load resistor and defaults for everything else
    pub const fn new(load_resistance_ohms: u32) -> Self {
        Self {
            load_resistance_ohms,
            baseline_resistance_ohms: DEFAULT_BASELINE_RESISTANCE,
            calibration_interval_ms: DEFAULT_CALIBRATION_INTERVAL_MS,
        }
    }

    /// Config for bench runs where the sensor is already warm
    pub const fn fast_calibration() -> Self {
        Self {
            load_resistance_ohms: DEFAULT_LOAD_RESISTANCE,
            baseline_resistance_ohms: DEFAULT_BASELINE_RESISTANCE,
            calibration_interval_ms: 100, // 100ms
        }
    }

    /// Start from a previously stored baseline instead of the placeholder
    pub const fn with_baseline(mut self, baseline_resistance_ohms: f32) -> Self {
        self.baseline_resistance_ohms = baseline_resistance_ohms;
        self
    }
}

/// Port for sampling the sensor's analog output
///
/// # Example Implementation
///
/// ```ignore
/// struct EspAdcInput<'d> {
///     adc: AdcDriver<'d, ADC1>,
///     pin: AdcChannelDriver<'d, Gpio3, &'d AdcDriver<'d, ADC1>>,
/// }
///
/// impl AnalogInputPort for EspAdcInput<'_> {
///     fn read_raw(&mut self) -> Result<u16, SensorError> {
///         let value = self.adc.read(&mut self.pin).map_err(|_| SensorError::ReadFailed)?;
///         Ok(value >> 2) // 12-bit to 10-bit
///     }
/// }
/// ```
pub trait AnalogInputPort {
    /// Prepare the input for sampling
    ///
    /// Called once when the driver is constructed.
    fn configure(&mut self) -> Result<(), SensorError> {
        Ok(())
    }

    /// Read one raw sample, scaled to the 10-bit range (0-1023)
    fn read_raw(&mut self) -> Result<u16, SensorError>;

    /// Get the last raw value (for diagnostics)
    ///
    /// Returns `None` if the input doesn't keep it.
    fn last_raw_value(&self) -> Option<u16> {
        None
    }
}

impl<T: AnalogInputPort + ?Sized> AnalogInputPort for &mut T {
    fn configure(&mut self) -> Result<(), SensorError> {
        T::configure(self)
    }

    fn read_raw(&mut self) -> Result<u16, SensorError> {
        T::read_raw(self)
    }

    fn last_raw_value(&self) -> Option<u16> {
        T::last_raw_value(self)
    }
}

//! Resistance and concentration model of the MQ131
//!
//! The sensing element sits in a voltage divider with a load resistor. The
//! ADC samples the voltage across the load, from which the element's own
//! resistance follows. Ozone concentration is an empirical power law of the
//! element resistance relative to its clean-air baseline.

use libm::powf;

use super::environment::Environment;
use super::unit::{convert, ConcentrationUnit};

/// Full-scale divisor of the 10-bit analog input
pub const ADC_FULL_SCALE: f32 = 1024.0;

/// Power-law coefficient of the O3 curve (R^2 = 0.99)
pub const CURVE_COEFFICIENT: f32 = 8.1399;

/// Power-law exponent of the O3 curve
pub const CURVE_EXPONENT: f32 = 2.3297;

/// Sensor resistance in ohms for a raw 10-bit sample.
///
/// `R_sensor = 1024 * R_load / raw - R_load`
///
/// Returns `None` for a zero sample, where the divider formula has no
/// finite answer.
#[inline]
pub fn sensor_resistance(raw: u16, load_resistance_ohms: u32) -> Option<f32> {
    if raw == 0 {
        return None;
    }
    let r_load = load_resistance_ohms as f32;
    Some(ADC_FULL_SCALE * r_load / raw as f32 - r_load)
}

/// Environment-corrected `Rs/R0`
#[inline]
pub fn corrected_ratio(resistance_ohms: f32, baseline_ohms: f32, env: &Environment) -> f32 {
    resistance_ohms / baseline_ohms * env.correction_ratio()
}

/// Ozone concentration in PPM for a corrected ratio.
///
/// Negative ratios give NaN; callers treat that as a faulty reading.
#[inline]
pub fn ratio_to_ppm(ratio: f32) -> f32 {
    CURVE_COEFFICIENT * powf(ratio, CURVE_EXPONENT)
}

/// Ozone concentration in `unit` for a sensor resistance
pub fn concentration(
    resistance_ohms: f32,
    baseline_ohms: f32,
    env: &Environment,
    unit: ConcentrationUnit,
) -> f32 {
    let ratio = corrected_ratio(resistance_ohms, baseline_ohms, env);
    convert(ratio_to_ppm(ratio), ConcentrationUnit::Ppm, unit)
}

//! Ozone reading domain entity
//!
//! This module defines the result of a single conversion. It has no
//! knowledge of how the raw sample was obtained.

use super::unit::ConcentrationUnit;

/// A single ozone reading from the domain perspective.
///
/// Carries the intermediate values of the conversion alongside the
/// concentration so callers can judge plausibility themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OzoneReading {
    /// Raw 10-bit analog sample
    pub raw: u16,
    /// Sensor element resistance in ohms
    pub resistance_ohms: f32,
    /// Environment-corrected `Rs/R0`
    pub ratio: f32,
    /// Ozone concentration in `unit`
    pub concentration: f32,
    /// Unit of `concentration`
    pub unit: ConcentrationUnit,
}

impl OzoneReading {
    /// Create a new reading
    pub const fn new(
        raw: u16,
        resistance_ohms: f32,
        ratio: f32,
        concentration: f32,
        unit: ConcentrationUnit,
    ) -> Self {
        Self {
            raw,
            resistance_ohms,
            ratio,
            concentration,
            unit,
        }
    }

    /// Whether the concentration is physically meaningful
    ///
    /// A corrupted resistance yields a negative ratio and a NaN or negative
    /// concentration. Such readings should be treated as a sensor fault.
    pub fn is_plausible(&self) -> bool {
        self.concentration.is_finite() && self.concentration >= 0.0
    }
}

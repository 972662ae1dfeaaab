//! Ambient conditions and the MQ131 temperature/humidity correction
//!
//! The sensing element's resistance drifts with temperature and relative
//! humidity. The datasheet publishes three curves (30%, 60% and 85% RH);
//! each is approximated by a linear fit in temperature and selected by
//! humidity band.

/// Ambient conditions for a single reading.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environment {
    /// Temperature in degrees Celsius
    pub temperature_c: f32,
    /// Relative humidity in percent
    pub humidity_pct: f32,
}

impl Environment {
    /// Calibration point of the concentration curve (20 C, 60 %RH).
    ///
    /// The correction ratio at this point is exactly 1.0.
    pub const REFERENCE: Self = Self {
        temperature_c: 20.0,
        humidity_pct: 60.0,
    };

    /// Create a new set of ambient conditions
    pub const fn new(temperature_c: f32, humidity_pct: f32) -> Self {
        Self {
            temperature_c,
            humidity_pct,
        }
    }

    /// Whether these are exactly the reference conditions
    #[inline]
    pub fn is_reference(&self) -> bool {
        self.temperature_c == Self::REFERENCE.temperature_c
            && self.humidity_pct == Self::REFERENCE.humidity_pct
    }

    /// Multiplier applied to `Rs/R0` to compensate for these conditions
    ///
    /// Bands are evaluated with strict `>` on the lower edge, so 75 %RH
    /// falls in the 60% curve and 50 %RH falls in the 30% curve. There is
    /// no interpolation between bands.
    pub fn correction_ratio(&self) -> f32 {
        if self.is_reference() {
            return 1.0;
        }

        let t = self.temperature_c;
        if self.humidity_pct > 75.0 {
            // 85% RH curve, R^2 = 0.9986
            -0.0141 * t + 1.5623
        } else if self.humidity_pct > 50.0 {
            // 60% RH curve, R^2 = 0.9976
            -0.0119 * t + 1.3261
        } else {
            // 30% RH curve, R^2 = 0.996
            -0.0103 * t + 1.1507
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Correction ratio for the given conditions, see [`Environment::correction_ratio`]
#[inline]
pub fn correction_ratio(env: &Environment) -> f32 {
    env.correction_ratio()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_reference_is_exactly_one() {
        assert_eq!(Environment::REFERENCE.correction_ratio(), 1.0);
        assert_eq!(correction_ratio(&Environment::new(20.0, 60.0)), 1.0);
        assert_eq!(Environment::default(), Environment::REFERENCE);
    }

    #[test]
    fn test_reference_temperature_other_humidity_uses_curve() {
        // Same 60% band, but not the exact reference point
        let env = Environment::new(20.0, 61.0);
        assert!(approx(env.correction_ratio(), -0.0119 * 20.0 + 1.3261));
        assert!(env.correction_ratio() != 1.0);
    }

    #[test]
    fn test_high_humidity_band() {
        let env = Environment::new(25.0, 85.0);
        assert!(approx(env.correction_ratio(), -0.0141 * 25.0 + 1.5623));
    }

    #[test]
    fn test_humidity_75_uses_middle_band() {
        let env = Environment::new(25.0, 75.0);
        assert!(approx(env.correction_ratio(), -0.0119 * 25.0 + 1.3261));

        let just_above = Environment::new(25.0, 75.1);
        assert!(approx(just_above.correction_ratio(), -0.0141 * 25.0 + 1.5623));
    }

    #[test]
    fn test_humidity_50_uses_low_band() {
        let env = Environment::new(10.0, 50.0);
        assert!(approx(env.correction_ratio(), -0.0103 * 10.0 + 1.1507));

        let dry = Environment::new(10.0, 20.0);
        assert!(approx(dry.correction_ratio(), env.correction_ratio()));
    }
}

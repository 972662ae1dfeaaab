//! Concentration units and conversion between them

/// Molar mass of ozone (g/mol)
pub const O3_MOLAR_MASS: f32 = 48.0;

/// Molar volume of an ideal gas at standard conditions (L/mol)
pub const MOLAR_VOLUME: f32 = 22.71108;

/// Unit a concentration is expressed in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConcentrationUnit {
    /// Parts per million
    Ppm,
    /// Parts per billion
    Ppb,
    /// Milligrams per cubic metre
    MgM3,
    /// Micrograms per cubic metre
    UgM3,
}

impl ConcentrationUnit {
    /// All units, in declaration order
    pub const ALL: [ConcentrationUnit; 4] = [Self::Ppm, Self::Ppb, Self::MgM3, Self::UgM3];

    /// Short display symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Ppm => "ppm",
            Self::Ppb => "ppb",
            Self::MgM3 => "mg/m3",
            Self::UgM3 => "ug/m3",
        }
    }
}

/// Convert `value` from one unit to another.
///
/// The driver only ever produces PPM, so conversion to PPM assumes a PPB
/// source and conversion to PPB assumes a PPM source. Mass concentrations
/// accept either PPM or PPB as the source.
pub fn convert(value: f32, from: ConcentrationUnit, to: ConcentrationUnit) -> f32 {
    use ConcentrationUnit::*;

    if from == to {
        return value;
    }

    match to {
        Ppm => value / 1000.0,
        Ppb => value * 1000.0,
        MgM3 => {
            let ppm = if from == Ppm { value } else { value / 1000.0 };
            ppm * O3_MOLAR_MASS / MOLAR_VOLUME
        }
        UgM3 => {
            let ppb = if from == Ppb { value } else { value * 1000.0 };
            ppb * O3_MOLAR_MASS / MOLAR_VOLUME
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ConcentrationUnit::*;

    #[test]
    fn test_identity_for_all_units() {
        for unit in ConcentrationUnit::ALL {
            assert_eq!(convert(0.42, unit, unit), 0.42);
            assert_eq!(convert(-3.0, unit, unit), -3.0);
        }
    }

    #[test]
    fn test_ppm_ppb_round_trip() {
        for x in [0.0_f32, 0.001, 0.25, 1.0, 7.5, 120.0] {
            let back = convert(convert(x, Ppm, Ppb), Ppb, Ppm);
            assert!((back - x).abs() <= x.abs() * 1e-6);
        }
    }

    #[test]
    fn test_mass_concentration_from_one_ppm() {
        let mg = convert(1.0, Ppm, MgM3);
        assert!((mg - 2.1135).abs() < 1e-3);

        let ug = convert(1.0, Ppm, UgM3);
        assert!((ug - 2113.5).abs() < 0.5);
        assert!((ug - mg * 1000.0).abs() < 1e-2);
    }

    #[test]
    fn test_mass_concentration_from_ppb() {
        let mg = convert(1000.0, Ppb, MgM3);
        assert!((mg - 48.0 / 22.71108).abs() < 1e-5);

        let ug = convert(1.0, Ppb, UgM3);
        assert!((ug - 48.0 / 22.71108).abs() < 1e-5);
    }
}

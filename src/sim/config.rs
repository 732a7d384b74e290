use serde::{Deserialize, Serialize};

use crate::error::{Result, ensure_above, ensure_fraction, ensure_positive};

/// Lowest accepted air temperature in °C.
///
/// The saturation pressure fit below 0 °C has its pole at -265.5 °C, which
/// also lies above absolute zero.
pub const MIN_TEMPERATURE: f64 = -265.5;

/// Indoor and outdoor conditions a wall is analysed under.
///
/// `int` is the indoor side, `ext` the outdoor side. Missing fields in a
/// serialized object fall back to [`BoundaryConditions::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryConditions {
    /// Indoor air temperature in °C.
    pub temp_int: f64,
    /// Outdoor air temperature in °C.
    pub temp_ext: f64,
    /// Indoor relative humidity as a fraction [0, 1].
    pub relative_humidity_int: f64,
    /// Outdoor relative humidity as a fraction [0, 1].
    pub relative_humidity_ext: f64,
    /// Indoor surface resistance (Rsi) in m^2*K/W.
    pub surface_resistance_int: f64,
    /// Outdoor surface resistance (Rse) in m^2*K/W.
    pub surface_resistance_ext: f64,
    /// Period of the periodic analysis in hours.
    pub period_hours: f64,
}

impl BoundaryConditions {
    pub fn validate(&self) -> Result<()> {
        ensure_above("temp_int", self.temp_int, MIN_TEMPERATURE)?;
        ensure_above("temp_ext", self.temp_ext, MIN_TEMPERATURE)?;
        ensure_fraction("relative_humidity_int", self.relative_humidity_int)?;
        ensure_fraction("relative_humidity_ext", self.relative_humidity_ext)?;
        ensure_positive("surface_resistance_int", self.surface_resistance_int)?;
        ensure_positive("surface_resistance_ext", self.surface_resistance_ext)?;
        ensure_positive("period_hours", self.period_hours)?;
        Ok(())
    }

    /// Analysis period in seconds.
    pub fn period_seconds(&self) -> f64 {
        self.period_hours * 3600.0
    }

    /// Indoor minus outdoor temperature in K.
    pub fn temperature_difference(&self) -> f64 {
        self.temp_int - self.temp_ext
    }
}

impl Default for BoundaryConditions {
    fn default() -> Self {
        Self {
            temp_int: 20.0,
            temp_ext: -5.0,
            relative_humidity_int: 0.65,
            relative_humidity_ext: 0.90,
            surface_resistance_int: 0.130,
            surface_resistance_ext: 0.040,
            period_hours: 24.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WallError;

    #[test]
    fn test_defaults() {
        let bc = BoundaryConditions::default();
        assert!((bc.temp_int - 20.0).abs() < 1e-12);
        assert!((bc.temp_ext + 5.0).abs() < 1e-12);
        assert!((bc.surface_resistance_int - 0.13).abs() < 1e-12);
        assert!((bc.surface_resistance_ext - 0.04).abs() < 1e-12);
        assert!((bc.period_seconds() - 86400.0).abs() < 1e-9);
        assert!((bc.temperature_difference() - 25.0).abs() < 1e-12);
        assert!(bc.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let bc = BoundaryConditions {
            relative_humidity_int: 1.2,
            ..Default::default()
        };
        assert!(matches!(
            bc.validate(),
            Err(WallError::InvalidParameter {
                quantity: "relative_humidity_int",
                ..
            })
        ));

        let bc = BoundaryConditions {
            surface_resistance_ext: 0.0,
            ..Default::default()
        };
        assert!(bc.validate().is_err());

        let bc = BoundaryConditions {
            temp_ext: f64::NAN,
            ..Default::default()
        };
        assert!(bc.validate().is_err());

        let bc = BoundaryConditions {
            period_hours: -24.0,
            ..Default::default()
        };
        assert!(bc.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unphysical_temperatures() {
        for t in [-300.0, -273.15, MIN_TEMPERATURE, f64::NEG_INFINITY] {
            let bc = BoundaryConditions {
                temp_ext: t,
                ..Default::default()
            };
            assert!(matches!(
                bc.validate(),
                Err(WallError::InvalidParameter {
                    quantity: "temp_ext",
                    ..
                })
            ));
        }

        let bc = BoundaryConditions {
            temp_int: -280.0,
            ..Default::default()
        };
        assert!(matches!(
            bc.validate(),
            Err(WallError::InvalidParameter {
                quantity: "temp_int",
                ..
            })
        ));

        let bc = BoundaryConditions {
            temp_ext: -60.0,
            ..Default::default()
        };
        assert!(bc.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let bc: BoundaryConditions =
            serde_json::from_str(r#"{"temp_ext": -10.0, "period_hours": 12}"#).unwrap();
        assert!((bc.temp_ext + 10.0).abs() < 1e-12);
        assert!((bc.period_hours - 12.0).abs() < 1e-12);
        assert!((bc.temp_int - 20.0).abs() < 1e-12);
        assert!((bc.relative_humidity_ext - 0.9).abs() < 1e-12);
    }
}

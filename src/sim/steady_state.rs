//! Steady-state heat and vapor diffusion through a wall (Glaser method).
//!
//! Profiles run from the indoor air to the outdoor air:
//!
//! ```text
//! index:        0        1        2 ... N+1       N+2
//! temperature:  T_int  | surface | interfaces | surface | T_ext
//! resistance:          Rsi      R_1 ... R_N     Rse
//! ```

use crate::error::{Result, ensure_boundary};
use crate::sim::construction::Wall;
use crate::vecutils::cumsum;

/// Saturation vapor pressure in Pa at temperature `t` in °C.
///
/// Magnus-type fit over liquid water at or above 0 °C and over ice below.
/// Both branches give 610.5 Pa at 0 °C.
pub fn saturation_pressure(t: f64) -> f64 {
    if t >= 0.0 {
        610.5 * (17.269 * t / (237.3 + t)).exp()
    } else {
        610.5 * (21.875 * t / (265.5 + t)).exp()
    }
}

impl Wall {
    /// `[Rsi, R_1, ..., R_N, Rse]` in m^2*K/W (length = layers + 2).
    pub fn thermal_resistances(&self) -> Vec<f64> {
        let boundary = self.boundary();
        let mut res = Vec::with_capacity(self.layers().len() + 2);
        res.push(boundary.surface_resistance_int);
        res.extend(self.layers().iter().map(|l| l.thermal_resistance()));
        res.push(boundary.surface_resistance_ext);
        res
    }

    /// Total resistance including both surface resistances, m^2*K/W.
    pub fn thermal_resistance_total(&self) -> f64 {
        self.thermal_resistances().iter().sum()
    }

    /// Running sum of [`Self::thermal_resistances`], starting at Rsi.
    pub fn thermal_resistance_cumsum(&self) -> Vec<f64> {
        cumsum(&self.thermal_resistances())
    }

    /// Steady-state thermal transmittance U = 1 / R_tot in W/(m^2*K).
    ///
    /// Every resistance term is strictly positive, so the total never is zero.
    pub fn thermal_transmittance(&self) -> f64 {
        1.0 / self.thermal_resistance_total()
    }

    /// Steady-state heat flux from indoor to outdoor in W/m^2.
    pub fn heat_flux(&self) -> f64 {
        self.thermal_transmittance() * self.boundary().temperature_difference()
    }

    /// Temperatures in °C from indoor air to outdoor air (length = layers + 3).
    pub fn surface_temperature_profile(&self) -> Result<Vec<f64>> {
        let boundary = self.boundary();
        let delta = boundary.temperature_difference();
        let r_tot = self.thermal_resistance_total();

        let mut temps = Vec::with_capacity(self.layers().len() + 3);
        temps.push(boundary.temp_int);
        temps.extend(
            self.thermal_resistance_cumsum()
                .iter()
                .map(|r| boundary.temp_int - r * delta / r_tot),
        );

        let last = temps[temps.len() - 1];
        ensure_boundary("outdoor temperature", boundary.temp_ext, last)?;
        Ok(temps)
    }

    /// Saturation pressure in Pa at every point of the temperature profile.
    pub fn saturation_pressure_profile(&self) -> Result<Vec<f64>> {
        Ok(self
            .surface_temperature_profile()?
            .into_iter()
            .map(saturation_pressure)
            .collect())
    }

    /// Indoor and outdoor partial vapor pressures in Pa.
    pub fn boundary_partial_pressures(&self) -> Result<(f64, f64)> {
        let saturation = self.saturation_pressure_profile()?;
        let boundary = self.boundary();
        let p_int = boundary.relative_humidity_int * saturation[0];
        let p_ext = boundary.relative_humidity_ext * saturation[saturation.len() - 1];
        Ok((p_int, p_ext))
    }

    /// Partial vapor pressure in Pa at the indoor surface, every interface and
    /// the outdoor surface (length = layers + 1).
    ///
    /// The pressure drops linearly with cumulative equivalent thickness Sd.
    /// Position `i` matches `equivalent_thickness_cumsum()[i]` and
    /// `saturation_pressure_profile()[i + 1]`.
    pub fn internal_pressure_profile(&self) -> Result<Vec<f64>> {
        let (p_int, p_ext) = self.boundary_partial_pressures()?;
        let delta_p = p_int - p_ext;
        let sd_tot = self.equivalent_thickness_total();
        let sd_cumsum = self.equivalent_thickness_cumsum();

        let mut press = Vec::with_capacity(sd_cumsum.len());
        press.push(p_int);
        press.extend(sd_cumsum[1..].iter().map(|sd| p_int - sd * delta_p / sd_tot));

        let last = press[press.len() - 1];
        ensure_boundary("outdoor partial pressure", p_ext, last)?;
        Ok(press)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::construction::presets;
    use crate::sim::materials::Layer;
    use std::sync::Arc;

    fn single_layer_wall() -> Wall {
        Wall::new(
            "single",
            vec![Arc::new(
                Layer::new("brick", 0.25, 0.5, 10.0, 1600.0, 840.0).unwrap(),
            )],
        )
        .unwrap()
    }

    #[test]
    fn test_saturation_pressure_branches() {
        assert!((saturation_pressure(0.0) - 610.5).abs() < 1e-9);
        assert!((saturation_pressure(20.0) - 2336.951143802342).abs() < 1e-6);
        assert!((saturation_pressure(-5.0) - 401.1809813516554).abs() < 1e-6);
        // Continuity across 0 °C
        let above = saturation_pressure(1e-9);
        let below = saturation_pressure(-1e-9);
        assert!((above - below).abs() < 1e-4);
    }

    #[test]
    fn test_thermal_resistances_layout() {
        let wall = single_layer_wall();
        let res = wall.thermal_resistances();
        assert_eq!(res.len(), 3);
        assert!((res[0] - 0.13).abs() < 1e-12);
        assert!((res[1] - 0.5).abs() < 1e-12);
        assert!((res[2] - 0.04).abs() < 1e-12);
        let cum = wall.thermal_resistance_cumsum();
        assert!((cum[0] - 0.13).abs() < 1e-12);
        assert!((cum[2] - 0.67).abs() < 1e-12);
    }

    #[test]
    fn test_single_layer_u_value_closed_form() {
        let wall = single_layer_wall();
        let expected = 1.0 / (0.13 + 0.25 / 0.5 + 0.04);
        assert!((wall.thermal_transmittance() - expected).abs() < 1e-12);
        let product = wall.thermal_transmittance() * wall.thermal_resistance_total();
        assert!((product - 1.0).abs() < 1e-12);
        assert!((wall.heat_flux() - expected * 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_temperature_profile_boundaries() {
        let wall = single_layer_wall();
        let temps = wall.surface_temperature_profile().unwrap();
        assert_eq!(temps.len(), 4);
        assert!((temps[0] - 20.0).abs() < 1e-12);
        assert!((temps[3] + 5.0).abs() < 1e-9);
        // Monotonic decrease from indoor to outdoor
        assert!(temps.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_temperature_profile_reference_wall() {
        let (wall_3c, _) = presets::comparison_walls().unwrap();
        let temps = wall_3c.surface_temperature_profile().unwrap();
        let expected = [
            20.0,
            19.191504597086837,
            18.74727635372796,
            14.15463974546384,
            -4.647578926935289,
            -4.751232183719026,
            -5.0,
        ];
        assert_eq!(temps.len(), expected.len());
        for (t, e) in temps.iter().zip(expected.iter()) {
            assert!((t - e).abs() < 1e-9, "got {t}, expected {e}");
        }
    }

    #[test]
    fn test_internal_pressure_profile() {
        let (wall_3c, _) = presets::comparison_walls().unwrap();
        let press = wall_3c.internal_pressure_profile().unwrap();
        let expected = [
            1519.0182434715223,
            1493.6615567506092,
            682.2475816813892,
            462.4896301001422,
            361.0628832164898,
        ];
        assert_eq!(press.len(), wall_3c.layers().len() + 1);
        for (p, e) in press.iter().zip(expected.iter()) {
            assert!((p - e).abs() < 1e-6, "got {p}, expected {e}");
        }

        let sat = wall_3c.saturation_pressure_profile().unwrap();
        assert!((press[0] - 0.65 * sat[0]).abs() < 1e-9);
        assert!((press[4] - 0.9 * sat[sat.len() - 1]).abs() < 1e-6);
    }

    #[test]
    fn test_boundaries_hold_for_other_conditions() {
        let wall = single_layer_wall()
            .with_temperatures(-2.0, 30.0)
            .unwrap()
            .with_relative_humidities(0.4, 0.8)
            .unwrap();
        let temps = wall.surface_temperature_profile().unwrap();
        assert!((temps[0] + 2.0).abs() < 1e-12);
        assert!((temps[temps.len() - 1] - 30.0).abs() < 1e-9);

        let (p_int, p_ext) = wall.boundary_partial_pressures().unwrap();
        assert!((p_int - 0.4 * saturation_pressure(-2.0)).abs() < 1e-9);
        assert!((p_ext - 0.8 * saturation_pressure(30.0)).abs() < 1e-6);
        let press = wall.internal_pressure_profile().unwrap();
        assert!((press[press.len() - 1] - p_ext).abs() < 1e-6);
    }

    #[test]
    fn test_equal_temperatures_flat_profile() {
        let wall = single_layer_wall().with_temperatures(10.0, 10.0).unwrap();
        let temps = wall.surface_temperature_profile().unwrap();
        assert!(temps.iter().all(|t| (t - 10.0).abs() < 1e-12));
        assert!(wall.heat_flux().abs() < 1e-12);
    }
}

use std::collections::HashMap;
use std::fmt;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::sim::construction::Wall;
use crate::sim::glaser::GlaserDiagram;
use crate::sim::periodic::{PeriodicResponse, TransferMatrix};

/// Key quantities used to compare walls side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallSummary {
    pub name: String,
    /// m
    pub thickness: f64,
    /// m^2*K/W
    pub thermal_resistance: f64,
    /// kg/m^2
    pub areal_mass: f64,
    /// Y12 in W/(m^2*K)
    pub periodic_thermal_transmittance: f64,
    /// h
    pub time_lag: f64,
    /// |fd|
    pub decrement_factor: f64,
    /// k1 in kJ/(m^2*K)
    pub internal_areal_heat_capacity: f64,
}

impl WallSummary {
    pub fn from_wall(wall: &Wall) -> Result<Self> {
        let periodic = wall.periodic_response()?;
        Ok(Self {
            name: wall.name().to_string(),
            thickness: wall.total_thickness(),
            thermal_resistance: wall.thermal_resistance_total(),
            areal_mass: wall.areal_mass(),
            periodic_thermal_transmittance: periodic.periodic_transmittance,
            time_lag: periodic.time_lag,
            decrement_factor: periodic.decrement_factor.abs(),
            internal_areal_heat_capacity: periodic.internal_areal_heat_capacity,
        })
    }

    /// Flat `(key, value)` list in presentation order.
    pub fn named_values(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("thickness", self.thickness),
            ("thermal_resistance", self.thermal_resistance),
            ("areal_mass", self.areal_mass),
            (
                "periodic_thermal_transmittance",
                self.periodic_thermal_transmittance,
            ),
            ("time_lag", self.time_lag),
            ("decrement_factor", self.decrement_factor),
            (
                "internal_areal_heat_capacity",
                self.internal_areal_heat_capacity,
            ),
        ]
    }

    pub fn to_map(&self) -> HashMap<String, f64> {
        self.named_values()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}

/// Summarizes every wall. Walls are independent, so they are evaluated in
/// parallel; the output keeps the input order.
pub fn compare_walls(walls: &[Wall]) -> Result<Vec<WallSummary>> {
    walls.par_iter().map(WallSummary::from_wall).collect()
}

/// Every steady-state and periodic result for one wall.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallAnalysis {
    pub name: String,
    pub thickness_cumsum: Vec<f64>,
    pub equivalent_thicknesses: Vec<f64>,
    pub equivalent_thickness_total: f64,
    pub equivalent_thickness_cumsum: Vec<f64>,
    pub thermal_resistances: Vec<f64>,
    pub thermal_resistance_total: f64,
    pub thermal_resistance_cumsum: Vec<f64>,
    pub thermal_transmittance: f64,
    pub heat_flux: f64,
    pub surface_temperatures: Vec<f64>,
    pub saturation_pressures: Vec<f64>,
    pub internal_pressures: Vec<f64>,
    pub thermal_diffusivities: Vec<f64>,
    pub penetration_depths: Vec<f64>,
    pub xi: Vec<f64>,
    pub environment_matrix: TransferMatrix,
    pub periodic: PeriodicResponse,
    pub glaser: GlaserDiagram,
}

impl Wall {
    /// Runs the full analysis; fails as a whole if any part fails.
    pub fn analyze(&self) -> Result<WallAnalysis> {
        Ok(WallAnalysis {
            name: self.name().to_string(),
            thickness_cumsum: self.thickness_cumsum(),
            equivalent_thicknesses: self.equivalent_thicknesses(),
            equivalent_thickness_total: self.equivalent_thickness_total(),
            equivalent_thickness_cumsum: self.equivalent_thickness_cumsum(),
            thermal_resistances: self.thermal_resistances(),
            thermal_resistance_total: self.thermal_resistance_total(),
            thermal_resistance_cumsum: self.thermal_resistance_cumsum(),
            thermal_transmittance: self.thermal_transmittance(),
            heat_flux: self.heat_flux(),
            surface_temperatures: self.surface_temperature_profile()?,
            saturation_pressures: self.saturation_pressure_profile()?,
            internal_pressures: self.internal_pressure_profile()?,
            thermal_diffusivities: self.thermal_diffusivities(),
            penetration_depths: self.penetration_depths(),
            xi: self.xi(),
            environment_matrix: self.environment_transfer_matrix(),
            periodic: self.periodic_response()?,
            glaser: self.glaser_diagram()?,
        })
    }
}

fn fmt_series(v: &[f64], precision: usize) -> String {
    let items: Vec<String> = v.iter().map(|x| format!("{x:.precision$}")).collect();
    format!("[{}]", items.join(", "))
}

impl fmt::Display for WallAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.periodic;
        writeln!(f, "Wall: {}", self.name)?;
        writeln!(f, "  Interfaces [m]:        {}", fmt_series(&self.thickness_cumsum, 3))?;
        writeln!(
            f,
            "  Sd cumulative [m]:     {} (total {:.3})",
            fmt_series(&self.equivalent_thickness_cumsum, 3),
            self.equivalent_thickness_total
        )?;
        writeln!(
            f,
            "  Resistances [m2K/W]:   {} (total {:.4})",
            fmt_series(&self.thermal_resistances, 4),
            self.thermal_resistance_total
        )?;
        writeln!(f, "  U [W/(m2K)]:           {:.4}", self.thermal_transmittance)?;
        writeln!(f, "  Heat flux [W/m2]:      {:.3}", self.heat_flux)?;
        writeln!(f, "  Temperatures [C]:      {}", fmt_series(&self.surface_temperatures, 2))?;
        writeln!(f, "  p_sat [Pa]:            {}", fmt_series(&self.saturation_pressures, 1))?;
        writeln!(f, "  p_vapor [Pa]:          {}", fmt_series(&self.internal_pressures, 1))?;
        let condensation = self.glaser.condensation_interfaces();
        if condensation.is_empty() {
            writeln!(f, "  Condensation:          none")?;
        } else {
            writeln!(f, "  Condensation at interfaces: {condensation:?}")?;
        }
        writeln!(f, "  Penetration depth [m]: {}", fmt_series(&self.penetration_depths, 4))?;
        writeln!(f, "  xi [-]:                {}", fmt_series(&self.xi, 4))?;
        writeln!(f, "  Y12 [W/(m2K)]:         {:.4}", p.periodic_transmittance)?;
        writeln!(f, "  fd [-]:                {:.4}", p.decrement_factor)?;
        writeln!(f, "  Phase [h]:             {:.2}", p.phase_hours)?;
        writeln!(f, "  Time lag [h]:          {:.2}", p.time_lag)?;
        writeln!(f, "  Y11 [W/(m2K)]:         {:.4}", p.internal_admittance)?;
        writeln!(f, "  Y22 [W/(m2K)]:         {:.4}", p.external_admittance)?;
        writeln!(f, "  k1 [kJ/(m2K)]:         {:.2}", p.internal_areal_heat_capacity)?;
        write!(f, "  k2 [kJ/(m2K)]:         {:.2}", p.external_areal_heat_capacity)
    }
}

use serde::Serialize;

use crate::error::Result;
use crate::sim::construction::Wall;

/// Aligned series for drawing a Glaser diagram.
///
/// Every vector has one entry per surface or interface (layers + 1), from
/// the indoor surface to the outdoor surface, positioned by cumulative
/// equivalent thickness Sd.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlaserDiagram {
    /// Cumulative Sd in m.
    pub positions: Vec<f64>,
    /// Temperatures in °C.
    pub temperatures: Vec<f64>,
    /// Saturation vapor pressures in Pa.
    pub saturation_pressures: Vec<f64>,
    /// Partial vapor pressures in Pa.
    pub partial_pressures: Vec<f64>,
}

impl GlaserDiagram {
    /// Indices of the interior interfaces (surfaces excluded) where the
    /// partial pressure exceeds saturation. Index `i` is the interface
    /// between layer `i - 1` and layer `i`.
    pub fn condensation_interfaces(&self) -> Vec<usize> {
        let n = self.positions.len();
        (1..n.saturating_sub(1))
            .filter(|&i| self.partial_pressures[i] > self.saturation_pressures[i])
            .collect()
    }
}

impl Wall {
    pub fn glaser_diagram(&self) -> Result<GlaserDiagram> {
        let temps = self.surface_temperature_profile()?;
        let saturation = self.saturation_pressure_profile()?;
        let partial = self.internal_pressure_profile()?;
        // Drop the indoor and outdoor air points
        let surfaces = 1..temps.len() - 1;
        Ok(GlaserDiagram {
            positions: self.equivalent_thickness_cumsum(),
            temperatures: temps[surfaces.clone()].to_vec(),
            saturation_pressures: saturation[surfaces].to_vec(),
            partial_pressures: partial,
        })
    }
}

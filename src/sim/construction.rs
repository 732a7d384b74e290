use std::sync::Arc;

use crate::error::{Result, WallError};
use crate::sim::config::BoundaryConditions;
use crate::sim::materials::Layer;
use crate::vecutils::cumsum_from_zero;

/// A wall defined by an ordered stack of material layers and the
/// boundary conditions it is analysed under.
///
/// Layer order is the physical stacking order starting from the indoor
/// face. The same order drives the steady-state profiles and the periodic
/// transfer-matrix composition. All analyses are recomputed on every call.
#[derive(Debug, Clone)]
pub struct Wall {
    name: String,
    layers: Vec<Arc<Layer>>,
    boundary: BoundaryConditions,
}

impl Wall {
    /// Creates a wall with default boundary conditions.
    pub fn new(name: &str, layers: Vec<Arc<Layer>>) -> Result<Self> {
        Self::with_boundary_conditions(name, layers, BoundaryConditions::default())
    }

    pub fn with_boundary_conditions(
        name: &str,
        layers: Vec<Arc<Layer>>,
        boundary: BoundaryConditions,
    ) -> Result<Self> {
        if layers.is_empty() {
            return Err(WallError::EmptyWall);
        }
        boundary.validate()?;
        Ok(Self {
            name: name.to_string(),
            layers,
            boundary,
        })
    }

    /// Returns a copy of this wall with the layer order reversed.
    pub fn reversed(&self, name: &str) -> Self {
        let mut layers = self.layers.clone();
        layers.reverse();
        Self {
            name: name.to_string(),
            layers,
            boundary: self.boundary,
        }
    }

    pub fn with_temperatures(self, temp_int: f64, temp_ext: f64) -> Result<Self> {
        let boundary = self.boundary;
        self.with_boundary(BoundaryConditions {
            temp_int,
            temp_ext,
            ..boundary
        })
    }

    pub fn with_relative_humidities(self, int: f64, ext: f64) -> Result<Self> {
        let boundary = self.boundary;
        self.with_boundary(BoundaryConditions {
            relative_humidity_int: int,
            relative_humidity_ext: ext,
            ..boundary
        })
    }

    pub fn with_surface_resistances(self, r_si: f64, r_se: f64) -> Result<Self> {
        let boundary = self.boundary;
        self.with_boundary(BoundaryConditions {
            surface_resistance_int: r_si,
            surface_resistance_ext: r_se,
            ..boundary
        })
    }

    pub fn with_period_hours(self, period_hours: f64) -> Result<Self> {
        let boundary = self.boundary;
        self.with_boundary(BoundaryConditions {
            period_hours,
            ..boundary
        })
    }

    fn with_boundary(mut self, boundary: BoundaryConditions) -> Result<Self> {
        boundary.validate()?;
        self.boundary = boundary;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layers(&self) -> &[Arc<Layer>] {
        &self.layers
    }

    pub fn boundary(&self) -> &BoundaryConditions {
        &self.boundary
    }

    fn per_layer(&self, f: impl Fn(&Layer) -> f64) -> Vec<f64> {
        self.layers.iter().map(|l| f(l.as_ref())).collect()
    }

    /// Thickness of each layer in m.
    pub fn thicknesses(&self) -> Vec<f64> {
        self.per_layer(Layer::thickness)
    }

    /// Interface positions in m, starting at 0.0 (length = layers + 1).
    pub fn thickness_cumsum(&self) -> Vec<f64> {
        cumsum_from_zero(&self.thicknesses())
    }

    pub fn total_thickness(&self) -> f64 {
        self.thicknesses().iter().sum()
    }

    pub fn thermal_conductivities(&self) -> Vec<f64> {
        self.per_layer(Layer::thermal_conductivity)
    }

    pub fn vapor_permeabilities(&self) -> Vec<f64> {
        self.per_layer(Layer::vapor_permeability)
    }

    pub fn densities(&self) -> Vec<f64> {
        self.per_layer(Layer::density)
    }

    pub fn specific_heats(&self) -> Vec<f64> {
        self.per_layer(Layer::specific_heat)
    }

    pub fn thermal_diffusivities(&self) -> Vec<f64> {
        self.per_layer(Layer::thermal_diffusivity)
    }

    /// Sd of each layer in m.
    pub fn equivalent_thicknesses(&self) -> Vec<f64> {
        self.per_layer(Layer::equivalent_thickness)
    }

    pub fn equivalent_thickness_total(&self) -> f64 {
        self.equivalent_thicknesses().iter().sum()
    }

    /// Cumulative Sd starting at 0.0 (length = layers + 1).
    pub fn equivalent_thickness_cumsum(&self) -> Vec<f64> {
        cumsum_from_zero(&self.equivalent_thicknesses())
    }

    /// Total mass per unit area in kg/m^2.
    pub fn areal_mass(&self) -> f64 {
        self.layers.iter().map(|l| l.areal_mass()).sum()
    }
}

/// The layers and walls of the reference timber-frame comparison.
pub mod presets {
    use super::*;

    pub fn gessofibra() -> Result<Layer> {
        Layer::new("Gessofibra", 0.015, 0.21, 5.0, 1150.0, 1100.0)
    }

    pub fn xlam() -> Result<Layer> {
        Layer::new("X-LAM", 0.096, 0.13, 25.0, 500.0, 1600.0)
    }

    pub fn high_density_insulation() -> Result<Layer> {
        Layer::new("Isolante alta densità", 0.13, 0.043, 5.0, 190.0, 2100.0)
    }

    pub fn plaster() -> Result<Layer> {
        Layer::new("Intonaco", 0.015, 0.9, 20.0, 1800.0, 1000.0)
    }

    /// Walls "3c" (X-LAM inside the insulation) and "3d" (insulation inside
    /// the X-LAM), built from the same shared layers.
    pub fn comparison_walls() -> Result<(Wall, Wall)> {
        let gessofibra = Arc::new(gessofibra()?);
        let xlam = Arc::new(xlam()?);
        let insulation = Arc::new(high_density_insulation()?);
        let plaster = Arc::new(plaster()?);

        let wall_3c = Wall::new(
            "3c",
            vec![
                Arc::clone(&gessofibra),
                Arc::clone(&xlam),
                Arc::clone(&insulation),
                Arc::clone(&plaster),
            ],
        )?;
        let wall_3d = Wall::new("3d", vec![gessofibra, insulation, xlam, plaster])?;
        Ok((wall_3c, wall_3d))
    }

    /// A single 200 mm concrete slab.
    pub fn concrete_wall() -> Result<Wall> {
        let concrete = Layer::new("concrete", 0.20, 1.4, 100.0, 2300.0, 880.0)?;
        Wall::new("concrete_wall", vec![Arc::new(concrete)])
    }
}

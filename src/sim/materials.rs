use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{Result, WallError, ensure_positive};

/// Display color used when none is given.
pub const DEFAULT_LAYER_COLOR: &str = "white";

/// A single homogeneous material layer in a wall.
///
/// Physical parameters are validated once at construction and never change
/// afterwards, so a layer can be shared between walls behind an [`Arc`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    name: String,
    /// Thickness in meters.
    thickness: f64,
    /// Thermal conductivity in W/(m*K).
    thermal_conductivity: f64,
    /// Water vapor diffusion resistance factor (mu), dimensionless.
    vapor_permeability: f64,
    /// Density in kg/m^3.
    density: f64,
    /// Specific heat capacity in J/(kg*K).
    specific_heat: f64,
    /// Cosmetic only.
    color: String,
}

impl Layer {
    pub fn new(
        name: &str,
        thickness: f64,
        thermal_conductivity: f64,
        vapor_permeability: f64,
        density: f64,
        specific_heat: f64,
    ) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            thickness: ensure_positive("thickness", thickness)?,
            thermal_conductivity: ensure_positive("thermal_conductivity", thermal_conductivity)?,
            vapor_permeability: ensure_positive("vapor_permeability", vapor_permeability)?,
            density: ensure_positive("density", density)?,
            specific_heat: ensure_positive("specific_heat", specific_heat)?,
            color: DEFAULT_LAYER_COLOR.to_string(),
        })
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn thermal_conductivity(&self) -> f64 {
        self.thermal_conductivity
    }

    pub fn vapor_permeability(&self) -> f64 {
        self.vapor_permeability
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn specific_heat(&self) -> f64 {
        self.specific_heat
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Equivalent air-layer thickness for vapor diffusion (Sd) in m.
    pub fn equivalent_thickness(&self) -> f64 {
        self.thickness * self.vapor_permeability
    }

    /// Thermal resistance of this layer in m^2*K/W.
    pub fn thermal_resistance(&self) -> f64 {
        self.thickness / self.thermal_conductivity
    }

    /// Thermal diffusivity in m^2/s.
    pub fn thermal_diffusivity(&self) -> f64 {
        self.thermal_conductivity / (self.density * self.specific_heat)
    }

    /// Mass per unit area in kg/m^2.
    pub fn areal_mass(&self) -> f64 {
        self.thickness * self.density
    }

    /// Heat capacity per unit area in J/(m^2*K).
    pub fn areal_heat_capacity(&self) -> f64 {
        self.areal_mass() * self.specific_heat
    }
}

/// Library of shared layers keyed by id.
///
/// Layer names are labels and may repeat, so walls reference layers by id.
/// Every lookup hands out the same [`Arc`], which is how one layer ends up
/// in several walls without copying.
#[derive(Debug, Clone, Default)]
pub struct LayerLibrary {
    layers: BTreeMap<String, Arc<Layer>>,
}

impl LayerLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a layer under `id`, replacing any previous entry, and returns the
    /// shared handle.
    pub fn add(&mut self, id: &str, layer: Layer) -> Arc<Layer> {
        let layer = Arc::new(layer);
        self.layers.insert(id.to_string(), Arc::clone(&layer));
        layer
    }

    pub fn get(&self, id: &str) -> Option<Arc<Layer>> {
        self.layers.get(id).cloned()
    }

    /// Resolves an ordered list of ids into shared layers.
    pub fn resolve<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Arc<Layer>>> {
        ids.iter()
            .map(|id| {
                self.get(id.as_ref())
                    .ok_or_else(|| WallError::UnknownLayer(id.as_ref().to_string()))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

//! Wall-set JSON files.
//!
//! A wall set defines layers once, keyed by id, and walls that reference
//! them in stacking order:
//!
//! ```json
//! {
//!   "layers": {
//!     "xlam": { "name": "X-LAM", "thickness": 0.096, "thermal_conductivity": 0.13,
//!               "vapor_permeability": 25.0, "density": 500.0, "specific_heat": 1600.0 }
//!   },
//!   "walls": [
//!     { "name": "timber", "layers": ["xlam"], "boundary": { "temp_ext": -10.0 } }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::sim::config::BoundaryConditions;
use crate::sim::construction::Wall;
use crate::sim::materials::{DEFAULT_LAYER_COLOR, Layer, LayerLibrary};
use crate::sim::report::WallSummary;

/// Root structure of a wall-set file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSetFile {
    /// Layer definitions by id
    pub layers: BTreeMap<String, LayerEntry>,
    /// Walls referencing layer ids
    pub walls: Vec<WallEntry>,
}

/// A layer definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerEntry {
    pub name: String,
    pub thickness: f64,
    pub thermal_conductivity: f64,
    pub vapor_permeability: f64,
    pub density: f64,
    pub specific_heat: f64,
    #[serde(default = "default_color")]
    pub color: String,
}

/// A wall definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallEntry {
    pub name: String,
    /// Layer ids in stacking order
    pub layers: Vec<String>,
    #[serde(default)]
    pub boundary: BoundaryConditions,
}

fn default_color() -> String {
    DEFAULT_LAYER_COLOR.to_string()
}

/// Validated layers and walls built from a [`WallSetFile`].
#[derive(Debug, Clone)]
pub struct WallSet {
    pub library: LayerLibrary,
    pub walls: Vec<Wall>,
}

impl WallSetFile {
    /// Validates every entry and shares each layer among the walls using it.
    pub fn build(&self) -> Result<WallSet> {
        let mut library = LayerLibrary::new();
        for (id, entry) in &self.layers {
            let layer = Layer::new(
                &entry.name,
                entry.thickness,
                entry.thermal_conductivity,
                entry.vapor_permeability,
                entry.density,
                entry.specific_heat,
            )
            .with_context(|| format!("Invalid layer '{id}'"))?
            .with_color(&entry.color);
            library.add(id, layer);
        }

        let walls = self
            .walls
            .iter()
            .map(|entry| {
                let layers = library
                    .resolve(&entry.layers)
                    .with_context(|| format!("Invalid wall '{}'", entry.name))?;
                Wall::with_boundary_conditions(&entry.name, layers, entry.boundary)
                    .with_context(|| format!("Invalid wall '{}'", entry.name))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(WallSet { library, walls })
    }
}

/// Parses a wall set from a JSON string.
pub fn parse_wall_set(json: &str) -> Result<WallSet> {
    let file: WallSetFile = serde_json::from_str(json).context("Failed to parse wall set")?;
    file.build()
}

/// Reads a wall set from a JSON file.
pub fn read_wall_set(path: &Path) -> Result<WallSet> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let wall_set: WallSetFile = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse wall set: {}", path.display()))?;

    wall_set
        .build()
        .with_context(|| format!("Invalid wall set: {}", path.display()))
}

/// Writes wall summaries as pretty-printed JSON.
pub fn write_summaries(path: &Path, summaries: &[WallSummary]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, summaries)
        .with_context(|| format!("Failed to write summaries: {}", path.display()))?;

    Ok(())
}

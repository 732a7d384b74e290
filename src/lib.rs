//! Thermal and hygrometric analysis of multi-layer walls.
//!
//! Steady state: resistances, U-value, temperature and vapor-pressure
//! profiles for the Glaser method. Periodic: transfer matrices, periodic
//! transmittance, decrement factor, time lag and areal heat capacities.

pub mod error;
pub mod io;
pub mod sim;
pub mod vecutils;

// Prelude
pub use error::{Result, WallError};
pub use sim::config::BoundaryConditions;
pub use sim::construction::Wall;
pub use sim::glaser::GlaserDiagram;
pub use sim::materials::{Layer, LayerLibrary};
pub use sim::periodic::{PeriodicResponse, TransferMatrix};
pub use sim::report::{WallAnalysis, WallSummary, compare_walls};
pub use sim::steady_state::saturation_pressure;

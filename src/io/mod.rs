//! File I/O for wall definitions and analysis results.

pub mod json;

pub use json::{WallSet, parse_wall_set, read_wall_set, write_summaries};

pub mod config;
pub mod construction;
pub mod glaser;
pub mod materials;
pub mod periodic;
pub mod report;
pub mod steady_state;

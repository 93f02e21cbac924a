//! Per-cell transition rules for grid simulations, plus a small reference
//! driver that steps a wrapping grid one generation at a time.
pub mod config;
pub mod grid;
pub mod rules;
pub mod state;

pub use config::{ConfigError, Seed, SimConfig};
pub use grid::{Grid, GridError};
pub use rules::{blur, conway, generational, life, negative, Cell, Neighborhood, Pattern, Rule};
pub use state::Simulation;

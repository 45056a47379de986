//! Simulation engine for SUBHUNT.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the driver.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use subhunt_core as core;

#[cfg(test)]
mod tests;

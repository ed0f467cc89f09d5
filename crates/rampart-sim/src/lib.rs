//! Simulation engine for RAMPART.
//!
//! Owns the hecs ECS world, advances it at a fixed tick rate, and produces
//! `GameStateSnapshot`s for frontends and drivers. Fully headless and
//! deterministic for a given seed and command sequence.

pub mod economy;
pub mod engine;
pub mod placement;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};

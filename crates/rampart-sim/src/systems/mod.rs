//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions taking `&mut World` plus whatever engine
//! state they need. They hold no state of their own; everything lives in
//! components or on the engine.

pub mod casualties;
pub mod fire_control;
pub mod movement;
pub mod projectiles;
pub mod snapshot;
pub mod wave_spawner;

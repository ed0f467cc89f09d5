//! Player commands accepted by the simulation engine.
//!
//! Commands are queued from outside the simulation thread and processed
//! in FIFO order at the start of the next tick. Invalid commands are
//! ignored without error; the simulation never panics on bad input.

use serde::{Deserialize, Serialize};

use crate::enums::TowerClass;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Construction ---
    /// Place a tower of the given class at a position. Ignored if the
    /// position is invalid or funds don't cover the placement cost.
    PlaceTower { class: TowerClass, x: f64, y: f64 },
    /// Upgrade the tower whose hit box covers the given position.
    /// Ignored if no tower is there or funds don't cover its upgrade cost.
    UpgradeTower { x: f64, y: f64 },

    // --- Wave control ---
    /// Start the next wave. Ignored while a wave is still spawning.
    StartWave,

    // --- Session control ---
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Reset the session to its initial state, re-seeded from the
    /// original seed. The only command accepted after game over.
    Reset,
}

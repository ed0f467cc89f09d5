//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Hostile unit class. Classes differ only in stats, not behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostileClass {
    /// Baseline walker.
    #[default]
    Normal,
    /// Low health, high speed, small reward.
    Fast,
    /// High health, slow, biggest reward. Appears from wave 5 on.
    Tank,
}

/// Defense tower class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerClass {
    /// Mid-range all-rounder.
    #[default]
    Basic,
    /// Long range, heavy damage, slow cadence.
    Sniper,
    /// Short range, light damage, slows its target on every shot.
    Slow,
}

/// Top-level session phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advancing normally.
    #[default]
    Active,
    /// Tick advance suspended. Commands are still accepted.
    Paused,
    /// Base destroyed. Only `Reset` is accepted.
    GameOver,
}

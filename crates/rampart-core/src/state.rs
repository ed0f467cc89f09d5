//! Serializable views of the game state.
//!
//! A `GameStateSnapshot` is produced by every engine tick and is the only
//! thing a frontend ever sees. Views carry stable unit ids instead of
//! entity handles, and every view list is sorted by unit id so that equal
//! states serialize to identical JSON.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, HostileClass, TowerClass};
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete state of the session at the end of a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Funds available for placement and upgrades.
    pub funds: i32,
    /// Remaining base health. May go below zero on the final tick.
    pub base_health: i32,
    pub wave: WaveView,
    pub hostiles: Vec<HostileView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    pub score: ScoreView,
    /// Events that occurred during this tick, in order.
    pub events: Vec<GameEvent>,
}

/// Wave scheduler status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveView {
    /// Number of the current (or last finished) wave. 0 before the first.
    pub number: u32,
    /// True while the wave still has spawns pending.
    pub active: bool,
    /// Hostiles still waiting to spawn this wave.
    pub pending: u32,
    /// True when spawning is done and no hostiles remain on the field.
    pub wave_complete: bool,
}

/// One hostile unit on the field.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HostileView {
    pub unit_id: u32,
    pub class: HostileClass,
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    pub slow_factor: f64,
    /// Index of the most recently reached waypoint.
    pub path_index: usize,
    /// Visual radius for rendering.
    pub radius: f64,
}

/// One defense tower on the field.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TowerView {
    pub unit_id: u32,
    pub class: TowerClass,
    pub position: Position,
    pub level: u32,
    pub range: f64,
    pub damage: i32,
    pub fire_rate: u32,
    pub fire_cooldown: u32,
    pub upgrade_cost: i32,
    /// Unit id of the current target, if the tower has a live lock.
    pub target_unit_id: Option<u32>,
}

/// One projectile in flight.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub unit_id: u32,
    pub position: Position,
    pub damage: i32,
    /// Unit id of the pursued hostile, if it still exists.
    pub target_unit_id: Option<u32>,
}

/// Running session counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub hostiles_destroyed: u32,
    pub hostiles_leaked: u32,
    pub towers_built: u32,
    pub projectiles_fired: u32,
}

//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods. Game logic lives
//! in systems, not in components.

use serde::{Deserialize, Serialize};

use crate::enums::{HostileClass, TowerClass};

/// Stable unit number assigned at spawn. Snapshot views are sorted by it
/// and events refer to units through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Marks an entity as a hostile unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile {
    pub class: HostileClass,
    /// Funds credited when this unit is destroyed.
    pub reward: i32,
}

/// Progress along the waypoint route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PathFollower {
    /// Index of the most recently reached waypoint. Movement heads for
    /// `path_index + 1`; the unit has escaped once this is the last index.
    pub path_index: usize,
}

/// Movement parameters for a path-following unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mobility {
    /// Distance covered per tick at full speed.
    pub base_speed: f64,
    /// Multiplier on base speed, always in (0, 1]. Recovers toward 1.0
    /// a little each tick.
    pub slow_factor: f64,
}

/// Hit points. Never clamped: `current <= 0` means dead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Marks an entity as a defense tower.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tower {
    pub class: TowerClass,
    /// Upgrade level, starting at 1.
    pub level: u32,
    /// Cost of the next upgrade. Grows with every upgrade taken.
    pub upgrade_cost: i32,
}

/// A tower's firing stats. Mutated only by the cooldown tick and upgrades.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    /// Acquisition and fire radius.
    pub range: f64,
    /// Damage per projectile.
    pub damage: i32,
    /// Cooldown between shots (ticks).
    pub fire_rate: u32,
    /// Ticks until the next shot. 0 means ready.
    pub fire_cooldown: u32,
    /// Slow factor stamped onto the target on fire, for slow towers.
    pub slow_effect: Option<f64>,
}

/// A tower's current target.
///
/// Holds a raw entity handle and is deliberately not serialized: liveness
/// is re-checked by component lookup every tick, and a failed lookup
/// drops the lock.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetLock {
    pub target: Option<hecs::Entity>,
}

/// A projectile in flight toward a hostile.
///
/// Like `TargetLock`, the handle is validated by lookup on every update.
/// A projectile whose target is gone is removed without applying damage.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub target: hecs::Entity,
    pub damage: i32,
    /// Distance covered per tick.
    pub speed: f64,
}

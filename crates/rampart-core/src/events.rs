//! Notable occurrences surfaced to frontends and drivers.
//!
//! Events are accumulated during a tick and drained into that tick's
//! snapshot, so consumers never miss one between frames.

use serde::{Deserialize, Serialize};

use crate::enums::TowerClass;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A wave has been scheduled and will begin spawning.
    WaveStarted { wave_number: u32, hostile_count: u32 },
    /// A hostile was destroyed by tower fire; its reward has been credited.
    HostileDestroyed { unit_id: u32, reward: i32 },
    /// A hostile reached the final waypoint and damaged the base.
    HostileLeaked { unit_id: u32, base_health: i32 },
    /// A tower was placed and paid for.
    TowerPlaced { unit_id: u32, class: TowerClass, x: f64, y: f64 },
    /// A tower was upgraded to the given level.
    TowerUpgraded { unit_id: u32, level: u32 },
    /// Base health reached zero. The session freezes after this tick.
    BaseDestroyed,
}

//! Scripted session runner.
//!
//! Plays a fixed strategy against the engine: build an opening loadout as
//! funds allow, start the next wave whenever the field is clear, and sink
//! spare funds into the cheapest upgrade. Enough to survive the early waves
//! and to exercise every command path without a frontend.

use rampart_core::commands::PlayerCommand;
use rampart_core::constants::{BASIC_COST, SLOW_COST, SNIPER_COST};
use rampart_core::enums::{GamePhase, TowerClass};
use rampart_core::events::GameEvent;
use rampart_core::state::GameStateSnapshot;

use crate::game_loop::GameLoopHandle;

/// Opening loadout, placed in order as funds allow. Every spot is clear of
/// the route and of the spots before it.
const OPENING_BUILD: [(TowerClass, f64, f64); 5] = [
    (TowerClass::Basic, 450.0, 330.0),
    (TowerClass::Basic, 150.0, 330.0),
    (TowerClass::Slow, 510.0, 270.0),
    (TowerClass::Sniper, 1050.0, 390.0),
    (TowerClass::Basic, 750.0, 390.0),
];

/// Minimum ticks between upgrade requests, so kill rewards bank up instead
/// of draining into a single tower.
const UPGRADE_THROTTLE_TICKS: u64 = 60;

fn placement_cost(class: TowerClass) -> i32 {
    match class {
        TowerClass::Basic => BASIC_COST,
        TowerClass::Sniper => SNIPER_COST,
        TowerClass::Slow => SLOW_COST,
    }
}

/// Decides one command at a time from the latest snapshot.
///
/// The engine absorbs duplicates (placement on an occupied spot and a
/// wave-start during an active wave are no-ops), so the plan may re-issue
/// a decision while an earlier copy is still in flight.
pub struct SessionPlan {
    target_waves: u32,
    last_upgrade_tick: u64,
}

impl SessionPlan {
    pub fn new(target_waves: u32) -> Self {
        Self {
            target_waves,
            last_upgrade_tick: 0,
        }
    }

    /// True once the requested number of waves has been cleared, or the
    /// base has fallen.
    pub fn is_finished(&self, snapshot: &GameStateSnapshot) -> bool {
        snapshot.phase == GamePhase::GameOver
            || (snapshot.wave.wave_complete && snapshot.wave.number >= self.target_waves)
    }

    pub fn next_command(&mut self, snapshot: &GameStateSnapshot) -> Option<PlayerCommand> {
        if snapshot.phase != GamePhase::Active {
            return None;
        }

        // Build out the opening loadout first.
        let built = snapshot.score.towers_built as usize;
        if let Some(&(class, x, y)) = OPENING_BUILD.get(built) {
            if snapshot.funds >= placement_cost(class) {
                return Some(PlayerCommand::PlaceTower { class, x, y });
            }
        }

        // Next wave once the field is clear.
        if snapshot.wave.wave_complete && snapshot.wave.number < self.target_waves {
            return Some(PlayerCommand::StartWave);
        }

        // Spare funds go to the cheapest upgrade, throttled.
        if snapshot.time.tick.saturating_sub(self.last_upgrade_tick) >= UPGRADE_THROTTLE_TICKS {
            let candidate = snapshot
                .towers
                .iter()
                .filter(|tower| snapshot.funds >= tower.upgrade_cost)
                .min_by_key(|tower| tower.upgrade_cost);
            if let Some(tower) = candidate {
                self.last_upgrade_tick = snapshot.time.tick;
                return Some(PlayerCommand::UpgradeTower {
                    x: tower.position.x,
                    y: tower.position.y,
                });
            }
        }

        None
    }
}

/// Runs a scripted session to completion and returns the final snapshot.
///
/// Returns `None` if the loop thread exits before the session finishes.
pub fn run_session(handle: &GameLoopHandle, target_waves: u32) -> Option<GameStateSnapshot> {
    let mut plan = SessionPlan::new(target_waves);
    loop {
        let snapshot = handle.next_snapshot()?;
        log_events(&snapshot);
        if plan.is_finished(&snapshot) {
            return Some(snapshot);
        }
        if let Some(command) = plan.next_command(&snapshot) {
            if !handle.send_command(command) {
                return Some(snapshot);
            }
        }
    }
}

fn log_events(snapshot: &GameStateSnapshot) {
    for event in &snapshot.events {
        match event {
            GameEvent::WaveStarted {
                wave_number,
                hostile_count,
            } => {
                log::info!("wave {} started, {} hostiles inbound", wave_number, hostile_count);
            }
            GameEvent::TowerPlaced { unit_id, class, x, y } => {
                log::info!("tower {} ({:?}) placed at ({}, {})", unit_id, class, x, y);
            }
            GameEvent::TowerUpgraded { unit_id, level } => {
                log::info!("tower {} upgraded to level {}", unit_id, level);
            }
            GameEvent::HostileDestroyed { unit_id, reward } => {
                log::debug!("hostile {} destroyed, +{} funds", unit_id, reward);
            }
            GameEvent::HostileLeaked { unit_id, base_health } => {
                log::warn!("hostile {} leaked, base health now {}", unit_id, base_health);
            }
            GameEvent::BaseDestroyed => {
                log::warn!("base destroyed");
            }
        }
    }
}

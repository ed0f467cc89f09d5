//! Snapshot building: queries the world into serializable views.
//!
//! Read-only. View lists are sorted by unit id so equal states always
//! serialize to identical JSON, independent of archetype iteration order.

use hecs::{Entity, World};

use rampart_core::components::{
    Health, Hostile, Mobility, PathFollower, Projectile, TargetLock, Tower, UnitId, Weapon,
};
use rampart_core::enums::GamePhase;
use rampart_core::events::GameEvent;
use rampart_core::state::{
    GameStateSnapshot, HostileView, ProjectileView, ScoreView, TowerView, WaveView,
};
use rampart_core::types::{Position, SimTime};

use crate::economy::{EconomyState, ScoreState};
use crate::systems::wave_spawner::WaveState;
use crate::world_setup;

/// Build the complete snapshot for the tick that just ran.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    wave: &WaveState,
    economy: &EconomyState,
    score: &ScoreState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let hostiles = build_hostiles(world);
    let wave_complete = !wave.active && hostiles.is_empty();

    GameStateSnapshot {
        time: *time,
        phase,
        funds: economy.funds,
        base_health: economy.base_health,
        wave: WaveView {
            number: wave.wave_number,
            active: wave.active,
            pending: wave.pending.len() as u32,
            wave_complete,
        },
        hostiles,
        towers: build_towers(world),
        projectiles: build_projectiles(world),
        score: ScoreView {
            hostiles_destroyed: score.hostiles_destroyed,
            hostiles_leaked: score.hostiles_leaked,
            towers_built: score.towers_built,
            projectiles_fired: score.projectiles_fired,
        },
        events,
    }
}

fn build_hostiles(world: &World) -> Vec<HostileView> {
    let mut views: Vec<HostileView> = world
        .query::<(&UnitId, &Hostile, &Position, &Health, &PathFollower, &Mobility)>()
        .iter()
        .map(|(_, (unit_id, hostile, pos, health, follower, mobility))| {
            let (_, _, _, radius) = world_setup::hostile_class_params(hostile.class);
            HostileView {
                unit_id: unit_id.0,
                class: hostile.class,
                position: *pos,
                health: health.current,
                max_health: health.max,
                slow_factor: mobility.slow_factor,
                path_index: follower.path_index,
                radius,
            }
        })
        .collect();
    views.sort_by_key(|view| view.unit_id);
    views
}

fn build_towers(world: &World) -> Vec<TowerView> {
    let mut views: Vec<TowerView> = world
        .query::<(&UnitId, &Tower, &Weapon, &TargetLock, &Position)>()
        .iter()
        .map(|(_, (unit_id, tower, weapon, lock, pos))| TowerView {
            unit_id: unit_id.0,
            class: tower.class,
            position: *pos,
            level: tower.level,
            range: weapon.range,
            damage: weapon.damage,
            fire_rate: weapon.fire_rate,
            fire_cooldown: weapon.fire_cooldown,
            upgrade_cost: tower.upgrade_cost,
            target_unit_id: lock.target.and_then(|entity| resolve_unit_id(world, entity)),
        })
        .collect();
    views.sort_by_key(|view| view.unit_id);
    views
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut views: Vec<ProjectileView> = world
        .query::<(&UnitId, &Projectile, &Position)>()
        .iter()
        .map(|(_, (unit_id, projectile, pos))| ProjectileView {
            unit_id: unit_id.0,
            position: *pos,
            damage: projectile.damage,
            target_unit_id: resolve_unit_id(world, projectile.target),
        })
        .collect();
    views.sort_by_key(|view| view.unit_id);
    views
}

/// Translate an entity handle into its stable unit id, if it still exists.
fn resolve_unit_id(world: &World, entity: Entity) -> Option<u32> {
    world.get::<&UnitId>(entity).map(|unit_id| unit_id.0).ok()
}

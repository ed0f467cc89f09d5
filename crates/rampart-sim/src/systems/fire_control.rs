//! Tower fire control: cooldowns, target locks, and firing.

use hecs::{Entity, World};

use rampart_core::components::{Health, Hostile, Mobility, TargetLock, Tower, Weapon};
use rampart_core::types::Position;

use crate::economy::ScoreState;
use crate::world_setup;

/// Run fire control for every tower for one tick.
///
/// Each tower counts its cooldown down, validates its lock, acquires the
/// first live hostile in range if it has none, and fires when ready. A
/// lock is dropped the moment its hostile is gone or strictly out of
/// range; acquisition takes the first hostile in iteration order, not the
/// nearest.
pub fn run(world: &mut World, next_unit_id: &mut u32, score: &mut ScoreState) {
    // Live hostiles, in iteration order, with their post-movement positions.
    let hostiles: Vec<(Entity, Position)> = {
        let mut query = world.query::<(&Hostile, &Position, &Health)>();
        query
            .iter()
            .filter(|(_, (_, _, health))| health.current > 0)
            .map(|(entity, (_, pos, _))| (entity, *pos))
            .collect()
    };

    // Shots decided this tick: (origin, target, damage, slow effect).
    let mut shots: Vec<(Position, Entity, i32, Option<f64>)> = Vec::new();

    for (_entity, (_tower, weapon, lock, pos)) in
        world.query_mut::<(&Tower, &mut Weapon, &mut TargetLock, &Position)>()
    {
        weapon.fire_cooldown = weapon.fire_cooldown.saturating_sub(1);

        if let Some(target) = lock.target {
            let still_valid = hostiles
                .iter()
                .find(|(entity, _)| *entity == target)
                .is_some_and(|(_, target_pos)| pos.distance_to(target_pos) <= weapon.range);
            if !still_valid {
                lock.target = None;
            }
        }

        if lock.target.is_none() {
            lock.target = hostiles
                .iter()
                .find(|(_, target_pos)| pos.distance_to(target_pos) <= weapon.range)
                .map(|(entity, _)| *entity);
        }

        if weapon.fire_cooldown == 0 {
            if let Some(target) = lock.target {
                weapon.fire_cooldown = weapon.fire_rate;
                shots.push((*pos, target, weapon.damage, weapon.slow_effect));
            }
        }
    }

    for (origin, target, damage, slow_effect) in shots {
        // Slow towers stamp their effect on fire; it wears off on the
        // hostile's own recovery schedule.
        if let Some(factor) = slow_effect {
            if let Ok(mut mobility) = world.get::<&mut Mobility>(target) {
                mobility.slow_factor = factor;
            }
        }
        world_setup::spawn_projectile(world, origin, target, damage, next_unit_id);
        score.projectiles_fired += 1;
    }
}

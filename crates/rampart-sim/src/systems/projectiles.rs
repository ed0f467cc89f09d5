//! Projectile flight: homing pursuit, contact damage, stale-target removal.

use hecs::{Entity, World};

use rampart_core::components::{Health, Projectile};
use rampart_core::constants::PROJECTILE_CONTACT_RADIUS;
use rampart_core::types::Position;

/// Advance every projectile by one tick.
///
/// A projectile whose target died or despawned is removed without
/// applying damage. One within contact range delivers its damage and is
/// removed. Everything else homes straight at the target's current
/// position; projectiles cannot miss, only arrive late.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let mut moves: Vec<(Entity, f64, f64)> = Vec::new();
    let mut impacts: Vec<(Entity, Entity, i32)> = Vec::new();

    {
        let mut query = world.query::<(&Projectile, &Position)>();
        for (entity, (projectile, pos)) in query.iter() {
            let target_alive = world
                .get::<&Health>(projectile.target)
                .map(|health| health.current > 0)
                .unwrap_or(false);
            if !target_alive {
                despawn_buffer.push(entity);
                continue;
            }
            let target_pos = match world.get::<&Position>(projectile.target) {
                Ok(target_pos) => *target_pos,
                Err(_) => {
                    despawn_buffer.push(entity);
                    continue;
                }
            };

            let dx = target_pos.x - pos.x;
            let dy = target_pos.y - pos.y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance < PROJECTILE_CONTACT_RADIUS {
                impacts.push((entity, projectile.target, projectile.damage));
            } else {
                moves.push((
                    entity,
                    dx / distance * projectile.speed,
                    dy / distance * projectile.speed,
                ));
            }
        }
    }

    for (entity, step_x, step_y) in moves {
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            pos.x += step_x;
            pos.y += step_y;
        }
    }

    for (projectile, target, damage) in impacts {
        if let Ok(mut health) = world.get::<&mut Health>(target) {
            health.current -= damage;
        }
        despawn_buffer.push(projectile);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

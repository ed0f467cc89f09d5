//! Path-following movement for hostile units.
//!
//! Hostiles walk waypoint to waypoint. Arriving at an intermediate
//! waypoint consumes the whole tick; no leftover distance is carried into
//! the next leg. Arriving at the final waypoint parks the unit there for
//! the casualty pass to pick up.

use hecs::World;

use rampart_core::components::{Mobility, PathFollower};
use rampart_core::constants::{SLOW_RECOVERY_PER_TICK, WAYPOINT_ARRIVAL_RADIUS};
use rampart_core::types::Position;

/// Advance every path-following unit by one tick.
pub fn run(world: &mut World, path: &[Position]) {
    let last_index = match path.len().checked_sub(1) {
        Some(index) => index,
        None => return,
    };

    for (_entity, (pos, follower, mobility)) in
        world.query_mut::<(&mut Position, &mut PathFollower, &mut Mobility)>()
    {
        // Already at the final waypoint: escaped, nothing left to walk.
        if follower.path_index >= last_index {
            continue;
        }

        let next = path[follower.path_index + 1];
        let dx = next.x - pos.x;
        let dy = next.y - pos.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance < WAYPOINT_ARRIVAL_RADIUS {
            follower.path_index += 1;
            if follower.path_index >= last_index {
                // Landed on the final waypoint; the slow factor stays put
                // for this tick.
                continue;
            }
        } else {
            let step = mobility.base_speed * mobility.slow_factor;
            pos.x += dx / distance * step;
            pos.y += dy / distance * step;
        }

        mobility.slow_factor = (mobility.slow_factor + SLOW_RECOVERY_PER_TICK).min(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world_setup;
    use rampart_core::enums::HostileClass;

    fn short_path() -> Vec<Position> {
        vec![
            Position::new(0.0, 0.0),
            Position::new(10.0, 0.0),
            Position::new(10.0, 20.0),
        ]
    }

    #[test]
    fn test_walks_toward_next_waypoint() {
        let mut world = World::new();
        let path = short_path();
        let mut next_id = 0;
        let entity = world_setup::spawn_hostile(&mut world, &path, HostileClass::Normal, &mut next_id);

        run(&mut world, &path);
        let pos = *world.get::<&Position>(entity).unwrap();
        assert!((pos.x - 1.5).abs() < 1e-9);
        assert_eq!(pos.y, 0.0);
    }

    #[test]
    fn test_arrival_consumes_the_tick() {
        let mut world = World::new();
        let path = short_path();
        let mut next_id = 0;
        let entity = world_setup::spawn_hostile(&mut world, &path, HostileClass::Normal, &mut next_id);

        // Park the unit just inside the arrival radius of waypoint 1.
        {
            let mut pos = world.get::<&mut Position>(entity).unwrap();
            pos.x = 6.0;
        }
        run(&mut world, &path);

        let follower = *world.get::<&PathFollower>(entity).unwrap();
        assert_eq!(follower.path_index, 1);
        // No movement on the arrival tick.
        let pos = *world.get::<&Position>(entity).unwrap();
        assert_eq!((pos.x, pos.y), (6.0, 0.0));

        // The next tick heads for waypoint 2.
        run(&mut world, &path);
        let pos = *world.get::<&Position>(entity).unwrap();
        assert!(pos.y > 0.0);
    }

    #[test]
    fn test_parks_at_final_waypoint() {
        let mut world = World::new();
        let path = short_path();
        let mut next_id = 0;
        let entity = world_setup::spawn_hostile(&mut world, &path, HostileClass::Normal, &mut next_id);
        {
            let mut follower = world.get::<&mut PathFollower>(entity).unwrap();
            follower.path_index = 1;
            let mut pos = world.get::<&mut Position>(entity).unwrap();
            pos.x = 10.0;
            pos.y = 16.5;
        }

        run(&mut world, &path);
        let follower = *world.get::<&PathFollower>(entity).unwrap();
        assert_eq!(follower.path_index, 2);

        // Escaped units stop moving entirely.
        let before = *world.get::<&Position>(entity).unwrap();
        run(&mut world, &path);
        let after = *world.get::<&Position>(entity).unwrap();
        assert_eq!((before.x, before.y), (after.x, after.y));
    }

    #[test]
    fn test_slow_factor_recovers_while_walking() {
        let mut world = World::new();
        let path = short_path();
        let mut next_id = 0;
        let entity = world_setup::spawn_hostile(&mut world, &path, HostileClass::Normal, &mut next_id);
        {
            let mut mobility = world.get::<&mut Mobility>(entity).unwrap();
            mobility.slow_factor = 0.5;
        }

        run(&mut world, &path);
        let mobility = *world.get::<&Mobility>(entity).unwrap();
        assert!((mobility.slow_factor - 0.55).abs() < 1e-9);
        // The slowed step is half the base step.
        let pos = *world.get::<&Position>(entity).unwrap();
        assert!((pos.x - 0.75).abs() < 1e-9);

        // Recovery clamps at full speed.
        for _ in 0..20 {
            run(&mut world, &path);
        }
        let mobility = *world.get::<&Mobility>(entity).unwrap();
        assert_eq!(mobility.slow_factor, 1.0);
    }
}

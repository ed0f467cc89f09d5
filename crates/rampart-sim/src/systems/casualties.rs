//! Casualty resolution: destroyed hostiles pay out, escaped hostiles
//! damage the base.
//!
//! Runs right after movement so a hostile that reached the final waypoint
//! is removed on the same tick. A unit that is both dead and escaped
//! counts as a kill; the checks are ordered.

use hecs::{Entity, World};

use rampart_core::components::{Health, Hostile, PathFollower, UnitId};
use rampart_core::constants::LEAK_BASE_DAMAGE;
use rampart_core::events::GameEvent;

use crate::economy::{EconomyState, ScoreState};

/// Remove dead and escaped hostiles, crediting rewards and applying base
/// damage. Emits `BaseDestroyed` on the leak that drops the base to zero.
pub fn run(
    world: &mut World,
    last_waypoint: usize,
    economy: &mut EconomyState,
    score: &mut ScoreState,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    {
        let mut query = world.query::<(&UnitId, &Hostile, &Health, &PathFollower)>();
        for (entity, (unit_id, hostile, health, follower)) in query.iter() {
            if health.current <= 0 {
                economy.credit(hostile.reward);
                score.hostiles_destroyed += 1;
                events.push(GameEvent::HostileDestroyed {
                    unit_id: unit_id.0,
                    reward: hostile.reward,
                });
                despawn_buffer.push(entity);
            } else if follower.path_index >= last_waypoint {
                let base_was_standing = economy.base_health > 0;
                economy.base_health -= LEAK_BASE_DAMAGE;
                score.hostiles_leaked += 1;
                events.push(GameEvent::HostileLeaked {
                    unit_id: unit_id.0,
                    base_health: economy.base_health,
                });
                if base_was_standing && economy.base_health <= 0 {
                    events.push(GameEvent::BaseDestroyed);
                }
                despawn_buffer.push(entity);
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world_setup;
    use rampart_core::enums::HostileClass;
    use rampart_core::types::Position;

    fn two_point_path() -> Vec<Position> {
        vec![Position::new(0.0, 0.0), Position::new(100.0, 0.0)]
    }

    #[test]
    fn test_dead_hostile_pays_out() {
        let mut world = World::new();
        let path = two_point_path();
        let mut next_id = 0;
        let entity = world_setup::spawn_hostile(&mut world, &path, HostileClass::Tank, &mut next_id);
        {
            let mut health = world.get::<&mut Health>(entity).unwrap();
            health.current = -8;
        }

        let mut economy = EconomyState::default();
        let mut score = ScoreState::default();
        let mut buffer = Vec::new();
        let mut events = Vec::new();
        run(&mut world, 1, &mut economy, &mut score, &mut buffer, &mut events);

        assert_eq!(world.len(), 0);
        assert_eq!(economy.funds, EconomyState::default().funds + 40);
        assert_eq!(economy.base_health, EconomyState::default().base_health);
        assert_eq!(score.hostiles_destroyed, 1);
        assert!(matches!(
            events.as_slice(),
            [GameEvent::HostileDestroyed { reward: 40, .. }]
        ));
    }

    #[test]
    fn test_escaped_hostile_damages_base() {
        let mut world = World::new();
        let path = two_point_path();
        let mut next_id = 0;
        let entity = world_setup::spawn_hostile(&mut world, &path, HostileClass::Fast, &mut next_id);
        {
            let mut follower = world.get::<&mut PathFollower>(entity).unwrap();
            follower.path_index = 1;
        }

        let mut economy = EconomyState::default();
        let mut score = ScoreState::default();
        let mut buffer = Vec::new();
        let mut events = Vec::new();
        run(&mut world, 1, &mut economy, &mut score, &mut buffer, &mut events);

        assert_eq!(world.len(), 0);
        assert_eq!(economy.funds, EconomyState::default().funds);
        assert_eq!(economy.base_health, EconomyState::default().base_health - 1);
        assert_eq!(score.hostiles_leaked, 1);
    }

    #[test]
    fn test_dead_takes_precedence_over_escaped() {
        let mut world = World::new();
        let path = two_point_path();
        let mut next_id = 0;
        let entity = world_setup::spawn_hostile(&mut world, &path, HostileClass::Normal, &mut next_id);
        {
            let mut health = world.get::<&mut Health>(entity).unwrap();
            health.current = 0;
            let mut follower = world.get::<&mut PathFollower>(entity).unwrap();
            follower.path_index = 1;
        }

        let mut economy = EconomyState::default();
        let mut score = ScoreState::default();
        let mut buffer = Vec::new();
        let mut events = Vec::new();
        run(&mut world, 1, &mut economy, &mut score, &mut buffer, &mut events);

        assert_eq!(score.hostiles_destroyed, 1);
        assert_eq!(score.hostiles_leaked, 0);
        assert_eq!(economy.base_health, EconomyState::default().base_health);
    }

    #[test]
    fn test_base_destroyed_fires_on_the_crossing_leak() {
        let mut world = World::new();
        let path = two_point_path();
        let mut next_id = 0;
        for _ in 0..3 {
            let entity =
                world_setup::spawn_hostile(&mut world, &path, HostileClass::Normal, &mut next_id);
            let mut follower = world.get::<&mut PathFollower>(entity).unwrap();
            follower.path_index = 1;
        }

        let mut economy = EconomyState {
            funds: 0,
            base_health: 2,
        };
        let mut score = ScoreState::default();
        let mut buffer = Vec::new();
        let mut events = Vec::new();
        run(&mut world, 1, &mut economy, &mut score, &mut buffer, &mut events);

        // Three leaks drive the base to -1, but the marker event fires once.
        assert_eq!(economy.base_health, -1);
        let destroyed_count = events
            .iter()
            .filter(|event| matches!(event, GameEvent::BaseDestroyed))
            .count();
        assert_eq!(destroyed_count, 1);
        assert_eq!(score.hostiles_leaked, 3);
    }
}

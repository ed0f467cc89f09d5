#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::{Health, Mobility, PathFollower};
    use crate::constants::*;
    use crate::enums::{GamePhase, HostileClass, TowerClass};
    use crate::events::GameEvent;
    use crate::state::{GameStateSnapshot, HostileView, TowerView};
    use crate::types::{Position, SimTime};

    // ---- Types ----

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-9);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-9);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_phase_is_active() {
        assert_eq!(GamePhase::default(), GamePhase::Active);
    }

    // ---- Constants sanity ----

    #[test]
    fn test_route_runs_west_to_east() {
        let first = PATH_WAYPOINTS[0];
        let last = PATH_WAYPOINTS[PATH_WAYPOINTS.len() - 1];
        assert_eq!(first.0, 0.0);
        assert!(last.0 > first.0);
        // Consecutive waypoints share exactly one axis, so each leg is
        // horizontal or vertical.
        for pair in PATH_WAYPOINTS.windows(2) {
            let same_x = pair[0].0 == pair[1].0;
            let same_y = pair[0].1 == pair[1].1;
            assert!(same_x != same_y);
        }
    }

    #[test]
    fn test_tower_stats_are_positive() {
        assert!(BASIC_RANGE > 0.0 && SNIPER_RANGE > 0.0 && SLOW_RANGE > 0.0);
        assert!(BASIC_COST > 0 && SNIPER_COST > 0 && SLOW_COST > 0);
        assert!(BASIC_FIRE_RATE > 0 && SNIPER_FIRE_RATE > 0 && SLOW_FIRE_RATE > 0);
        assert!(SLOW_TOWER_EFFECT > 0.0 && SLOW_TOWER_EFFECT < 1.0);
    }

    // ---- Serialization ----

    #[test]
    fn test_command_serde_round_trip() {
        let commands = vec![
            PlayerCommand::PlaceTower {
                class: TowerClass::Sniper,
                x: 450.0,
                y: 330.0,
            },
            PlayerCommand::UpgradeTower { x: 450.0, y: 330.0 },
            PlayerCommand::StartWave,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::Reset,
        ];
        for command in commands {
            let json = serde_json::to_string(&command).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            let json2 = serde_json::to_string(&back).unwrap();
            assert_eq!(json, json2);
        }
    }

    #[test]
    fn test_command_serde_uses_type_tag() {
        let json = serde_json::to_string(&PlayerCommand::StartWave).unwrap();
        assert_eq!(json, r#"{"type":"StartWave"}"#);
        let parsed: PlayerCommand =
            serde_json::from_str(r#"{"type":"PlaceTower","class":"Basic","x":90.0,"y":330.0}"#)
                .unwrap();
        match parsed {
            PlayerCommand::PlaceTower { class, x, y } => {
                assert_eq!(class, TowerClass::Basic);
                assert_eq!(x, 90.0);
                assert_eq!(y, 330.0);
            }
            other => panic!("expected PlaceTower, got {other:?}"),
        }
    }

    #[test]
    fn test_event_serde_round_trip() {
        let events = vec![
            GameEvent::WaveStarted {
                wave_number: 1,
                hostile_count: 8,
            },
            GameEvent::HostileDestroyed {
                unit_id: 3,
                reward: 25,
            },
            GameEvent::HostileLeaked {
                unit_id: 4,
                base_health: 19,
            },
            GameEvent::TowerPlaced {
                unit_id: 0,
                class: TowerClass::Slow,
                x: 510.0,
                y: 270.0,
            },
            GameEvent::TowerUpgraded {
                unit_id: 0,
                level: 2,
            },
            GameEvent::BaseDestroyed,
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            let json2 = serde_json::to_string(&back).unwrap();
            assert_eq!(json, json2);
        }
    }

    #[test]
    fn test_hostile_class_serde() {
        for class in [HostileClass::Normal, HostileClass::Fast, HostileClass::Tank] {
            let json = serde_json::to_string(&class).unwrap();
            let back: HostileClass = serde_json::from_str(&json).unwrap();
            assert_eq!(class, back);
        }
    }

    #[test]
    fn test_default_snapshot_serializes_small() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.len() < 1024, "empty snapshot should be compact: {json}");
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Active);
        assert!(back.hostiles.is_empty());
        assert!(back.events.is_empty());
    }

    #[test]
    fn test_populated_snapshot_round_trip() {
        let snapshot = GameStateSnapshot {
            funds: 175,
            base_health: 18,
            hostiles: vec![HostileView {
                unit_id: 2,
                class: HostileClass::Fast,
                position: Position::new(120.0, 400.0),
                health: 30,
                max_health: 50,
                slow_factor: 0.65,
                path_index: 0,
                radius: 20.0,
            }],
            towers: vec![TowerView {
                unit_id: 0,
                class: TowerClass::Basic,
                position: Position::new(450.0, 330.0),
                level: 2,
                range: 198.0,
                damage: 60,
                fire_rate: 40,
                fire_cooldown: 12,
                upgrade_cost: 120,
                target_unit_id: Some(2),
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(serde_json::to_string(&back).unwrap(), json);
    }

    // ---- Components ----

    #[test]
    fn test_component_plain_data() {
        let health = Health {
            current: -15,
            max: 100,
        };
        assert!(health.current <= 0);

        let mobility = Mobility {
            base_speed: 1.5,
            slow_factor: 0.5,
        };
        assert!(mobility.slow_factor > 0.0 && mobility.slow_factor <= 1.0);

        let follower = PathFollower { path_index: 0 };
        assert_eq!(follower.path_index, 0);
    }
}

//! Simulation engine: command intake, the ordered system pass, snapshots.
//!
//! `SimulationEngine` owns the hecs ECS world, processes queued player
//! commands, runs all systems in a fixed order, and produces a
//! `GameStateSnapshot` every tick. Completely headless: the same engine
//! drives frontends, scripted sessions, and tests, and two engines with
//! the same seed and command sequence produce identical snapshots.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rampart_core::commands::PlayerCommand;
use rampart_core::components::{Tower, UnitId};
use rampart_core::constants::PATH_WAYPOINTS;
use rampart_core::enums::{GamePhase, TowerClass};
use rampart_core::events::GameEvent;
use rampart_core::state::GameStateSnapshot;
use rampart_core::types::{Position, SimTime};

use crate::economy::{EconomyState, ScoreState};
use crate::placement;
use crate::systems;
use crate::systems::wave_spawner::WaveState;
use crate::world_setup;

/// Configuration for a new simulation session.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed. Wave composition is the only random element, so the seed
    /// fully determines a session given the same commands.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns all game state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    config: SimConfig,
    path: Vec<Position>,
    wave: WaveState,
    economy: EconomyState,
    score: ScoreState,
    next_unit_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            path: PATH_WAYPOINTS
                .iter()
                .map(|&(x, y)| Position::new(x, y))
                .collect(),
            wave: WaveState::default(),
            economy: EconomyState::default(),
            score: ScoreState::default(),
            next_unit_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for the next tick.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue several commands at once, preserving order.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the new state.
    ///
    /// Commands are processed first, even while paused or after game over,
    /// so pause-menu actions and resets take effect immediately. Systems
    /// only run while the session is active.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.wave,
            &self.economy,
            &self.score,
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> &SimTime {
        &self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PlaceTower { class, x, y } => {
                if self.phase != GamePhase::GameOver {
                    self.place_tower(class, x, y);
                }
            }
            PlayerCommand::UpgradeTower { x, y } => {
                if self.phase != GamePhase::GameOver {
                    self.upgrade_tower_at(x, y);
                }
            }
            PlayerCommand::StartWave => {
                if self.phase != GamePhase::GameOver && !self.wave.active {
                    self.wave.start(&mut self.rng);
                    self.events.push(GameEvent::WaveStarted {
                        wave_number: self.wave.wave_number,
                        hostile_count: self.wave.pending.len() as u32,
                    });
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Reset => self.reset(),
        }
    }

    /// Validate, pay for, and spawn a tower. Silently ignores requests
    /// that are out of bounds or unaffordable.
    fn place_tower(&mut self, class: TowerClass, x: f64, y: f64) {
        if !placement::is_valid_tower_position(&self.world, &self.path, x, y) {
            return;
        }
        let (_, _, _, cost, _) = world_setup::tower_class_params(class);
        if !self.economy.can_afford(cost) {
            return;
        }

        let entity = world_setup::spawn_tower(&mut self.world, class, x, y, &mut self.next_unit_id);
        self.economy.debit(cost);
        self.score.towers_built += 1;
        if let Ok(unit_id) = self.world.get::<&UnitId>(entity).map(|id| id.0) {
            self.events.push(GameEvent::TowerPlaced {
                unit_id,
                class,
                x,
                y,
            });
        }
    }

    /// Upgrade the tower under (x, y), if there is one and funds cover it.
    fn upgrade_tower_at(&mut self, x: f64, y: f64) {
        let entity = match placement::find_tower_at(&self.world, x, y) {
            Some(entity) => entity,
            None => return,
        };
        let upgrade_cost = match self.world.get::<&Tower>(entity) {
            Ok(tower) => tower.upgrade_cost,
            Err(_) => return,
        };
        if !self.economy.can_afford(upgrade_cost) {
            return;
        }

        if let Some(level) = world_setup::apply_upgrade(&mut self.world, entity) {
            self.economy.debit(upgrade_cost);
            if let Ok(unit_id) = self.world.get::<&UnitId>(entity).map(|id| id.0) {
                self.events
                    .push(GameEvent::TowerUpgraded { unit_id, level });
            }
        }
    }

    /// Tear the session down to its initial state. The RNG is re-seeded
    /// from the original seed, so a reset session replays identically.
    fn reset(&mut self) {
        self.world = World::new();
        self.time = SimTime::default();
        self.phase = GamePhase::default();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.wave = WaveState::default();
        self.economy = EconomyState::default();
        self.score = ScoreState::default();
        self.next_unit_id = 0;
        self.events.clear();
    }

    fn run_systems(&mut self) {
        // 1. Wave spawning (at most one hostile per spawn interval)
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.wave,
            &self.path,
            &mut self.next_unit_id,
        );

        // 2. Path-following movement (includes hostiles spawned this tick)
        systems::movement::run(&mut self.world, &self.path);

        // 3. Casualties: kill rewards, leaks, base damage
        systems::casualties::run(
            &mut self.world,
            self.path.len().saturating_sub(1),
            &mut self.economy,
            &mut self.score,
            &mut self.despawn_buffer,
            &mut self.events,
        );

        // 4. Tower fire control: cooldowns, locks, firing
        systems::fire_control::run(&mut self.world, &mut self.next_unit_id, &mut self.score);

        // 5. Projectile flight and impact (includes shots fired this tick)
        systems::projectiles::run(&mut self.world, &mut self.despawn_buffer);

        // A destroyed base ends the session, but the tick it happened on
        // runs to completion. The freeze starts next tick.
        if self.economy.base_health <= 0 {
            self.phase = GamePhase::GameOver;
        }
    }

    // --- Test support ---

    /// Spawn a normal hostile at the route origin, bypassing the wave
    /// scheduler (for tests).
    #[cfg(test)]
    pub fn spawn_test_hostile(&mut self) -> hecs::Entity {
        world_setup::spawn_hostile(
            &mut self.world,
            &self.path,
            rampart_core::enums::HostileClass::Normal,
            &mut self.next_unit_id,
        )
    }

    /// Spawn a tower directly, bypassing placement rules and cost (for
    /// tests).
    #[cfg(test)]
    pub fn spawn_test_tower(&mut self, class: TowerClass, x: f64, y: f64) -> hecs::Entity {
        world_setup::spawn_tower(&mut self.world, class, x, y, &mut self.next_unit_id)
    }

    #[cfg(test)]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    #[cfg(test)]
    pub fn set_base_health(&mut self, base_health: i32) {
        self.economy.base_health = base_health;
    }

    #[cfg(test)]
    pub fn set_funds(&mut self, funds: i32) {
        self.economy.funds = funds;
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

//! Game loop thread: runs the simulation engine at 60Hz and emits snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots go out over a
//! bounded channel, so a consumer that reads at its own pace keeps a batch
//! session in lock-step with the loop.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rampart_core::commands::PlayerCommand;
use rampart_core::constants::TICK_RATE;
use rampart_core::state::GameStateSnapshot;
use rampart_sim::engine::{SimConfig, SimulationEngine};

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running game loop thread.
pub struct GameLoopHandle {
    commands: mpsc::Sender<GameLoopCommand>,
    snapshots: mpsc::Receiver<GameStateSnapshot>,
    thread: JoinHandle<()>,
}

impl GameLoopHandle {
    /// Forwards a player command to the engine at the next tick boundary.
    /// Returns false if the loop thread has already exited.
    pub fn send_command(&self, command: PlayerCommand) -> bool {
        self.commands.send(GameLoopCommand::Player(command)).is_ok()
    }

    /// Blocks until the next tick's snapshot, or `None` once the loop
    /// thread has exited.
    pub fn next_snapshot(&self) -> Option<GameStateSnapshot> {
        self.snapshots.recv().ok()
    }

    /// Stops the loop and joins the thread.
    pub fn shutdown(self) {
        let _ = self.commands.send(GameLoopCommand::Shutdown);
        // Unblock a loop that is waiting to publish, then join.
        drop(self.snapshots);
        let _ = self.thread.join();
    }
}

/// Spawns the game loop in a new thread.
///
/// With `realtime` set the loop holds the nominal tick rate; otherwise it
/// runs flat out, gated only by the snapshot channel.
pub fn spawn_game_loop(config: SimConfig, realtime: bool) -> GameLoopHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let (snapshot_tx, snapshot_rx) = mpsc::sync_channel::<GameStateSnapshot>(1);

    let thread = std::thread::Builder::new()
        .name("rampart-game-loop".into())
        .spawn(move || {
            run_game_loop(cmd_rx, snapshot_tx, config, realtime);
        })
        .expect("Failed to spawn game loop thread");

    GameLoopHandle {
        commands: cmd_tx,
        snapshots: snapshot_rx,
        thread,
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: mpsc::SyncSender<GameStateSnapshot>,
    config: SimConfig,
    realtime: bool,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(command)) => {
                    engine.queue_command(command);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Publish the snapshot; a dropped receiver ends the loop
        if snapshot_tx.send(snapshot).is_err() {
            return;
        }

        // 4. Sleep until the next tick when pacing in real time
        if realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind; reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    }
}

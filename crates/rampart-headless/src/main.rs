//! Headless driver binary for RAMPART.
//!
//! Runs a scripted defense session on the game loop thread, logs the event
//! stream, and prints the final snapshot as JSON on stdout.

use std::process;

use rampart_headless::game_loop::spawn_game_loop;
use rampart_headless::session::run_session;
use rampart_sim::engine::SimConfig;

const USAGE: &str = "Usage: rampart-headless [--seed <n>] [--waves <n>] [--realtime]

Runs a scripted RAMPART defense session without a frontend.

Options:
  --seed <n>     RNG seed for wave composition (default 42)
  --waves <n>    number of waves to clear before stopping (default 5)
  --realtime     pace the loop at 60Hz instead of flat out
  -h, --help     print this help";

#[derive(Debug, PartialEq)]
struct Options {
    seed: u64,
    waves: u32,
    realtime: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: SimConfig::default().seed,
            waves: 5,
            realtime: false,
        }
    }
}

/// Hand-rolled argument parsing. `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<Options>, String> {
    let mut options = Options::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(None),
            "--realtime" => options.realtime = true,
            "--seed" => {
                i += 1;
                options.seed = parse_value(args.get(i), "--seed")?;
            }
            "--waves" => {
                i += 1;
                options.waves = parse_value(args.get(i), "--waves")?;
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(Some(options))
}

fn parse_value<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> Result<T, String> {
    value
        .ok_or_else(|| format!("{} expects a value", flag))?
        .parse()
        .map_err(|_| format!("{} expects a number", flag))
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            println!("{}", USAGE);
            return;
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    log::info!(
        "starting session: seed {}, target {} wave(s), {}",
        options.seed,
        options.waves,
        if options.realtime { "realtime" } else { "batch" }
    );

    let handle = spawn_game_loop(SimConfig { seed: options.seed }, options.realtime);
    let outcome = run_session(&handle, options.waves);
    handle.shutdown();

    let snapshot = match outcome {
        Some(snapshot) => snapshot,
        None => {
            eprintln!("game loop exited before the session finished");
            process::exit(1);
        }
    };

    log::info!(
        "session over at tick {}: wave {}, {} destroyed, {} leaked, base health {}",
        snapshot.time.tick,
        snapshot.wave.number,
        snapshot.score.hostiles_destroyed,
        snapshot.score.hostiles_leaked,
        snapshot.base_health
    );

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(error) => {
            eprintln!("failed to serialize final snapshot: {}", error);
            process::exit(1);
        }
    }
}

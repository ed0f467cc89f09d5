//! Simulation constants and tuning parameters.
//!
//! Everything gameplay-visible is tuned from here. Stat lookups that
//! combine these per class live in `rampart-sim`'s `world_setup`.

// --- Simulation timing ---

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per simulation tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Route ---

/// The standard route, west edge to east edge. Hostiles spawn at the
/// first waypoint and damage the base on reaching the last one.
pub const PATH_WAYPOINTS: [(f64, f64); 8] = [
    (0.0, 400.0),
    (300.0, 400.0),
    (300.0, 200.0),
    (600.0, 200.0),
    (600.0, 500.0),
    (900.0, 500.0),
    (900.0, 300.0),
    (1200.0, 300.0),
];

/// Distance at which a hostile counts as having reached a waypoint.
pub const WAYPOINT_ARRIVAL_RADIUS: f64 = 5.0;

// --- Hostiles ---

/// Per-tick recovery of a hostile's slow factor back toward 1.0.
pub const SLOW_RECOVERY_PER_TICK: f64 = 0.05;

/// Normal hostile: max health.
pub const NORMAL_MAX_HEALTH: i32 = 100;

/// Normal hostile: base speed (units per tick).
pub const NORMAL_SPEED: f64 = 1.5;

/// Normal hostile: funds credited on kill.
pub const NORMAL_REWARD: i32 = 25;

/// Normal hostile: visual radius.
pub const NORMAL_RADIUS: f64 = 25.0;

/// Fast hostile: max health.
pub const FAST_MAX_HEALTH: i32 = 50;

/// Fast hostile: base speed (units per tick).
pub const FAST_SPEED: f64 = 2.5;

/// Fast hostile: funds credited on kill.
pub const FAST_REWARD: i32 = 15;

/// Fast hostile: visual radius.
pub const FAST_RADIUS: f64 = 20.0;

/// Tank hostile: max health.
pub const TANK_MAX_HEALTH: i32 = 200;

/// Tank hostile: base speed (units per tick).
pub const TANK_SPEED: f64 = 0.8;

/// Tank hostile: funds credited on kill.
pub const TANK_REWARD: i32 = 40;

/// Tank hostile: visual radius.
pub const TANK_RADIUS: f64 = 35.0;

// --- Towers ---

/// Basic tower: acquisition and fire range.
pub const BASIC_RANGE: f64 = 180.0;

/// Basic tower: damage per projectile.
pub const BASIC_DAMAGE: i32 = 40;

/// Basic tower: cooldown between shots (ticks).
pub const BASIC_FIRE_RATE: u32 = 45;

/// Basic tower: placement cost.
pub const BASIC_COST: i32 = 100;

/// Basic tower: initial upgrade cost.
pub const BASIC_UPGRADE_COST: i32 = 80;

/// Sniper tower: acquisition and fire range.
pub const SNIPER_RANGE: f64 = 250.0;

/// Sniper tower: damage per projectile.
pub const SNIPER_DAMAGE: i32 = 80;

/// Sniper tower: cooldown between shots (ticks).
pub const SNIPER_FIRE_RATE: u32 = 90;

/// Sniper tower: placement cost.
pub const SNIPER_COST: i32 = 200;

/// Sniper tower: initial upgrade cost.
pub const SNIPER_UPGRADE_COST: i32 = 150;

/// Slow tower: acquisition and fire range.
pub const SLOW_RANGE: f64 = 150.0;

/// Slow tower: damage per projectile.
pub const SLOW_DAMAGE: i32 = 10;

/// Slow tower: cooldown between shots (ticks).
pub const SLOW_FIRE_RATE: u32 = 30;

/// Slow tower: placement cost.
pub const SLOW_COST: i32 = 150;

/// Slow tower: initial upgrade cost.
pub const SLOW_UPGRADE_COST: i32 = 100;

/// Slow tower: slow factor stamped onto the target on every shot.
pub const SLOW_TOWER_EFFECT: f64 = 0.5;

// --- Upgrades ---

/// Damage multiplier per upgrade level (integer-truncated).
pub const UPGRADE_DAMAGE_FACTOR: f64 = 1.5;

/// Range multiplier per upgrade level (integer-truncated).
pub const UPGRADE_RANGE_FACTOR: f64 = 1.1;

/// Fire cooldown multiplier per upgrade level (integer-truncated).
pub const UPGRADE_FIRE_RATE_FACTOR: f64 = 0.9;

/// Upgrade cost multiplier per upgrade level (integer-truncated).
pub const UPGRADE_COST_FACTOR: f64 = 1.5;

// --- Projectiles ---

/// Projectile speed (units per tick).
pub const PROJECTILE_SPEED: f64 = 8.0;

/// Contact distance at which a projectile delivers its damage.
pub const PROJECTILE_CONTACT_RADIUS: f64 = 10.0;

// --- Waves ---

/// Ticks between consecutive spawns within a wave.
pub const WAVE_SPAWN_INTERVAL_TICKS: u32 = 60;

/// Base size of a wave's spawn queue.
pub const WAVE_BASE_COUNT: u32 = 5;

/// Additional spawn queue slots per wave number.
pub const WAVE_COUNT_PER_WAVE: u32 = 3;

/// First wave number at which tanks can appear.
pub const WAVE_TANK_MIN_WAVE: u32 = 5;

/// Per-slot chance of a tank, from `WAVE_TANK_MIN_WAVE` on.
pub const WAVE_TANK_CHANCE: f64 = 0.2;

/// Per-slot chance of a fast hostile when the tank draw fails.
pub const WAVE_FAST_CHANCE: f64 = 0.3;

// --- Economy ---

/// Funds at session start.
pub const STARTING_FUNDS: i32 = 300;

/// Base health at session start.
pub const STARTING_BASE_HEALTH: i32 = 20;

/// Base damage dealt by each leaked hostile.
pub const LEAK_BASE_DAMAGE: i32 = 1;

// --- Placement ---

/// Half-width of the keep-out box around each path waypoint.
pub const PATH_CLEARANCE: f64 = 60.0;

/// Half-width of the keep-out box around each existing tower.
pub const TOWER_CLEARANCE: f64 = 30.0;

/// Half-width of the hit box used to select a tower at a position.
pub const TOWER_HIT_RADIUS: f64 = 20.0;

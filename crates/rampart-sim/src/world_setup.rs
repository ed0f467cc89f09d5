//! Entity spawn factories and per-class stat tables.

use hecs::{Entity, World};

use rampart_core::components::{
    Health, Hostile, Mobility, PathFollower, Projectile, TargetLock, Tower, UnitId, Weapon,
};
use rampart_core::constants::*;
use rampart_core::enums::{HostileClass, TowerClass};
use rampart_core::types::Position;

/// Stats for a hostile class: (max_health, base_speed, reward, radius).
pub fn hostile_class_params(class: HostileClass) -> (i32, f64, i32, f64) {
    match class {
        HostileClass::Normal => (NORMAL_MAX_HEALTH, NORMAL_SPEED, NORMAL_REWARD, NORMAL_RADIUS),
        HostileClass::Fast => (FAST_MAX_HEALTH, FAST_SPEED, FAST_REWARD, FAST_RADIUS),
        HostileClass::Tank => (TANK_MAX_HEALTH, TANK_SPEED, TANK_REWARD, TANK_RADIUS),
    }
}

/// Stats for a tower class: (range, damage, fire_rate, cost, upgrade_cost).
pub fn tower_class_params(class: TowerClass) -> (f64, i32, u32, i32, i32) {
    match class {
        TowerClass::Basic => (
            BASIC_RANGE,
            BASIC_DAMAGE,
            BASIC_FIRE_RATE,
            BASIC_COST,
            BASIC_UPGRADE_COST,
        ),
        TowerClass::Sniper => (
            SNIPER_RANGE,
            SNIPER_DAMAGE,
            SNIPER_FIRE_RATE,
            SNIPER_COST,
            SNIPER_UPGRADE_COST,
        ),
        TowerClass::Slow => (
            SLOW_RANGE,
            SLOW_DAMAGE,
            SLOW_FIRE_RATE,
            SLOW_COST,
            SLOW_UPGRADE_COST,
        ),
    }
}

/// The on-fire slow effect for a tower class, if it has one.
pub fn tower_slow_effect(class: TowerClass) -> Option<f64> {
    match class {
        TowerClass::Slow => Some(SLOW_TOWER_EFFECT),
        _ => None,
    }
}

/// Spawn a hostile at the first waypoint of the route.
pub fn spawn_hostile(
    world: &mut World,
    path: &[Position],
    class: HostileClass,
    next_unit_id: &mut u32,
) -> Entity {
    let (max_health, base_speed, reward, _radius) = hostile_class_params(class);
    let unit_id = UnitId(*next_unit_id);
    *next_unit_id += 1;
    let start = path.first().copied().unwrap_or_default();

    world.spawn((
        unit_id,
        Hostile { class, reward },
        start,
        PathFollower { path_index: 0 },
        Mobility {
            base_speed,
            slow_factor: 1.0,
        },
        Health {
            current: max_health,
            max: max_health,
        },
    ))
}

/// Spawn a tower at the given position. Placement rules and cost are the
/// caller's responsibility.
pub fn spawn_tower(
    world: &mut World,
    class: TowerClass,
    x: f64,
    y: f64,
    next_unit_id: &mut u32,
) -> Entity {
    let (range, damage, fire_rate, _cost, upgrade_cost) = tower_class_params(class);
    let unit_id = UnitId(*next_unit_id);
    *next_unit_id += 1;

    world.spawn((
        unit_id,
        Tower {
            class,
            level: 1,
            upgrade_cost,
        },
        Weapon {
            range,
            damage,
            fire_rate,
            fire_cooldown: 0,
            slow_effect: tower_slow_effect(class),
        },
        Position::new(x, y),
        TargetLock::default(),
    ))
}

/// Spawn a projectile at a tower's position, homing on the given target.
pub fn spawn_projectile(
    world: &mut World,
    origin: Position,
    target: Entity,
    damage: i32,
    next_unit_id: &mut u32,
) -> Entity {
    let unit_id = UnitId(*next_unit_id);
    *next_unit_id += 1;

    world.spawn((
        unit_id,
        Projectile {
            target,
            damage,
            speed: PROJECTILE_SPEED,
        },
        origin,
    ))
}

/// Apply one upgrade step to a tower: level and damage up, range up,
/// cooldown down, next upgrade pricier. Every multiplied stat is truncated
/// to a whole number, matching the placement-cost arithmetic.
///
/// Returns the new level, or `None` if the entity is not a tower.
pub fn apply_upgrade(world: &mut World, entity: Entity) -> Option<u32> {
    let new_level = {
        let mut tower = world.get::<&mut Tower>(entity).ok()?;
        tower.level += 1;
        tower.upgrade_cost = (tower.upgrade_cost as f64 * UPGRADE_COST_FACTOR) as i32;
        tower.level
    };

    if let Ok(mut weapon) = world.get::<&mut Weapon>(entity) {
        weapon.damage = (weapon.damage as f64 * UPGRADE_DAMAGE_FACTOR) as i32;
        weapon.range = (weapon.range * UPGRADE_RANGE_FACTOR).trunc();
        weapon.fire_rate = (weapon.fire_rate as f64 * UPGRADE_FIRE_RATE_FACTOR) as u32;
    }

    Some(new_level)
}

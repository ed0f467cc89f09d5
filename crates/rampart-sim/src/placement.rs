//! Tower placement rules and the hit test used to select a tower.
//!
//! All checks are axis-aligned boxes, not circles: a candidate position is
//! rejected only when both coordinate offsets are inside the clearance at
//! the same time. Exactly-on-the-boundary positions pass.

use hecs::{Entity, World};

use rampart_core::components::Tower;
use rampart_core::constants::{PATH_CLEARANCE, TOWER_CLEARANCE, TOWER_HIT_RADIUS};
use rampart_core::types::Position;

/// Whether a tower may be placed at (x, y): clear of every path waypoint
/// and of every existing tower.
pub fn is_valid_tower_position(world: &World, path: &[Position], x: f64, y: f64) -> bool {
    for waypoint in path {
        if (x - waypoint.x).abs() < PATH_CLEARANCE && (y - waypoint.y).abs() < PATH_CLEARANCE {
            return false;
        }
    }

    let mut query = world.query::<(&Tower, &Position)>();
    for (_entity, (_tower, pos)) in query.iter() {
        if (x - pos.x).abs() < TOWER_CLEARANCE && (y - pos.y).abs() < TOWER_CLEARANCE {
            return false;
        }
    }

    true
}

/// The first tower whose hit box covers (x, y), in iteration order.
pub fn find_tower_at(world: &World, x: f64, y: f64) -> Option<Entity> {
    let mut query = world.query::<(&Tower, &Position)>();
    for (entity, (_tower, pos)) in query.iter() {
        if (x - pos.x).abs() < TOWER_HIT_RADIUS && (y - pos.y).abs() < TOWER_HIT_RADIUS {
            return Some(entity);
        }
    }
    None
}

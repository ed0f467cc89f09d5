//! Funds, base health, and score bookkeeping for a session.

use rampart_core::constants::{STARTING_BASE_HEALTH, STARTING_FUNDS};

/// Session economy. Both fields are signed: base health may be driven
/// below zero by several leaks landing in the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EconomyState {
    pub funds: i32,
    pub base_health: i32,
}

impl Default for EconomyState {
    fn default() -> Self {
        Self {
            funds: STARTING_FUNDS,
            base_health: STARTING_BASE_HEALTH,
        }
    }
}

impl EconomyState {
    /// Whether the given cost is currently payable.
    pub fn can_afford(&self, cost: i32) -> bool {
        self.funds >= cost
    }

    /// Deduct a cost. Callers must check `can_afford` first.
    pub fn debit(&mut self, cost: i32) {
        self.funds -= cost;
    }

    /// Credit a reward.
    pub fn credit(&mut self, amount: i32) {
        self.funds += amount;
    }
}

/// Running counters surfaced in the snapshot's score view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub hostiles_destroyed: u32,
    pub hostiles_leaked: u32,
    pub towers_built: u32,
    pub projectiles_fired: u32,
}

// ============================================================================
// STATE SNAPSHOTS
// ============================================================================

use crate::storage::{get_claim_balance, get_state};
use soroban_sdk::{Address, Env};

/// Captures pool accounting for before/after comparisons
#[derive(Clone)]
pub struct PoolSnapshot {
    pub base_reserve: u128,
    pub token_reserve: u128,
    pub claim_supply: u128,
}

impl PoolSnapshot {
    pub fn capture(env: &Env) -> Self {
        let state = get_state(env);
        Self {
            base_reserve: state.base_reserve,
            token_reserve: state.token_reserve,
            claim_supply: state.claim_supply,
        }
    }

    pub fn unchanged_since(&self, other: &PoolSnapshot) -> bool {
        self.base_reserve == other.base_reserve
            && self.token_reserve == other.token_reserve
            && self.claim_supply == other.claim_supply
    }
}

/// Captures one holder's claim balance
#[derive(Clone)]
pub struct ClaimSnapshot {
    pub balance: u128,
}

impl ClaimSnapshot {
    pub fn capture(env: &Env, holder: &Address) -> Self {
        Self {
            balance: get_claim_balance(env, holder),
        }
    }
}

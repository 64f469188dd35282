// ============================================================================
// CLAIM LEDGER SPECIFICATIONS
// ============================================================================
//
// KEY PROPERTIES:
// 1. Transfers preserve the sum of the two balances involved
// 2. Failed transfers change nothing
// 3. With two holders, their balances sum to claim_supply after a transfer
//
// ============================================================================

use super::model::ClaimSnapshot;
use crate::claims;
use crate::invariants::balances_sum_to_supply;
use crate::storage::{get_state, set_claim_balance, set_state};
use crate::LiquidityPool;
use pool_types::PoolState;
use soroban_sdk::{Address, Env};

use cvlr::asserts::{cvlr_assert, cvlr_assume};
use cvlr_soroban_derive::rule;

/// RULE: Transfer between distinct holders preserves their sum
#[rule]
pub fn transfer_preserves_sum(
    env: Env,
    base_asset: Address,
    token: Address,
    from: Address,
    to: Address,
    from_balance: u128,
    to_balance: u128,
    amount: u128,
) {
    cvlr_assume!(base_asset != token);
    cvlr_assume!(from != to);
    cvlr_assume!(from_balance < (1 << 100) && to_balance < (1 << 100));
    LiquidityPool::__constructor(env.clone(), base_asset, token);
    set_claim_balance(&env, &from, from_balance);
    set_claim_balance(&env, &to, to_balance);
    let supply = from_balance + to_balance;
    set_state(
        &env,
        &PoolState {
            base_reserve: supply,
            token_reserve: 0,
            claim_supply: supply,
        },
    );

    let result = claims::transfer(&env, &from, &to, amount);

    let from_after = ClaimSnapshot::capture(&env, &from);
    let to_after = ClaimSnapshot::capture(&env, &to);
    cvlr_assert!(balances_sum_to_supply(
        from_after.balance + to_after.balance,
        &get_state(&env)
    ));
    if result.is_ok() {
        cvlr_assert!(from_after.balance + to_after.balance == from_balance + to_balance);
        cvlr_assert!(from_after.balance == from_balance - amount);
    } else {
        cvlr_assert!(from_after.balance == from_balance);
        cvlr_assert!(to_after.balance == to_balance);
    }
}

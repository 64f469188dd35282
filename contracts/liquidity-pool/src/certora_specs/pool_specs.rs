// ============================================================================
// POOL OPERATION SPECIFICATIONS
// ============================================================================
//
// These rules call the engine directly and check that rejected operations
// leave accounting untouched.
//
// KEY PROPERTIES:
// 1. init is a one-time transition while claims are outstanding
// 2. Zero-amount deposits and withdrawals are rejected
// 3. Over-withdrawal is rejected
//
// ============================================================================

use super::model::{ClaimSnapshot, PoolSnapshot};
use crate::error::PoolError;
use crate::liquidity;
use crate::storage::{set_claim_balance, set_state};
use crate::LiquidityPool;
use pool_types::PoolState;
use soroban_sdk::{Address, Env};

use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};
use cvlr_soroban_derive::rule;

fn seed(env: &Env, base_asset: Address, token: Address, holder: &Address, reserve: u128, token_reserve: u128) {
    LiquidityPool::__constructor(env.clone(), base_asset, token);
    set_state(
        env,
        &PoolState {
            base_reserve: reserve,
            token_reserve,
            claim_supply: reserve,
        },
    );
    set_claim_balance(env, holder, reserve);
}

/// RULE: Sanity - a freshly constructed pool is reachable and empty
#[rule]
pub fn sanity_constructed_pool_is_empty(env: Env, base_asset: Address, token: Address) {
    cvlr_assume!(base_asset != token);
    LiquidityPool::__constructor(env.clone(), base_asset, token);
    let snapshot = PoolSnapshot::capture(&env);
    cvlr_satisfy!(snapshot.claim_supply == 0);
}

/// RULE: init fails with AlreadyInitialized once claims exist
#[rule]
pub fn init_is_one_time(
    env: Env,
    base_asset: Address,
    token: Address,
    caller: Address,
    reserve: u128,
    token_reserve: u128,
    token_amount: u128,
    base_amount: u128,
) {
    cvlr_assume!(base_asset != token);
    cvlr_assume!(reserve > 0);
    seed(&env, base_asset, token, &caller, reserve, token_reserve);

    let before = PoolSnapshot::capture(&env);
    let result = liquidity::init(&env, caller, token_amount, base_amount);
    let after = PoolSnapshot::capture(&env);

    cvlr_assert!(result == Err(PoolError::AlreadyInitialized));
    cvlr_assert!(after.unchanged_since(&before));
}

/// RULE: Zero-amount deposit is rejected
#[rule]
pub fn zero_deposit_rejected(
    env: Env,
    base_asset: Address,
    token: Address,
    caller: Address,
    reserve: u128,
    token_reserve: u128,
    token_amount_max: u128,
    base_amount: u128,
) {
    cvlr_assume!(base_asset != token);
    cvlr_assume!(reserve > 0);
    cvlr_assume!(token_amount_max == 0 || base_amount == 0);
    seed(&env, base_asset, token, &caller, reserve, token_reserve);

    let before = PoolSnapshot::capture(&env);
    let result = liquidity::add_liquidity(&env, caller, token_amount_max, base_amount);
    let after = PoolSnapshot::capture(&env);

    cvlr_assert!(result == Err(PoolError::DepositAmountZero));
    cvlr_assert!(after.unchanged_since(&before));
}

/// RULE: Withdrawing more than the caller holds is rejected
#[rule]
pub fn over_withdrawal_rejected(
    env: Env,
    base_asset: Address,
    token: Address,
    caller: Address,
    reserve: u128,
    token_reserve: u128,
    claim_amount: u128,
) {
    cvlr_assume!(base_asset != token);
    cvlr_assume!(reserve > 0);
    cvlr_assume!(claim_amount > reserve);
    seed(&env, base_asset, token, &caller, reserve, token_reserve);

    let claims_before = ClaimSnapshot::capture(&env, &caller);
    let before = PoolSnapshot::capture(&env);
    let result = liquidity::remove_liquidity(&env, caller.clone(), claim_amount);
    let after = PoolSnapshot::capture(&env);
    let claims_after = ClaimSnapshot::capture(&env, &caller);

    cvlr_assert!(result == Err(PoolError::InsufficientClaim));
    cvlr_assert!(after.unchanged_since(&before));
    cvlr_assert!(claims_after.balance == claims_before.balance);
}

/// RULE: Zero withdrawal is rejected
#[rule]
pub fn zero_withdrawal_rejected(
    env: Env,
    base_asset: Address,
    token: Address,
    caller: Address,
    reserve: u128,
    token_reserve: u128,
) {
    cvlr_assume!(base_asset != token);
    seed(&env, base_asset, token, &caller, reserve, token_reserve);

    let result = liquidity::remove_liquidity(&env, caller, 0);
    cvlr_assert!(result == Err(PoolError::WithdrawAmountZero));
}

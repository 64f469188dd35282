// ============================================================================
// SHARE MATH SPECIFICATIONS
// ============================================================================
//
// KEY PROPERTIES:
// 1. Deposits keep claim_supply == base_reserve
// 2. Deposits never under-charge token relative to the pool ratio
// 3. Withdrawals never pay out more than the reserves hold
// 4. A deposit followed by redeeming its claims is never profitable
//
// ============================================================================

use crate::invariants;
use pool_math::{quote_deposit, quote_withdrawal};
use pool_types::PoolState;
use soroban_sdk::Env;

use cvlr::asserts::{cvlr_assert, cvlr_assume};
use cvlr_soroban_derive::rule;

const BOUND: u128 = 1 << 60;

/// RULE: Deposit quote keeps claims tracking the base reserve
#[rule]
pub fn deposit_keeps_claims_tracking_base(env: Env, reserve: u128, token_reserve: u128, base_amount: u128) {
    cvlr_assume!(reserve > 0 && reserve < BOUND);
    cvlr_assume!(token_reserve < BOUND);
    cvlr_assume!(base_amount > 0 && base_amount < BOUND);

    let state = PoolState {
        base_reserve: reserve,
        token_reserve,
        claim_supply: reserve,
    };
    let Ok(quote) = quote_deposit(&env, &state, base_amount) else {
        // Bounded inputs never overflow
        cvlr_assert!(false);
        return;
    };

    let after = PoolState {
        base_reserve: reserve + quote.base_amount,
        token_reserve: token_reserve + quote.token_amount,
        claim_supply: reserve + quote.claim_amount,
    };
    cvlr_assert!(invariants::claims_track_base_reserve(&after));
    cvlr_assert!(invariants::ratio_preserved(&state, &after));
}

/// RULE: Token charged is at least the exact proportional amount
#[rule]
pub fn deposit_token_rounds_up(env: Env, reserve: u128, token_reserve: u128, base_amount: u128) {
    cvlr_assume!(reserve > 0 && reserve < BOUND);
    cvlr_assume!(token_reserve < BOUND);
    cvlr_assume!(base_amount > 0 && base_amount < BOUND);

    let state = PoolState {
        base_reserve: reserve,
        token_reserve,
        claim_supply: reserve,
    };
    let Ok(quote) = quote_deposit(&env, &state, base_amount) else {
        // Bounded inputs never overflow
        cvlr_assert!(false);
        return;
    };

    // token_amount / base_amount >= token_reserve / reserve
    cvlr_assert!(quote.token_amount * reserve >= base_amount * token_reserve);
}

/// RULE: Withdrawal is bounded by reserves
#[rule]
pub fn withdrawal_bounded_by_reserves(env: Env, reserve: u128, token_reserve: u128, claim_amount: u128) {
    cvlr_assume!(reserve > 0 && reserve < BOUND);
    cvlr_assume!(token_reserve < BOUND);
    cvlr_assume!(claim_amount > 0 && claim_amount <= reserve);

    let state = PoolState {
        base_reserve: reserve,
        token_reserve,
        claim_supply: reserve,
    };
    let quote = quote_withdrawal(&env, &state, claim_amount);

    cvlr_assert!(quote.base_amount == claim_amount);
    cvlr_assert!(quote.token_amount <= token_reserve);
}

/// RULE: Deposit-then-withdraw round trip is never profitable
#[rule]
pub fn round_trip_not_profitable(env: Env, reserve: u128, token_reserve: u128, base_amount: u128) {
    cvlr_assume!(reserve > 0 && reserve < BOUND);
    cvlr_assume!(token_reserve < BOUND);
    cvlr_assume!(base_amount > 0 && base_amount < BOUND);

    let before = PoolState {
        base_reserve: reserve,
        token_reserve,
        claim_supply: reserve,
    };
    let Ok(deposit) = quote_deposit(&env, &before, base_amount) else {
        // Bounded inputs never overflow
        cvlr_assert!(false);
        return;
    };
    let after = PoolState {
        base_reserve: reserve + deposit.base_amount,
        token_reserve: token_reserve + deposit.token_amount,
        claim_supply: reserve + deposit.claim_amount,
    };
    let withdrawal = quote_withdrawal(&env, &after, deposit.claim_amount);

    cvlr_assert!(invariants::round_trip_not_profitable(
        deposit.base_amount,
        deposit.token_amount,
        withdrawal.base_amount,
        withdrawal.token_amount,
    ));
}

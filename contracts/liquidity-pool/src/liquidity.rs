use crate::claims;
use crate::error::PoolError;
use crate::events;
use crate::invariants;
use crate::storage::{get_config, get_state, set_state};
use pool_math::{initial_claims, quote_deposit, quote_withdrawal, QuoteOverflow};
use pool_types::{DepositQuote, PoolState, WithdrawQuote};
use soroban_sdk::{log, token, Address, Env};

// Every operation validates, then writes all internal state, and only then
// calls out to the token ledgers. A token ledger that calls back into the
// pool observes the post-operation state, and any failure in a call-out
// aborts the invocation as a whole.

/// First deposit into an empty pool. Fixes the price ratio at
/// `token_amount : base_amount` and mints `base_amount` claims.
pub fn init(
    env: &Env,
    caller: Address,
    token_amount: u128,
    base_amount: u128,
) -> Result<u128, PoolError> {
    let config = get_config(env);
    let mut state = get_state(env);

    if state.claim_supply != 0 {
        return Err(PoolError::AlreadyInitialized);
    }
    if token_amount == 0 || base_amount == 0 {
        return Err(PoolError::DepositAmountZero);
    }

    let token_in = to_i128(token_amount)?;
    let base_in = to_i128(base_amount)?;
    let minted = initial_claims(base_amount);

    state.base_reserve = checked_add(state.base_reserve, base_amount)?;
    state.token_reserve = checked_add(state.token_reserve, token_amount)?;
    state.claim_supply = minted;
    claims::mint(env, &caller, minted)?;
    set_state(env, &state);
    check_invariants(&state);

    pull_token(env, &config.token, &caller, token_in)?;
    pull_base(env, &config.base_asset, &caller, base_in)?;

    log!(env, "pool initialized", caller, base_amount, token_amount);
    events::liquidity_initialized(env, caller, base_amount);

    Ok(minted)
}

/// Deposit `base_amount` plus the matching share of token at the current
/// reserve ratio, up to `token_amount_max`.
pub fn add_liquidity(
    env: &Env,
    caller: Address,
    token_amount_max: u128,
    base_amount: u128,
) -> Result<DepositQuote, PoolError> {
    let config = get_config(env);
    let mut state = get_state(env);

    let quote = quote_add_liquidity(env, &state, base_amount, token_amount_max)?;
    if quote.token_amount > token_amount_max {
        return Err(PoolError::SlippageExceeded);
    }

    let token_in = to_i128(quote.token_amount)?;
    let base_in = to_i128(quote.base_amount)?;
    let before = state.clone();

    state.base_reserve = checked_add(state.base_reserve, quote.base_amount)?;
    state.token_reserve = checked_add(state.token_reserve, quote.token_amount)?;
    state.claim_supply = checked_add(state.claim_supply, quote.claim_amount)?;
    claims::mint(env, &caller, quote.claim_amount)?;
    set_state(env, &state);
    check_invariants(&state);
    debug_assert!(invariants::ratio_preserved(&before, &state));

    if token_in > 0 {
        pull_token(env, &config.token, &caller, token_in)?;
    }
    pull_base(env, &config.base_asset, &caller, base_in)?;

    log!(
        env,
        "liquidity added",
        caller,
        quote.base_amount,
        quote.token_amount,
        quote.claim_amount
    );
    events::liquidity_added(
        env,
        caller,
        quote.base_amount,
        quote.token_amount,
        quote.claim_amount,
    );

    Ok(quote)
}

/// Redeem `claim_amount` claims for the proportional share of both reserves
pub fn remove_liquidity(
    env: &Env,
    caller: Address,
    claim_amount: u128,
) -> Result<WithdrawQuote, PoolError> {
    if claim_amount == 0 {
        return Err(PoolError::WithdrawAmountZero);
    }
    if claims::balance(env, &caller) < claim_amount {
        return Err(PoolError::InsufficientClaim);
    }

    let config = get_config(env);
    let mut state = get_state(env);
    let quote = quote_remove_liquidity(env, &state, claim_amount)?;

    let base_out = to_i128(quote.base_amount)?;
    let token_out = to_i128(quote.token_amount)?;
    let before = state.clone();

    claims::burn(env, &caller, claim_amount)?;
    state.claim_supply -= claim_amount;
    state.base_reserve -= quote.base_amount;
    state.token_reserve -= quote.token_amount;
    set_state(env, &state);
    check_invariants(&state);
    debug_assert!(invariants::ratio_preserved(&before, &state));

    let pool = env.current_contract_address();
    if base_out > 0 {
        pay(env, &config.base_asset, &pool, &caller, base_out)?;
    }
    if token_out > 0 {
        pay(env, &config.token, &pool, &caller, token_out)?;
    }

    log!(
        env,
        "liquidity removed",
        caller,
        claim_amount,
        quote.base_amount,
        quote.token_amount
    );
    events::liquidity_removed(env, caller, claim_amount);

    Ok(quote)
}

/// Deposit the pool would apply for `base_amount` in `state`
///
/// `token_amount_max` takes part in the zero-amount guard; the slippage
/// ceiling is enforced by the caller of the quote. A required token amount
/// that does not fit in u128 fails here as `SlippageExceeded`.
pub fn quote_add_liquidity(
    env: &Env,
    state: &PoolState,
    base_amount: u128,
    token_amount_max: u128,
) -> Result<DepositQuote, PoolError> {
    if base_amount == 0 || token_amount_max == 0 {
        return Err(PoolError::DepositAmountZero);
    }
    if !state.is_initialized() {
        return Err(PoolError::NotInitialized);
    }

    // A token amount past u128 is above any `token_amount_max`
    let quote = quote_deposit(env, state, base_amount).map_err(|overflow| match overflow {
        QuoteOverflow::TokenAmount => PoolError::SlippageExceeded,
        QuoteOverflow::ClaimAmount => PoolError::ArithmeticOverflow,
    })?;
    if quote.claim_amount == 0 {
        return Err(PoolError::DepositAmountZero);
    }
    Ok(quote)
}

/// Withdrawal the pool would apply for `claim_amount` in `state`
pub fn quote_remove_liquidity(
    env: &Env,
    state: &PoolState,
    claim_amount: u128,
) -> Result<WithdrawQuote, PoolError> {
    if claim_amount == 0 {
        return Err(PoolError::WithdrawAmountZero);
    }
    if claim_amount > state.claim_supply {
        return Err(PoolError::InsufficientClaim);
    }
    Ok(quote_withdrawal(env, state, claim_amount))
}

// === Token interactions ===

/// Pull pre-approved token from `from` into the pool (allowance-gated)
fn pull_token(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), PoolError> {
    let pool = env.current_contract_address();
    match token::TokenClient::new(env, token).try_transfer_from(&pool, from, &pool, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "token pull failed", from.clone(), amount);
            Err(PoolError::TransferFailed)
        }
    }
}

/// Pull the attached base asset from `from` into the pool
fn pull_base(env: &Env, base: &Address, from: &Address, amount: i128) -> Result<(), PoolError> {
    pay(env, base, from, &env.current_contract_address(), amount)
}

fn pay(env: &Env, asset: &Address, from: &Address, to: &Address, amount: i128) -> Result<(), PoolError> {
    match token::TokenClient::new(env, asset).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "transfer failed", asset.clone(), from.clone(), to.clone(), amount);
            Err(PoolError::TransferFailed)
        }
    }
}

// === Helpers ===

fn to_i128(amount: u128) -> Result<i128, PoolError> {
    i128::try_from(amount).map_err(|_| PoolError::ArithmeticOverflow)
}

fn checked_add(a: u128, b: u128) -> Result<u128, PoolError> {
    a.checked_add(b).ok_or(PoolError::ArithmeticOverflow)
}

fn check_invariants(state: &PoolState) {
    debug_assert!(invariants::claims_track_base_reserve(state));
    debug_assert!(invariants::empty_iff_no_claims(state));
    debug_assert!(invariants::uninitialized_pool_is_empty(state));
}

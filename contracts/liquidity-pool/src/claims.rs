//! Fungible claim-token balances.
//!
//! Holds per-depositor claim balances and allowances. Mint and burn change a
//! single holder's balance only; the engine moves `claim_supply` in the same
//! invocation so the sum of balances always equals the supply. Transfers
//! between holders leave the sum untouched.

use crate::error::PoolError;
use crate::storage::{get_claim_allowance, get_claim_balance, set_claim_allowance, set_claim_balance};
use pool_types::ClaimAllowance;
use soroban_sdk::{Address, Env};

pub fn balance(env: &Env, holder: &Address) -> u128 {
    get_claim_balance(env, holder)
}

/// Credit newly issued claims to `to`
pub fn mint(env: &Env, to: &Address, amount: u128) -> Result<(), PoolError> {
    let updated = get_claim_balance(env, to)
        .checked_add(amount)
        .ok_or(PoolError::ArithmeticOverflow)?;
    set_claim_balance(env, to, updated);
    Ok(())
}

/// Debit redeemed claims from `from`
pub fn burn(env: &Env, from: &Address, amount: u128) -> Result<(), PoolError> {
    let current = get_claim_balance(env, from);
    if current < amount {
        return Err(PoolError::InsufficientClaim);
    }
    set_claim_balance(env, from, current - amount);
    Ok(())
}

/// Move claims between holders
pub fn transfer(env: &Env, from: &Address, to: &Address, amount: u128) -> Result<(), PoolError> {
    burn(env, from, amount)?;
    mint(env, to, amount)
}

/// Spendable allowance of `spender` over `from`'s claims
pub fn allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    get_claim_allowance(env, from, spender).available_at(env.ledger().sequence())
}

pub fn approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), PoolError> {
    if amount < 0 {
        return Err(PoolError::NegativeAmount);
    }
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(PoolError::InvalidExpiration);
    }

    set_claim_allowance(
        env,
        from,
        spender,
        &ClaimAllowance {
            amount,
            expiration_ledger,
        },
    );
    Ok(())
}

/// Consume `amount` of `spender`'s allowance over `from`'s claims
pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), PoolError> {
    let current = get_claim_allowance(env, from, spender);
    if current.available_at(env.ledger().sequence()) < amount {
        return Err(PoolError::InsufficientAllowance);
    }
    if amount > 0 {
        set_claim_allowance(
            env,
            from,
            spender,
            &ClaimAllowance {
                amount: current.amount - amount,
                expiration_ledger: current.expiration_ledger,
            },
        );
    }
    Ok(())
}

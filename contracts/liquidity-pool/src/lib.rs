#![no_std]

mod claims;
mod error;
mod events;
mod invariants;
mod liquidity;
mod storage;

#[cfg(feature = "certora")]
pub mod certora_specs;

pub use error::PoolError;
pub use events::{
    ClaimApproval, ClaimTransfer, LiquidityAdded, LiquidityInitialized, LiquidityRemoved,
};

use pool_types::{DepositQuote, PoolConfig, PoolState, WithdrawQuote};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String};
use storage::{get_config, get_state, set_config, set_state};

#[contract]
pub struct LiquidityPool;

#[contractimpl]
impl LiquidityPool {
    /// Bind the pool to its base-asset ledger and external token ledger.
    /// The pool starts uninitialized with empty reserves.
    pub fn __constructor(env: Env, base_asset: Address, token: Address) {
        if base_asset == token {
            panic_with_error!(&env, PoolError::IdenticalAssets);
        }

        set_config(&env, &PoolConfig { base_asset, token });
        set_state(&env, &PoolState::new());
        log!(&env, "pool constructed");
    }

    // === Liquidity ===

    /// Seed an empty pool
    ///
    /// # Arguments
    /// * `caller` - Depositor; must have approved the pool for `token_amount`
    /// * `token_amount` - External token pulled via `transfer_from`
    /// * `base_amount` - Base asset attached to the call
    ///
    /// # Returns
    /// Claims minted to `caller` (equal to `base_amount`)
    pub fn init(
        env: Env,
        caller: Address,
        token_amount: u128,
        base_amount: u128,
    ) -> Result<u128, PoolError> {
        caller.require_auth();
        liquidity::init(&env, caller, token_amount, base_amount)
    }

    /// Deposit at the current reserve ratio
    ///
    /// # Arguments
    /// * `caller` - Depositor
    /// * `token_amount_max` - Most external token the caller accepts to pay
    /// * `base_amount` - Base asset attached to the call
    ///
    /// # Returns
    /// Base, token and claim amounts of the deposit
    pub fn add_liquidity(
        env: Env,
        caller: Address,
        token_amount_max: u128,
        base_amount: u128,
    ) -> Result<DepositQuote, PoolError> {
        caller.require_auth();
        liquidity::add_liquidity(&env, caller, token_amount_max, base_amount)
    }

    /// Redeem claims for a proportional share of both reserves
    ///
    /// # Returns
    /// Claims burned and base/token amounts paid to `caller`
    pub fn remove_liquidity(
        env: Env,
        caller: Address,
        lp_amount: u128,
    ) -> Result<WithdrawQuote, PoolError> {
        caller.require_auth();
        liquidity::remove_liquidity(&env, caller, lp_amount)
    }

    // === View Functions ===

    /// Deposit the pool would apply for `base_amount` right now
    pub fn quote_add_liquidity(
        env: Env,
        base_amount: u128,
        token_amount_max: u128,
    ) -> Result<DepositQuote, PoolError> {
        liquidity::quote_add_liquidity(&env, &get_state(&env), base_amount, token_amount_max)
    }

    /// Withdrawal the pool would apply for `lp_amount` claims right now
    pub fn quote_remove_liquidity(env: Env, lp_amount: u128) -> Result<WithdrawQuote, PoolError> {
        liquidity::quote_remove_liquidity(&env, &get_state(&env), lp_amount)
    }

    /// Get reserves and claim supply
    pub fn get_state(env: Env) -> PoolState {
        get_state(&env)
    }

    /// Get pool configuration
    pub fn get_config(env: Env) -> PoolConfig {
        get_config(&env)
    }

    /// Get current base reserve
    pub fn get_base_reserve(env: Env) -> u128 {
        get_state(&env).base_reserve
    }

    /// Get current token reserve
    pub fn get_token_reserve(env: Env) -> u128 {
        get_state(&env).token_reserve
    }

    /// Get total claim supply
    pub fn get_claim_supply(env: Env) -> u128 {
        get_state(&env).claim_supply
    }

    /// Get a depositor's claim balance
    pub fn get_claim_balance(env: Env, depositor: Address) -> u128 {
        claims::balance(&env, &depositor)
    }

    /// Get external token ledger address
    pub fn get_token_ledger_address(env: Env) -> Address {
        get_config(&env).token
    }

    /// Get base asset ledger address
    pub fn get_base_asset_address(env: Env) -> Address {
        get_config(&env).base_asset
    }

    // === Claim token ===

    pub fn balance(env: Env, id: Address) -> Result<i128, PoolError> {
        i128::try_from(claims::balance(&env, &id)).map_err(|_| PoolError::ArithmeticOverflow)
    }

    pub fn total_supply(env: Env) -> Result<i128, PoolError> {
        i128::try_from(get_state(&env).claim_supply).map_err(|_| PoolError::ArithmeticOverflow)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        claims::allowance(&env, &from, &spender)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), PoolError> {
        from.require_auth();
        claims::approve(&env, &from, &spender, amount, expiration_ledger)?;
        events::claim_approval(&env, from, spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), PoolError> {
        from.require_auth();
        let claim_amount = non_negative(amount)?;
        claims::transfer(&env, &from, &to, claim_amount)?;
        events::claim_transfer(&env, from, to, amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), PoolError> {
        spender.require_auth();
        let claim_amount = non_negative(amount)?;
        claims::spend_allowance(&env, &from, &spender, amount)?;
        claims::transfer(&env, &from, &to, claim_amount)?;
        events::claim_transfer(&env, from, to, amount);
        Ok(())
    }

    pub fn decimals(_env: Env) -> u32 {
        pool_types::CLAIM_DECIMALS
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, pool_types::CLAIM_NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, pool_types::CLAIM_SYMBOL)
    }
}

fn non_negative(amount: i128) -> Result<u128, PoolError> {
    u128::try_from(amount).map_err(|_| PoolError::NegativeAmount)
}

//! Proportional share math for a two-reserve pool with a claim token.
//!
//! Every rounding goes against the caller: amounts the pool pulls in are
//! rounded up, amounts the pool hands out (claims minted, reserves paid) are
//! rounded down. A depositor can never extract value from existing holders
//! through truncation.

use crate::full_math::{checked_mul_div, checked_mul_div_rounding_up, mul_div};
use pool_types::{DepositQuote, PoolState, WithdrawQuote};
use soroban_sdk::Env;

/// Deposit quote component that does not fit in u128
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum QuoteOverflow {
    TokenAmount,
    ClaimAmount,
}

/// Claims minted by the first deposit into an empty pool.
///
/// Claims are denominated 1:1 with the base asset at initialization, which
/// establishes `claim_supply == base_reserve`.
pub fn initial_claims(base_amount: u128) -> u128 {
    base_amount
}

/// Deposit of `base_amount` into an initialized pool
///
/// token_amount = ceil(base_amount * token_reserve / base_reserve)
/// claim_amount = floor(base_amount * claim_supply / base_reserve)
pub fn quote_deposit(
    env: &Env,
    state: &PoolState,
    base_amount: u128,
) -> Result<DepositQuote, QuoteOverflow> {
    if state.base_reserve == 0 {
        panic!("Pool has no base reserve");
    }

    let token_amount =
        checked_mul_div_rounding_up(env, base_amount, state.token_reserve, state.base_reserve)
            .ok_or(QuoteOverflow::TokenAmount)?;
    let claim_amount = checked_mul_div(env, base_amount, state.claim_supply, state.base_reserve)
        .ok_or(QuoteOverflow::ClaimAmount)?;

    Ok(DepositQuote {
        base_amount,
        token_amount,
        claim_amount,
    })
}

/// Withdrawal of `claim_amount` claims from an initialized pool
///
/// base_amount  = floor(claim_amount * base_reserve / claim_supply)
/// token_amount = floor(claim_amount * token_reserve / claim_supply)
pub fn quote_withdrawal(env: &Env, state: &PoolState, claim_amount: u128) -> WithdrawQuote {
    if claim_amount > state.claim_supply {
        panic!("Claim amount exceeds supply");
    }

    WithdrawQuote {
        claim_amount,
        base_amount: mul_div(env, claim_amount, state.base_reserve, state.claim_supply),
        token_amount: mul_div(env, claim_amount, state.token_reserve, state.claim_supply),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    fn state(base_reserve: u128, token_reserve: u128, claim_supply: u128) -> PoolState {
        PoolState {
            base_reserve,
            token_reserve,
            claim_supply,
        }
    }

    #[test]
    fn test_initial_claims_match_base() {
        assert_eq!(initial_claims(1), 1);
        assert_eq!(initial_claims(10_000_000), 10_000_000);
    }

    // === Deposit ===

    #[test]
    fn test_deposit_at_pool_ratio() {
        let env = Env::default();
        let quote = quote_deposit(&env, &state(1, 1000, 1), 1).unwrap();
        assert_eq!(quote.base_amount, 1);
        assert_eq!(quote.token_amount, 1000);
        assert_eq!(quote.claim_amount, 1);
    }

    #[test]
    fn test_deposit_token_amount_rounds_up() {
        let env = Env::default();
        // 1 * 1000 / 3 = 333.33 -> pool asks for 334
        let quote = quote_deposit(&env, &state(3, 1000, 3), 1).unwrap();
        assert_eq!(quote.token_amount, 334);
        assert_eq!(quote.claim_amount, 1);
    }

    #[test]
    fn test_deposit_claims_round_down() {
        let env = Env::default();
        // Supply diverged from reserve: 5 * 2 / 3 = 3.33 -> 3 claims
        let quote = quote_deposit(&env, &state(3, 300, 2), 5).unwrap();
        assert_eq!(quote.claim_amount, 3);
        assert_eq!(quote.token_amount, 500);
    }

    #[test]
    fn test_deposit_large_reserves() {
        let env = Env::default();
        let base = 1u128 << 100;
        let quote = quote_deposit(&env, &state(base, base * 4, base), base).unwrap();
        assert_eq!(quote.token_amount, base * 4);
        assert_eq!(quote.claim_amount, base);
    }

    #[test]
    #[should_panic(expected = "Pool has no base reserve")]
    fn test_deposit_into_empty_pool() {
        let env = Env::default();
        quote_deposit(&env, &state(0, 0, 0), 1).unwrap();
    }

    // === Withdrawal ===

    #[test]
    fn test_withdraw_half() {
        let env = Env::default();
        let quote = quote_withdrawal(&env, &state(2, 1000, 2), 1);
        assert_eq!(quote.claim_amount, 1);
        assert_eq!(quote.base_amount, 1);
        assert_eq!(quote.token_amount, 500);
    }

    #[test]
    fn test_withdraw_everything() {
        let env = Env::default();
        let quote = quote_withdrawal(&env, &state(7, 1001, 7), 7);
        assert_eq!(quote.base_amount, 7);
        assert_eq!(quote.token_amount, 1001);
    }

    #[test]
    fn test_withdraw_rounds_down() {
        let env = Env::default();
        // 1 * 1000 / 3 = 333.33 -> 333
        let quote = quote_withdrawal(&env, &state(3, 1000, 3), 1);
        assert_eq!(quote.token_amount, 333);
        assert_eq!(quote.base_amount, 1);
    }

    #[test]
    #[should_panic(expected = "Claim amount exceeds supply")]
    fn test_withdraw_more_than_supply() {
        let env = Env::default();
        quote_withdrawal(&env, &state(2, 1000, 2), 3);
    }

    #[test]
    fn test_deposit_then_withdraw_never_profits() {
        let env = Env::default();
        let before = state(3, 1000, 3);
        let deposit = quote_deposit(&env, &before, 1).unwrap();

        let after = state(
            before.base_reserve + deposit.base_amount,
            before.token_reserve + deposit.token_amount,
            before.claim_supply + deposit.claim_amount,
        );
        let withdrawal = quote_withdrawal(&env, &after, deposit.claim_amount);

        assert!(withdrawal.base_amount <= deposit.base_amount);
        assert!(withdrawal.token_amount <= deposit.token_amount);
    }

    #[test]
    fn test_deposit_token_overflow() {
        let env = Env::default();
        // 1 base : 1000 token, so u128::MAX / 2 base needs far more than u128::MAX token
        let result = quote_deposit(&env, &state(1, 1000, 1), u128::MAX / 2);
        assert_eq!(result, Err(QuoteOverflow::TokenAmount));
    }

    #[test]
    fn test_deposit_claim_overflow() {
        let env = Env::default();
        // Supply far above the reserve scales claims past u128
        let result = quote_deposit(&env, &state(1, 0, u128::MAX), 2);
        assert_eq!(result, Err(QuoteOverflow::ClaimAmount));
    }
}

use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns floor((a * b) / denominator)
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    match checked_mul_div(env, a, b, denominator) {
        Some(result) => result,
        None => panic!("U256 overflow when converting to u128"),
    }
}

/// Multiply and divide with 256-bit intermediate precision (rounds up)
/// Returns ceil((a * b) / denominator)
pub fn mul_div_rounding_up(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    match checked_mul_div_rounding_up(env, a, b, denominator) {
        Some(result) => result,
        None => panic!("U256 overflow when converting to u128"),
    }
}

/// Like [`mul_div`], but `None` when the quotient does not fit in u128
pub fn checked_mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        panic!("Division by zero");
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let result = product.div(&U256::from_u128(env, denominator));

    u128_from_u256(env, &result)
}

/// Like [`mul_div_rounding_up`], but `None` when the quotient does not fit in u128
pub fn checked_mul_div_rounding_up(
    env: &Env,
    a: u128,
    b: u128,
    denominator: u128,
) -> Option<u128> {
    let result = checked_mul_div(env, a, b, denominator)?;

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let remainder = product.rem_euclid(&U256::from_u128(env, denominator));

    if remainder.gt(&U256::from_u32(env, 0)) {
        result.checked_add(1)
    } else {
        Some(result)
    }
}

fn u128_from_u256(env: &Env, value: &U256) -> Option<u128> {
    let max_u128 = U256::from_u128(env, u128::MAX);
    if value.gt(&max_u128) {
        return None;
    }
    value.to_u128()
}

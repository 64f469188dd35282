use soroban_sdk::{contractevent, Address, Env};

/// First deposit into an empty pool
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityInitialized {
    #[topic]
    pub provider: Address,
    pub base_amount: u128,
}

/// Proportional deposit into an initialized pool
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityAdded {
    #[topic]
    pub provider: Address,
    pub base_amount: u128,
    pub token_amount: u128,
    pub claim_amount: u128,
}

/// Claims redeemed for their share of both reserves
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityRemoved {
    #[topic]
    pub provider: Address,
    pub claim_amount: u128,
}

/// SEP-41 `transfer` of claims
#[contractevent(topics = ["transfer"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimTransfer {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub amount: i128,
}

/// SEP-41 `approve` of claims
#[contractevent(topics = ["approve"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimApproval {
    #[topic]
    pub from: Address,
    #[topic]
    pub spender: Address,
    pub amount: i128,
    pub expiration_ledger: u32,
}

pub fn liquidity_initialized(env: &Env, provider: Address, base_amount: u128) {
    LiquidityInitialized {
        provider,
        base_amount,
    }
    .publish(env);
}

pub fn liquidity_added(
    env: &Env,
    provider: Address,
    base_amount: u128,
    token_amount: u128,
    claim_amount: u128,
) {
    LiquidityAdded {
        provider,
        base_amount,
        token_amount,
        claim_amount,
    }
    .publish(env);
}

pub fn liquidity_removed(env: &Env, provider: Address, claim_amount: u128) {
    LiquidityRemoved {
        provider,
        claim_amount,
    }
    .publish(env);
}

pub fn claim_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    ClaimTransfer { from, to, amount }.publish(env);
}

pub fn claim_approval(
    env: &Env,
    from: Address,
    spender: Address,
    amount: i128,
    expiration_ledger: u32,
) {
    ClaimApproval {
        from,
        spender,
        amount,
        expiration_ledger,
    }
    .publish(env);
}

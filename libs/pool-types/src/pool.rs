use soroban_sdk::{contracttype, Address};

/// Pool configuration - immutable after construction
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Ledger of the base asset (the native asset's SAC on Stellar)
    pub base_asset: Address,
    /// Ledger of the external token paired against the base asset
    pub token: Address,
}

/// Reserve and claim-supply accounting - stored in Instance storage
///
/// Invariants after every completed operation:
///   claim_supply == base_reserve
///   base_reserve == 0 <=> claim_supply == 0
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    /// Base asset held by the pool
    pub base_reserve: u128,
    /// External token held by the pool
    pub token_reserve: u128,
    /// Total outstanding claim tokens
    pub claim_supply: u128,
}

impl PoolState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pool is initialized once claims are outstanding
    pub fn is_initialized(&self) -> bool {
        self.claim_supply > 0
    }
}

/// Amounts moved by a deposit
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositQuote {
    /// Base asset pulled from the depositor
    pub base_amount: u128,
    /// External token pulled from the depositor
    pub token_amount: u128,
    /// Claim tokens minted to the depositor
    pub claim_amount: u128,
}

/// Amounts moved by a withdrawal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawQuote {
    /// Claim tokens burned from the withdrawer
    pub claim_amount: u128,
    /// Base asset paid out
    pub base_amount: u128,
    /// External token paid out
    pub token_amount: u128,
}

#![no_std]

mod claim;
mod pool;

pub use claim::*;
pub use pool::*;

/// Decimals reported for the claim token.
/// Matches the 7 decimals of Stellar Asset Contracts, so one claim unit
/// corresponds to one stroop of base asset at initialization.
pub const CLAIM_DECIMALS: u32 = 7;

/// Display name of the claim token
pub const CLAIM_NAME: &str = "Pool Claim";

/// Ticker of the claim token
pub const CLAIM_SYMBOL: &str = "CLAIM";

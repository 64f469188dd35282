use soroban_sdk::contracterror;

/// Failures surfaced by the pool. Every variant aborts the invocation and
/// rolls back all of its storage writes and token movements.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    /// `init` called while claims are outstanding
    AlreadyInitialized = 1,
    /// Deposit into a pool that has not been initialized
    NotInitialized = 2,
    /// Deposit with a zero base or token amount
    DepositAmountZero = 3,
    /// Withdrawal of zero claims
    WithdrawAmountZero = 4,
    /// Claim balance lower than the amount withdrawn or transferred
    InsufficientClaim = 5,
    /// A token ledger rejected a pull or a payout
    TransferFailed = 6,
    /// Required token amount above the caller's maximum
    SlippageExceeded = 7,
    /// Base asset and token are the same ledger
    IdenticalAssets = 8,
    /// Amount does not fit the target integer type
    ArithmeticOverflow = 9,
    /// Negative amount on the claim-token interface
    NegativeAmount = 10,
    /// Claim allowance lower than the amount spent
    InsufficientAllowance = 11,
    /// Non-zero allowance with an expiration in the past
    InvalidExpiration = 12,
}

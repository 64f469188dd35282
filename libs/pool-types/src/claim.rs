use soroban_sdk::{contracttype, Address};

/// Owner/spender pair identifying a claim allowance
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

/// Claim allowance granted by `from` to `spender`
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClaimAllowance {
    /// Remaining spendable claim amount
    pub amount: i128,
    /// Last ledger sequence at which the allowance is valid
    pub expiration_ledger: u32,
}

impl ClaimAllowance {
    /// Spendable amount at `ledger`; zero once expired
    pub fn available_at(&self, ledger: u32) -> i128 {
        if self.expiration_ledger < ledger {
            0
        } else {
            self.amount
        }
    }
}

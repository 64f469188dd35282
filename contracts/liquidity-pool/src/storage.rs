use pool_types::{AllowanceKey, ClaimAllowance, PoolConfig, PoolState};
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// - Config and State live in Instance storage: read by every operation and
//   archived together with the contract instance
// - Claim balances are one Persistent entry per holder; a zero balance
//   removes the entry
// - Claim allowances are Temporary entries whose TTL is tied to the
//   allowance's expiration ledger
// ============================================================================

/// Storage keys for the pool contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool configuration (Instance storage)
    Config,
    /// Reserves and claim supply (Instance storage)
    State,
    /// Claim balance: holder -> u128 (Persistent storage)
    Claim(Address),
    /// Claim allowance: (from, spender) -> ClaimAllowance (Temporary storage)
    ClaimAllowance(AllowanceKey),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn get_config(env: &Env) -> PoolConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Pool not constructed")
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === State ===

pub fn get_state(env: &Env) -> PoolState {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_default()
}

pub fn set_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Claim balances ===

pub fn get_claim_balance(env: &Env, holder: &Address) -> u128 {
    let key = DataKey::Claim(holder.clone());
    match env.storage().persistent().get::<DataKey, u128>(&key) {
        Some(balance) => {
            extend_persistent_ttl(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn set_claim_balance(env: &Env, holder: &Address, balance: u128) {
    let key = DataKey::Claim(holder.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        extend_persistent_ttl(env, &key);
    }
}

// === Claim allowances ===

pub fn get_claim_allowance(env: &Env, from: &Address, spender: &Address) -> ClaimAllowance {
    let key = DataKey::ClaimAllowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    env.storage().temporary().get(&key).unwrap_or_default()
}

pub fn set_claim_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    allowance: &ClaimAllowance,
) {
    let key = DataKey::ClaimAllowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    if allowance.amount == 0 {
        env.storage().temporary().remove(&key);
        return;
    }

    env.storage().temporary().set(&key, allowance);

    // Keep the entry alive until it expires
    let current = env.ledger().sequence();
    if allowance.expiration_ledger > current {
        let live_for = allowance.expiration_ledger - current;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification rules for the single-pair liquidity pool.
//
// STRUCTURE:
//
// - model.rs       : State snapshots for before/after comparisons
// - math_specs.rs  : Proportional share math (quotes, rounding direction)
// - pool_specs.rs  : init / add / remove guards and supply invariants
// - claim_specs.rs : Claim ledger conservation
//
// Rules only drive paths that return before any token call-out, so no
// token ledger needs to be modelled.
//
// USAGE:
// - Unit tests: cargo test -p liquidity-pool
// - Certora build: cargo build --features certora -p liquidity-pool
// - Verification: certoraSorobanProver liquidity_pool.conf
//
// ============================================================================

pub mod model;

pub mod claim_specs;
pub mod math_specs;
pub mod pool_specs;

// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification rules for the reflective fee token.
//
// STRUCTURE:
//
// - fee_specs.rs    : Fee split and fee exclusion
// - reward_specs.rs : Rate conversions and reward-mode round trips
// - admin_specs.rs  : Owner guarding and configuration bounds
//
// USAGE:
// - Unit tests: cargo test -p reflect-token
// - Certora build: cargo build --features certora -p reflect-token
// - Verification: certoraSorobanProver reflect_token.conf
//
// ============================================================================

pub mod admin_specs;
pub mod fee_specs;
pub mod reward_specs;

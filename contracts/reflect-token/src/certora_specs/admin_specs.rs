// ============================================================================
// ADMINISTRATION SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Only the owner can change configuration
// 2. Fee setters never accept a split that could go negative
// 3. The max transaction cap never exceeds the supply
//
// ============================================================================

use cvlr::asserts::{cvlr_assert, cvlr_assume};
use cvlr_soroban_derive::rule;
use reflect_math::{fee_percents_valid, max_tx_for_percent};
use reflect_types::{PERCENT_DENOMINATOR, TOTAL_SUPPLY};
use soroban_sdk::{Address, Env};

use crate::{ReflectToken, TokenError};

/// RULE: a caller other than the owner cannot change the tax fee
#[rule]
pub fn non_owner_cannot_set_tax_fee(
    env: Env,
    owner: Address,
    pool: Address,
    paired: Address,
    caller: Address,
    percent: u32,
) {
    cvlr_assume!(owner != caller);

    let _ = ReflectToken::initialize(env.clone(), owner, pool, paired);
    let fee_before = ReflectToken::tax_fee(env.clone());

    let result = ReflectToken::set_tax_fee_percent(env.clone(), caller, percent);

    cvlr_assert!(result == Err(TokenError::Unauthorized));
    cvlr_assert!(ReflectToken::tax_fee(env) == fee_before);
}

/// RULE: after renouncing, even the former owner is rejected
#[rule]
pub fn renounced_owner_is_locked_out(
    env: Env,
    owner: Address,
    pool: Address,
    paired: Address,
    enabled: bool,
) {
    let _ = ReflectToken::initialize(env.clone(), owner.clone(), pool, paired);
    let _ = ReflectToken::renounce_ownership(env.clone(), owner.clone());

    let result = ReflectToken::set_swap_and_liquify_enabled(env, owner, enabled);

    cvlr_assert!(result == Err(TokenError::Unauthorized));
}

/// RULE: accepted fee percents leave a non-negative net amount
#[rule]
pub fn accepted_fees_leave_net_amount(tax_fee: u32, liquidity_fee: u32) {
    cvlr_assume!(fee_percents_valid(tax_fee, liquidity_fee));

    cvlr_assert!(tax_fee + liquidity_fee <= PERCENT_DENOMINATOR);
}

/// RULE: the max transaction cap is within the supply
#[rule]
pub fn max_tx_bounded_by_supply(percent: u32) {
    cvlr_assume!(percent <= PERCENT_DENOMINATOR);

    let cap = max_tx_for_percent(TOTAL_SUPPLY, percent);

    cvlr_assert!(cap >= 0 && cap <= TOTAL_SUPPLY);
}

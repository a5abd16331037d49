// ============================================================================
// FEE SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Net amount plus both fees equals the transferred amount
// 2. Fee-excluded transfers carry no fees
// 3. No fee exceeds the amount it is taken from
//
// ============================================================================

use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};
use cvlr_soroban_derive::rule;
use reflect_math::{calculate_fees, fee_percents_valid};
use reflect_types::TOTAL_SUPPLY;

use crate::invariants::{fee_split_conserves, fees_zero_when_excluded};

/// RULE: the fee split always adds back up to the amount
#[rule]
pub fn fee_split_conserves_amount(amount: i128, tax_fee: u32, liquidity_fee: u32) {
    cvlr_assume!(amount > 0 && amount <= TOTAL_SUPPLY);
    cvlr_assume!(fee_percents_valid(tax_fee, liquidity_fee));

    let fees = calculate_fees(amount, tax_fee, liquidity_fee, true);

    cvlr_assert!(fee_split_conserves(&fees, amount));
}

/// RULE: a fee-excluded party means the recipient gets the full amount
#[rule]
pub fn excluded_transfer_is_fee_free(amount: i128, tax_fee: u32, liquidity_fee: u32) {
    cvlr_assume!(amount > 0 && amount <= TOTAL_SUPPLY);
    cvlr_assume!(fee_percents_valid(tax_fee, liquidity_fee));

    let fees = calculate_fees(amount, tax_fee, liquidity_fee, false);

    cvlr_assert!(fees_zero_when_excluded(&fees, false));
    cvlr_assert!(fees.transfer_amount == amount);
}

/// RULE: each fee is bounded by the amount
#[rule]
pub fn fees_bounded_by_amount(amount: i128, tax_fee: u32, liquidity_fee: u32) {
    cvlr_assume!(amount > 0 && amount <= TOTAL_SUPPLY);
    cvlr_assume!(fee_percents_valid(tax_fee, liquidity_fee));

    let fees = calculate_fees(amount, tax_fee, liquidity_fee, true);

    cvlr_assert!(fees.reflection_fee >= 0 && fees.reflection_fee <= amount);
    cvlr_assert!(fees.liquidity_fee >= 0 && fees.liquidity_fee <= amount);
}

/// SANITY: a taxed transfer with nonzero fees is reachable
#[rule]
pub fn fee_split_sanity(amount: i128, tax_fee: u32, liquidity_fee: u32) {
    cvlr_assume!(amount > 0 && amount <= TOTAL_SUPPLY);
    cvlr_assume!(fee_percents_valid(tax_fee, liquidity_fee));

    let fees = calculate_fees(amount, tax_fee, liquidity_fee, true);

    cvlr_satisfy!(fees.reflection_fee > 0 && fees.liquidity_fee > 0);
}

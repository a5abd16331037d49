// ============================================================================
// REWARD-MODE SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Excluding then including an account at one rate preserves its balance
// 2. Converting to reflection units and back is exact
// 3. The rate derived from valid supply sums is positive
//
// ============================================================================

use cvlr::asserts::{cvlr_assert, cvlr_assume};
use cvlr_soroban_derive::rule;
use reflect_math::{current_rate, from_reflection, genesis_rate, to_reflection};
use reflect_types::{AccountBalance, LedgerState, TOTAL_SUPPLY};

use crate::invariants::{mode_round_trip_exact, rate_positive, supply_sums_valid};

/// RULE: exclude/include round trip keeps the effective balance
#[rule]
pub fn reward_round_trip_preserves_balance(reflection: i128, rate: i128) {
    cvlr_assume!(rate > 0 && rate <= genesis_rate(TOTAL_SUPPLY));
    cvlr_assume!(reflection >= 0 && reflection <= rate * TOTAL_SUPPLY);

    cvlr_assert!(mode_round_trip_exact(&AccountBalance::Included(reflection), rate));
}

/// RULE: raw -> reflection -> raw is exact
#[rule]
pub fn reflection_conversion_exact(amount: i128, rate: i128) {
    cvlr_assume!(rate > 0 && rate <= genesis_rate(TOTAL_SUPPLY));
    cvlr_assume!(amount >= 0 && amount <= TOTAL_SUPPLY);

    cvlr_assert!(from_reflection(to_reflection(amount, rate), rate) == amount);
}

/// RULE: valid supply sums always yield a positive rate
#[rule]
pub fn rate_stays_positive(reflection_supply: i128, excluded_supply: i128, total_fees: i128) {
    let genesis = genesis_rate(TOTAL_SUPPLY);
    cvlr_assume!(reflection_supply >= 0 && reflection_supply <= genesis * TOTAL_SUPPLY);
    cvlr_assume!(excluded_supply >= 0 && excluded_supply <= TOTAL_SUPPLY);

    let mut ledger = LedgerState {
        total_supply: TOTAL_SUPPLY,
        reflection_supply,
        excluded_supply,
        rate: genesis,
        total_fees,
    };
    cvlr_assume!(supply_sums_valid(&ledger));
    ledger.rate = current_rate(&ledger);

    cvlr_assert!(rate_positive(&ledger));
}

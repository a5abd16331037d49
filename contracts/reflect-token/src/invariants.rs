// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Checking functions for the properties the reflection ledger must keep.
// The transfer pipeline debug-asserts the cheap ones, the Certora rules
// assert them over arbitrary inputs, and the contract tests check the
// expensive ones across whole scenarios.
//
// INVARIANT CATEGORIES:
//
// 1. FEE INVARIANTS
//    - The fee split adds back up to the transferred amount
//    - Fee-excluded transfers carry no fees
//
// 2. RATE INVARIANTS
//    - The exchange rate stays positive
//    - Supply sums never go negative
//
// 3. CONSERVATION INVARIANTS
//    - Effective balances add up to the supply, up to rounding
//    - Mode conversion preserves the effective balance
//
// ============================================================================

use reflect_math::{effective_balance, to_excluded, to_included};
use reflect_types::{AccountBalance, FeeBreakdown, LedgerState};

// ============================================================================
// FEE INVARIANTS
// ============================================================================

/// Invariant: net amount plus both fees equals the transferred amount
///
/// Property:
///   transfer_amount + reflection_fee + liquidity_fee == amount
///   transfer_amount >= 0
pub fn fee_split_conserves(fees: &FeeBreakdown, amount: i128) -> bool {
    fees.total() == amount && fees.transfer_amount >= 0
}

/// Invariant: a fee-free transfer moves the full amount
///
/// Property:
///   !take_fee => reflection_fee == 0 && liquidity_fee == 0
pub fn fees_zero_when_excluded(fees: &FeeBreakdown, take_fee: bool) -> bool {
    take_fee || (fees.reflection_fee == 0 && fees.liquidity_fee == 0)
}

// ============================================================================
// RATE INVARIANTS
// ============================================================================

/// Invariant: the cached rate is positive
pub fn rate_positive(ledger: &LedgerState) -> bool {
    ledger.rate > 0
}

/// Invariant: both supply sums stay within bounds
///
/// Property:
///   reflection_supply >= 0
///   0 <= excluded_supply <= total_supply
pub fn supply_sums_valid(ledger: &LedgerState) -> bool {
    ledger.reflection_supply >= 0
        && ledger.excluded_supply >= 0
        && ledger.excluded_supply <= ledger.total_supply
}

// ============================================================================
// CONSERVATION INVARIANTS
// ============================================================================

/// Largest gap integer rounding can open between the sum of effective
/// balances and the total supply.
///
/// Every reward-tracked balance is floored, losing under one unit each. The
/// cached rate is floored too, so the reflection supply converts to up to
/// `included_supply / rate + 1` units more than the included supply.
pub fn rounding_tolerance(ledger: &LedgerState, included_holders: i128) -> i128 {
    included_holders + ledger.included_supply() / ledger.rate + 1
}

/// Invariant: the balances add up to the supply, up to rounding
///
/// Property:
///   |total_supply - sum(balances)| <= tolerance
pub fn supply_conserved(total_supply: i128, sum_of_balances: i128, tolerance: i128) -> bool {
    (total_supply - sum_of_balances).abs() <= tolerance
}

/// Invariant: switching reward modes and back keeps the effective balance
///
/// Property:
///   balance(include(exclude(b))) == balance(b)   at a fixed rate
pub fn mode_round_trip_exact(balance: &AccountBalance, rate: i128) -> bool {
    let before = effective_balance(balance, rate);
    let excluded = to_excluded(balance, rate);
    let included = to_included(&excluded, rate);

    effective_balance(&excluded, rate) == before && effective_balance(&included, rate) == before
}

use reflect_types::{FeeBreakdown, PERCENT_DENOMINATOR};
use soroban_fixed_point_math::FixedPoint;

/// `amount * percent / 100`, rounded down
pub fn percent_of(amount: i128, percent: u32) -> i128 {
    amount
        .fixed_mul_floor(percent as i128, PERCENT_DENOMINATOR as i128)
        .expect("Fee overflow")
}

/// Split a transfer amount into recipient amount, reflection fee and liquidity fee.
///
/// When `take_fee` is false (either party is fee-excluded) the whole amount
/// goes to the recipient.
pub fn calculate_fees(amount: i128, tax_fee: u32, liquidity_fee: u32, take_fee: bool) -> FeeBreakdown {
    if !take_fee {
        return FeeBreakdown::fee_free(amount);
    }

    let reflection_fee = percent_of(amount, tax_fee);
    let liquidity_fee = percent_of(amount, liquidity_fee);

    FeeBreakdown {
        transfer_amount: amount - reflection_fee - liquidity_fee,
        reflection_fee,
        liquidity_fee,
    }
}

/// Both fees within [0, 100] and together never more than the whole amount
pub fn fee_percents_valid(tax_fee: u32, liquidity_fee: u32) -> bool {
    tax_fee <= PERCENT_DENOMINATOR
        && liquidity_fee <= PERCENT_DENOMINATOR
        && tax_fee + liquidity_fee <= PERCENT_DENOMINATOR
}

/// Max transaction cap as a percent of the total supply
pub fn max_tx_for_percent(total_supply: i128, percent: u32) -> i128 {
    percent_of(total_supply, percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflect_types::{ONE_TOKEN, TOTAL_SUPPLY};

    // === percent_of tests ===

    #[test]
    fn test_percent_of_basic() {
        assert_eq!(percent_of(10_000, 3), 300);
        assert_eq!(percent_of(10_000, 0), 0);
        assert_eq!(percent_of(10_000, 100), 10_000);
    }

    #[test]
    fn test_percent_of_rounds_down() {
        // 3% of 100 = 3, 3% of 99 = 2.97
        assert_eq!(percent_of(100, 3), 3);
        assert_eq!(percent_of(99, 3), 2);
        assert_eq!(percent_of(1, 5), 0);
    }

    #[test]
    fn test_percent_of_full_supply() {
        assert_eq!(percent_of(TOTAL_SUPPLY, 50), 500_000 * ONE_TOKEN);
    }

    // === calculate_fees tests ===

    #[test]
    fn test_fees_sum_to_amount() {
        for amount in [1i128, 7, 100, 999, 5_000 * ONE_TOKEN, TOTAL_SUPPLY] {
            let fees = calculate_fees(amount, 3, 3, true);
            assert_eq!(fees.total(), amount);
            assert!(fees.transfer_amount >= 0);
        }
    }

    #[test]
    fn test_fees_breakdown_values() {
        let fees = calculate_fees(5_000 * ONE_TOKEN, 5, 5, true);
        assert_eq!(fees.reflection_fee, 250 * ONE_TOKEN);
        assert_eq!(fees.liquidity_fee, 250 * ONE_TOKEN);
        assert_eq!(fees.transfer_amount, 4_500 * ONE_TOKEN);
    }

    #[test]
    fn test_fee_excluded_transfer_pays_nothing() {
        let fees = calculate_fees(100_000, 5, 5, false);
        assert_eq!(fees.transfer_amount, 100_000);
        assert_eq!(fees.reflection_fee, 0);
        assert_eq!(fees.liquidity_fee, 0);
    }

    #[test]
    fn test_small_amount_fees_round_to_zero() {
        // 100 raw units at 5%/5% still pays 5 + 5
        let fees = calculate_fees(100, 5, 5, true);
        assert_eq!(fees.transfer_amount, 90);

        // 10 raw units at 5% rounds each fee to 0
        let fees = calculate_fees(10, 5, 5, true);
        assert_eq!(fees, FeeBreakdown::fee_free(10));
    }

    // === validation tests ===

    #[test]
    fn test_fee_percents_valid() {
        assert!(fee_percents_valid(0, 0));
        assert!(fee_percents_valid(5, 5));
        assert!(fee_percents_valid(100, 0));
        assert!(fee_percents_valid(40, 60));
        assert!(!fee_percents_valid(101, 0));
        assert!(!fee_percents_valid(0, 101));
        assert!(!fee_percents_valid(60, 41));
    }

    #[test]
    fn test_max_tx_one_percent() {
        assert_eq!(max_tx_for_percent(TOTAL_SUPPLY, 1), 10_000 * ONE_TOKEN);
        assert_eq!(max_tx_for_percent(TOTAL_SUPPLY, 100), TOTAL_SUPPLY);
        assert_eq!(max_tx_for_percent(TOTAL_SUPPLY, 0), 0);
    }
}

use reflect_types::{
    genesis_reflection_supply, AccountBalance, FeeBreakdown, LedgerState, ReflectionValues,
};

/// Reflection units per raw unit for the reflection-tracked population.
///
/// Falls back to the genesis rate when that population holds nothing, or so
/// little that the integer rate would collapse to zero.
pub fn current_rate(ledger: &LedgerState) -> i128 {
    let included_supply = ledger.included_supply();
    if included_supply <= 0 || ledger.reflection_supply < included_supply {
        return genesis_rate(ledger.total_supply);
    }
    ledger.reflection_supply / included_supply
}

/// Rate at genesis, before any fee has been reflected
pub fn genesis_rate(total_supply: i128) -> i128 {
    genesis_reflection_supply(total_supply) / total_supply
}

/// Raw amount -> reflection units
pub fn to_reflection(amount: i128, rate: i128) -> i128 {
    amount.checked_mul(rate).expect("Reflection overflow")
}

/// Reflection units -> raw amount, rounded down
pub fn from_reflection(reflection: i128, rate: i128) -> i128 {
    if rate <= 0 {
        panic!("Invalid rate");
    }
    reflection / rate
}

/// Convert a fee breakdown into reflection units at `rate`
pub fn reflection_values(fees: &FeeBreakdown, rate: i128) -> ReflectionValues {
    let transfer_amount = to_reflection(fees.transfer_amount, rate);
    let reflection_fee = to_reflection(fees.reflection_fee, rate);
    let liquidity_fee = to_reflection(fees.liquidity_fee, rate);

    ReflectionValues {
        amount: transfer_amount + reflection_fee + liquidity_fee,
        transfer_amount,
        reflection_fee,
        liquidity_fee,
    }
}

/// Effective raw balance of an account, whichever mode it is in
pub fn effective_balance(balance: &AccountBalance, rate: i128) -> i128 {
    match balance {
        AccountBalance::Included(reflection) => from_reflection(*reflection, rate),
        AccountBalance::Excluded(amount) => *amount,
    }
}

/// Switch an account to raw tracking, keeping its effective balance
pub fn to_excluded(balance: &AccountBalance, rate: i128) -> AccountBalance {
    AccountBalance::Excluded(effective_balance(balance, rate))
}

/// Switch an account to reflection tracking, keeping its effective balance
pub fn to_included(balance: &AccountBalance, rate: i128) -> AccountBalance {
    match balance {
        AccountBalance::Included(reflection) => AccountBalance::Included(*reflection),
        AccountBalance::Excluded(amount) => AccountBalance::Included(to_reflection(*amount, rate)),
    }
}

use crate::error::TokenError;
use crate::invariants;
use crate::ledger::{credit, debit, reflect_fee, refresh_rate};
use crate::liquify::maybe_swap_and_liquify;
use crate::storage::{get_account, get_config, get_ledger, set_ledger, zero_address};
use reflect_math::{calculate_fees, effective_balance, reflection_values};
use reflect_types::TransferReceipt;
use soroban_sdk::{Address, Env, Symbol};

/// Execute a transfer.
///
/// Validate -> compute fees -> credit liquidity fee to the contract ->
/// reflect the tax fee -> credit the recipient -> maybe swap-and-liquify ->
/// emit. Validation finishes before the first write, and every amount is
/// converted at the rate read when the transfer starts.
pub fn execute_transfer(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<TransferReceipt, TokenError> {
    if amount <= 0 {
        return Err(TokenError::InvalidParameter);
    }

    let zero = zero_address(env);
    if *from == zero || *to == zero {
        return Err(TokenError::ZeroAddress);
    }

    let config = get_config(env);
    let mut ledger = get_ledger(env);

    if config.owner.as_ref() != Some(from) && amount > config.max_tx_amount {
        return Err(TokenError::ExceedsMaxTx);
    }

    let sender = get_account(env, from);
    if effective_balance(&sender.balance, ledger.rate) < amount {
        return Err(TokenError::InsufficientBalance);
    }

    // Fees apply unless either side is fee-excluded
    let recipient = get_account(env, to);
    let take_fee = !(sender.excluded_from_fee || recipient.excluded_from_fee);
    let fees = calculate_fees(amount, config.tax_fee, config.liquidity_fee, take_fee);
    let values = reflection_values(&fees, ledger.rate);
    debug_assert!(invariants::fee_split_conserves(&fees, amount));
    debug_assert!(invariants::fees_zero_when_excluded(&fees, take_fee));

    debit(env, &mut ledger, from, amount, values.amount);

    if fees.liquidity_fee > 0 {
        let contract = env.current_contract_address();
        credit(env, &mut ledger, &contract, fees.liquidity_fee, values.liquidity_fee);
    }

    if fees.reflection_fee > 0 {
        reflect_fee(&mut ledger, fees.reflection_fee);
    }

    credit(env, &mut ledger, to, fees.transfer_amount, values.transfer_amount);
    refresh_rate(&mut ledger);
    debug_assert!(invariants::rate_positive(&ledger) && invariants::supply_sums_valid(&ledger));
    set_ledger(env, &ledger);

    maybe_swap_and_liquify(env, from);

    env.events().publish(
        (Symbol::new(env, "transfer"), from.clone(), to.clone()),
        fees.transfer_amount,
    );

    Ok(TransferReceipt {
        from: from.clone(),
        to: to.clone(),
        value: fees.transfer_amount,
    })
}

use crate::error::TokenError;
use crate::storage::{get_account, get_ledger, set_account, set_ledger};
use reflect_math::{current_rate, effective_balance, from_reflection, to_excluded, to_included, to_reflection};
use reflect_types::{AccountBalance, LedgerState};
use soroban_sdk::{log, Address, Env, Symbol};

// ============================================================================
// BALANCE ENGINE
// ============================================================================
//
// `LedgerState::reflection_supply` is always the exact sum of the reflection
// balances of included accounts, and `excluded_supply` the exact sum of raw
// balances of excluded accounts. Every helper below keeps both sums in step
// with the account it touches. The exchange rate is derived from them and
// cached in `LedgerState::rate`.
//
// ============================================================================

/// Effective raw balance of `id` at the cached rate
pub fn balance_of(env: &Env, id: &Address) -> i128 {
    let ledger = get_ledger(env);
    effective_balance(&get_account(env, id).balance, ledger.rate)
}

/// Recompute the cached rate after the supply sums changed
pub fn refresh_rate(ledger: &mut LedgerState) {
    ledger.rate = current_rate(ledger);
}

/// Remove `amount` (raw) / `reflection` (reflection units) from an account.
///
/// Callers check the effective balance first; taking more than the stored
/// balance panics rather than leaving the account negative.
pub fn debit(env: &Env, ledger: &mut LedgerState, id: &Address, amount: i128, reflection: i128) {
    let mut account = get_account(env, id);
    account.balance = match account.balance {
        AccountBalance::Included(balance) => {
            if reflection > balance {
                panic!("Insufficient balance");
            }
            ledger.reflection_supply -= reflection;
            AccountBalance::Included(balance - reflection)
        }
        AccountBalance::Excluded(balance) => {
            if amount > balance {
                panic!("Insufficient balance");
            }
            ledger.excluded_supply -= amount;
            AccountBalance::Excluded(balance - amount)
        }
    };
    set_account(env, id, &account);
}

/// Add `amount` (raw) / `reflection` (reflection units) to an account
pub fn credit(env: &Env, ledger: &mut LedgerState, id: &Address, amount: i128, reflection: i128) {
    let mut account = get_account(env, id);
    account.balance = match account.balance {
        AccountBalance::Included(balance) => {
            ledger.reflection_supply += reflection;
            AccountBalance::Included(balance + reflection)
        }
        AccountBalance::Excluded(balance) => {
            ledger.excluded_supply += amount;
            AccountBalance::Excluded(balance + amount)
        }
    };
    set_account(env, id, &account);
}

/// Record a reflected fee.
///
/// The fee was debited from the sender but credited to nobody, so the
/// reflection supply shrank relative to the raw supply of the included
/// population. Refreshing the rate is what hands it out to every holder.
pub fn reflect_fee(ledger: &mut LedgerState, fee: i128) {
    ledger.total_fees += fee;
    refresh_rate(ledger);
}

/// Move tokens between two accounts without fees or limits, converting at
/// `rate`.
///
/// Used for the contract's own movements during swap-and-liquify. A balance
/// read at one rate must be moved at that same rate: each move into or out
/// of an excluded account refreshes the cached rate, and converting the rest
/// of the balance at the new rate can take more reflection than is left.
pub fn move_fee_free(env: &Env, from: &Address, to: &Address, amount: i128, rate: i128) {
    let mut ledger = get_ledger(env);
    let reflection = to_reflection(amount, rate);

    debit(env, &mut ledger, from, amount, reflection);
    credit(env, &mut ledger, to, amount, reflection);
    refresh_rate(&mut ledger);
    set_ledger(env, &ledger);

    env.events().publish(
        (Symbol::new(env, "transfer"), from.clone(), to.clone()),
        amount,
    );
}

/// Give up `amount` of `from`'s balance as a reflection to all holders
pub fn deliver(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    if amount <= 0 {
        return Err(TokenError::InvalidParameter);
    }

    let mut ledger = get_ledger(env);
    let mut account = get_account(env, from);

    let balance = match account.balance {
        AccountBalance::Included(balance) => balance,
        AccountBalance::Excluded(_) => return Err(TokenError::ExcludedAccountCannotDeliver),
    };
    if from_reflection(balance, ledger.rate) < amount {
        return Err(TokenError::InsufficientBalance);
    }

    let reflection = to_reflection(amount, ledger.rate);
    account.balance = AccountBalance::Included(balance - reflection);
    set_account(env, from, &account);

    ledger.reflection_supply -= reflection;
    reflect_fee(&mut ledger, amount);
    set_ledger(env, &ledger);

    Ok(())
}

/// Switch `id` to raw tracking at the current rate
pub fn exclude_from_reward(env: &Env, id: &Address) -> Result<(), TokenError> {
    let mut ledger = get_ledger(env);
    let mut account = get_account(env, id);

    let reflection = match account.balance {
        AccountBalance::Included(reflection) => reflection,
        AccountBalance::Excluded(_) => return Err(TokenError::AlreadyExcluded),
    };
    let excluded = to_excluded(&account.balance, ledger.rate);
    let amount = effective_balance(&excluded, ledger.rate);

    ledger.reflection_supply -= reflection;
    ledger.excluded_supply += amount;
    refresh_rate(&mut ledger);

    account.balance = excluded;
    set_account(env, id, &account);
    set_ledger(env, &ledger);

    log!(env, "excluded from reward", id.clone(), amount);
    Ok(())
}

/// Switch `id` back to reflection tracking at the current rate
pub fn include_in_reward(env: &Env, id: &Address) -> Result<(), TokenError> {
    let mut ledger = get_ledger(env);
    let mut account = get_account(env, id);

    let amount = match account.balance {
        AccountBalance::Excluded(amount) => amount,
        AccountBalance::Included(_) => return Err(TokenError::NotExcluded),
    };
    let included = to_included(&account.balance, ledger.rate);
    let reflection = to_reflection(amount, ledger.rate);

    ledger.excluded_supply -= amount;
    ledger.reflection_supply += reflection;
    refresh_rate(&mut ledger);

    account.balance = included;
    set_account(env, id, &account);
    set_ledger(env, &ledger);

    log!(env, "included in reward", id.clone(), amount);
    Ok(())
}

use crate::error::TokenError;
use crate::storage::{get_allowance, set_allowance, AllowanceValue};
use soroban_sdk::{Address, Env, Symbol};

/// Let `spender` move up to `amount` of `from`'s tokens until `expiration_ledger`
pub fn approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidParameter);
    }
    // A live allowance must not already be expired
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(TokenError::InvalidParameter);
    }

    set_allowance(
        env,
        from,
        spender,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );

    env.events().publish(
        (Symbol::new(env, "approve"), from.clone(), spender.clone()),
        (amount, expiration_ledger),
    );
    Ok(())
}

pub fn allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    get_allowance(env, from, spender).amount
}

/// Take `amount` out of the allowance `from` gave `spender`
pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    let mut allowance = get_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(TokenError::InsufficientAllowance);
    }

    if amount > 0 {
        allowance.amount -= amount;
        set_allowance(env, from, spender, &allowance);
    }
    Ok(())
}

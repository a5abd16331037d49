use crate::error::TokenError;
use crate::ledger;
use crate::storage::{get_account, get_config, get_ledger, set_account, set_config, zero_address};
use reflect_math::{fee_percents_valid, max_tx_for_percent};
use reflect_types::{TokenConfig, PERCENT_DENOMINATOR};
use soroban_sdk::{log, Address, Env, Symbol};

/// Authorize `caller` and check it is the current owner
pub fn require_owner(env: &Env, caller: &Address) -> Result<TokenConfig, TokenError> {
    caller.require_auth();

    let config = get_config(env);
    if config.owner.as_ref() != Some(caller) {
        return Err(TokenError::Unauthorized);
    }
    Ok(config)
}

// === Fees and limits ===

pub fn set_tax_fee_percent(env: &Env, caller: &Address, percent: u32) -> Result<(), TokenError> {
    let mut config = require_owner(env, caller)?;
    if !fee_percents_valid(percent, config.liquidity_fee) {
        return Err(TokenError::InvalidParameter);
    }

    config.tax_fee = percent;
    set_config(env, &config);
    Ok(())
}

pub fn set_liquidity_fee_percent(
    env: &Env,
    caller: &Address,
    percent: u32,
) -> Result<(), TokenError> {
    let mut config = require_owner(env, caller)?;
    if !fee_percents_valid(config.tax_fee, percent) {
        return Err(TokenError::InvalidParameter);
    }

    config.liquidity_fee = percent;
    set_config(env, &config);
    Ok(())
}

/// Cap non-owner transfers at `percent` of the total supply
pub fn set_max_tx_percent(env: &Env, caller: &Address, percent: u32) -> Result<(), TokenError> {
    let mut config = require_owner(env, caller)?;
    if percent > PERCENT_DENOMINATOR {
        return Err(TokenError::InvalidParameter);
    }

    let total_supply = get_ledger(env).total_supply;
    config.max_tx_amount = max_tx_for_percent(total_supply, percent);
    set_config(env, &config);
    Ok(())
}

pub fn set_swap_and_liquify_enabled(
    env: &Env,
    caller: &Address,
    enabled: bool,
) -> Result<(), TokenError> {
    let mut config = require_owner(env, caller)?;
    config.swap_and_liquify_enabled = enabled;
    set_config(env, &config);

    env.events().publish(
        (Symbol::new(env, "swap_and_liquify_enabled_updated"),),
        enabled,
    );
    Ok(())
}

pub fn set_min_tokens_before_swap(
    env: &Env,
    caller: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    let mut config = require_owner(env, caller)?;
    if amount <= 0 {
        return Err(TokenError::InvalidParameter);
    }

    config.min_tokens_before_swap = amount;
    set_config(env, &config);

    env.events().publish(
        (Symbol::new(env, "min_tokens_before_swap_updated"),),
        amount,
    );
    Ok(())
}

// === Exclusions ===

/// Set whether transfers touching `id` skip fees
pub fn set_excluded_from_fee(
    env: &Env,
    caller: &Address,
    id: &Address,
    excluded: bool,
) -> Result<(), TokenError> {
    require_owner(env, caller)?;

    let mut account = get_account(env, id);
    account.excluded_from_fee = excluded;
    set_account(env, id, &account);
    Ok(())
}

pub fn exclude_from_reward(env: &Env, caller: &Address, id: &Address) -> Result<(), TokenError> {
    require_owner(env, caller)?;
    ledger::exclude_from_reward(env, id)
}

pub fn include_in_reward(env: &Env, caller: &Address, id: &Address) -> Result<(), TokenError> {
    require_owner(env, caller)?;
    ledger::include_in_reward(env, id)
}

// === Ownership ===

pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), TokenError> {
    let mut config = require_owner(env, caller)?;
    if *new_owner == zero_address(env) {
        return Err(TokenError::ZeroAddress);
    }

    config.owner = Some(new_owner.clone());
    set_config(env, &config);

    env.events().publish(
        (Symbol::new(env, "ownership_transferred"), caller.clone()),
        Some(new_owner.clone()),
    );
    log!(env, "ownership transferred", caller.clone(), new_owner.clone());
    Ok(())
}

/// Give up ownership for good; every owner-only call fails afterwards
pub fn renounce_ownership(env: &Env, caller: &Address) -> Result<(), TokenError> {
    let mut config = require_owner(env, caller)?;
    config.owner = None;
    set_config(env, &config);

    env.events().publish(
        (Symbol::new(env, "ownership_transferred"), caller.clone()),
        None::<Address>,
    );
    log!(env, "ownership renounced", caller.clone());
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::testutils::setup;
    use crate::TokenError;
    use reflect_types::{ONE_TOKEN, ZERO_ACCOUNT_STRKEY};
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Address, Env};

    // === Setter tests ===

    #[test]
    fn test_set_fee_percents() {
        let env = Env::default();
        let t = setup(&env);

        t.token.set_tax_fee_percent(&t.owner, &2);
        t.token.set_liquidity_fee_percent(&t.owner, &7);

        assert_eq!(t.token.tax_fee(), 2);
        assert_eq!(t.token.liquidity_fee(), 7);
    }

    #[test]
    fn test_fee_percent_out_of_range_fails() {
        let env = Env::default();
        let t = setup(&env);

        assert_eq!(
            t.token.try_set_tax_fee_percent(&t.owner, &101),
            Err(Ok(TokenError::InvalidParameter))
        );
        // 96 + the default 5% liquidity fee would exceed the amount
        assert_eq!(
            t.token.try_set_tax_fee_percent(&t.owner, &96),
            Err(Ok(TokenError::InvalidParameter))
        );
        t.token.set_tax_fee_percent(&t.owner, &95);
        assert_eq!(
            t.token.try_set_liquidity_fee_percent(&t.owner, &6),
            Err(Ok(TokenError::InvalidParameter))
        );
    }

    #[test]
    fn test_set_max_tx_percent() {
        let env = Env::default();
        let t = setup(&env);

        t.token.set_max_tx_percent(&t.owner, &1);
        assert_eq!(t.token.max_tx_amount(), 10_000 * ONE_TOKEN);

        assert_eq!(
            t.token.try_set_max_tx_percent(&t.owner, &101),
            Err(Ok(TokenError::InvalidParameter))
        );
    }

    #[test]
    fn test_set_liquify_threshold() {
        let env = Env::default();
        let t = setup(&env);

        t.token.set_min_tokens_before_swap(&t.owner, &(42 * ONE_TOKEN));
        assert_eq!(t.token.min_tokens_before_swap(), 42 * ONE_TOKEN);

        assert_eq!(
            t.token.try_set_min_tokens_before_swap(&t.owner, &0),
            Err(Ok(TokenError::InvalidParameter))
        );
    }

    #[test]
    fn test_toggle_swap_and_liquify() {
        let env = Env::default();
        let t = setup(&env);

        assert!(t.token.swap_and_liquify_enabled());
        t.token.set_swap_and_liquify_enabled(&t.owner, &false);
        assert!(!t.token.swap_and_liquify_enabled());
        t.token.set_swap_and_liquify_enabled(&t.owner, &true);
        assert!(t.token.swap_and_liquify_enabled());
    }

    // === Exclusion tests ===

    #[test]
    fn test_fee_exclusion_toggles() {
        let env = Env::default();
        let t = setup(&env);
        let holder = Address::generate(&env);

        assert!(t.token.is_excluded_from_fee(&t.owner));
        assert!(t.token.is_excluded_from_fee(&t.token.address));
        assert!(!t.token.is_excluded_from_fee(&holder));

        t.token.exclude_from_fee(&t.owner, &holder);
        assert!(t.token.is_excluded_from_fee(&holder));
        t.token.include_in_fee(&t.owner, &holder);
        assert!(!t.token.is_excluded_from_fee(&holder));
    }

    #[test]
    fn test_reward_exclusion_toggles() {
        let env = Env::default();
        let t = setup(&env);
        let holder = Address::generate(&env);

        t.token.transfer(&t.owner, &holder, &(1_000 * ONE_TOKEN));
        t.token.exclude_from_reward(&t.owner, &holder);
        assert!(t.token.is_excluded_from_reward(&holder));
        assert_eq!(t.token.balance(&holder), 1_000 * ONE_TOKEN);

        assert_eq!(
            t.token.try_exclude_from_reward(&t.owner, &holder),
            Err(Ok(TokenError::AlreadyExcluded))
        );

        t.token.include_in_reward(&t.owner, &holder);
        assert!(!t.token.is_excluded_from_reward(&holder));
        assert_eq!(t.token.balance(&holder), 1_000 * ONE_TOKEN);

        assert_eq!(
            t.token.try_include_in_reward(&t.owner, &holder),
            Err(Ok(TokenError::NotExcluded))
        );
    }

    // === Authorization tests ===

    #[test]
    fn test_non_owner_admin_calls_fail() {
        let env = Env::default();
        let t = setup(&env);
        let intruder = Address::generate(&env);
        let unauthorized = Err(Ok(TokenError::Unauthorized));

        assert_eq!(t.token.try_set_tax_fee_percent(&intruder, &1), unauthorized);
        assert_eq!(t.token.try_set_liquidity_fee_percent(&intruder, &1), unauthorized);
        assert_eq!(t.token.try_set_max_tx_percent(&intruder, &1), unauthorized);
        assert_eq!(t.token.try_set_swap_and_liquify_enabled(&intruder, &false), unauthorized);
        assert_eq!(
            t.token.try_set_min_tokens_before_swap(&intruder, &1),
            unauthorized
        );
        assert_eq!(t.token.try_exclude_from_fee(&intruder, &intruder), unauthorized);
        assert_eq!(t.token.try_include_in_fee(&intruder, &t.owner), unauthorized);
        assert_eq!(t.token.try_exclude_from_reward(&intruder, &intruder), unauthorized);
        assert_eq!(t.token.try_include_in_reward(&intruder, &intruder), unauthorized);
        assert_eq!(t.token.try_transfer_ownership(&intruder, &intruder), unauthorized);
        assert_eq!(t.token.try_renounce_ownership(&intruder), unauthorized);

        // Nothing changed
        assert_eq!(t.token.tax_fee(), 5);
        assert_eq!(t.token.owner(), Some(t.owner.clone()));
    }

    // === Ownership tests ===

    #[test]
    fn test_transfer_ownership() {
        let env = Env::default();
        let t = setup(&env);
        let new_owner = Address::generate(&env);

        t.token.transfer_ownership(&t.owner, &new_owner);
        assert_eq!(t.token.owner(), Some(new_owner.clone()));

        // Old owner lost its rights, the new one has them
        assert_eq!(
            t.token.try_set_tax_fee_percent(&t.owner, &1),
            Err(Ok(TokenError::Unauthorized))
        );
        t.token.set_tax_fee_percent(&new_owner, &1);
        assert_eq!(t.token.tax_fee(), 1);
    }

    #[test]
    fn test_transfer_ownership_to_zero_fails() {
        let env = Env::default();
        let t = setup(&env);
        let zero = Address::from_str(&env, ZERO_ACCOUNT_STRKEY);

        assert_eq!(
            t.token.try_transfer_ownership(&t.owner, &zero),
            Err(Ok(TokenError::ZeroAddress))
        );
    }

    #[test]
    fn test_renounce_locks_admin() {
        let env = Env::default();
        let t = setup(&env);

        t.token.renounce_ownership(&t.owner);
        assert_eq!(t.token.owner(), None);

        assert_eq!(
            t.token.try_set_tax_fee_percent(&t.owner, &1),
            Err(Ok(TokenError::Unauthorized))
        );
        assert_eq!(
            t.token.try_renounce_ownership(&t.owner),
            Err(Ok(TokenError::Unauthorized))
        );
    }

    #[test]
    fn test_renounced_owner_is_capped() {
        let env = Env::default();
        let t = setup(&env);
        let receiver = Address::generate(&env);

        t.token.renounce_ownership(&t.owner);
        assert_eq!(
            t.token.try_transfer(&t.owner, &receiver, &(5_000 * ONE_TOKEN + 1)),
            Err(Ok(TokenError::ExceedsMaxTx))
        );
    }
}

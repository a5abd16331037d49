#![no_std]

mod admin;
mod allowance;
mod error;
mod invariants;
mod ledger;
mod liquify;
mod storage;
mod transfer;

#[cfg(feature = "certora")]
mod certora_specs;

#[cfg(test)]
mod testutils;

pub use error::TokenError;

use reflect_math::{calculate_fees, from_reflection, reflection_values, to_reflection};
use reflect_types::{
    genesis_reflection_supply, AccountBalance, AccountState, LedgerState, TokenConfig,
    TransferReceipt, DECIMALS, DEFAULT_LIQUIDITY_FEE, DEFAULT_MAX_TX_AMOUNT,
    DEFAULT_MIN_TOKENS_BEFORE_SWAP, DEFAULT_TAX_FEE, NAME, SYMBOL, TOTAL_SUPPLY,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Symbol};
use storage::{
    ensure_initialized, get_account, get_config, get_ledger, is_initialized, set_account,
    set_config, set_ledger, zero_address,
};

#[contract]
pub struct ReflectToken;

#[contractimpl]
impl ReflectToken {
    /// Mint the full supply to `owner` and set the default configuration
    ///
    /// # Arguments
    /// * `owner` - Receives the supply and the admin rights
    /// * `liquidity_pool` - Pool the liquidity fee is deposited into
    /// * `paired_token` - Asset paired with this token in that pool
    pub fn initialize(
        env: Env,
        owner: Address,
        liquidity_pool: Address,
        paired_token: Address,
    ) -> Result<(), TokenError> {
        if is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        owner.require_auth();

        let ledger = LedgerState::new(TOTAL_SUPPLY, genesis_reflection_supply(TOTAL_SUPPLY));
        set_account(
            &env,
            &owner,
            &AccountState {
                balance: AccountBalance::Included(ledger.reflection_supply),
                excluded_from_fee: true,
            },
        );
        set_account(
            &env,
            &env.current_contract_address(),
            &AccountState {
                balance: AccountBalance::Included(0),
                excluded_from_fee: true,
            },
        );
        set_ledger(&env, &ledger);

        let config = TokenConfig {
            owner: Some(owner.clone()),
            liquidity_pool,
            paired_token,
            tax_fee: DEFAULT_TAX_FEE,
            liquidity_fee: DEFAULT_LIQUIDITY_FEE,
            max_tx_amount: DEFAULT_MAX_TX_AMOUNT,
            swap_and_liquify_enabled: true,
            min_tokens_before_swap: DEFAULT_MIN_TOKENS_BEFORE_SWAP,
        };
        set_config(&env, &config);

        env.events().publish(
            (Symbol::new(&env, "ownership_transferred"), zero_address(&env)),
            Some(owner.clone()),
        );
        env.events().publish(
            (Symbol::new(&env, "transfer"), zero_address(&env), owner.clone()),
            TOTAL_SUPPLY,
        );
        log!(&env, "token initialized", owner);

        Ok(())
    }

    // === Token metadata ===

    pub fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn total_supply(env: Env) -> i128 {
        get_ledger(&env).total_supply
    }

    // === Balances and transfers ===

    /// Effective balance, including reflections for reward-tracked accounts
    pub fn balance(env: Env, id: Address) -> i128 {
        ledger::balance_of(&env, &id)
    }

    /// Transfer `amount` from `from` to `to`, charging fees unless either
    /// side is fee-excluded
    ///
    /// # Returns
    /// Receipt with the amount the recipient was credited
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<TransferReceipt, TokenError> {
        from.require_auth();
        ensure_initialized(&env)?;
        transfer::execute_transfer(&env, &from, &to, amount)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        from.require_auth();
        ensure_initialized(&env)?;
        allowance::approve(&env, &from, &spender, amount, expiration_ledger)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        allowance::allowance(&env, &from, &spender)
    }

    /// Transfer on behalf of `from`, spending the allowance it gave `spender`
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<TransferReceipt, TokenError> {
        spender.require_auth();
        ensure_initialized(&env)?;
        allowance::spend_allowance(&env, &from, &spender, amount)?;
        transfer::execute_transfer(&env, &from, &to, amount)
    }

    // === Reflection ===

    /// Give up `amount` of the caller's balance as a reflection to all holders
    pub fn deliver(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        ensure_initialized(&env)?;
        ledger::deliver(&env, &from, amount)?;

        env.events()
            .publish((Symbol::new(&env, "deliver"), from), amount);
        Ok(())
    }

    /// Reflection units `amount` is worth at the current rate, optionally
    /// after the transfer fees are taken out
    pub fn reflection_from_token(
        env: Env,
        amount: i128,
        deduct_transfer_fee: bool,
    ) -> Result<i128, TokenError> {
        ensure_initialized(&env)?;
        let ledger = get_ledger(&env);
        if amount < 0 || amount > ledger.total_supply {
            return Err(TokenError::InvalidParameter);
        }

        if !deduct_transfer_fee {
            return Ok(to_reflection(amount, ledger.rate));
        }
        let config = get_config(&env);
        let fees = calculate_fees(amount, config.tax_fee, config.liquidity_fee, true);
        Ok(reflection_values(&fees, ledger.rate).transfer_amount)
    }

    /// Raw amount `reflection` units are worth at the current rate
    pub fn token_from_reflection(env: Env, reflection: i128) -> Result<i128, TokenError> {
        ensure_initialized(&env)?;
        let ledger = get_ledger(&env);
        if reflection < 0 || reflection > to_reflection(ledger.total_supply, ledger.rate) {
            return Err(TokenError::InvalidParameter);
        }
        Ok(from_reflection(reflection, ledger.rate))
    }

    /// Cumulative amount redistributed through reflection
    pub fn total_fees(env: Env) -> i128 {
        get_ledger(&env).total_fees
    }

    pub fn is_excluded_from_fee(env: Env, id: Address) -> bool {
        get_account(&env, &id).excluded_from_fee
    }

    pub fn is_excluded_from_reward(env: Env, id: Address) -> bool {
        get_account(&env, &id).balance.is_excluded()
    }

    // === Configuration views ===

    pub fn owner(env: Env) -> Option<Address> {
        get_config(&env).owner
    }

    pub fn tax_fee(env: Env) -> u32 {
        get_config(&env).tax_fee
    }

    pub fn liquidity_fee(env: Env) -> u32 {
        get_config(&env).liquidity_fee
    }

    pub fn max_tx_amount(env: Env) -> i128 {
        get_config(&env).max_tx_amount
    }

    pub fn swap_and_liquify_enabled(env: Env) -> bool {
        get_config(&env).swap_and_liquify_enabled
    }

    pub fn min_tokens_before_swap(env: Env) -> i128 {
        get_config(&env).min_tokens_before_swap
    }

    pub fn liquidity_pool(env: Env) -> Address {
        get_config(&env).liquidity_pool
    }

    /// LP tokens the contract holds from swap-and-liquify deposits
    pub fn lp_balance(env: Env) -> i128 {
        let config = get_config(&env);
        liquify::lp_balance(&env, &config.liquidity_pool, &env.current_contract_address())
    }

    // === Owner administration ===

    pub fn set_tax_fee_percent(env: Env, caller: Address, percent: u32) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        admin::set_tax_fee_percent(&env, &caller, percent)
    }

    pub fn set_liquidity_fee_percent(
        env: Env,
        caller: Address,
        percent: u32,
    ) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        admin::set_liquidity_fee_percent(&env, &caller, percent)
    }

    /// Cap non-owner transfers at `percent` of the total supply
    pub fn set_max_tx_percent(env: Env, caller: Address, percent: u32) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        admin::set_max_tx_percent(&env, &caller, percent)
    }

    pub fn set_swap_and_liquify_enabled(
        env: Env,
        caller: Address,
        enabled: bool,
    ) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        admin::set_swap_and_liquify_enabled(&env, &caller, enabled)
    }

    /// Contract balance at which the collected liquidity fee is liquified
    pub fn set_min_tokens_before_swap(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        admin::set_min_tokens_before_swap(&env, &caller, amount)
    }

    pub fn exclude_from_fee(env: Env, caller: Address, id: Address) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        admin::set_excluded_from_fee(&env, &caller, &id, true)
    }

    pub fn include_in_fee(env: Env, caller: Address, id: Address) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        admin::set_excluded_from_fee(&env, &caller, &id, false)
    }

    /// Stop `id` from earning reflections; its balance is frozen at the current rate
    pub fn exclude_from_reward(env: Env, caller: Address, id: Address) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        admin::exclude_from_reward(&env, &caller, &id)
    }

    pub fn include_in_reward(env: Env, caller: Address, id: Address) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        admin::include_in_reward(&env, &caller, &id)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        admin::transfer_ownership(&env, &caller, &new_owner)
    }

    pub fn renounce_ownership(env: Env, caller: Address) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        admin::renounce_ownership(&env, &caller)
    }
}

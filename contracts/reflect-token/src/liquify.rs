use crate::ledger::move_fee_free;
use crate::storage::{get_account, get_config, get_ledger, is_swap_locked, set_swap_locked};
use reflect_math::effective_balance;
use reflect_types::TokenConfig;
use soroban_sdk::{log, token, Address, Env, IntoVal, Symbol};

// ============================================================================
// SWAP AND LIQUIFY
// ============================================================================
//
// The pool follows a transfer-then-call protocol: tokens are credited to the
// pool in this contract's ledger first, then the pool is told how much it
// received. The pool never has to call back into this contract, which the
// host would reject as re-entry.
//
// Pool interface consumed:
// - swap_exact_in(to, amount_in) -> paired amount paid to `to`
// - deposit(to, token_amount, paired_amount) -> LP minted to `to`
// - balance(id) -> LP balance
//
// ============================================================================

/// Holds the in-progress flag for as long as it lives
pub struct SwapLock<'a> {
    env: &'a Env,
}

impl<'a> SwapLock<'a> {
    /// Take the lock, or `None` if a swap-and-liquify is already running
    pub fn acquire(env: &'a Env) -> Option<Self> {
        if is_swap_locked(env) {
            return None;
        }
        set_swap_locked(env, true);
        Some(Self { env })
    }
}

impl Drop for SwapLock<'_> {
    fn drop(&mut self) {
        set_swap_locked(self.env, false);
    }
}

/// Convert the contract's collected liquidity fees into pool liquidity when
/// the balance has reached the threshold.
///
/// Skipped while disabled, for transfers coming out of the pool itself, and
/// while another swap-and-liquify holds the lock.
pub fn maybe_swap_and_liquify(env: &Env, from: &Address) {
    let config = get_config(env);
    if !config.swap_and_liquify_enabled || *from == config.liquidity_pool {
        return;
    }

    let contract = env.current_contract_address();
    let rate = get_ledger(env).rate;
    let contract_balance = effective_balance(&get_account(env, &contract).balance, rate);
    if contract_balance < config.min_tokens_before_swap {
        return;
    }

    let Some(_lock) = SwapLock::acquire(env) else {
        log!(env, "swap and liquify already in progress, skipping");
        return;
    };

    swap_and_liquify(env, &config, contract_balance, rate);
}

/// Swap half of `amount` for the paired asset and deposit the pair.
///
/// `amount` was read at `rate`, and both halves leave at that rate.
fn swap_and_liquify(env: &Env, config: &TokenConfig, amount: i128, rate: i128) {
    let half = amount / 2;
    let other_half = amount - half;
    if half == 0 {
        return;
    }

    let contract = env.current_contract_address();
    let pool = &config.liquidity_pool;
    let paired = token::Client::new(env, &config.paired_token);

    // Only count what this swap brings in, not paired asset already held
    let initial_paired = paired.balance(&contract);

    move_fee_free(env, &contract, pool, half, rate);
    invoke_pool_swap(env, pool, &contract, half);

    let new_paired = paired.balance(&contract) - initial_paired;

    move_fee_free(env, &contract, pool, other_half, rate);
    if new_paired > 0 {
        paired.transfer(&contract, pool, &new_paired);
    }
    let minted = invoke_pool_deposit(env, pool, &contract, other_half, new_paired);

    env.events().publish(
        (Symbol::new(env, "swap_and_liquify"),),
        (half, new_paired, other_half),
    );
    log!(env, "swap and liquify", half, new_paired, minted);
}

/// LP balance of `id` in the pool
pub fn lp_balance(env: &Env, pool: &Address, id: &Address) -> i128 {
    env.invoke_contract(pool, &Symbol::new(env, "balance"), (id,).into_val(env))
}

fn invoke_pool_swap(env: &Env, pool: &Address, to: &Address, amount_in: i128) -> i128 {
    env.invoke_contract(
        pool,
        &Symbol::new(env, "swap_exact_in"),
        (to, amount_in).into_val(env),
    )
}

fn invoke_pool_deposit(
    env: &Env,
    pool: &Address,
    to: &Address,
    token_amount: i128,
    paired_amount: i128,
) -> i128 {
    env.invoke_contract(
        pool,
        &Symbol::new(env, "deposit"),
        (to, token_amount, paired_amount).into_val(env),
    )
}

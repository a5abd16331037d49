use crate::error::TokenError;
use reflect_types::{AccountState, LedgerState, TokenConfig, ZERO_ACCOUNT_STRKEY};
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// - Instance: config, supply bookkeeping and the swap-and-liquify flag.
//   These are read by every transfer, so they share the contract instance
//   entry and its TTL.
// - Persistent: one entry per account. Entries are never removed; a
//   zero-balance account keeps its reward mode and fee exclusion.
// - Temporary: allowances, which expire on their own at the approved ledger.
// ============================================================================

/// Storage keys for the token contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Token configuration (Instance storage)
    Config,
    /// Supply bookkeeping and exchange rate (Instance storage)
    Ledger,
    /// Swap-and-liquify in progress (Instance storage)
    InSwapAndLiquify,
    /// Account entry: address -> AccountState (Persistent storage)
    Account(Address),
    /// Allowance: (from, spender) -> AllowanceValue (Temporary storage)
    Allowance(AllowanceKey),
}

#[contracttype]
#[derive(Clone)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Default)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

/// The null address transfers may not touch
pub fn zero_address(env: &Env) -> Address {
    Address::from_str(env, ZERO_ACCOUNT_STRKEY)
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn ensure_initialized(env: &Env) -> Result<(), TokenError> {
    if !is_initialized(env) {
        return Err(TokenError::NotInitialized);
    }
    Ok(())
}

// === Config ===

pub fn get_config(env: &Env) -> TokenConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Not initialized")
}

pub fn set_config(env: &Env, config: &TokenConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Ledger ===

pub fn get_ledger(env: &Env) -> LedgerState {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Ledger)
        .expect("Not initialized")
}

pub fn set_ledger(env: &Env, ledger: &LedgerState) {
    env.storage().instance().set(&DataKey::Ledger, ledger);
    extend_instance_ttl(env);
}

// === Swap-and-liquify flag ===

pub fn is_swap_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::InSwapAndLiquify)
        .unwrap_or(false)
}

pub fn set_swap_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::InSwapAndLiquify, &true);
    } else {
        env.storage().instance().remove(&DataKey::InSwapAndLiquify);
    }
}

// === Account ===

/// Account entry, or a fresh reflection-tracked entry if never touched
pub fn get_account(env: &Env, id: &Address) -> AccountState {
    let key = DataKey::Account(id.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_default()
}

pub fn set_account(env: &Env, id: &Address, account: &AccountState) {
    let key = DataKey::Account(id.clone());
    env.storage().persistent().set(&key, account);
    extend_persistent_ttl(env, &key);
}

// === Allowance ===

/// Allowance still in force; expired approvals read as zero
pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue::default(),
    }
}

pub fn set_allowance(env: &Env, from: &Address, spender: &Address, allowance: &AllowanceValue) {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    env.storage().temporary().set(&key, allowance);

    if allowance.amount > 0 {
        let live_for = allowance
            .expiration_ledger
            .saturating_sub(env.ledger().sequence());
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

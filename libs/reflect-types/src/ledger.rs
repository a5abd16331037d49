use soroban_sdk::{contracttype, Address};

/// Supply bookkeeping - stored in Instance storage, read on every balance query
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerState {
    /// Total raw supply, fixed at genesis
    pub total_supply: i128,
    /// Sum of reflection balances of all reflection-tracked accounts
    pub reflection_supply: i128,
    /// Sum of raw balances of all reward-excluded accounts
    pub excluded_supply: i128,
    /// Reflection units per raw unit, recomputed whenever the sums above change
    pub rate: i128,
    /// Cumulative raw amount redistributed through reflection
    pub total_fees: i128,
}

impl LedgerState {
    /// Genesis state: every unit is reflection-tracked and owned by one account
    pub fn new(total_supply: i128, reflection_supply: i128) -> Self {
        Self {
            total_supply,
            reflection_supply,
            excluded_supply: 0,
            rate: reflection_supply / total_supply,
            total_fees: 0,
        }
    }

    /// Raw supply held by reflection-tracked accounts
    pub fn included_supply(&self) -> i128 {
        self.total_supply - self.excluded_supply
    }
}

/// Owner-tunable token configuration (Instance storage)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenConfig {
    /// Holder of admin rights; `None` once ownership is renounced
    pub owner: Option<Address>,
    /// Liquidity pool the collected liquidity fee is deposited into
    pub liquidity_pool: Address,
    /// Asset paired with this token in the liquidity pool
    pub paired_token: Address,
    /// Reflection fee percent
    pub tax_fee: u32,
    /// Liquidity fee percent
    pub liquidity_fee: u32,
    /// Largest transfer a non-owner sender may make
    pub max_tx_amount: i128,
    /// Whether collected liquidity fees are converted automatically
    pub swap_and_liquify_enabled: bool,
    /// Contract balance at which swap-and-liquify fires
    pub min_tokens_before_swap: i128,
}

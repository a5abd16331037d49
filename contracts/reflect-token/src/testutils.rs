use crate::{ReflectToken, ReflectTokenClient};
use reflect_types::ONE_TOKEN;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env};

// ============================================================================
// MOCK LIQUIDITY POOL
// ============================================================================
//
// Stands in for a constant-product pair. It trusts that the caller already
// credited it, pays out the paired asset at a fixed 1000:1 price, and mints
// LP as `token_amount / 1000 + paired_amount`.
//
// ============================================================================

/// Paired asset units paid per 1,000 tokens swapped in
const PRICE_DIVISOR: i128 = 1_000;

#[contracttype]
#[derive(Clone)]
enum PoolKey {
    Paired,
    Lp(Address),
    Swaps,
    Deposits,
    PairedDeposited,
}

#[contract]
pub struct MockLiquidityPool;

#[contractimpl]
impl MockLiquidityPool {
    pub fn init(env: Env, paired: Address) {
        env.storage().instance().set(&PoolKey::Paired, &paired);
    }

    pub fn swap_exact_in(env: Env, to: Address, amount_in: i128) -> i128 {
        let paired: Address = env.storage().instance().get(&PoolKey::Paired).unwrap();
        let amount_out = amount_in / PRICE_DIVISOR;
        token::Client::new(&env, &paired).transfer(&env.current_contract_address(), &to, &amount_out);

        bump(&env, PoolKey::Swaps, 1);
        amount_out
    }

    pub fn deposit(env: Env, to: Address, token_amount: i128, paired_amount: i128) -> i128 {
        let minted = token_amount / PRICE_DIVISOR + paired_amount;
        bump(&env, PoolKey::Lp(to), minted);
        bump(&env, PoolKey::Deposits, 1);
        bump(&env, PoolKey::PairedDeposited, paired_amount);
        minted
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read(&env, PoolKey::Lp(id))
    }

    pub fn swap_count(env: Env) -> i128 {
        read(&env, PoolKey::Swaps)
    }

    pub fn deposit_count(env: Env) -> i128 {
        read(&env, PoolKey::Deposits)
    }

    pub fn paired_deposited(env: Env) -> i128 {
        read(&env, PoolKey::PairedDeposited)
    }
}

fn read(env: &Env, key: PoolKey) -> i128 {
    env.storage().instance().get(&key).unwrap_or(0)
}

fn bump(env: &Env, key: PoolKey, by: i128) {
    let value = read(env, key.clone()) + by;
    env.storage().instance().set(&key, &value);
}

// ============================================================================
// FIXTURES
// ============================================================================

pub struct TestSetup<'a> {
    pub token: ReflectTokenClient<'a>,
    pub owner: Address,
    pub pool: MockLiquidityPoolClient<'a>,
    pub paired: TokenClient<'a>,
}

/// Deployed token with default configuration, a funded pool and all auths mocked
pub fn setup(env: &Env) -> TestSetup<'_> {
    env.mock_all_auths();

    let admin = Address::generate(env);
    let paired_id = env.register_stellar_asset_contract_v2(admin).address();

    let pool_id = env.register(MockLiquidityPool, ());
    let pool = MockLiquidityPoolClient::new(env, &pool_id);
    pool.init(&paired_id);
    StellarAssetClient::new(env, &paired_id).mint(&pool_id, &(1_000_000 * ONE_TOKEN));

    let token_id = env.register(ReflectToken, ());
    let token = ReflectTokenClient::new(env, &token_id);
    let owner = Address::generate(env);
    token.initialize(&owner, &pool_id, &paired_id);

    TestSetup {
        token,
        owner,
        pool,
        paired: TokenClient::new(env, &paired_id),
    }
}

pub fn setup_with_fees(env: &Env, tax_fee: u32, liquidity_fee: u32) -> TestSetup<'_> {
    let t = setup(env);
    t.token.set_tax_fee_percent(&t.owner, &tax_fee);
    t.token.set_liquidity_fee_percent(&t.owner, &liquidity_fee);
    t
}

pub fn setup_with_threshold(env: &Env, min_tokens_before_swap: i128) -> TestSetup<'_> {
    let t = setup(env);
    t.token
        .set_min_tokens_before_swap(&t.owner, &min_tokens_before_swap);
    t
}

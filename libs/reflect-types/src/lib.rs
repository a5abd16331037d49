#![no_std]

mod account;
mod ledger;
mod transfer;

pub use account::*;
pub use ledger::*;
pub use transfer::*;

/// Token name reported by `name()`
pub const NAME: &str = "SafeMoon";

/// Token symbol reported by `symbol()`
pub const SYMBOL: &str = "SAFEMOON";

/// Decimal places of the raw token unit
pub const DECIMALS: u32 = 18;

/// One whole token in raw units (10^18)
pub const ONE_TOKEN: i128 = 1_000_000_000_000_000_000;

/// Total raw supply minted to the owner at genesis (1,000,000 tokens)
pub const TOTAL_SUPPLY: i128 = 1_000_000 * ONE_TOKEN;

/// Percentages are integers out of this denominator
pub const PERCENT_DENOMINATOR: u32 = 100;

/// Default tax (reflection) fee percent
pub const DEFAULT_TAX_FEE: u32 = 5;

/// Default liquidity fee percent
pub const DEFAULT_LIQUIDITY_FEE: u32 = 5;

/// Default max transaction amount (0.5% of supply)
pub const DEFAULT_MAX_TX_AMOUNT: i128 = 5_000 * ONE_TOKEN;

/// Default contract balance that triggers swap-and-liquify
pub const DEFAULT_MIN_TOKENS_BEFORE_SWAP: i128 = 500_000 * ONE_TOKEN;

/// Stellar's all-zero account, treated as the null address
pub const ZERO_ACCOUNT_STRKEY: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Largest reflection supply that is an exact multiple of `total_supply`.
///
/// Keeping the genesis supply a multiple of the raw supply makes the genesis
/// rate an exact integer, so the owner's initial effective balance equals
/// the full raw supply with no rounding loss.
pub fn genesis_reflection_supply(total_supply: i128) -> i128 {
    if total_supply <= 0 {
        panic!("Total supply must be positive");
    }
    i128::MAX - (i128::MAX % total_supply)
}

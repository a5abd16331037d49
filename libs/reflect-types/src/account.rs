use soroban_sdk::contracttype;

/// Reward mode of an account together with its stored balance.
///
/// An account is in exactly one mode at a time. Switching modes converts the
/// stored amount at the current exchange rate so the effective balance is
/// preserved.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AccountBalance {
    /// Reflection-tracked; amount in reflection units
    Included(i128),
    /// Raw-tracked and excluded from reflections; amount in token units
    Excluded(i128),
}

impl Default for AccountBalance {
    fn default() -> Self {
        AccountBalance::Included(0)
    }
}

impl AccountBalance {
    pub fn is_excluded(&self) -> bool {
        matches!(self, AccountBalance::Excluded(_))
    }
}

/// Per-account ledger entry (Persistent storage)
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AccountState {
    pub balance: AccountBalance,
    /// Transfers touching this account pay no fees
    pub excluded_from_fee: bool,
}

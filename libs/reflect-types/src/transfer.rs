use soroban_sdk::{contracttype, Address};

/// Result of a transfer as observed by the caller
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferReceipt {
    pub from: Address,
    pub to: Address,
    /// Amount credited to `to` after fees
    pub value: i128,
}

// ============================================================================
// FEE COMPUTATION TYPES
// These separate pure fee math from storage side effects
// ============================================================================

/// Fee split of a transfer, in raw token units
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FeeBreakdown {
    /// Amount credited to the recipient
    pub transfer_amount: i128,
    /// Amount redistributed to holders through the rate
    pub reflection_fee: i128,
    /// Amount credited to the contract for liquidity
    pub liquidity_fee: i128,
}

impl FeeBreakdown {
    /// Breakdown of a transfer that pays no fees
    pub fn fee_free(amount: i128) -> Self {
        Self {
            transfer_amount: amount,
            reflection_fee: 0,
            liquidity_fee: 0,
        }
    }

    /// Gross amount debited from the sender
    pub fn total(&self) -> i128 {
        self.transfer_amount + self.reflection_fee + self.liquidity_fee
    }
}

/// The same split as `FeeBreakdown`, converted to reflection units
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReflectionValues {
    pub amount: i128,
    pub transfer_amount: i128,
    pub reflection_fee: i128,
    pub liquidity_fee: i128,
}

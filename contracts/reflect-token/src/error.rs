use soroban_sdk::contracterror;

/// Failures surfaced to callers of the token contract.
///
/// Any error rejects the whole invocation; the host rolls back every write
/// made before it was returned.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Owner-only operation invoked by someone else
    Unauthorized = 3,
    InsufficientBalance = 4,
    /// Non-owner transfer above the max transaction amount
    ExceedsMaxTx = 5,
    ZeroAddress = 6,
    /// Fee percent, amount or threshold out of range
    InvalidParameter = 7,
    InsufficientAllowance = 8,
    AlreadyExcluded = 9,
    NotExcluded = 10,
    ExcludedAccountCannotDeliver = 11,
}

//! Error-kind contract shared by the contract variants.
//!
//! Each variant declares its own closed `ContractError` with its own code
//! table. The shared guards in this crate stay generic over that type and
//! only need a constructor for each kind they can raise.

use cosmwasm_std::StdError;

/// Numeric code signaled with a failed transition.
///
/// Codes are small negative integers starting at -1, assigned in the order
/// the variant declares its error kinds. Errors that do not come from a
/// named kind (storage, serialization) carry no code.
pub trait ErrorCode {
    fn code(&self) -> Option<i32>;
}

/// Kinds raised by the admin governance guards.
pub trait AdminErrors: From<StdError> {
    fn admin_validation_failed() -> Self;
    fn staging_admin_not_exist() -> Self;
    fn staging_admin_validation_failed() -> Self;
}

/// Kinds raised by the inbound transfer guards.
pub trait TokenErrors: From<StdError> {
    fn wrong_token_implementation_address() -> Self;
}

/// Variants that also check they are the recipient of an inbound transfer.
pub trait RecipientErrors: TokenErrors {
    fn this_is_not_token_recipient() -> Self;
}

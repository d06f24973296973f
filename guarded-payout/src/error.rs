//! Error kinds for the guarded payout contract, with their signaled codes.

use common::{AdminErrors, ErrorCode, RecipientErrors, TokenErrors};
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization
    // ========================================================================
    #[error("AdminValidationFailed (code -1)")]
    AdminValidationFailed,

    #[error("StagingAdminNotExist (code -2)")]
    StagingAdminNotExist,

    #[error("StagingAdminValidationFailed (code -3)")]
    StagingAdminValidationFailed,

    #[error("WrongTokenImplementationAddress (code -4)")]
    WrongTokenImplementationAddress,

    #[error("ThisIsNotTokenRecipient (code -5)")]
    ThisIsNotTokenRecipient,

    // ========================================================================
    // Schedule
    // ========================================================================
    #[error("NoMoreBlockLimitsImposed (code -6)")]
    NoMoreBlockLimitsImposed,

    #[error("BlockNumberNotYetAtTarget (code -7): current {current}, target {target}")]
    BlockNumberNotYetAtTarget { current: u64, target: u64 },

    #[error("ThereAreStillScheduledPayouts (code -8): {remaining} remaining")]
    ThereAreStillScheduledPayouts { remaining: u32 },
}

impl ErrorCode for ContractError {
    fn code(&self) -> Option<i32> {
        let code = match self {
            ContractError::Std(_) => return None,
            ContractError::AdminValidationFailed => -1,
            ContractError::StagingAdminNotExist => -2,
            ContractError::StagingAdminValidationFailed => -3,
            ContractError::WrongTokenImplementationAddress => -4,
            ContractError::ThisIsNotTokenRecipient => -5,
            ContractError::NoMoreBlockLimitsImposed => -6,
            ContractError::BlockNumberNotYetAtTarget { .. } => -7,
            ContractError::ThereAreStillScheduledPayouts { .. } => -8,
        };
        Some(code)
    }
}

impl AdminErrors for ContractError {
    fn admin_validation_failed() -> Self {
        ContractError::AdminValidationFailed
    }
    fn staging_admin_not_exist() -> Self {
        ContractError::StagingAdminNotExist
    }
    fn staging_admin_validation_failed() -> Self {
        ContractError::StagingAdminValidationFailed
    }
}

impl TokenErrors for ContractError {
    fn wrong_token_implementation_address() -> Self {
        ContractError::WrongTokenImplementationAddress
    }
}

impl RecipientErrors for ContractError {
    fn this_is_not_token_recipient() -> Self {
        ContractError::ThisIsNotTokenRecipient
    }
}

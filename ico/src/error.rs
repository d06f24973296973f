//! Error kinds for the ICO contract, with their signaled codes.

use common::{AdminErrors, ErrorCode, RecipientErrors, TokenErrors};
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("AdminValidationFailed (code -1)")]
    AdminValidationFailed,

    #[error("StagingAdminNotExist (code -2)")]
    StagingAdminNotExist,

    #[error("StagingAdminValidationFailed (code -3)")]
    StagingAdminValidationFailed,

    #[error("WrongTokenImplementationAddress (code -4)")]
    WrongTokenImplementationAddress,

    #[error("ICOHasEnded (code -5)")]
    ICOHasEnded,

    #[error("ICODidNotEndYet (code -6)")]
    ICODidNotEndYet,

    #[error("FundingGoalNotReached (code -7)")]
    FundingGoalNotReached,

    #[error("FundingGoalReached (code -8)")]
    FundingGoalReached,

    #[error("ThisIsNotTokenRecipient (code -9)")]
    ThisIsNotTokenRecipient,
}

impl ErrorCode for ContractError {
    fn code(&self) -> Option<i32> {
        match self {
            ContractError::Std(_) => None,
            ContractError::AdminValidationFailed => Some(-1),
            ContractError::StagingAdminNotExist => Some(-2),
            ContractError::StagingAdminValidationFailed => Some(-3),
            ContractError::WrongTokenImplementationAddress => Some(-4),
            ContractError::ICOHasEnded => Some(-5),
            ContractError::ICODidNotEndYet => Some(-6),
            ContractError::FundingGoalNotReached => Some(-7),
            ContractError::FundingGoalReached => Some(-8),
            ContractError::ThisIsNotTokenRecipient => Some(-9),
        }
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

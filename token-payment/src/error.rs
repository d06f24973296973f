//! Error kinds for the token payment contract, with their signaled codes.

use common::{AdminErrors, ErrorCode, TokenErrors};
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
}

impl ErrorCode for ContractError {
    fn code(&self) -> Option<i32> {
        match self {
            ContractError::Std(_) => None,
            ContractError::AdminValidationFailed => Some(-1),
            ContractError::StagingAdminNotExist => Some(-2),
            ContractError::StagingAdminValidationFailed => Some(-3),
            ContractError::WrongTokenImplementationAddress => Some(-4),
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

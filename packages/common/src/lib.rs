//! Common - Shared Core for the Token Custody Contracts
//!
//! This package provides the pieces every contract variant is built from:
//! - `error` - error-kind traits and the numeric code contract
//! - `admin` - two-phase (stage/claim) administrator transfer
//! - `transfer` - outbound token ledger messages and the inbound
//!   `TransferSuccessCallBack` / `RecipientAcceptTransfer` protocol

pub mod admin;
pub mod error;
pub mod transfer;

pub use admin::{AdminResponse, ADMIN, STAGED_ADMIN};
pub use error::{AdminErrors, ErrorCode, RecipientErrors, TokenErrors};
pub use transfer::{
    build_batch, build_transfer_message, LedgerCallbackMsg, TokenLedgerMsg, TransferMessage,
};

//! Token Payment Contract - Admin-Triggered Payouts of a ZRC2-Style Token
//!
//! The contract holds a balance on an external token ledger and lets the
//! admin push it out, either as a batch (`Pay`) or in one transfer to
//! itself (`DrainContractBalance`). Balances are never counted here; the
//! ledger rejects overdrafts by aborting the transaction.
//!
//! # Admin Transfer
//! 1. Admin stages a successor with `UpdateAdmin`
//! 2. Successor calls `ClaimAdmin` to take over
//!
//! # Ledger Callbacks
//! - `TransferSuccessCallBack` acknowledges an outgoing transfer
//! - `RecipientAcceptTransfer` accepts incoming tokens from the trusted ledger

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;

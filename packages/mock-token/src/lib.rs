//! Mock Token Ledger - ZRC2-Style Fungible Token for Integration Tests
//!
//! Books `Transfer {to, amount}` against the caller's balance and then drives
//! the push/accept protocol the custody contracts expect:
//! 1. `RecipientAcceptTransfer` on the destination, if it is a contract
//! 2. `TransferSuccessCallBack` on the originator, if it is a contract
//!
//! Both callbacks run in deeper frames of the same transaction, so a failing
//! callback rolls the booking back.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;

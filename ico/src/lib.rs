//! ICO Contract - Deadline and Funding-Goal Gated Token Sale
//!
//! Sells a ZRC2-style token for the chain's native currency at a fixed rate
//! until a deadline block height.
//!
//! # Sale
//! - `BuyToken` while height < deadline: pays `attached * rate` tokens and
//!   registers the buyer as an investor
//!
//! # After the Deadline (height > deadline)
//! - Goal reached (balance >= goal): admin drains the native balance
//! - Goal not reached (balance <= goal): investors send tokens back through the
//!   ledger and `RecipientAcceptTransfer` refunds `amount / rate`
//!
//! At `height == deadline` neither phase applies, and at `balance == goal`
//! both goal guards pass. Both boundaries are kept as is.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;

//! Guarded Token Payout Contract - Block-Height Gated Withdrawals
//!
//! Releases a ZRC2-style token balance to the admin on a fixed ladder:
//! each `Withdraw` pays `fixed_payout_amount` once the chain is past the
//! next height in the payout schedule and consumes that height. Only after
//! the schedule is exhausted may the admin drain the rest freely.
//!
//! # Payout Flow
//! 1. Instantiate with a schedule `[b1, b2, ...]`
//! 2. At height > b1, `Withdraw` pays the admin and the schedule becomes `[b2, ...]`
//! 3. With the schedule empty, `DrainContractBalance` is unlocked
//!
//! The token ledger reference can be replaced by the admin with
//! `UpdateTokenImplementation`.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;

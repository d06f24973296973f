//! State definitions for the guarded payout contract.
//!
//! Admin and staged admin are stored by `common::admin`.

use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Deque, Item};

pub const CONTRACT_NAME: &str = "crates.io:guarded-payout";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current token implementation. Replaceable by the admin.
pub const TOKEN_IMPL: Item<Addr> = Item::new("token_impl");

/// Amount paid by every successful `Withdraw`.
pub const FIXED_PAYOUT_AMOUNT: Item<Uint128> = Item::new("fixed_payout_amount");

/// Block heights gating successive withdrawals, consumed from the front only.
pub const PAYOUT_SCHEDULE: Deque<u64> = Deque::new("payout_schedule");

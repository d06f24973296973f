//! State definitions for the token payment contract.
//!
//! Admin and staged admin are stored by `common::admin`.

use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:token-payment";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Token ledger this contract pays through. Fixed at instantiation.
pub const TOKEN_IMPL: Item<Addr> = Item::new("current_impl");

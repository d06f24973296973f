//! State definitions for the ICO contract.
//!
//! Admin and staged admin are stored by `common::admin`.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:ico";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sale parameters, fixed at instantiation.
#[cw_serde]
pub struct Config {
    /// Token ledger selling from this contract's balance
    pub token_impl: Addr,
    /// Token base units paid per native base unit
    pub token_qa_per_native_qa: Uint128,
    /// Sale is closed from this height on
    pub ico_deadline: u64,
    /// Native balance the sale must reach to succeed
    pub funding_goal: Uint128,
    /// Native denom accepted by `BuyToken`
    pub denom: String,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// investor => true. Set on first `BuyToken`, never removed.
pub const REGISTERED_INVESTORS: Map<&Addr, bool> = Map::new("registered_investors");

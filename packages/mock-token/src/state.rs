use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Map;

pub const CONTRACT_NAME: &str = "crates.io:mock-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// holder => token balance
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

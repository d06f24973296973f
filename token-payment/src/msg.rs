//! Message types for the token payment contract.
//!
//! Execute tags are the transition names verbatim (`UpdateAdmin`, `Pay`, ...)
//! so the token ledger and existing clients address them unchanged.

use common::AdminResponse;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Initial contract admin
    pub admin: String,
    /// Token ledger holding this contract's balance
    pub token_impl: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Admin: stage a new admin
    #[serde(rename = "UpdateAdmin")]
    UpdateAdmin { admin: String },

    /// Staged admin: take over as admin
    #[serde(rename = "ClaimAdmin")]
    ClaimAdmin {},

    /// Admin: send `amt` tokens to the caller
    #[serde(rename = "DrainContractBalance")]
    DrainContractBalance { amt: Uint128 },

    /// Ledger: an outgoing transfer was booked
    #[serde(rename = "TransferSuccessCallBack")]
    TransferSuccessCallBack {
        sender: String,
        recipient: String,
        amount: Uint128,
    },

    /// Ledger: this contract received tokens
    #[serde(rename = "RecipientAcceptTransfer")]
    RecipientAcceptTransfer {
        sender: String,
        recipient: String,
        amount: Uint128,
    },

    /// Admin: pay `amts[i]` to `addresses[i]`
    #[serde(rename = "Pay")]
    Pay {
        addresses: Vec<String>,
        amts: Vec<Uint128>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Current and staged admin
    #[returns(AdminResponse)]
    Admin {},
    /// Instantiation parameters
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub token_impl: Addr,
}

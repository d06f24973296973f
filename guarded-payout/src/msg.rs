//! Message types for the guarded payout contract.
//!
//! Execute tags are the transition names verbatim.

use common::AdminResponse;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Initial contract admin
    pub admin: String,
    /// Initial token implementation
    pub token_impl: String,
    /// Tokens released per `Withdraw`
    pub fixed_payout_amount: Uint128,
    /// Block heights unlocking each `Withdraw`, in consumption order
    pub payout_schedule: Vec<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Admin: stage a new admin
    #[serde(rename = "UpdateAdmin")]
    UpdateAdmin { admin: String },

    /// Admin: point the contract at a different token ledger
    #[serde(rename = "UpdateTokenImplementation")]
    UpdateTokenImplementation { new_impl: String },

    /// Staged admin: take over as admin
    #[serde(rename = "ClaimAdmin")]
    ClaimAdmin {},

    /// Admin: send `amt` tokens to the caller, once the schedule is exhausted
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

    /// Admin: release the next scheduled payout
    #[serde(rename = "Withdraw")]
    Withdraw {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Current and staged admin
    #[returns(AdminResponse)]
    Admin {},
    /// Token implementation and payout amount
    #[returns(ConfigResponse)]
    Config {},
    /// Heights still gating withdrawals, next one first
    #[returns(PayoutScheduleResponse)]
    PayoutSchedule {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub token_impl: Addr,
    pub fixed_payout_amount: Uint128,
}

#[cw_serde]
pub struct PayoutScheduleResponse {
    pub remaining: Vec<u64>,
}

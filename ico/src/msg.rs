//! Message types for the ICO contract.
//!
//! Execute tags are the transition names verbatim.

use common::AdminResponse;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::state::Config;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Initial contract admin
    pub admin: String,
    /// Token ledger holding the tokens on sale
    pub token_impl: String,
    /// Token base units paid per native base unit. Must be non-zero.
    pub token_qa_per_native_qa: Uint128,
    /// Sale runs while the block height is below this
    pub ico_deadline: u64,
    /// Native balance threshold for a successful sale
    pub funding_goal: Uint128,
    /// Native denom accepted by `BuyToken`
    pub denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Admin: stage a new admin
    #[serde(rename = "UpdateAdmin")]
    UpdateAdmin { admin: String },

    /// Staged admin: take over as admin
    #[serde(rename = "ClaimAdmin")]
    ClaimAdmin {},

    /// Admin, after a successful sale: withdraw the whole native balance
    #[serde(rename = "DrainContractBalance")]
    DrainContractBalance { amt: Uint128 },

    /// Ledger: an outgoing transfer was booked
    #[serde(rename = "TransferSuccessCallBack")]
    TransferSuccessCallBack {
        sender: String,
        recipient: String,
        amount: Uint128,
    },

    /// Ledger: this contract received tokens. From a registered investor
    /// this is a refund request.
    #[serde(rename = "RecipientAcceptTransfer")]
    RecipientAcceptTransfer {
        sender: String,
        recipient: String,
        amount: Uint128,
    },

    /// Buy tokens with the attached native funds
    #[serde(rename = "BuyToken")]
    BuyToken {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Current and staged admin
    #[returns(AdminResponse)]
    Admin {},
    /// Sale parameters
    #[returns(Config)]
    Config {},
    /// Whether `address` bought during the sale
    #[returns(IsRegisteredResponse)]
    IsRegistered { address: String },
    /// Temporal and threshold guard state at the current height
    #[returns(SaleStatusResponse)]
    SaleStatus {},
}

#[cw_serde]
pub struct IsRegisteredResponse {
    pub registered: bool,
}

#[cw_serde]
pub struct SaleStatusResponse {
    pub height: u64,
    pub ico_deadline: u64,
    /// height < deadline
    pub in_progress: bool,
    /// height > deadline
    pub ended: bool,
    pub balance: Uint128,
    pub funding_goal: Uint128,
    /// balance >= goal
    pub goal_reached: bool,
    /// balance <= goal
    pub goal_not_reached: bool,
}

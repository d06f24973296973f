use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

pub use common::TokenLedgerMsg as ExecuteMsg;

#[cw_serde]
pub struct InitialBalance {
    pub address: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct InstantiateMsg {
    pub initial_balances: Vec<InitialBalance>,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Token balance of `address`, zero if it never held any
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },
}

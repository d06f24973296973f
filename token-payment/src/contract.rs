//! Token Payment Contract - Entry Points

use common::admin::{
    assert_admin, execute_claim_admin, execute_update_admin, init_admin, query_admin,
};
use common::transfer::{
    assert_token_implementation, build_batch, build_transfer_message,
    execute_transfer_success_callback, into_cosmos_msgs,
};
use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response,
    StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, TOKEN_IMPL};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    let token_impl = deps.api.addr_validate(&msg.token_impl)?;
    init_admin(deps.storage, &admin)?;
    TOKEN_IMPL.save(deps.storage, &token_impl)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("token_impl", token_impl))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateAdmin { admin } => execute_update_admin(deps, &info, admin),
        ExecuteMsg::ClaimAdmin {} => execute_claim_admin(deps, &info),
        ExecuteMsg::DrainContractBalance { amt } => execute_drain_contract_balance(deps, info, amt),
        ExecuteMsg::TransferSuccessCallBack {
            sender,
            recipient,
            amount,
        } => Ok(execute_transfer_success_callback(sender, recipient, amount)),
        ExecuteMsg::RecipientAcceptTransfer {
            sender,
            recipient,
            amount,
        } => execute_recipient_accept_transfer(deps, info, sender, recipient, amount),
        ExecuteMsg::Pay { addresses, amts } => execute_pay(deps, info, addresses, amts),
    }
}

/// Send `amt` tokens back to the admin. Overdrafts are for the ledger to reject.
fn execute_drain_contract_balance(
    deps: DepsMut,
    info: MessageInfo,
    amt: Uint128,
) -> Result<Response, ContractError> {
    assert_admin::<ContractError>(deps.storage, &info.sender)?;

    let token_impl = TOKEN_IMPL.load(deps.storage)?;
    let msg = build_transfer_message(&token_impl, &info.sender, amt).into_cosmos_msg()?;

    Ok(Response::new()
        .add_message(msg)
        .add_event(
            Event::new("DrainContractBalance")
                .add_attribute("to", &info.sender)
                .add_attribute("amount", amt),
        )
        .add_attribute("action", "drain_contract_balance")
        .add_attribute("to", info.sender)
        .add_attribute("amount", amt))
}

/// Accept tokens from the trusted ledger. Any recipient is accepted.
fn execute_recipient_accept_transfer(
    deps: DepsMut,
    info: MessageInfo,
    sender: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let token_impl = TOKEN_IMPL.load(deps.storage)?;
    assert_token_implementation::<ContractError>(&info.sender, &token_impl)?;

    Ok(Response::new()
        .add_attribute("action", "recipient_accept_transfer")
        .add_attribute("sender", sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}

/// Pay each address its amount. The event echoes the full input lists even
/// when their lengths differ and only the paired prefix is paid.
fn execute_pay(
    deps: DepsMut,
    info: MessageInfo,
    addresses: Vec<String>,
    amts: Vec<Uint128>,
) -> Result<Response, ContractError> {
    assert_admin::<ContractError>(deps.storage, &info.sender)?;

    let recipients = addresses
        .iter()
        .map(|address| deps.api.addr_validate(address))
        .collect::<StdResult<Vec<Addr>>>()?;

    let token_impl = TOKEN_IMPL.load(deps.storage)?;
    let batch = build_batch(&token_impl, &recipients, &amts);
    let paid = batch.len();
    let messages = into_cosmos_msgs(batch)?;

    let joined_amts = amts
        .iter()
        .map(Uint128::to_string)
        .collect::<Vec<_>>()
        .join(",");

    Ok(Response::new()
        .add_messages(messages)
        .add_event(
            Event::new("Pay")
                .add_attribute("addresses", addresses.join(","))
                .add_attribute("amts", joined_amts),
        )
        .add_attribute("action", "pay")
        .add_attribute("transfer_count", paid.to_string()))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Admin {} => to_json_binary(&query_admin(deps)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    Ok(ConfigResponse {
        token_impl: TOKEN_IMPL.load(deps.storage)?,
    })
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

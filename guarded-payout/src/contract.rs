//! Guarded Token Payout Contract - Entry Points

use common::admin::{
    assert_admin, execute_claim_admin, execute_update_admin, init_admin, query_admin,
};
use common::transfer::{
    assert_token_implementation, assert_token_recipient, build_transfer_message,
    execute_transfer_success_callback,
};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response,
    StdResult, Storage, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, PayoutScheduleResponse, QueryMsg,
};
use crate::state::{
    CONTRACT_NAME, CONTRACT_VERSION, FIXED_PAYOUT_AMOUNT, PAYOUT_SCHEDULE, TOKEN_IMPL,
};

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
    FIXED_PAYOUT_AMOUNT.save(deps.storage, &msg.fixed_payout_amount)?;

    for height in &msg.payout_schedule {
        PAYOUT_SCHEDULE.push_back(deps.storage, height)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("token_impl", token_impl)
        .add_attribute("fixed_payout_amount", msg.fixed_payout_amount)
        .add_attribute("scheduled_payouts", msg.payout_schedule.len().to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateAdmin { admin } => execute_update_admin(deps, &info, admin),
        ExecuteMsg::UpdateTokenImplementation { new_impl } => {
            execute_update_token_implementation(deps, info, new_impl)
        }
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
        } => execute_recipient_accept_transfer(deps, env, info, sender, recipient, amount),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
    }
}

fn execute_update_token_implementation(
    deps: DepsMut,
    info: MessageInfo,
    new_impl: String,
) -> Result<Response, ContractError> {
    assert_admin::<ContractError>(deps.storage, &info.sender)?;

    let token_impl = deps.api.addr_validate(&new_impl)?;
    TOKEN_IMPL.save(deps.storage, &token_impl)?;

    Ok(Response::new()
        .add_attribute("action", "update_token_implementation")
        .add_attribute("token_impl", token_impl))
}

/// Fails with `ThereAreStillScheduledPayouts` while any height is pending.
fn assert_after_all_scheduled_payouts(storage: &dyn Storage) -> Result<(), ContractError> {
    let remaining = PAYOUT_SCHEDULE.len(storage)?;
    if remaining > 0 {
        return Err(ContractError::ThereAreStillScheduledPayouts { remaining });
    }
    Ok(())
}

/// Fails with `BlockNumberNotYetAtTarget` unless the chain is strictly past `target`.
fn assert_block_after(env: &Env, target: u64) -> Result<(), ContractError> {
    if env.block.height <= target {
        return Err(ContractError::BlockNumberNotYetAtTarget {
            current: env.block.height,
            target,
        });
    }
    Ok(())
}

fn execute_drain_contract_balance(
    deps: DepsMut,
    info: MessageInfo,
    amt: Uint128,
) -> Result<Response, ContractError> {
    assert_admin::<ContractError>(deps.storage, &info.sender)?;
    assert_after_all_scheduled_payouts(deps.storage)?;

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

fn execute_recipient_accept_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    sender: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let token_impl = TOKEN_IMPL.load(deps.storage)?;
    assert_token_implementation::<ContractError>(&info.sender, &token_impl)?;
    assert_token_recipient::<ContractError>(&recipient, &env.contract.address)?;

    Ok(Response::new()
        .add_attribute("action", "recipient_accept_transfer")
        .add_attribute("sender", sender)
        .add_attribute("amount", amount))
}

/// Pay the fixed amount to the admin and consume the head of the schedule.
fn execute_withdraw(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let admin = assert_admin::<ContractError>(deps.storage, &info.sender)?;

    let block_limit = PAYOUT_SCHEDULE
        .front(deps.storage)?
        .ok_or(ContractError::NoMoreBlockLimitsImposed)?;
    assert_block_after(&env, block_limit)?;

    let amount = FIXED_PAYOUT_AMOUNT.load(deps.storage)?;
    let token_impl = TOKEN_IMPL.load(deps.storage)?;
    let msg = build_transfer_message(&token_impl, &admin, amount).into_cosmos_msg()?;

    PAYOUT_SCHEDULE.pop_front(deps.storage)?;
    let remaining = PAYOUT_SCHEDULE.len(deps.storage)?;

    Ok(Response::new()
        .add_message(msg)
        .add_event(
            Event::new("Withdraw")
                .add_attribute("to", &admin)
                .add_attribute("amount", amount),
        )
        .add_attribute("action", "withdraw")
        .add_attribute("block_limit", block_limit.to_string())
        .add_attribute("height", env.block.height.to_string())
        .add_attribute("remaining_payouts", remaining.to_string()))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Admin {} => to_json_binary(&query_admin(deps)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::PayoutSchedule {} => to_json_binary(&query_payout_schedule(deps)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    Ok(ConfigResponse {
        token_impl: TOKEN_IMPL.load(deps.storage)?,
        fixed_payout_amount: FIXED_PAYOUT_AMOUNT.load(deps.storage)?,
    })
}

fn query_payout_schedule(deps: Deps) -> StdResult<PayoutScheduleResponse> {
    let remaining = PAYOUT_SCHEDULE
        .iter(deps.storage)?
        .collect::<StdResult<Vec<u64>>>()?;
    Ok(PayoutScheduleResponse { remaining })
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

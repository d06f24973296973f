//! ICO Contract - Entry Points

use common::admin::{
    assert_admin, execute_claim_admin, execute_update_admin, init_admin, query_admin,
};
use common::transfer::{
    assert_token_implementation, assert_token_recipient, build_transfer_message,
    execute_transfer_success_callback, TransferMessage,
};
use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Coin, Deps, DepsMut, Env, Event, MessageInfo,
    Response, StdError, StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, IsRegisteredResponse, MigrateMsg, QueryMsg, SaleStatusResponse,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, REGISTERED_INVESTORS};

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

    if msg.token_qa_per_native_qa.is_zero() {
        return Err(StdError::generic_err("token_qa_per_native_qa must be non-zero").into());
    }

    let admin = deps.api.addr_validate(&msg.admin)?;
    init_admin(deps.storage, &admin)?;

    let config = Config {
        token_impl: deps.api.addr_validate(&msg.token_impl)?,
        token_qa_per_native_qa: msg.token_qa_per_native_qa,
        ico_deadline: msg.ico_deadline,
        funding_goal: msg.funding_goal,
        denom: msg.denom,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("token_impl", config.token_impl)
        .add_attribute("ico_deadline", config.ico_deadline.to_string())
        .add_attribute("funding_goal", config.funding_goal))
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
        ExecuteMsg::ClaimAdmin {} => execute_claim_admin(deps, &info),
        ExecuteMsg::DrainContractBalance { amt } => {
            execute_drain_contract_balance(deps, env, info, amt)
        }
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
        ExecuteMsg::BuyToken {} => execute_buy_token(deps, env, info),
    }
}

// ============================================================================
// Guards
// ============================================================================

/// `height < deadline`, else `ICOHasEnded`.
fn assert_not_after_deadline(env: &Env, config: &Config) -> Result<(), ContractError> {
    if env.block.height >= config.ico_deadline {
        return Err(ContractError::ICOHasEnded);
    }
    Ok(())
}

/// `deadline < height`, else `ICODidNotEndYet`.
fn assert_after_deadline(env: &Env, config: &Config) -> Result<(), ContractError> {
    if config.ico_deadline >= env.block.height {
        return Err(ContractError::ICODidNotEndYet);
    }
    Ok(())
}

/// `goal <= balance`, else `FundingGoalNotReached`.
fn assert_funding_goal_reached(balance: Uint128, config: &Config) -> Result<(), ContractError> {
    if config.funding_goal > balance {
        return Err(ContractError::FundingGoalNotReached);
    }
    Ok(())
}

/// `balance <= goal`, else `FundingGoalReached`. Shares the `balance == goal`
/// point with `assert_funding_goal_reached`.
fn assert_funding_goal_not_reached(
    balance: Uint128,
    config: &Config,
) -> Result<(), ContractError> {
    if balance > config.funding_goal {
        return Err(ContractError::FundingGoalReached);
    }
    Ok(())
}

fn contract_balance(deps: Deps, env: &Env, config: &Config) -> StdResult<Uint128> {
    let coin = deps
        .querier
        .query_balance(&env.contract.address, &config.denom)?;
    Ok(coin.amount)
}

// ============================================================================
// Handlers
// ============================================================================

/// Sell `attached * rate` tokens to the caller and register them as an investor.
fn execute_buy_token(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_not_after_deadline(&env, &config)?;

    // Only the sale denom can be refunded or drained later
    if let Some(coin) = info.funds.iter().find(|coin| coin.denom != config.denom) {
        return Err(StdError::generic_err(format!(
            "BuyToken accepts only {}, got {}",
            config.denom, coin.denom
        ))
        .into());
    }

    let paid = info
        .funds
        .iter()
        .find(|coin| coin.denom == config.denom)
        .map(|coin| coin.amount)
        .unwrap_or_default();
    let token_amount = paid
        .checked_mul(config.token_qa_per_native_qa)
        .map_err(StdError::from)?;

    let msg = build_transfer_message(&config.token_impl, &info.sender, token_amount)
        .into_cosmos_msg()?;

    REGISTERED_INVESTORS.save(deps.storage, &info.sender, &true)?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "buy_token")
        .add_attribute("investor", info.sender)
        .add_attribute("paid", paid)
        .add_attribute("token_amount", token_amount))
}

/// Accept tokens from the trusted ledger; tokens coming back from a
/// registered investor are refunded in native currency.
fn execute_recipient_accept_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    sender: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_token_implementation::<ContractError>(&info.sender, &config.token_impl)?;
    assert_token_recipient::<ContractError>(&recipient, &env.contract.address)?;

    // Registry keys are always validated sender addresses
    let investor = Addr::unchecked(&sender);
    if !REGISTERED_INVESTORS.has(deps.storage, &investor) {
        // Not an investor: a plain top-up of the tokens on sale
        return Ok(Response::new()
            .add_attribute("action", "recipient_accept_transfer")
            .add_attribute("sender", sender)
            .add_attribute("amount", amount));
    }

    assert_after_deadline(&env, &config)?;
    let balance = contract_balance(deps.as_ref(), &env, &config)?;
    assert_funding_goal_not_reached(balance, &config)?;

    let refund = amount
        .checked_div(config.token_qa_per_native_qa)
        .map_err(StdError::from)?;

    let mut res = Response::new();
    if !refund.is_zero() {
        let payment = TransferMessage::AddFunds {
            recipient: investor.clone(),
            amount: Coin {
                denom: config.denom,
                amount: refund,
            },
        };
        res = res
            .add_attribute("tag", payment.tag())
            .add_message(payment.into_cosmos_msg()?);
    }

    Ok(res
        .add_attribute("action", "refund")
        .add_attribute("investor", investor)
        .add_attribute("tokens_returned", amount)
        .add_attribute("refund", refund))
}

/// Send the entire native balance to the admin. The event reports `amt`
/// as requested, which need not match what was transferred.
fn execute_drain_contract_balance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amt: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_after_deadline(&env, &config)?;
    let balance = contract_balance(deps.as_ref(), &env, &config)?;
    assert_funding_goal_reached(balance, &config)?;
    assert_admin::<ContractError>(deps.storage, &info.sender)?;

    let mut res = Response::new();
    if !balance.is_zero() {
        let payment = TransferMessage::AddFunds {
            recipient: info.sender.clone(),
            amount: Coin {
                denom: config.denom,
                amount: balance,
            },
        };
        res = res
            .add_attribute("tag", payment.tag())
            .add_message(payment.into_cosmos_msg()?);
    }

    Ok(res
        .add_event(
            Event::new("DrainContractBalance")
                .add_attribute("to", &info.sender)
                .add_attribute("amount", amt),
        )
        .add_attribute("action", "drain_contract_balance")
        .add_attribute("to", info.sender)
        .add_attribute("transferred", balance))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Admin {} => to_json_binary(&query_admin(deps)?),
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::IsRegistered { address } => {
            to_json_binary(&query_is_registered(deps, address)?)
        }
        QueryMsg::SaleStatus {} => to_json_binary(&query_sale_status(deps, env)?),
    }
}

fn query_is_registered(deps: Deps, address: String) -> StdResult<IsRegisteredResponse> {
    let investor = deps.api.addr_validate(&address)?;
    Ok(IsRegisteredResponse {
        registered: REGISTERED_INVESTORS.has(deps.storage, &investor),
    })
}

fn query_sale_status(deps: Deps, env: Env) -> StdResult<SaleStatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let balance = contract_balance(deps, &env, &config)?;

    Ok(SaleStatusResponse {
        height: env.block.height,
        ico_deadline: config.ico_deadline,
        in_progress: assert_not_after_deadline(&env, &config).is_ok(),
        ended: assert_after_deadline(&env, &config).is_ok(),
        balance,
        funding_goal: config.funding_goal,
        goal_reached: assert_funding_goal_reached(balance, &config).is_ok(),
        goal_not_reached: assert_funding_goal_not_reached(balance, &config).is_ok(),
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

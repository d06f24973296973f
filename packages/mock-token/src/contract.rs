use common::{LedgerCallbackMsg, TokenLedgerMsg};
use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, QuerierWrapper,
    Response, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::BalanceResponse;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{BALANCES, CONTRACT_NAME, CONTRACT_VERSION};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    for balance in &msg.initial_balances {
        let holder = deps.api.addr_validate(&balance.address)?;
        BALANCES.save(deps.storage, &holder, &balance.amount)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("holder_count", msg.initial_balances.len().to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        TokenLedgerMsg::Transfer { to, amount } => execute_transfer(deps, info, to, amount),
    }
}

fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&to)?;

    let available = BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if available < amount {
        return Err(ContractError::InsufficientBalance {
            available,
            required: amount,
        });
    }
    BALANCES.save(deps.storage, &info.sender, &(available - amount))?;
    BALANCES.update(deps.storage, &recipient, |bal| -> StdResult<_> {
        Ok(bal.unwrap_or_default().checked_add(amount)?)
    })?;

    let mut res = Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("sender", &info.sender)
        .add_attribute("recipient", &recipient)
        .add_attribute("amount", amount);

    if is_contract(&deps.querier, &recipient) {
        res = res.add_message(WasmMsg::Execute {
            contract_addr: recipient.to_string(),
            msg: to_json_binary(&LedgerCallbackMsg::RecipientAcceptTransfer {
                sender: info.sender.to_string(),
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        });
    }
    if is_contract(&deps.querier, &info.sender) {
        res = res.add_message(WasmMsg::Execute {
            contract_addr: info.sender.to_string(),
            msg: to_json_binary(&LedgerCallbackMsg::TransferSuccessCallBack {
                sender: info.sender.to_string(),
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        });
    }

    Ok(res)
}

fn is_contract(querier: &QuerierWrapper, addr: &Addr) -> bool {
    querier.query_wasm_contract_info(addr).is_ok()
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
    }
}

fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let holder = deps.api.addr_validate(&address)?;
    let balance = BALANCES.may_load(deps.storage, &holder)?.unwrap_or_default();
    Ok(BalanceResponse { balance })
}

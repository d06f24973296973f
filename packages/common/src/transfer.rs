//! Token transfer protocol.
//!
//! Outbound side: transfer intents addressed to the token ledger (`Transfer`)
//! or plain native-currency payments (`AddFunds`). They are attached to the
//! `Response` and only run after the transition returns, so nothing the
//! ledger does is visible to the transition that sent them.
//!
//! Inbound side: the ledger notifies the originator with
//! `TransferSuccessCallBack` and the destination with
//! `RecipientAcceptTransfer`. Both arrive as fresh, unprivileged calls and
//! every guard is evaluated again on each entry.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, Response, StdResult, Uint128, WasmMsg,
};

use crate::error::{RecipientErrors, TokenErrors};

pub const TRANSFER_TAG: &str = "Transfer";
pub const ADD_FUNDS_TAG: &str = "AddFunds";

/// Messages the token ledger accepts from the custody contracts.
#[cw_serde]
pub enum TokenLedgerMsg {
    /// Move `amount` tokens from the caller to `to`.
    #[serde(rename = "Transfer")]
    Transfer { to: String, amount: Uint128 },
}

/// Callbacks the token ledger delivers while processing a `Transfer`.
#[cw_serde]
pub enum LedgerCallbackMsg {
    /// Sent to the originator once the transfer has been booked.
    #[serde(rename = "TransferSuccessCallBack")]
    TransferSuccessCallBack {
        sender: String,
        recipient: String,
        amount: Uint128,
    },
    /// Sent to the destination of the transfer.
    #[serde(rename = "RecipientAcceptTransfer")]
    RecipientAcceptTransfer {
        sender: String,
        recipient: String,
        amount: Uint128,
    },
}

/// An outbound transfer intent. Fire-and-forget: once sent, success shows up
/// only as a later callback, failure only as an aborted transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransferMessage {
    /// `Transfer` executed on `ledger` with no native currency attached.
    Transfer {
        ledger: Addr,
        to: Addr,
        amount: Uint128,
    },
    /// `AddFunds`: native currency sent straight to `recipient`.
    AddFunds { recipient: Addr, amount: Coin },
}

impl TransferMessage {
    pub fn tag(&self) -> &'static str {
        match self {
            TransferMessage::Transfer { .. } => TRANSFER_TAG,
            TransferMessage::AddFunds { .. } => ADD_FUNDS_TAG,
        }
    }

    pub fn into_cosmos_msg(self) -> StdResult<CosmosMsg> {
        let msg = match self {
            TransferMessage::Transfer { ledger, to, amount } => CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: ledger.into_string(),
                msg: to_json_binary(&TokenLedgerMsg::Transfer {
                    to: to.into_string(),
                    amount,
                })?,
                funds: vec![],
            }),
            TransferMessage::AddFunds { recipient, amount } => CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.into_string(),
                amount: vec![amount],
            }),
        };
        Ok(msg)
    }
}

/// A single token transfer of `amount` to `to` through `ledger`.
pub fn build_transfer_message(ledger: &Addr, to: &Addr, amount: Uint128) -> TransferMessage {
    TransferMessage::Transfer {
        ledger: ledger.clone(),
        to: to.clone(),
        amount,
    }
}

/// Pair `addresses` with `amounts` by position and build one transfer each.
///
/// Pairing stops at the shorter list; unpaired entries are dropped. The
/// batch comes out in reverse input order: the last pair is sent first.
/// Observers and the ledger see that order, so it is part of the ABI.
pub fn build_batch(ledger: &Addr, addresses: &[Addr], amounts: &[Uint128]) -> Vec<TransferMessage> {
    let mut batch: Vec<TransferMessage> = addresses
        .iter()
        .zip(amounts)
        .map(|(to, amount)| build_transfer_message(ledger, to, *amount))
        .collect();
    batch.reverse();
    batch
}

pub fn into_cosmos_msgs(messages: Vec<TransferMessage>) -> StdResult<Vec<CosmosMsg>> {
    messages
        .into_iter()
        .map(TransferMessage::into_cosmos_msg)
        .collect()
}

/// Fail with `WrongTokenImplementationAddress` unless the callback comes from
/// the trusted token ledger.
pub fn assert_token_implementation<E: TokenErrors>(
    caller: &Addr,
    token_impl: &Addr,
) -> Result<(), E> {
    if caller != token_impl {
        return Err(E::wrong_token_implementation_address());
    }
    Ok(())
}

/// Fail with `ThisIsNotTokenRecipient` unless this contract is the recipient
/// named by the ledger.
pub fn assert_token_recipient<E: RecipientErrors>(
    recipient: &str,
    this: &Addr,
) -> Result<(), E> {
    if recipient != this.as_str() {
        return Err(E::this_is_not_token_recipient());
    }
    Ok(())
}

/// `TransferSuccessCallBack`: landing point for the ledger's push protocol.
/// Acknowledgement only, no state is touched.
pub fn execute_transfer_success_callback(
    sender: String,
    recipient: String,
    amount: Uint128,
) -> Response {
    Response::new()
        .add_attribute("action", "transfer_success_callback")
        .add_attribute("sender", sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::{from_json, StdError};

    fn ledger() -> Addr {
        Addr::unchecked("ledger")
    }

    fn recipients(names: &[&str]) -> Vec<Addr> {
        names.iter().map(|n| Addr::unchecked(*n)).collect()
    }

    #[test]
    fn test_build_transfer_message() {
        let msg = build_transfer_message(&ledger(), &Addr::unchecked("alice"), Uint128::new(7));
        assert_eq!(msg.tag(), "Transfer");

        match msg.into_cosmos_msg().unwrap() {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr,
                msg,
                funds,
            }) => {
                assert_eq!(contract_addr, "ledger");
                assert!(funds.is_empty());
                let decoded: TokenLedgerMsg = from_json(msg).unwrap();
                assert_eq!(
                    decoded,
                    TokenLedgerMsg::Transfer {
                        to: "alice".to_string(),
                        amount: Uint128::new(7),
                    }
                );
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_transfer_wire_format() {
        let json = String::from_utf8(
            to_json_binary(&TokenLedgerMsg::Transfer {
                to: "alice".to_string(),
                amount: Uint128::new(5),
            })
            .unwrap()
            .to_vec(),
        )
        .unwrap();
        assert_eq!(json, r#"{"Transfer":{"to":"alice","amount":"5"}}"#);
    }

    #[test]
    fn test_add_funds_message() {
        let msg = TransferMessage::AddFunds {
            recipient: Addr::unchecked("bob"),
            amount: Coin::new(3, "uzil"),
        };
        assert_eq!(msg.tag(), "AddFunds");
        assert_eq!(
            msg.into_cosmos_msg().unwrap(),
            CosmosMsg::Bank(BankMsg::Send {
                to_address: "bob".to_string(),
                amount: vec![Coin::new(3, "uzil")],
            })
        );
    }

    #[test]
    fn test_batch_is_reversed() {
        let batch = build_batch(
            &ledger(),
            &recipients(&["a1", "a2"]),
            &[Uint128::new(1), Uint128::new(2)],
        );
        assert_eq!(
            batch,
            vec![
                build_transfer_message(&ledger(), &Addr::unchecked("a2"), Uint128::new(2)),
                build_transfer_message(&ledger(), &Addr::unchecked("a1"), Uint128::new(1)),
            ]
        );
    }

    #[test]
    fn test_batch_truncates_to_shorter_list() {
        let more_addresses = build_batch(
            &ledger(),
            &recipients(&["a1", "a2", "a3"]),
            &[Uint128::new(1), Uint128::new(2)],
        );
        assert_eq!(more_addresses.len(), 2);
        assert_eq!(
            more_addresses[0],
            build_transfer_message(&ledger(), &Addr::unchecked("a2"), Uint128::new(2))
        );

        let more_amounts = build_batch(
            &ledger(),
            &recipients(&["a1"]),
            &[Uint128::new(1), Uint128::new(2)],
        );
        assert_eq!(
            more_amounts,
            vec![build_transfer_message(&ledger(), &Addr::unchecked("a1"), Uint128::new(1))]
        );

        assert!(build_batch(&ledger(), &[], &[Uint128::new(1)]).is_empty());
    }

    #[derive(Debug, PartialEq)]
    enum TestError {
        Std(StdError),
        WrongTokenImplementationAddress,
        ThisIsNotTokenRecipient,
    }

    impl From<StdError> for TestError {
        fn from(err: StdError) -> Self {
            TestError::Std(err)
        }
    }

    impl TokenErrors for TestError {
        fn wrong_token_implementation_address() -> Self {
            TestError::WrongTokenImplementationAddress
        }
    }

    impl RecipientErrors for TestError {
        fn this_is_not_token_recipient() -> Self {
            TestError::ThisIsNotTokenRecipient
        }
    }

    #[test]
    fn test_inbound_guards() {
        assert!(assert_token_implementation::<TestError>(&ledger(), &ledger()).is_ok());
        assert_eq!(
            assert_token_implementation::<TestError>(&Addr::unchecked("fake"), &ledger()),
            Err(TestError::WrongTokenImplementationAddress)
        );

        let this = Addr::unchecked("contract0");
        assert!(assert_token_recipient::<TestError>("contract0", &this).is_ok());
        assert_eq!(
            assert_token_recipient::<TestError>("contract1", &this),
            Err(TestError::ThisIsNotTokenRecipient)
        );
    }
}

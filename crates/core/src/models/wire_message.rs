use crate::prelude::*;

use serde::{Deserialize, Serialize};

/// A ledger message in the `{ typeUrl, value }` shape signing clients accept.
///
/// Contract messages carry their JSON payload unencoded, the wallet encodes
/// it to bytes when building the transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "typeUrl", content = "value")]
pub enum WireMessage {
    #[serde(rename = "/cosmos.bank.v1beta1.MsgSend")]
    Send(MsgSend),

    #[serde(rename = "/cosmwasm.wasm.v1.MsgExecuteContract")]
    ExecuteContract(MsgExecuteContract),

    #[serde(rename = "/cosmwasm.wasm.v1.MsgInstantiateContract")]
    InstantiateContract(MsgInstantiateContract),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgSend {
    pub from_address: Address,
    pub to_address: Address,
    pub amount: Vec<Coin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgExecuteContract {
    pub sender: Address,
    pub contract: String,
    pub msg: serde_json::Value,
    #[serde(default)]
    pub funds: Vec<Coin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgInstantiateContract {
    pub sender: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<Address>,
    pub code_id: u64,
    pub label: String,
    pub msg: serde_json::Value,
    #[serde(default)]
    pub funds: Vec<Coin>,
}

/// Serializes a typed contract message into the JSON payload of a wire message.
pub(crate) fn contract_payload(msg: &impl Serialize) -> Result<serde_json::Value> {
    serde_json::to_value(msg).map_err(|e| Error::Encode {
        underlying: e.to_string(),
    })
}

impl WireMessage {
    pub fn execute(
        sender: Address,
        contract: impl Into<String>,
        msg: &impl Serialize,
        funds: Vec<Coin>,
    ) -> Result<Self> {
        Ok(Self::ExecuteContract(MsgExecuteContract {
            sender,
            contract: contract.into(),
            msg: contract_payload(msg)?,
            funds,
        }))
    }
}

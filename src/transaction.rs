use alloy::json_abi::JsonAbi;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    abis::message_store::{self, STORE_MESSAGE, storeMessageCall},
    chain_config::MESSAGE_STORE_PORTAL,
};

/// Hex value sent with calls that transfer no ether.
pub const NO_VALUE: &str = "0x0";

/// Contract call handed to the wallet's `sendTransaction` command.
///
/// These five fields are the whole payload. There is deliberately no chain
/// field: the target chain is configured in the developer portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Contract address
    pub address: String,
    /// ABI containing only the functions being called
    pub abi: JsonAbi,
    pub function_name: String,
    /// Positional arguments, in ABI input order
    pub args: Vec<Value>,
    /// Hex-encoded wei amount, absent for no value transfer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl TransactionRequest {
    /// Builds a `storeMessage` call against the message store at `address`.
    pub fn store_message(address: impl Into<String>, call: storeMessageCall) -> Self {
        let args = [
            call.blobId,
            call.conversationId,
            call.messageType,
            call.suiObjectId,
            call.txDigest,
        ]
        .into_iter()
        .map(Value::String)
        .collect();

        Self {
            address: address.into(),
            abi: message_store::abi(),
            function_name: STORE_MESSAGE.to_string(),
            args,
            value: Some(NO_VALUE.to_string()),
        }
    }

    /// The illustrative request used by the format report.
    pub fn example() -> Self {
        Self::store_message(MESSAGE_STORE_PORTAL.contract, message_store::example_call())
    }

    /// Top-level keys of the serialized payload.
    pub fn field_names(&self) -> Result<Vec<String>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map.keys().cloned().collect()),
            _ => Ok(Vec::new()),
        }
    }
}

//! Message store contract interface.
//!
//! Only `storeMessage` is described: wallets expect the ABI forwarded with a
//! transaction to contain just the functions being called.

use std::collections::BTreeMap;

use alloy::json_abi::{Function, InternalType, JsonAbi, Param, StateMutability};
use alloy_sol_types::sol;

sol! {
    function storeMessage(
        string blobId,
        string conversationId,
        string messageType,
        string suiObjectId,
        string txDigest
    ) external;
}

pub const STORE_MESSAGE: &str = "storeMessage";

/// Input names of `storeMessage`, in argument order.
pub const STORE_MESSAGE_INPUTS: [&str; 5] = [
    "blobId",
    "conversationId",
    "messageType",
    "suiObjectId",
    "txDigest",
];

/// JSON ABI for the message store, restricted to `storeMessage`.
pub fn abi() -> JsonAbi {
    let store_message = Function {
        name: STORE_MESSAGE.to_string(),
        inputs: STORE_MESSAGE_INPUTS.iter().map(|name| string_param(name)).collect(),
        outputs: Vec::new(),
        state_mutability: StateMutability::NonPayable,
    };

    JsonAbi {
        functions: BTreeMap::from([(STORE_MESSAGE.to_string(), vec![store_message])]),
        ..Default::default()
    }
}

/// Argument set used by the format check.
pub fn example_call() -> storeMessageCall {
    storeMessageCall {
        blobId: "test-blob-id-123".to_string(),
        conversationId: "test-conversation-456".to_string(),
        messageType: "text".to_string(),
        suiObjectId: String::new(),
        txDigest: String::new(),
    }
}

fn string_param(name: &str) -> Param {
    Param {
        ty: "string".to_string(),
        name: name.to_string(),
        components: Vec::new(),
        internal_type: Some(InternalType::Other {
            contract: None,
            ty: "string".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use alloy_sol_types::SolCall;
    use tracing_test::traced_test;

    use super::*;

    #[test]
    #[traced_test]
    fn abi_has_single_store_message_entry() {
        let abi = abi();

        assert_eq!(abi.functions().count(), 1);
        assert_eq!(abi.events().count(), 0);
        assert!(abi.constructor.is_none());

        let function = &abi.function(STORE_MESSAGE).unwrap()[0];
        let names: Vec<&str> = function.inputs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, STORE_MESSAGE_INPUTS);
        assert!(function.inputs.iter().all(|p| p.ty == "string"));
        assert!(function.outputs.is_empty());
        assert_eq!(function.state_mutability, StateMutability::NonPayable);
    }

    #[test]
    #[traced_test]
    fn json_abi_matches_sol_declaration() {
        let abi = abi();
        let function = &abi.function(STORE_MESSAGE).unwrap()[0];

        assert_eq!(function.signature(), storeMessageCall::SIGNATURE);
        assert_eq!(function.selector().0, storeMessageCall::SELECTOR);
    }

    #[test]
    #[traced_test]
    fn json_abi_serializes_internal_type() {
        let json = serde_json::to_value(abi()).unwrap();
        let entry = &json.as_array().unwrap()[0];

        assert_eq!(entry["type"], "function");
        assert_eq!(entry["name"], STORE_MESSAGE);
        assert_eq!(entry["stateMutability"], "nonpayable");
        assert_eq!(entry["inputs"][0]["internalType"], "string");
    }
}

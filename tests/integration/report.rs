use minikit_tx_format::{
    chain_config::MESSAGE_STORE_PORTAL, guide::guide_lines, report::write_report,
    transaction::TransactionRequest,
};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

fn render() -> String {
    let mut out = Vec::new();
    write_report(&mut out, &TransactionRequest::example(), &MESSAGE_STORE_PORTAL).unwrap();
    String::from_utf8(out).unwrap()
}

fn line_value<'a>(report: &'a str, prefix: &str) -> &'a str {
    report
        .lines()
        .find_map(|line| line.strip_prefix(prefix))
        .unwrap_or_else(|| panic!("missing line starting with {prefix:?}"))
}

#[test]
fn report_is_byte_identical_across_runs() {
    init_tracing();
    assert_eq!(render().as_bytes(), render().as_bytes());
}

#[test]
fn args_parse_back_in_order() {
    init_tracing();
    let report = render();

    let args: Vec<String> = serde_json::from_str(line_value(&report, "Args: ")).unwrap();
    assert_eq!(
        args,
        ["test-blob-id-123", "test-conversation-456", "text", "", ""]
    );
}

#[test]
fn value_field_is_zero_hex() {
    init_tracing();
    let report = render();

    assert_eq!(line_value(&report, "Value: "), "0x0");
}

#[test]
fn store_message_call_is_reported() {
    init_tracing();
    let report = render();

    assert_eq!(
        line_value(&report, "Address: "),
        "0x063816286ae3312e759f80Afdb10C8879b30688D"
    );
    assert_eq!(line_value(&report, "Function: "), "storeMessage");

    let abi: Value = serde_json::from_str(line_value(&report, "ABI: ")).unwrap();
    let entries = abi.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "storeMessage");

    let inputs = entries[0]["inputs"].as_array().unwrap();
    let names: Vec<&str> = inputs.iter().map(|i| i["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        ["blobId", "conversationId", "messageType", "suiObjectId", "txDigest"]
    );
    assert!(inputs.iter().all(|i| i["type"] == "string"));
}

#[test]
fn guide_lines_are_stable() {
    init_tracing();
    let first = guide_lines().to_vec();

    assert!(!first.is_empty());
    assert_eq!(first, guide_lines());
}

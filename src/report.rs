//! Console report describing the transaction shape MiniKit expects.

use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    chain_config::{MESSAGE_STORE_PORTAL, PortalConfig},
    minikit::{ExternalCallError, SendTransaction, SendTransactionInput},
    transaction::TransactionRequest,
};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("External call error: {0}")]
    ExternalCall(#[from] ExternalCallError),
}

const SEND_TRANSACTION_SAMPLE: &str = "
await MiniKit.commandsAsync.sendTransaction({
  transaction: [transactionObject],
  formatPayload: true, // Optional, defaults to true
});
  ";

const FIELD_CONTRACT: [&str; 7] = [
    "According to documentation:",
    "- address: string (Contract address)",
    "- abi: Abi | readonly unknown[] (Only include functions you're using)",
    "- functionName: string (Function to call)",
    "- args: any[] (Function arguments)",
    "- value?: string (Hex string, optional)",
    "- NO chainId field (handled by World App)",
];

const KEY_POINTS: [&str; 5] = [
    "1. Remove chainId from transaction object",
    "2. Ensure contract is specified in Developer Portal",
    "3. Use correct ABI format (only needed functions)",
    "4. Value must be hex string (0x0 for no value)",
    "5. Chain configuration is handled by World App",
];

/// Prints the report for the example transaction to stdout.
pub fn report() -> Result<(), ReportError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &TransactionRequest::example(), &MESSAGE_STORE_PORTAL)
}

/// Writes the full report for `tx`.
///
/// Output depends only on the arguments, so repeated calls are byte-identical.
pub fn write_report<W: Write>(
    out: &mut W,
    tx: &TransactionRequest,
    portal: &PortalConfig,
) -> Result<(), ReportError> {
    info!("Reporting transaction format for {}", tx.function_name);

    writeln!(out, "🧪 Testing MiniKit Transaction Format")?;
    writeln!(out, "=====================================")?;

    section(out, "📋 Test Transaction Details:", "-----------------------------")?;
    writeln!(out, "Address: {}", tx.address)?;
    writeln!(out, "Function: {}", tx.function_name)?;
    writeln!(out, "Args: {}", serde_json::to_string(&tx.args)?)?;
    writeln!(out, "Value: {}", tx.value.as_deref().unwrap_or("undefined"))?;
    writeln!(out, "ABI: {}", serde_json::to_string(&tx.abi)?)?;

    section(
        out,
        "📋 Official MiniKit Transaction Format:",
        "----------------------------------------",
    )?;
    for line in FIELD_CONTRACT {
        writeln!(out, "{line}")?;
    }

    section(out, "📋 Developer Portal Configuration:", "----------------------------------")?;
    writeln!(out, "Important: Contracts must be specified in Developer Portal")?;
    writeln!(out, "1. Go to Developer Portal")?;
    writeln!(out, "2. Configuration → Advanced")?;
    writeln!(out, "3. Add contract: {}", portal.contract)?;
    writeln!(out, "4. Select chain: {} ({})", portal.chain.name, portal.chain.id)?;

    section(out, "📋 Transaction Object Structure:", "--------------------------------")?;
    writeln!(out, "Correct format:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(tx)?)?;

    section(out, "📋 MiniKit.sendTransaction Call:", "--------------------------------")?;
    writeln!(out, "Correct API call:")?;
    writeln!(out, "{SEND_TRANSACTION_SAMPLE}")?;

    section(out, "✅ Transaction Format Test Complete", "==================================")?;
    writeln!(out)?;
    writeln!(out, "💡 Key Points:")?;
    for point in KEY_POINTS {
        writeln!(out, "{point}")?;
    }

    out.flush()?;
    debug!("Transaction format report written");
    Ok(())
}

/// Writes the report, then submits `tx` through the wallet SDK.
///
/// Returns the wallet's transaction id. A failed submission leaves the
/// already written report untouched.
pub async fn report_and_send<W, S>(
    out: &mut W,
    tx: &TransactionRequest,
    portal: &PortalConfig,
    sdk: &S,
) -> Result<String, ReportError>
where
    W: Write,
    S: SendTransaction + ?Sized,
{
    write_report(out, tx, portal)?;

    info!(
        "Sending {} to {} as app {}",
        tx.function_name,
        tx.address,
        sdk.config().app_id
    );
    let input = SendTransactionInput::new(tx.clone());
    let transaction_id = sdk.send_transaction(input).await?.into_result()?;
    info!("Transaction submitted: {}", transaction_id);

    Ok(transaction_id)
}

fn section<W: Write>(out: &mut W, title: &str, rule: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")
}

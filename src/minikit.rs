//! Boundary to the MiniKit wallet SDK.
//!
//! Nothing here talks to a wallet. Implementations of [`SendTransaction`]
//! live with whatever host embeds the mini app.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transaction::TransactionRequest;

/// App identifier registered in the developer portal.
pub const APP_ID: &str = "app_633eda004e32e457ef84472c6ef7714c";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiniKitConfig {
    pub app_id: String,
}

impl MiniKitConfig {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
        }
    }
}

impl Default for MiniKitConfig {
    fn default() -> Self {
        Self::new(APP_ID)
    }
}

/// Arguments of `commandsAsync.sendTransaction`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionInput {
    /// Calls to bundle. The format check always sends exactly one.
    pub transaction: Vec<TransactionRequest>,
    pub format_payload: bool,
}

impl SendTransactionInput {
    pub fn new(transaction: TransactionRequest) -> Self {
        Self {
            transaction: vec![transaction],
            format_payload: true,
        }
    }

    pub fn with_format_payload(mut self, format_payload: bool) -> Self {
        self.format_payload = format_payload;
        self
    }
}

/// Final payload returned by the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SendTransactionPayload {
    Success { transaction_id: String },
    Error { error_code: String },
}

impl SendTransactionPayload {
    /// Returns the transaction id, or the wallet's rejection as an error.
    pub fn into_result(self) -> Result<String, ExternalCallError> {
        match self {
            SendTransactionPayload::Success { transaction_id } => Ok(transaction_id),
            SendTransactionPayload::Error { error_code } => {
                Err(ExternalCallError::Rejected { error_code })
            }
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExternalCallError {
    #[error("Transaction rejected by wallet: {error_code}")]
    Rejected { error_code: String },
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Wallet capability that submits contract calls.
#[async_trait::async_trait]
pub trait SendTransaction: Send + Sync {
    /// Configuration identifying the calling app.
    fn config(&self) -> &MiniKitConfig;

    /// Submit the calls and wait for the wallet's final payload.
    async fn send_transaction(
        &self,
        input: SendTransactionInput,
    ) -> Result<SendTransactionPayload, ExternalCallError>;
}

//! Ledger RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to a Solana JSON-RPC endpoint
//! - Fetch transactions by signature at confirmed commitment
//! - Handle timeouts and network errors gracefully

use std::time::Duration;

use serde::Deserialize;
use tokio::time::timeout;

use crate::ledger::types::{LedgerConfig, LedgerError, LedgerResult, TransactionRecord};

/// Ledger RPC client wrapper with failover support.
#[derive(Clone)]
pub struct LedgerClient {
    /// Shared outbound HTTP client.
    http: reqwest::Client,
    /// Endpoint URLs (primary + failovers).
    endpoints: Vec<String>,
    /// Configuration.
    config: LedgerConfig,
    /// Per-attempt request timeout.
    timeout_duration: Duration,
}

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<TransactionRecord>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

impl LedgerClient {
    /// Create a new ledger client sharing the process-wide HTTP client.
    pub fn new(http: reqwest::Client, config: LedgerConfig) -> Self {
        let timeout_duration = Duration::from_secs(config.rpc_timeout_secs);
        let mut endpoints = vec![config.rpc_url.clone()];
        endpoints.extend(config.failover_urls.iter().cloned());

        tracing::info!(
            rpc_url = %config.rpc_url,
            failovers = config.failover_urls.len(),
            commitment = %config.commitment,
            "Ledger client initialized"
        );

        Self {
            http,
            endpoints,
            config,
            timeout_duration,
        }
    }

    /// Fetch a transaction by signature.
    ///
    /// Returns `Ok(None)` when the node has no record of the signature.
    /// Each endpoint attempt carries an explicit timeout; if every endpoint
    /// times out the caller sees `LedgerError::Timeout`, which is retryable.
    pub async fn get_transaction(
        &self,
        signature: &str,
    ) -> LedgerResult<Option<TransactionRecord>> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getTransaction",
            "params": [
                signature,
                {
                    "commitment": self.config.commitment,
                    "maxSupportedTransactionVersion": 0,
                }
            ]
        });

        let mut all_timed_out = true;
        for (i, endpoint) in self.endpoints.iter().enumerate() {
            let fut = self.http.post(endpoint).json(&body).send();
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(response)) => {
                    all_timed_out = false;
                    match Self::decode(response).await {
                        Ok(result) => return Ok(result),
                        Err(e) => {
                            tracing::warn!(endpoint_idx = i, error = %e, "RPC error, trying next endpoint");
                        }
                    }
                }
                Ok(Err(e)) => {
                    all_timed_out = false;
                    tracing::warn!(endpoint_idx = i, error = %e, "RPC transport error, trying next endpoint");
                }
                Err(_) => {
                    tracing::warn!(endpoint_idx = i, "RPC timeout, trying next endpoint");
                }
            }
        }

        if all_timed_out {
            Err(LedgerError::Timeout(self.config.rpc_timeout_secs))
        } else {
            Err(LedgerError::Rpc("All RPC endpoints failed".to_string()))
        }
    }

    /// Decode a JSON-RPC response body into an optional transaction record.
    async fn decode(response: reqwest::Response) -> LedgerResult<Option<TransactionRecord>> {
        let status = response.status();
        if !status.is_success() {
            return Err(LedgerError::Rpc(format!("HTTP {}", status)));
        }

        let envelope: RpcResponse = response
            .json()
            .await
            .map_err(|e| LedgerError::InvalidResponse(e.to_string()))?;

        if let Some(err) = envelope.error {
            return Err(LedgerError::Rpc(format!("{} (code {})", err.message, err.code)));
        }

        Ok(envelope.result)
    }

    /// Get the configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }
}

impl std::fmt::Debug for LedgerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("commitment", &self.config.commitment)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}

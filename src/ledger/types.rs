//! Ledger-specific types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export LedgerConfig from config module to avoid duplication
pub use crate::config::schema::LedgerConfig;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// The node answered with something we could not decode.
    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),
}

impl LedgerError {
    /// Whether a caller could reasonably retry the same lookup.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LedgerError::Timeout(_))
    }
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// A confirmed transaction as returned by `getTransaction`.
///
/// Only the fields the service reads are modeled; everything else in the
/// node's response is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Slot the transaction was processed in.
    pub slot: u64,
    /// Unix timestamp of the containing block, when available.
    pub block_time: Option<i64>,
    /// Status metadata, when available.
    pub meta: Option<TransactionMeta>,
}

/// Status metadata attached to a confirmed transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionMeta {
    /// Fee charged, in lamports.
    pub fee: u64,
    /// Account balances before the transaction.
    pub pre_balances: Vec<u64>,
    /// Account balances after the transaction.
    pub post_balances: Vec<u64>,
    /// Execution error, null on success.
    pub err: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classes() {
        assert!(LedgerError::Timeout(10).is_retryable());
        assert!(!LedgerError::Rpc("boom".to_string()).is_retryable());
        assert!(!LedgerError::InvalidResponse("bad".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = LedgerError::Timeout(10);
        assert_eq!(err.to_string(), "RPC timeout after 10 seconds");
    }

    #[test]
    fn test_record_decodes_partial_payload() {
        let json = serde_json::json!({
            "slot": 429971,
            "blockTime": 1_712_000_000,
            "meta": {
                "fee": 5000,
                "preBalances": [500_000_000, 0],
                "postBalances": [399_995_000, 100_000_000],
                "err": null,
                "logMessages": ["ignored"]
            },
            "transaction": {"signatures": ["ignored"]}
        });
        let record: TransactionRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.slot, 429971);
        assert_eq!(record.block_time, Some(1_712_000_000));
        let meta = record.meta.unwrap();
        assert_eq!(meta.fee, 5000);
        assert_eq!(meta.post_balances[1], 100_000_000);
        assert!(meta.err.is_none());
    }
}

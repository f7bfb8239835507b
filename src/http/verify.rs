//! Payment lookup handler.
//!
//! Fetches the transaction named by the submitted signature and reports
//! `verified: true` whenever a record exists. The expected amount is
//! computed for the notice only; it is never compared against the fetched
//! transaction's transfers. That gap is inherited behavior, pinned by an
//! integration test.

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::http::response::error_response;
use crate::http::server::AppState;
use crate::notify::templates;
use crate::observability::metrics;
use crate::orders::pricing::price_lamports;

/// Lookup request body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifyRequest {
    /// Transaction signature to look up. Required.
    pub signature: String,
    /// Tier used for the displayed price. Unrecognized or absent values
    /// price as premium.
    pub banner_type: String,
}

/// Lookup success payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub success: bool,
    pub message: String,
    pub details: VerifyDetails,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyDetails {
    pub signature: String,
    pub banner_type: String,
    pub verified: bool,
}

/// POST /api/verify-transaction
pub async fn verify_transaction(State(state): State<AppState>, body: Bytes) -> Response {
    let start_time = Instant::now();

    // Malformed JSON maps to the generic failure, not a field-level reject
    let request: VerifyRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!(error = %e, "Error verifying transaction");
            metrics::record_request("verify_transaction", 500, start_time);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to verify transaction",
            );
        }
    };

    if request.signature.is_empty() {
        metrics::record_request("verify_transaction", 400, start_time);
        return error_response(StatusCode::BAD_REQUEST, "Transaction signature is required");
    }

    let record = match state.ledger.get_transaction(&request.signature).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            tracing::warn!(signature = %request.signature, "Transaction not found on ledger");
            metrics::record_request("verify_transaction", 404, start_time);
            return error_response(StatusCode::NOT_FOUND, "Transaction not found");
        }
        Err(e) => {
            tracing::error!(
                signature = %request.signature,
                retryable = e.is_retryable(),
                error = %e,
                "Ledger lookup failed"
            );
            metrics::record_request("verify_transaction", 500, start_time);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to verify transaction",
            );
        }
    };

    // Display-only: the record's actual transfer amount and recipient are
    // not inspected.
    let expected_lamports = price_lamports(&request.banner_type);
    tracing::debug!(
        signature = %request.signature,
        slot = record.slot,
        expected_lamports,
        "Transaction located"
    );

    let verification_date = templates::format_notice_date(Utc::now());
    let notice =
        templates::verification_notice(&request.signature, &request.banner_type, &verification_date);
    if let Err(e) = state
        .mailer
        .send(&state.mailer.admin_recipient(), &notice)
        .await
    {
        tracing::error!(
            signature = %request.signature,
            error = %e,
            "Error sending transaction verification email"
        );
        // Continue with the process even if email fails
    }

    metrics::record_request("verify_transaction", 200, start_time);
    Json(VerifyResponse {
        success: true,
        message: "Transaction verified successfully".to_string(),
        details: VerifyDetails {
            signature: request.signature,
            banner_type: request.banner_type,
            verified: true,
        },
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_missing_tier() {
        let request: VerifyRequest = serde_json::from_str(r#"{"signature":"SIG"}"#).unwrap();
        assert_eq!(request.signature, "SIG");
        assert_eq!(request.banner_type, "");
    }

    #[test]
    fn test_request_defaults_missing_signature() {
        let request: VerifyRequest = serde_json::from_str(r#"{"bannerType":"basic"}"#).unwrap();
        assert!(request.signature.is_empty());
        assert_eq!(request.banner_type, "basic");
    }

    #[test]
    fn test_response_serialization() {
        let response = VerifyResponse {
            success: true,
            message: "Transaction verified successfully".to_string(),
            details: VerifyDetails {
                signature: "SIG".to_string(),
                banner_type: "basic".to_string(),
                verified: true,
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["details"]["verified"], true);
        assert_eq!(json["details"]["bannerType"], "basic");
    }
}

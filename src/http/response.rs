//! JSON response bodies shared by the API handlers.
//!
//! Failure bodies carry a single `error` string; there is no taxonomy
//! beyond the 400/404/500 statuses the handlers choose.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// Build a JSON error response with the given status.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: "Transaction not found".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Transaction not found"}));
    }

    #[tokio::test]
    async fn test_error_response_status() {
        let response = error_response(StatusCode::NOT_FOUND, "Transaction not found");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

//! Banner order intake handler.
//!
//! Accepts the multipart order form, assigns an order id, summarizes any
//! uploads, and triggers the admin and customer notification emails.
//! Email failures are logged and swallowed; the submission succeeds even
//! when no notice could be delivered.

use std::time::Instant;

use axum::{
    extract::{
        multipart::{Multipart, MultipartError},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::http::response::error_response;
use crate::http::server::AppState;
use crate::notify::{templates, MailerError, Recipient};
use crate::observability::metrics;
use crate::orders::pricing::is_premium;
use crate::orders::types::{OrderSubmission, Upload, MAX_SCREENSHOTS};

/// Success payload for a submitted order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeResponse {
    pub success: bool,
    pub message: String,
    pub request_id: String,
    pub details: IntakeDetails,
}

/// Echo of the key submitted fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeDetails {
    pub contract_address: String,
    pub banner_type: String,
    pub payment_signature: String,
    pub manual_payment: bool,
    pub logo_path: Option<String>,
    pub screenshot_paths: Vec<String>,
}

/// POST /api/submit-banner
pub async fn submit_banner(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let start_time = Instant::now();

    let order = match read_form(&mut multipart).await {
        Ok(order) => order,
        Err(e) => {
            tracing::error!(error = %e, "Error processing banner request");
            metrics::record_request("submit_banner", 500, start_time);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process banner request",
            );
        }
    };

    // Fresh order identifier per call; never persisted, never
    // collision-checked against storage.
    let request_id = Uuid::new_v4().to_string();

    // Synthetic storage names only. A durable storage integration would
    // accept (request_id, filename, bytes) here; today no bytes are kept.
    let logo_path = order
        .logo
        .as_ref()
        .map(|upload| upload.logo_storage_name(&request_id));
    let screenshot_paths: Vec<String> = order
        .screenshots
        .iter()
        .map(|(slot, upload)| upload.screenshot_storage_name(*slot, &request_id))
        .collect();

    let order_date = templates::format_notice_date(Utc::now());

    if let Err(e) = send_order_notices(&state, &order, &request_id, &order_date).await {
        tracing::error!(
            request_id = %request_id,
            error = %e,
            "Error sending order notification email"
        );
        // Continue with the process even if email fails
    }

    tracing::info!(
        request_id = %request_id,
        banner_type = %order.banner_type,
        "Banner order accepted"
    );
    metrics::record_request("submit_banner", 200, start_time);

    Json(IntakeResponse {
        success: true,
        message: "Banner request submitted successfully".to_string(),
        request_id,
        details: IntakeDetails {
            contract_address: order.contract_address,
            banner_type: order.banner_type,
            payment_signature: order.payment_signature,
            manual_payment: order.manual_payment,
            logo_path,
            screenshot_paths,
        },
    })
    .into_response()
}

/// Send the admin notice, then the customer confirmation.
///
/// Both sends share one error scope: if the admin notice fails, the
/// customer confirmation is skipped.
async fn send_order_notices(
    state: &AppState,
    order: &OrderSubmission,
    request_id: &str,
    order_date: &str,
) -> Result<(), MailerError> {
    let admin_notice = templates::admin_order_notice(order, request_id, order_date);
    state
        .mailer
        .send(&state.mailer.admin_recipient(), &admin_notice)
        .await?;
    tracing::info!(request_id = %request_id, "Order notice sent to operator");

    let confirmation = templates::customer_confirmation(order, request_id);
    state
        .mailer
        .send(&Recipient::from_address(&order.email), &confirmation)
        .await?;
    tracing::info!(request_id = %request_id, customer = %order.email, "Confirmation sent to customer");

    Ok(())
}

/// Collect the multipart form into an order.
///
/// No field is validated beyond being readable; absent text fields stay
/// empty. Screenshot parts are captured for any slot 0..MAX_SCREENSHOTS
/// but kept only when the tier is exactly "premium".
async fn read_form(multipart: &mut Multipart) -> Result<OrderSubmission, MultipartError> {
    let mut order = OrderSubmission::default();
    let mut screenshots: Vec<(usize, Upload)> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "contractAddress" => order.contract_address = field.text().await?,
            "bannerText" => order.banner_text = field.text().await?,
            "bannerDescription" => order.banner_description = field.text().await?,
            "email" => order.email = field.text().await?,
            "telegram" => order.telegram = field.text().await?,
            "bannerType" => order.banner_type = field.text().await?,
            "paymentSignature" => order.payment_signature = field.text().await?,
            "manualPayment" => order.manual_payment = field.text().await? == "true",
            "logo" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                if !file_name.is_empty() || !bytes.is_empty() {
                    order.logo = Some(Upload {
                        file_name,
                        size: bytes.len(),
                    });
                }
            }
            other => {
                if let Some(slot) = screenshot_slot(other) {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    if !file_name.is_empty() || !bytes.is_empty() {
                        screenshots.push((
                            slot,
                            Upload {
                                file_name,
                                size: bytes.len(),
                            },
                        ));
                    }
                }
                // Unknown fields are ignored
            }
        }
    }

    // Screenshots only apply to the premium tier; the tier field may
    // arrive after the file parts, so filter once the form is complete.
    if is_premium(&order.banner_type) {
        screenshots.sort_by_key(|(slot, _)| *slot);
        order.screenshots = screenshots;
    }

    Ok(order)
}

/// Parse a `screenshot_N` field name into a valid slot index.
fn screenshot_slot(name: &str) -> Option<usize> {
    let slot: usize = name.strip_prefix("screenshot_")?.parse().ok()?;
    (slot < MAX_SCREENSHOTS).then_some(slot)
}

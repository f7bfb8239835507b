//! Email body rendering.
//!
//! Every notice carries both an HTML and a plain-text body. Rendering is a
//! pure function of the order data, so the content can be asserted in tests
//! without touching the provider.

use chrono::{DateTime, Utc};

use crate::orders::pricing::price_display;
use crate::orders::types::OrderSubmission;

/// A fully rendered email, ready for the mailer.
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Human-readable timestamp used in notice bodies.
pub fn format_notice_date(now: DateTime<Utc>) -> String {
    now.format("%B %-d, %Y, %I:%M:%S %p UTC").to_string()
}

fn or_not_provided(value: &str) -> &str {
    if value.is_empty() {
        "Not provided"
    } else {
        value
    }
}

fn logo_details(order: &OrderSubmission) -> String {
    match &order.logo {
        Some(upload) => format!("Logo: {} ({} bytes)", upload.file_name, upload.size),
        None => "No logo uploaded".to_string(),
    }
}

/// Screenshot summary, one line per uploaded slot. The separator differs
/// between the HTML and text bodies.
fn screenshot_details(order: &OrderSubmission, separator: &str) -> String {
    if order.screenshots.is_empty() {
        return "No screenshots uploaded".to_string();
    }
    order
        .screenshots
        .iter()
        .map(|(slot, upload)| {
            format!(
                "Screenshot {}: {} ({} bytes)",
                slot + 1,
                upload.file_name,
                upload.size
            )
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Operator notice for a new banner order.
pub fn admin_order_notice(
    order: &OrderSubmission,
    request_id: &str,
    order_date: &str,
) -> RenderedEmail {
    let tier = order.banner_type.to_uppercase();
    let method = if order.manual_payment {
        "Manual Payment"
    } else {
        "Direct Wallet Payment"
    };
    let amount = price_display(&order.banner_type);
    let logo = logo_details(order);
    let premium = crate::orders::pricing::is_premium(&order.banner_type);

    let html_screenshots = if premium {
        format!("<p>{}</p>", screenshot_details(order, "<br>"))
    } else {
        String::new()
    };
    let text_screenshots = if premium {
        screenshot_details(order, "\n")
    } else {
        String::new()
    };

    let html = format!(
        "<h1>New Banner Order</h1>\n\
         <p><strong>Order ID:</strong> {request_id}</p>\n\
         <p><strong>Date:</strong> {order_date}</p>\n\
         \n\
         <h2>Customer Details</h2>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Telegram:</strong> {telegram}</p>\n\
         \n\
         <h2>Banner Details</h2>\n\
         <p><strong>Type:</strong> {tier}</p>\n\
         <p><strong>Contract Address:</strong> {contract}</p>\n\
         <p><strong>Banner Text:</strong> {banner_text}</p>\n\
         \n\
         <h2>Design Instructions</h2>\n\
         <p style=\"white-space: pre-line;\">{description}</p>\n\
         \n\
         <h2>Payment Details</h2>\n\
         <p><strong>Method:</strong> {method}</p>\n\
         <p><strong>Transaction Signature:</strong> {signature}</p>\n\
         <p><strong>Amount:</strong> {amount} SOL</p>\n\
         \n\
         <h2>Uploaded Files</h2>\n\
         <p>{logo}</p>\n\
         {html_screenshots}",
        email = order.email,
        telegram = or_not_provided(&order.telegram),
        contract = order.contract_address,
        banner_text = or_not_provided(&order.banner_text),
        description = if order.banner_description.is_empty() {
            "No specific design instructions provided"
        } else {
            order.banner_description.as_str()
        },
        signature = order.payment_signature,
    );

    let text = format!(
        "NEW BANNER ORDER\n\
         ----------------\n\
         Order ID: {request_id}\n\
         Date: {order_date}\n\
         \n\
         CUSTOMER DETAILS\n\
         ----------------\n\
         Email: {email}\n\
         Telegram: {telegram}\n\
         \n\
         BANNER DETAILS\n\
         --------------\n\
         Type: {tier}\n\
         Contract Address: {contract}\n\
         Banner Text: {banner_text}\n\
         \n\
         DESIGN INSTRUCTIONS\n\
         ------------------\n\
         {description}\n\
         \n\
         PAYMENT DETAILS\n\
         --------------\n\
         Method: {method}\n\
         Transaction Signature: {signature}\n\
         Amount: {amount} SOL\n\
         \n\
         UPLOADED FILES\n\
         -------------\n\
         {logo}\n\
         {text_screenshots}",
        email = order.email,
        telegram = or_not_provided(&order.telegram),
        contract = order.contract_address,
        banner_text = or_not_provided(&order.banner_text),
        description = if order.banner_description.is_empty() {
            "No specific design instructions provided"
        } else {
            order.banner_description.as_str()
        },
        signature = order.payment_signature,
    );

    RenderedEmail {
        subject: format!("New Banner Order: {} - {}", tier, request_id),
        html,
        text,
    }
}

/// Customer-facing order confirmation.
pub fn customer_confirmation(order: &OrderSubmission, request_id: &str) -> RenderedEmail {
    let tier = order.banner_type.to_uppercase();
    let amount = price_display(&order.banner_type);

    let html = format!(
        "<h1>Thank you for your order!</h1>\n\
         \n\
         <p>Your banner request has been received and is being processed. \
         We'll create your custom {banner_type} banner as soon as possible.</p>\n\
         \n\
         <h2>Order Details:</h2>\n\
         <ul>\n\
         <li><strong>Order ID:</strong> {request_id}</li>\n\
         <li><strong>Banner Type:</strong> {tier}</li>\n\
         <li><strong>Amount Paid:</strong> {amount} SOL</li>\n\
         </ul>\n\
         \n\
         <p>We'll send your completed banner to this email address when it's ready.</p>\n\
         \n\
         <p>If you have any questions, please contact us at \
         <a href=\"mailto:solbannerr@gmail.com\">solbannerr@gmail.com</a>.</p>\n\
         \n\
         <p>Thank you for choosing BannerSOL!</p>",
        banner_type = order.banner_type,
    );

    let text = format!(
        "Thank you for your order!\n\
         \n\
         Your banner request has been received and is being processed. \
         We'll create your custom {banner_type} banner as soon as possible.\n\
         \n\
         Order Details:\n\
         - Order ID: {request_id}\n\
         - Banner Type: {tier}\n\
         - Amount Paid: {amount} SOL\n\
         \n\
         We'll send your completed banner to this email address when it's ready.\n\
         \n\
         If you have any questions, please contact us at solbannerr@gmail.com.\n\
         \n\
         Thank you for choosing BannerSOL!",
        banner_type = order.banner_type,
    );

    RenderedEmail {
        subject: format!("Your BannerSOL Order Confirmation - {}", request_id),
        html,
        text,
    }
}

/// Operator notice for a completed payment lookup.
pub fn verification_notice(
    signature: &str,
    banner_type: &str,
    verification_date: &str,
) -> RenderedEmail {
    let tier = banner_type.to_uppercase();
    let amount = price_display(banner_type);

    let html = format!(
        "<h1>Transaction Verification</h1>\n\
         <p><strong>Date:</strong> {verification_date}</p>\n\
         \n\
         <h2>Payment Details</h2>\n\
         <p><strong>Transaction Signature:</strong> {signature}</p>\n\
         <p><strong>Banner Type:</strong> {tier}</p>\n\
         <p><strong>Amount:</strong> {amount} SOL</p>\n\
         \n\
         <p>This transaction has been verified and is awaiting banner submission from the customer.</p>\n\
         <p>You will receive another email when the customer completes their banner request.</p>"
    );

    let text = format!(
        "TRANSACTION VERIFICATION\n\
         -----------------------\n\
         Date: {verification_date}\n\
         \n\
         PAYMENT DETAILS\n\
         --------------\n\
         Transaction Signature: {signature}\n\
         Banner Type: {tier}\n\
         Amount: {amount} SOL\n\
         \n\
         This transaction has been verified and is awaiting banner submission from the customer.\n\
         You will receive another email when the customer completes their banner request."
    );

    RenderedEmail {
        subject: format!("Transaction Verified: {} Banner Payment", tier),
        html,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::types::Upload;
    use chrono::TimeZone;

    fn sample_order() -> OrderSubmission {
        OrderSubmission {
            contract_address: "C1".to_string(),
            banner_text: "Buy now".to_string(),
            banner_description: String::new(),
            email: "alice@example.com".to_string(),
            telegram: String::new(),
            banner_type: "premium".to_string(),
            payment_signature: "SIG1".to_string(),
            manual_payment: false,
            logo: Some(Upload {
                file_name: "logo.png".to_string(),
                size: 1234,
            }),
            screenshots: vec![(
                0,
                Upload {
                    file_name: "shot.png".to_string(),
                    size: 99,
                },
            )],
        }
    }

    #[test]
    fn test_notice_date_format() {
        let date = Utc.with_ymd_and_hms(2024, 4, 1, 13, 5, 9).unwrap();
        assert_eq!(format_notice_date(date), "April 1, 2024, 01:05:09 PM UTC");
    }

    #[test]
    fn test_admin_notice_contents() {
        let order = sample_order();
        let email = admin_order_notice(&order, "REQ-1", "April 1, 2024");

        assert_eq!(email.subject, "New Banner Order: PREMIUM - REQ-1");
        assert!(email.html.contains("Order ID:</strong> REQ-1"));
        assert!(email.html.contains("Type:</strong> PREMIUM"));
        assert!(email.html.contains("Amount:</strong> 0.2 SOL"));
        assert!(email.html.contains("Direct Wallet Payment"));
        assert!(email.html.contains("Logo: logo.png (1234 bytes)"));
        assert!(email.html.contains("Screenshot 1: shot.png (99 bytes)"));
        assert!(email.html.contains("No specific design instructions provided"));
        assert!(email.text.contains("Telegram: Not provided"));
        assert!(email.text.contains("Amount: 0.2 SOL"));
    }

    #[test]
    fn test_admin_notice_basic_tier_omits_screenshots() {
        let mut order = sample_order();
        order.banner_type = "basic".to_string();
        order.manual_payment = true;
        order.screenshots.clear();
        let email = admin_order_notice(&order, "REQ-2", "April 1, 2024");

        assert!(email.html.contains("Amount:</strong> 0.1 SOL"));
        assert!(email.html.contains("Manual Payment"));
        assert!(!email.html.contains("Screenshot"));
        assert!(!email.text.contains("No screenshots uploaded"));
    }

    #[test]
    fn test_customer_confirmation_contents() {
        let order = sample_order();
        let email = customer_confirmation(&order, "REQ-3");

        assert_eq!(email.subject, "Your BannerSOL Order Confirmation - REQ-3");
        assert!(email.html.contains("custom premium banner"));
        assert!(email.text.contains("Order ID: REQ-3"));
        assert!(email.text.contains("Amount Paid: 0.2 SOL"));
    }

    #[test]
    fn test_verification_notice_contents() {
        let email = verification_notice("SIG9", "basic", "April 1, 2024");

        assert_eq!(email.subject, "Transaction Verified: BASIC Banner Payment");
        assert!(email.html.contains("Transaction Signature:</strong> SIG9"));
        assert!(email.text.contains("Amount: 0.1 SOL"));
    }
}

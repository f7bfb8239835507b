//! Transactional email client (Mailjet v3.1 REST API).
//!
//! # Responsibilities
//! - Build the provider's send payload from a rendered email
//! - POST it with basic auth and an explicit timeout
//! - Surface failures as MailerError; callers decide whether to swallow
//!
//! One client is constructed at startup and injected into handlers, rather
//! than re-created per request.

use std::time::Duration;

use thiserror::Error;
use tokio::time::timeout;

use crate::config::schema::MailerConfig;
use crate::notify::templates::RenderedEmail;

/// Errors that can occur when sending mail.
#[derive(Debug, Error)]
pub enum MailerError {
    /// Transport-level failure (DNS, TCP, TLS).
    #[error("Mail transport error: {0}")]
    Transport(String),

    /// Provider answered with a non-success status.
    #[error("Mail provider returned HTTP {0}")]
    Status(u16),

    /// Send did not complete in time.
    #[error("Mail send timed out after {0} seconds")]
    Timeout(u64),
}

/// A resolved recipient.
#[derive(Debug, Clone)]
pub struct Recipient {
    pub email: String,
    pub name: String,
}

impl Recipient {
    /// Build a recipient from a bare address, using the part before the
    /// '@' as the display name.
    pub fn from_address(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            email: email.to_string(),
            name,
        }
    }
}

/// Mailjet send client. Cheap to clone; shares the process-wide
/// reqwest client.
#[derive(Clone)]
pub struct Mailer {
    http: reqwest::Client,
    config: MailerConfig,
    timeout_duration: Duration,
}

impl Mailer {
    /// Create a new mailer sharing the process-wide HTTP client.
    pub fn new(http: reqwest::Client, config: MailerConfig) -> Self {
        let timeout_duration = Duration::from_secs(config.send_timeout_secs);
        Self {
            http,
            config,
            timeout_duration,
        }
    }

    /// The operator notification recipient.
    pub fn admin_recipient(&self) -> Recipient {
        Recipient {
            email: self.config.admin_email.clone(),
            name: self.config.admin_name.clone(),
        }
    }

    /// Send one rendered email to one recipient.
    pub async fn send(&self, to: &Recipient, email: &RenderedEmail) -> Result<(), MailerError> {
        let url = format!("{}/v3.1/send", self.config.base_url.trim_end_matches('/'));
        let payload = self.payload(to, email);

        let fut = self
            .http
            .post(&url)
            .basic_auth(&self.config.api_key, Some(&self.config.secret_key))
            .json(&payload)
            .send();

        let response = match timeout(self.timeout_duration, fut).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(MailerError::Transport(e.to_string())),
            Err(_) => return Err(MailerError::Timeout(self.config.send_timeout_secs)),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(MailerError::Status(status.as_u16()));
        }

        tracing::info!(
            to = %to.email,
            subject = %email.subject,
            "Email sent"
        );
        Ok(())
    }

    /// Build the provider's v3.1 send payload.
    fn payload(&self, to: &Recipient, email: &RenderedEmail) -> serde_json::Value {
        serde_json::json!({
            "Messages": [
                {
                    "From": {
                        "Email": self.config.from_email,
                        "Name": self.config.from_name,
                    },
                    "To": [
                        {
                            "Email": to.email,
                            "Name": to.name,
                        }
                    ],
                    "Subject": email.subject,
                    "TextPart": email.text,
                    "HTMLPart": email.html,
                }
            ]
        })
    }
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer")
            .field("base_url", &self.config.base_url)
            .field("from_email", &self.config.from_email)
            .field("timeout_secs", &self.config.send_timeout_secs)
            .finish()
    }
}

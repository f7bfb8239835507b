//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the banner store service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address, body limits).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Transactional email provider settings.
    pub mailer: MailerConfig,

    /// Ledger RPC settings.
    pub ledger: LedgerConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum request body size in bytes (multipart uploads included).
    pub max_body_size: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            max_body_size: 10 * 1024 * 1024,
        }
    }
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Transactional email provider (Mailjet v3.1 REST API) configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MailerConfig {
    /// Base URL of the send API. Overridable for testing.
    pub base_url: String,

    /// API key. Usually supplied via the MAILJET_API_KEY environment variable.
    pub api_key: String,

    /// Secret key. Usually supplied via the MAILJET_SECRET_KEY environment variable.
    pub secret_key: String,

    /// Sender address on outgoing mail.
    pub from_email: String,

    /// Sender display name.
    pub from_name: String,

    /// Operator address that receives order and verification notices.
    pub admin_email: String,

    /// Operator display name.
    pub admin_name: String,

    /// Send request timeout in seconds.
    pub send_timeout_secs: u64,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mailjet.com".to_string(),
            api_key: String::new(),
            secret_key: String::new(),
            from_email: "noreply@yourdomain.com".to_string(),
            from_name: "BannerSOL".to_string(),
            admin_email: "solbannerr@gmail.com".to_string(),
            admin_name: "BannerSOL Admin".to_string(),
            send_timeout_secs: 10,
        }
    }
}

/// Ledger RPC configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Failover JSON-RPC endpoint URLs.
    #[serde(default)]
    pub failover_urls: Vec<String>,

    /// Commitment level for transaction lookups.
    pub commitment: String,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Wallet expected to receive banner payments. Carried in notices;
    /// not yet compared against fetched transactions.
    pub recipient_wallet: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            failover_urls: Vec::new(),
            commitment: "confirmed".to_string(),
            rpc_timeout_secs: 10,
            recipient_wallet: "6zhLuGqFfVfYsRNUrkXSMxhCpKK63JCJvFccosBBhqf8".to_string(),
        }
    }
}

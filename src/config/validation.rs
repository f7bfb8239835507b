//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parseable)
//! - Check endpoint URLs are well-formed
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::AppConfig;

/// A single semantic configuration problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address".to_string(),
            message: format!("not a valid socket address: {}", config.listener.bind_address),
        });
    }

    if config.listener.max_body_size == 0 {
        errors.push(ValidationError {
            field: "listener.max_body_size".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if url::Url::parse(&config.mailer.base_url).is_err() {
        errors.push(ValidationError {
            field: "mailer.base_url".to_string(),
            message: format!("not a valid URL: {}", config.mailer.base_url),
        });
    }

    if config.mailer.send_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "mailer.send_timeout_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if url::Url::parse(&config.ledger.rpc_url).is_err() {
        errors.push(ValidationError {
            field: "ledger.rpc_url".to_string(),
            message: format!("not a valid URL: {}", config.ledger.rpc_url),
        });
    }

    for (i, u) in config.ledger.failover_urls.iter().enumerate() {
        if url::Url::parse(u).is_err() {
            errors.push(ValidationError {
                field: format!("ledger.failover_urls[{}]", i),
                message: format!("not a valid URL: {}", u),
            });
        }
    }

    if config.ledger.rpc_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "ledger.rpc_timeout_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError {
            field: "observability.metrics_address".to_string(),
            message: format!(
                "not a valid socket address: {}",
                config.observability.metrics_address
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.ledger.rpc_url = "::bad::".to_string();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.field == "listener.bind_address"));
        assert!(errors.iter().any(|e| e.field == "ledger.rpc_url"));
        assert!(errors.iter().any(|e| e.field == "timeouts.request_secs"));
    }

    #[test]
    fn test_bad_failover_url() {
        let mut config = AppConfig::default();
        config.ledger.failover_urls = vec!["http://ok.example".to_string(), "nope".to_string()];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "ledger.failover_urls[1]");
    }
}

//! Structured logging.
//!
//! # Responsibilities
//! - Document the logging conventions used across the service
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Subscriber initialized once in main.rs with EnvFilter
//! - Handlers attach request_id / signature fields to every event
//! - Notification failures log at error level but never fail a request

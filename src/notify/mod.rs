//! Outbound notification subsystem.
//!
//! # Data Flow
//! ```text
//! handler
//!     → templates.rs (render HTML + text bodies)
//!     → mailer.rs (Mailjet v3.1 send, basic auth, timeout)
//! ```
//!
//! # Design Decisions
//! - Send failures are logged and swallowed by callers; a notification
//!   must never change the outcome of the request that triggered it
//! - The client is built once at startup and injected via AppState

pub mod mailer;
pub mod templates;

pub use mailer::{Mailer, MailerError, Recipient};
pub use templates::RenderedEmail;

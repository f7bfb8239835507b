//! Read-only ledger integration.
//!
//! # Data Flow
//! ```text
//! verify handler
//!     → client.rs (JSON-RPC getTransaction, confirmed commitment)
//!     → types.rs (TransactionRecord / LedgerError)
//! ```
//!
//! # Design Decisions
//! - One process-wide reqwest client shared with the mailer
//! - Explicit per-attempt timeout; a hung node never stalls a request
//! - Timeout maps to a retryable error class, other failures do not

pub mod client;
pub mod types;

pub use client::LedgerClient;
pub use types::{LedgerError, LedgerResult, TransactionRecord};

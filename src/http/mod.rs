//! HTTP API subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, state injection)
//!     → intake.rs (POST /api/submit-banner, multipart)
//!     → verify.rs (POST /api/verify-transaction, JSON)
//!     → response.rs (shared JSON error bodies)
//! ```

pub mod intake;
pub mod response;
pub mod server;
pub mod verify;

pub use server::{AppState, HttpServer};

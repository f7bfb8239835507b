//! Banner store API library.
//!
//! Two stateless endpoints for a storefront selling banner advertisement
//! slots paid in SOL: multipart order intake and payment-signature lookup,
//! each fanning out notification emails through a transactional provider.

pub mod config;
pub mod http;
pub mod ledger;
pub mod notify;
pub mod observability;
pub mod orders;

pub use config::AppConfig;
pub use http::HttpServer;

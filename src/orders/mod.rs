//! Banner order domain types and pricing.

pub mod pricing;
pub mod types;

pub use types::{OrderSubmission, Upload, MAX_SCREENSHOTS};

//! Order submission types.

use serde::{Deserialize, Serialize};

/// Maximum number of screenshot slots on a premium order.
pub const MAX_SCREENSHOTS: usize = 3;

/// Metadata captured from an uploaded file. Bytes are not persisted;
/// durable storage is a deferred integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Upload {
    /// Client-supplied file name.
    pub file_name: String,
    /// Size of the uploaded bytes.
    pub size: usize,
}

impl Upload {
    /// Synthetic storage name for a logo upload.
    pub fn logo_storage_name(&self, request_id: &str) -> String {
        format!("logo-{}-{}", request_id, self.file_name)
    }

    /// Synthetic storage name for a screenshot upload in a given slot.
    pub fn screenshot_storage_name(&self, slot: usize, request_id: &str) -> String {
        format!("screenshot-{}-{}-{}", slot, request_id, self.file_name)
    }
}

/// One banner order, alive only for the duration of a single request.
#[derive(Debug, Clone, Default)]
pub struct OrderSubmission {
    pub contract_address: String,
    pub banner_text: String,
    pub banner_description: String,
    pub email: String,
    pub telegram: String,
    /// Raw tier string as submitted. Not validated; pricing treats
    /// anything other than "basic" as premium.
    pub banner_type: String,
    pub payment_signature: String,
    pub manual_payment: bool,
    pub logo: Option<Upload>,
    /// Screenshot uploads keyed by slot index (0..MAX_SCREENSHOTS).
    /// Only populated when the tier is exactly "premium".
    pub screenshots: Vec<(usize, Upload)>,
}

//! Request types for the Audit Calculation Engine API.
//!
//! The five calculator endpoints take the calculator input records from
//! [`crate::models`] directly; only the document upload needs its own body.

use serde::{Deserialize, Serialize};

use crate::intake::{DocumentBatch, DocumentDescriptor};

/// Request body for the `/{tool}/documents` endpoint.
///
/// `primary` and `secondary` follow the tool's upload slots, so for the
/// salary reconciliation they hold the reported and the actual salary
/// documents. Single-slot tools omit `secondary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentBatchRequest {
    /// Documents for the first upload slot, in upload order.
    pub primary: Vec<DocumentDescriptor>,
    /// Documents for the second upload slot, in upload order.
    #[serde(default)]
    pub secondary: Vec<DocumentDescriptor>,
}

impl From<DocumentBatchRequest> for DocumentBatch {
    fn from(request: DocumentBatchRequest) -> Self {
        DocumentBatch::new(request.primary, request.secondary)
    }
}

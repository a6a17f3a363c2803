//! Document intake for the Audit Calculation Engine.
//!
//! An intake turns a batch of uploaded documents into the calculator input
//! for a tool. A batch is split into the tool's upload slots: the primary
//! side and, for the comparison tools, a secondary side. Extraction itself is pluggable; the engine ships with
//! [`MockDocumentIntake`], which checks the batch and returns fixed sample
//! figures for each tool.

mod mock;

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AuditRequest, AuditTool};

pub use mock::{ACCEPTED_EXTENSIONS, MAX_DOCUMENT_BYTES, MockDocumentIntake, sample_request};

/// An uploaded document as seen by the intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDescriptor {
    /// File name including its extension.
    pub name: String,
    /// File size in bytes.
    pub size_bytes: u64,
}

impl DocumentDescriptor {
    /// Creates a descriptor.
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// The lower-cased extension, without the dot.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, extension)| extension.to_ascii_lowercase())
    }
}

/// Documents uploaded for one calculation, grouped by upload slot.
///
/// `primary` fills the tool's first slot (reported salary, book balance,
/// bank statement and so on), `secondary` its second.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentBatch {
    /// Documents for the first upload slot.
    pub primary: Vec<DocumentDescriptor>,
    /// Documents for the second upload slot; empty for the tax audit.
    #[serde(default)]
    pub secondary: Vec<DocumentDescriptor>,
}

impl DocumentBatch {
    /// Creates a batch with both sides filled.
    pub fn new(primary: Vec<DocumentDescriptor>, secondary: Vec<DocumentDescriptor>) -> Self {
        Self { primary, secondary }
    }

    /// Creates a batch for a single-slot tool.
    pub fn single(documents: Vec<DocumentDescriptor>) -> Self {
        Self::new(documents, Vec::new())
    }

    /// The sides in slot order.
    pub fn sides(&self) -> [&[DocumentDescriptor]; 2] {
        [&self.primary, &self.secondary]
    }

    /// Total number of documents across both sides.
    pub fn len(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }

    /// Whether neither side holds a document.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extracts calculator input from uploaded documents.
pub trait DocumentIntake: Send + Sync {
    /// Builds the request for `tool` from `batch`.
    ///
    /// Returns `NoDocuments` naming the first empty upload slot and
    /// `InvalidDocument` for a document the intake cannot take.
    fn extract(&self, tool: AuditTool, batch: &DocumentBatch) -> EngineResult<AuditRequest>;

    /// Human-readable intake name, used in logs.
    fn name(&self) -> &str;
}

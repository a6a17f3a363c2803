//! Document intake that returns fixed sample figures.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditRequest, AuditTool, BankVouchingInput, OpeningBalanceInput, ProfessionalTaxInput,
    SalaryReconciliationInput, TaxAuditInput,
};

use super::{DocumentBatch, DocumentDescriptor, DocumentIntake};

/// Largest accepted file, 10 MB.
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Extensions the intake can read.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg"];

/// Checks uploads and answers with canned figures.
///
/// # Example
///
/// ```
/// use audit_engine::intake::{DocumentBatch, DocumentDescriptor, DocumentIntake, MockDocumentIntake};
/// use audit_engine::models::{AuditRequest, AuditTool};
///
/// let intake = MockDocumentIntake;
/// let batch = DocumentBatch::single(vec![DocumentDescriptor::new("form16.pdf", 2048)]);
/// let request = intake.extract(AuditTool::TaxAudit, &batch).unwrap();
/// assert!(matches!(request, AuditRequest::TaxAudit(_)));
///
/// // Comparison tools need documents on both sides.
/// let one_sided = DocumentBatch::single(vec![DocumentDescriptor::new("reported.pdf", 2048)]);
/// assert!(intake.extract(AuditTool::SalaryReconciliation, &one_sided).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDocumentIntake;

impl MockDocumentIntake {
    fn check_batch(batch: &DocumentBatch, tool: AuditTool) -> EngineResult<()> {
        let slots = tool.upload_slots();
        let [_, secondary] = batch.sides();
        if slots.len() < 2 {
            if let Some(extra) = secondary.first() {
                return Err(EngineError::InvalidDocument {
                    name: extra.name.clone(),
                    message: format!("{} takes a single upload slot", tool),
                });
            }
        }

        for (slot, documents) in slots.iter().zip(batch.sides()) {
            if documents.is_empty() {
                return Err(EngineError::NoDocuments {
                    tool: tool.id().to_string(),
                    slot: slot.label.to_string(),
                });
            }

            if let Some(extra) = documents.get(slot.max_files) {
                return Err(EngineError::InvalidDocument {
                    name: extra.name.clone(),
                    message: format!(
                        "{} takes at most {} files (got {})",
                        slot.label,
                        slot.max_files,
                        documents.len()
                    ),
                });
            }

            documents.iter().try_for_each(check_document)?;
        }

        Ok(())
    }
}

fn check_document(document: &DocumentDescriptor) -> EngineResult<()> {
    if document.size_bytes > MAX_DOCUMENT_BYTES {
        return Err(EngineError::InvalidDocument {
            name: document.name.clone(),
            message: format!(
                "file is {} bytes, the limit is {} bytes",
                document.size_bytes, MAX_DOCUMENT_BYTES
            ),
        });
    }

    match document.extension() {
        Some(extension) if ACCEPTED_EXTENSIONS.contains(&extension.as_str()) => Ok(()),
        _ => Err(EngineError::InvalidDocument {
            name: document.name.clone(),
            message: "only PDF, PNG and JPG files are accepted".to_string(),
        }),
    }
}

impl DocumentIntake for MockDocumentIntake {
    fn extract(&self, tool: AuditTool, batch: &DocumentBatch) -> EngineResult<AuditRequest> {
        Self::check_batch(batch, tool)?;
        debug!(
            tool = %tool,
            primary = batch.primary.len(),
            secondary = batch.secondary.len(),
            "Returning sample figures"
        );
        Ok(sample_request(tool))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// The sample figures returned for each tool.
pub fn sample_request(tool: AuditTool) -> AuditRequest {
    match tool {
        AuditTool::TaxAudit => AuditRequest::TaxAudit(TaxAuditInput {
            taxable_income: Decimal::from(850_000),
        }),
        AuditTool::SalaryReconciliation => {
            AuditRequest::SalaryReconciliation(SalaryReconciliationInput {
                reported_salary: Decimal::from(750_000),
                actual_salary: Decimal::from(780_000),
            })
        }
        AuditTool::ProfessionalTax => AuditRequest::ProfessionalTax(ProfessionalTaxInput {
            declared_amount: Decimal::from(18_000),
            verified_amount: Decimal::from(20_000),
        }),
        AuditTool::OpeningBalance => AuditRequest::OpeningBalance(OpeningBalanceInput {
            book_balance: Decimal::from(2_500_000),
            audited_balance: Decimal::from(2_485_000),
        }),
        AuditTool::BankVouching => AuditRequest::BankVouching(BankVouchingInput {
            bank_statement: Decimal::from(1_250_000),
            cash_book: Decimal::from(1_245_000),
        }),
    }
}

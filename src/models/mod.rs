//! Core data models for the Audit Calculation Engine.
//!
//! This module contains the input and result records of every calculator,
//! the verdict enums they share, the tool catalog and the envelope returned
//! to API clients.

mod audit;
mod bank_vouching;
mod calculation_result;
mod opening_balance;
mod professional_tax;
mod salary_reconciliation;
mod tax_audit;
mod tool;
mod verdict;

pub use audit::{AuditOutcome, AuditRequest};
pub use bank_vouching::{BankVouchingInput, BankVouchingResult};
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationEnvelope};
pub use opening_balance::{OpeningBalanceInput, OpeningBalanceResult};
pub use professional_tax::{ProfessionalTaxInput, ProfessionalTaxResult};
pub use salary_reconciliation::{SalaryReconciliationInput, SalaryReconciliationResult};
pub use tax_audit::{TaxAuditInput, TaxAuditResult};
pub use tool::{AuditTool, ToolDescriptor, UploadSlot};
pub use verdict::{Compliance, ProfessionalTaxStatus, ReconciliationStatus, RiskLevel};

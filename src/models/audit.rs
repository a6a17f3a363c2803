//! Tool-tagged requests and outcomes.
//!
//! These enums let the dispatcher, the document intake and the HTTP layer
//! handle any of the five calculators through a single type.

use serde::{Deserialize, Serialize};

use super::{
    AuditTool, BankVouchingInput, BankVouchingResult, OpeningBalanceInput, OpeningBalanceResult,
    ProfessionalTaxInput, ProfessionalTaxResult, SalaryReconciliationInput,
    SalaryReconciliationResult, TaxAuditInput, TaxAuditResult,
};

/// Input for any one of the calculators, tagged with its tool.
///
/// # Example
///
/// ```
/// use audit_engine::models::{AuditRequest, AuditTool};
///
/// let json = r#"{"tool": "professional-tax", "input": {"declaredAmount": 18000, "verifiedAmount": 20000}}"#;
/// let request: AuditRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(request.tool(), AuditTool::ProfessionalTax);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", content = "input", rename_all = "kebab-case")]
pub enum AuditRequest {
    /// Tax audit input.
    TaxAudit(TaxAuditInput),
    /// Salary reconciliation input.
    SalaryReconciliation(SalaryReconciliationInput),
    /// Professional tax input.
    ProfessionalTax(ProfessionalTaxInput),
    /// Opening balance input.
    OpeningBalance(OpeningBalanceInput),
    /// Bank vouching input.
    BankVouching(BankVouchingInput),
}

impl AuditRequest {
    /// The tool this request targets.
    pub fn tool(&self) -> AuditTool {
        match self {
            AuditRequest::TaxAudit(_) => AuditTool::TaxAudit,
            AuditRequest::SalaryReconciliation(_) => AuditTool::SalaryReconciliation,
            AuditRequest::ProfessionalTax(_) => AuditTool::ProfessionalTax,
            AuditRequest::OpeningBalance(_) => AuditTool::OpeningBalance,
            AuditRequest::BankVouching(_) => AuditTool::BankVouching,
        }
    }
}

macro_rules! request_from_input {
    ($($input:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$input> for AuditRequest {
                fn from(input: $input) -> Self {
                    AuditRequest::$variant(input)
                }
            }
        )+
    };
}

request_from_input! {
    TaxAuditInput => TaxAudit,
    SalaryReconciliationInput => SalaryReconciliation,
    ProfessionalTaxInput => ProfessionalTax,
    OpeningBalanceInput => OpeningBalance,
    BankVouchingInput => BankVouching,
}

/// Result of any one of the calculators, tagged with its tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", content = "result", rename_all = "kebab-case")]
pub enum AuditOutcome {
    /// Tax audit result.
    TaxAudit(TaxAuditResult),
    /// Salary reconciliation result.
    SalaryReconciliation(SalaryReconciliationResult),
    /// Professional tax result.
    ProfessionalTax(ProfessionalTaxResult),
    /// Opening balance result.
    OpeningBalance(OpeningBalanceResult),
    /// Bank vouching result.
    BankVouching(BankVouchingResult),
}

impl AuditOutcome {
    /// The tool that produced this outcome.
    pub fn tool(&self) -> AuditTool {
        match self {
            AuditOutcome::TaxAudit(_) => AuditTool::TaxAudit,
            AuditOutcome::SalaryReconciliation(_) => AuditTool::SalaryReconciliation,
            AuditOutcome::ProfessionalTax(_) => AuditTool::ProfessionalTax,
            AuditOutcome::OpeningBalance(_) => AuditTool::OpeningBalance,
            AuditOutcome::BankVouching(_) => AuditTool::BankVouching,
        }
    }
}

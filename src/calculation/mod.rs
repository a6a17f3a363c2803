//! Calculation logic for the Audit Calculation Engine.
//!
//! This module contains the five audit calculators: progressive tax slabs,
//! salary reconciliation, professional tax reconciliation, opening balance
//! materiality and bank vouching. Each calculator comes in three forms:
//! `calculate_*` with the standard rules, `calculate_*_with` with explicit
//! rules, and `explain_*` which records the audit steps behind a result.
//! [`perform_audit`] dispatches a tool-tagged request to the right one.

mod bank_vouching;
mod numeric;
mod opening_balance;
mod professional_tax;
mod salary_reconciliation;
mod tax_audit;

use std::sync::LazyLock;

use crate::config::AuditRules;
use crate::models::{AuditOutcome, AuditRequest, AuditStep, AuditWarning};

pub use bank_vouching::{
    BANK_EXCESS_CAUSES, CASH_BOOK_EXCESS_CAUSES, MONITORING_STEPS, RECONCILED_CAUSES,
    RECONCILIATION_STEPS, calculate_bank_vouching, calculate_bank_vouching_with,
    explain_bank_vouching,
};
pub use numeric::{format_grouped, round_half_up};
pub use opening_balance::{
    calculate_opening_balance, calculate_opening_balance_with, explain_opening_balance,
};
pub use professional_tax::{
    calculate_professional_tax, calculate_professional_tax_with, explain_professional_tax,
};
pub use salary_reconciliation::{
    calculate_salary_reconciliation, calculate_salary_reconciliation_with,
    explain_salary_reconciliation,
};
pub use tax_audit::{
    TAX_AUDIT_RECOMMENDATIONS, calculate_tax_audit, calculate_tax_audit_with, explain_tax_audit,
};

static STANDARD_RULES: LazyLock<AuditRules> = LazyLock::new(AuditRules::default);

/// The built-in rules used by the `calculate_*` entry points.
pub(crate) fn standard_rules() -> &'static AuditRules {
    &STANDARD_RULES
}

/// Audit steps and warnings recorded for one calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditExplanation {
    /// The steps in the order they were applied.
    pub steps: Vec<AuditStep>,
    /// Warnings about inputs that hit a guarded edge case.
    pub warnings: Vec<AuditWarning>,
}

/// The outcome of a dispatched audit together with its explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvaluation {
    /// The calculator result, tagged with its tool.
    pub outcome: AuditOutcome,
    /// The audit steps and warnings behind the outcome.
    pub explanation: AuditExplanation,
}

/// Runs the calculator matching `request` against `rules`.
///
/// # Example
///
/// ```
/// use audit_engine::calculation::perform_audit;
/// use audit_engine::config::AuditRules;
/// use audit_engine::models::{AuditOutcome, AuditRequest, TaxAuditInput};
/// use rust_decimal::Decimal;
///
/// let request = AuditRequest::TaxAudit(TaxAuditInput {
///     taxable_income: Decimal::from(850_000),
/// });
/// let evaluation = perform_audit(&request, &AuditRules::default());
///
/// match evaluation.outcome {
///     AuditOutcome::TaxAudit(result) => assert_eq!(result.calculated_tax, Decimal::from(52_500)),
///     other => panic!("unexpected outcome {:?}", other),
/// }
/// assert_eq!(evaluation.explanation.steps[0].step_number, 1);
/// ```
pub fn perform_audit(request: &AuditRequest, rules: &AuditRules) -> AuditEvaluation {
    const FIRST_STEP: u32 = 1;

    let (outcome, explanation) = match request {
        AuditRequest::TaxAudit(input) => {
            let result = calculate_tax_audit_with(input, &rules.tax);
            let explanation = explain_tax_audit(input, &result, &rules.tax, FIRST_STEP);
            (AuditOutcome::TaxAudit(result), explanation)
        }
        AuditRequest::SalaryReconciliation(input) => {
            let result = calculate_salary_reconciliation_with(input, &rules.salary);
            let explanation =
                explain_salary_reconciliation(input, &result, &rules.salary, FIRST_STEP);
            (AuditOutcome::SalaryReconciliation(result), explanation)
        }
        AuditRequest::ProfessionalTax(input) => {
            let result = calculate_professional_tax_with(input, &rules.professional_tax);
            let explanation =
                explain_professional_tax(input, &result, &rules.professional_tax, FIRST_STEP);
            (AuditOutcome::ProfessionalTax(result), explanation)
        }
        AuditRequest::OpeningBalance(input) => {
            let result = calculate_opening_balance_with(input, &rules.opening_balance);
            let explanation =
                explain_opening_balance(input, &result, &rules.opening_balance, FIRST_STEP);
            (AuditOutcome::OpeningBalance(result), explanation)
        }
        AuditRequest::BankVouching(input) => {
            let result = calculate_bank_vouching_with(input, &rules.bank_vouching);
            let explanation =
                explain_bank_vouching(input, &result, &rules.bank_vouching, FIRST_STEP);
            (AuditOutcome::BankVouching(result), explanation)
        }
    };

    AuditEvaluation {
        outcome,
        explanation,
    }
}

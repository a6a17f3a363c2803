//! Salary reconciliation input and result records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ReconciliationStatus;

/// Reported and actual salary figures for one employee or payroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryReconciliationInput {
    /// Salary as reported in the books.
    pub reported_salary: Decimal,
    /// Salary as actually paid.
    pub actual_salary: Decimal,
}

/// Outcome of a salary reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryReconciliationResult {
    /// Reported salary, echoed from the input.
    pub reported_salary: Decimal,
    /// Actual salary, echoed from the input.
    pub actual_salary: Decimal,
    /// Actual minus reported.
    pub variance: Decimal,
    /// Variance relative to the reported salary, to two decimals.
    pub variance_percentage: Decimal,
    /// Whether the figures match.
    pub status: ReconciliationStatus,
    /// Whether the variance is large enough to need an adjustment.
    pub adjustment_required: bool,
    /// Explanation for the auditor.
    pub comments: String,
}

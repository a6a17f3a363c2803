//! Tax audit input and result records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Compliance;

/// Figures extracted from tax documents.
///
/// # Example
///
/// ```
/// use audit_engine::models::TaxAuditInput;
/// use rust_decimal::Decimal;
///
/// let input: TaxAuditInput = serde_json::from_str(r#"{"taxableIncome": 850000}"#).unwrap();
/// assert_eq!(input.taxable_income, Decimal::from(850000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxAuditInput {
    /// Total taxable income for the assessment year.
    pub taxable_income: Decimal,
}

/// Outcome of a tax audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxAuditResult {
    /// The taxable income, echoed from the input.
    pub taxable_income: Decimal,
    /// Marginal rate of the slab the income falls in, as a percentage.
    pub tax_rate: Decimal,
    /// Tax payable, rounded to the nearest whole unit.
    pub calculated_tax: Decimal,
    /// Compliance verdict derived from the discrepancy.
    pub compliance: Compliance,
    /// Difference between declared and computed tax.
    ///
    /// Declared tax is never supplied, so this is always zero.
    pub discrepancy: Decimal,
    /// Standing advice for the auditor.
    pub recommendations: Vec<String>,
}

//! Opening balance input and result records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Book and audited opening balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningBalanceInput {
    /// Opening balance carried in the books.
    pub book_balance: Decimal,
    /// Opening balance confirmed by the audit.
    pub audited_balance: Decimal,
}

/// Outcome of an opening balance verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningBalanceResult {
    /// Book balance, echoed from the input.
    pub book_balance: Decimal,
    /// Audited balance, echoed from the input.
    pub audited_balance: Decimal,
    /// Audited minus book.
    pub variance: Decimal,
    /// Variance relative to the book balance, to two decimals.
    pub variance_percentage: Decimal,
    /// Materiality threshold, rounded to a whole unit.
    pub materiality_threshold: Decimal,
    /// Whether the variance exceeds the materiality threshold.
    pub is_material: bool,
    /// Journal entry needed to correct a material variance.
    pub adjustment_entry: String,
    /// Risk rating for the variance.
    pub risk_level: RiskLevel,
}

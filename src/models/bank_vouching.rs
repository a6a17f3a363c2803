//! Bank vouching input and result records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Closing balances from the bank statement and the cash book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankVouchingInput {
    /// Balance per bank statement.
    pub bank_statement: Decimal,
    /// Balance per cash book.
    pub cash_book: Decimal,
}

/// Outcome of bank vouching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankVouchingResult {
    /// Bank statement balance, echoed from the input.
    pub bank_statement: Decimal,
    /// Cash book balance, echoed from the input.
    pub cash_book: Decimal,
    /// Bank statement minus cash book.
    pub difference: Decimal,
    /// Whether a bank reconciliation statement must be prepared.
    pub reconciliation_required: bool,
    /// Likely explanations for the difference.
    pub possible_causes: Vec<String>,
    /// Procedures the auditor should follow.
    pub next_steps: Vec<String>,
    /// Risk rating for the difference.
    pub risk_assessment: RiskLevel,
}

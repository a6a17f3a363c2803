//! Professional tax input and result records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProfessionalTaxStatus;

/// Declared and verified professional tax amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalTaxInput {
    /// Amount declared on the return.
    pub declared_amount: Decimal,
    /// Amount verified from challans and registers.
    pub verified_amount: Decimal,
}

/// Outcome of a professional tax reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalTaxResult {
    /// Declared amount, echoed from the input.
    pub declared_amount: Decimal,
    /// Verified amount, echoed from the input.
    pub verified_amount: Decimal,
    /// Verified minus declared.
    pub difference: Decimal,
    /// Declaration status.
    pub compliance_status: ProfessionalTaxStatus,
    /// Whether a late-payment penalty may apply.
    pub penalty_applicable: bool,
    /// What the taxpayer should do next.
    pub recommended_action: String,
}

//! Categorical verdicts shared by the audit results.
//!
//! Every verdict serializes as the label shown to auditors (for example
//! `"Variance Detected"`), and the same label is produced by `Display`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether the tax computation matches what was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compliance {
    /// No discrepancy was found.
    Compliant,
    /// The computed and declared tax differ.
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
}

impl Compliance {
    /// Returns the display label for this verdict.
    pub fn label(&self) -> &'static str {
        match self {
            Compliance::Compliant => "Compliant",
            Compliance::NonCompliant => "Non-Compliant",
        }
    }
}

/// Outcome of comparing two figures that are expected to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReconciliationStatus {
    /// The figures are identical.
    Matched,
    /// The figures differ by any amount.
    #[serde(rename = "Variance Detected")]
    VarianceDetected,
}

impl ReconciliationStatus {
    /// Returns the display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            ReconciliationStatus::Matched => "Matched",
            ReconciliationStatus::VarianceDetected => "Variance Detected",
        }
    }
}

/// Professional tax declaration status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfessionalTaxStatus {
    /// Declared and verified amounts agree.
    Compliant,
    /// Less was declared than verified.
    #[serde(rename = "Under-declared")]
    UnderDeclared,
    /// More was declared than verified.
    #[serde(rename = "Over-declared")]
    OverDeclared,
}

impl ProfessionalTaxStatus {
    /// Returns the display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            ProfessionalTaxStatus::Compliant => "Compliant",
            ProfessionalTaxStatus::UnderDeclared => "Under-declared",
            ProfessionalTaxStatus::OverDeclared => "Over-declared",
        }
    }
}

/// Three-tier risk rating.
///
/// # Example
///
/// ```
/// use audit_engine::models::RiskLevel;
///
/// assert!(RiskLevel::High > RiskLevel::Medium);
/// assert_eq!(RiskLevel::Low.to_string(), "Low");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk.
    Low,
    /// Medium risk.
    Medium,
    /// High risk.
    High,
}

impl RiskLevel {
    /// Returns the display label for this risk level.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

display_label!(Compliance, ReconciliationStatus, ProfessionalTaxStatus, RiskLevel);

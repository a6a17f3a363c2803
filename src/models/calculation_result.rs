//! The envelope returned for every audit calculation.
//!
//! This module contains [`CalculationEnvelope`] together with the audit trace
//! types that record how each verdict was reached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuditOutcome;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use audit_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "bank_difference".to_string(),
///     rule_name: "Bank Statement Difference".to_string(),
///     input: serde_json::json!({"bank_statement": "1250000", "cash_book": "1245000"}),
///     output: serde_json::json!({"difference": "5000"}),
///     reasoning: "₹1250000 - ₹1245000 = ₹5000".to_string(),
/// };
/// assert_eq!(step.rule_id, "bank_difference");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag results the auditor should read with care, such as a
/// percentage that fell back to zero because its base was zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium" or "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Everything returned to a client for one calculation.
///
/// The outcome is flattened into the envelope, so the JSON carries a
/// `tool` id next to the tool-specific `result` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationEnvelope {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Code of the rule profile the calculation ran under.
    pub profile: String,
    /// The tool and its result.
    #[serde(flatten)]
    pub outcome: AuditOutcome,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BankVouchingResult, RiskLevel};
    use rust_decimal::Decimal;

    fn sample_step(step_number: u32, rule_id: &str) -> AuditStep {
        AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: "Sample rule".to_string(),
            input: serde_json::json!({}),
            output: serde_json::json!({}),
            reasoning: "Sample".to_string(),
        }
    }

    fn sample_outcome() -> AuditOutcome {
        AuditOutcome::BankVouching(BankVouchingResult {
            bank_statement: Decimal::from(100),
            cash_book: Decimal::from(100),
            difference: Decimal::ZERO,
            reconciliation_required: false,
            possible_causes: vec!["Bank and cash book are perfectly reconciled".to_string()],
            next_steps: vec![
                "No immediate action required".to_string(),
                "Continue regular monitoring".to_string(),
            ],
            risk_assessment: RiskLevel::Low,
        })
    }

    #[test]
    fn test_audit_step_serializes_camel_case() {
        let step = sample_step(1, "tax_slab_lookup");
        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"stepNumber\":1"));
        assert!(json.contains("\"ruleId\":\"tax_slab_lookup\""));
        assert!(json.contains("\"ruleName\":\"Sample rule\""));
    }

    #[test]
    fn test_audit_warning_serialization() {
        let warning = AuditWarning::new("ZERO_BASE", "Book balance is zero", "medium");
        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"ZERO_BASE\""));
        assert!(json.contains("\"severity\":\"medium\""));
    }

    #[test]
    fn test_audit_trace_serialization() {
        let trace = AuditTrace {
            steps: vec![sample_step(1, "a")],
            warnings: vec![],
            duration_us: 1234,
        };
        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains("\"durationUs\":1234"));
        assert!(json.contains("\"steps\":["));
        assert!(json.contains("\"warnings\":[]"));
    }

    #[test]
    fn test_envelope_flattens_outcome() {
        let envelope = CalculationEnvelope {
            calculation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2026-01-15T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            profile: "standard".to_string(),
            outcome: sample_outcome(),
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![],
                duration_us: 0,
            },
        };

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["calculationId"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["tool"], "bank-vouching");
        assert_eq!(json["result"]["riskAssessment"], "Low");
        assert_eq!(json["result"]["reconciliationRequired"], false);
        assert_eq!(json["auditTrace"]["durationUs"], 0);
    }

    #[test]
    fn test_audit_steps_ordered() {
        let trace = AuditTrace {
            steps: vec![sample_step(1, "a"), sample_step(2, "b"), sample_step(3, "c")],
            warnings: vec![],
            duration_us: 1000,
        };

        let step_numbers: Vec<u32> = trace.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(step_numbers, vec![1, 2, 3]);
    }
}

//! Salary reconciliation calculation functionality.
//!
//! Compares the salary reported in the books with the salary actually paid
//! and decides whether the variance needs an adjustment.

use rust_decimal::Decimal;

use crate::config::SalaryRules;
use crate::models::{
    AuditStep, AuditWarning, ReconciliationStatus, SalaryReconciliationInput,
    SalaryReconciliationResult,
};

use super::numeric::{difference, format_grouped, format_plain, percentage_of, round_half_up};
use super::{AuditExplanation, standard_rules};

const RECONCILED_COMMENT: &str = "Salary figures are properly reconciled.";

/// Reconciles salaries with the standard adjustment threshold.
///
/// # Examples
///
/// ```
/// use audit_engine::calculation::calculate_salary_reconciliation;
/// use audit_engine::models::{ReconciliationStatus, SalaryReconciliationInput};
/// use rust_decimal::Decimal;
///
/// let result = calculate_salary_reconciliation(&SalaryReconciliationInput {
///     reported_salary: Decimal::from(750_000),
///     actual_salary: Decimal::from(780_000),
/// });
/// assert_eq!(result.variance, Decimal::from(30_000));
/// assert_eq!(result.variance_percentage, Decimal::from(4));
/// assert_eq!(result.status, ReconciliationStatus::VarianceDetected);
/// assert!(result.adjustment_required);
/// ```
pub fn calculate_salary_reconciliation(
    input: &SalaryReconciliationInput,
) -> SalaryReconciliationResult {
    calculate_salary_reconciliation_with(input, &standard_rules().salary)
}

/// Reconciles salaries with an explicit adjustment threshold.
///
/// The percentage is only computed against a positive reported salary;
/// otherwise it is zero. Status and adjustment are thresholded
/// independently: any non-zero variance is `Variance Detected`, but only a
/// variance above the threshold requires an adjustment.
pub fn calculate_salary_reconciliation_with(
    input: &SalaryReconciliationInput,
    rules: &SalaryRules,
) -> SalaryReconciliationResult {
    let reported = input.reported_salary;
    let actual = input.actual_salary;
    let variance = difference(actual, reported);

    let variance_percentage = if reported > Decimal::ZERO {
        percentage_of(variance, reported)
    } else {
        Decimal::ZERO
    };

    let adjustment_required = variance.abs() > rules.adjustment_threshold;

    let (status, comments) = if variance.is_zero() {
        (ReconciliationStatus::Matched, RECONCILED_COMMENT.to_string())
    } else if variance > Decimal::ZERO {
        (
            ReconciliationStatus::VarianceDetected,
            format!(
                "Actual salary exceeds reported salary by ₹{}. Verify additional components.",
                format_grouped(variance.abs())
            ),
        )
    } else {
        (
            ReconciliationStatus::VarianceDetected,
            format!(
                "Reported salary exceeds actual salary by ₹{}. Review calculations.",
                format_grouped(variance.abs())
            ),
        )
    };

    SalaryReconciliationResult {
        reported_salary: reported,
        actual_salary: actual,
        variance,
        variance_percentage: round_half_up(variance_percentage, 2),
        status,
        adjustment_required,
        comments,
    }
}

/// Records how a salary reconciliation result was reached.
pub fn explain_salary_reconciliation(
    input: &SalaryReconciliationInput,
    result: &SalaryReconciliationResult,
    rules: &SalaryRules,
    step_number: u32,
) -> AuditExplanation {
    let variance_step = AuditStep {
        step_number,
        rule_id: "salary_variance".to_string(),
        rule_name: "Salary Variance".to_string(),
        input: serde_json::json!({
            "reported_salary": format_plain(input.reported_salary),
            "actual_salary": format_plain(input.actual_salary)
        }),
        output: serde_json::json!({
            "variance": format_plain(result.variance),
            "variance_percentage": format_plain(result.variance_percentage),
            "status": result.status.label()
        }),
        reasoning: format!(
            "₹{} - ₹{} = ₹{} ({}%)",
            format_plain(input.actual_salary),
            format_plain(input.reported_salary),
            format_plain(result.variance),
            format_plain(result.variance_percentage)
        ),
    };

    let comparison = if result.adjustment_required { ">" } else { "<=" };
    let adjustment_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "salary_adjustment_threshold".to_string(),
        rule_name: "Salary Adjustment Threshold".to_string(),
        input: serde_json::json!({
            "variance": format_plain(result.variance),
            "threshold": format_plain(rules.adjustment_threshold)
        }),
        output: serde_json::json!({
            "adjustment_required": result.adjustment_required
        }),
        reasoning: format!(
            "|₹{}| {} ₹{}",
            format_plain(result.variance),
            comparison,
            format_plain(rules.adjustment_threshold)
        ),
    };

    let mut warnings = Vec::new();
    if input.reported_salary <= Decimal::ZERO && !result.variance.is_zero() {
        warnings.push(AuditWarning::new(
            "PERCENTAGE_BASE_NOT_POSITIVE",
            "Reported salary is not positive; variance percentage is reported as zero",
            "medium",
        ));
    }

    AuditExplanation {
        steps: vec![variance_step, adjustment_step],
        warnings,
    }
}

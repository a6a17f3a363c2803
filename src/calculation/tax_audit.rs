//! Tax audit calculation functionality.
//!
//! This module computes income tax over a progressive slab schedule and
//! reports the compliance verdict for the assessment.

use rust_decimal::Decimal;

use crate::config::{TaxRules, TaxSlab};
use crate::models::{AuditStep, AuditWarning, Compliance, TaxAuditInput, TaxAuditResult};

use super::numeric::{difference, format_plain, round_half_up};
use super::{AuditExplanation, standard_rules};

/// Standing advice attached to every tax audit.
pub const TAX_AUDIT_RECOMMENDATIONS: [&str; 4] = [
    "Verify all income sources are properly declared",
    "Check for eligible deductions under Section 80C",
    "Ensure proper documentation for all claims",
    "Review investment declarations",
];

/// Runs a tax audit with the standard slab schedule.
///
/// # Examples
///
/// ```
/// use audit_engine::calculation::calculate_tax_audit;
/// use audit_engine::models::{Compliance, TaxAuditInput};
/// use rust_decimal::Decimal;
///
/// let result = calculate_tax_audit(&TaxAuditInput {
///     taxable_income: Decimal::from(600_000),
/// });
/// assert_eq!(result.tax_rate, Decimal::from(10));
/// assert_eq!(result.calculated_tax, Decimal::from(22_500));
/// assert_eq!(result.compliance, Compliance::Compliant);
/// ```
pub fn calculate_tax_audit(input: &TaxAuditInput) -> TaxAuditResult {
    calculate_tax_audit_with(input, &standard_rules().tax)
}

/// Runs a tax audit with an explicit slab schedule.
///
/// The income is matched to the first slab whose inclusive upper bound
/// covers it. `discrepancy` is always zero because no declared tax is
/// supplied, which makes every audit `Compliant`.
pub fn calculate_tax_audit_with(input: &TaxAuditInput, rules: &TaxRules) -> TaxAuditResult {
    let income = input.taxable_income;
    let slab = rules.slab_for(income);
    let tax = slab_tax(income, slab);

    let discrepancy = Decimal::ZERO;
    let compliance = if discrepancy.is_zero() {
        Compliance::Compliant
    } else {
        Compliance::NonCompliant
    };

    TaxAuditResult {
        taxable_income: income,
        tax_rate: slab.rate_percent,
        calculated_tax: round_half_up(tax, 0),
        compliance,
        discrepancy,
        recommendations: TAX_AUDIT_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
    }
}

fn slab_tax(income: Decimal, slab: &TaxSlab) -> Decimal {
    let marginal = difference(income, slab.lower_bound)
        .saturating_mul(slab.rate_percent)
        / Decimal::ONE_HUNDRED;
    slab.base_tax.saturating_add(marginal)
}

/// Records how a tax audit result was reached.
pub fn explain_tax_audit(
    input: &TaxAuditInput,
    result: &TaxAuditResult,
    rules: &TaxRules,
    step_number: u32,
) -> AuditExplanation {
    let income = input.taxable_income;
    let slab = rules.slab_for(income);

    let reasoning = if slab.rate_percent.is_zero() {
        format!(
            "₹{} falls in the 0% slab: no tax payable",
            format_plain(income)
        )
    } else {
        format!(
            "₹{} falls in the {}% slab: ₹{} + (₹{} - ₹{}) × {}% = ₹{}",
            format_plain(income),
            format_plain(slab.rate_percent),
            format_plain(slab.base_tax),
            format_plain(income),
            format_plain(slab.lower_bound),
            format_plain(slab.rate_percent),
            format_plain(result.calculated_tax)
        )
    };

    let slab_step = AuditStep {
        step_number,
        rule_id: "tax_slab_lookup".to_string(),
        rule_name: "Progressive Tax Slab".to_string(),
        input: serde_json::json!({
            "taxable_income": format_plain(income)
        }),
        output: serde_json::json!({
            "tax_rate": format_plain(result.tax_rate),
            "calculated_tax": format_plain(result.calculated_tax),
            "slab_lower_bound": format_plain(slab.lower_bound),
            "slab_upper_bound": slab.upper_bound.map(format_plain)
        }),
        reasoning,
    };

    let compliance_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "tax_compliance".to_string(),
        rule_name: "Declared Tax Comparison".to_string(),
        input: serde_json::json!({
            "calculated_tax": format_plain(result.calculated_tax)
        }),
        output: serde_json::json!({
            "discrepancy": format_plain(result.discrepancy),
            "compliance": result.compliance.label()
        }),
        reasoning: format!(
            "Discrepancy of ₹{} gives {}",
            format_plain(result.discrepancy),
            result.compliance
        ),
    };

    AuditExplanation {
        steps: vec![slab_step, compliance_step],
        warnings: vec![AuditWarning::new(
            "DECLARED_TAX_NOT_COMPARED",
            "No declared tax figure was supplied; discrepancy is reported as zero",
            "low",
        )],
    }
}

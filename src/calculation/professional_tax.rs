//! Professional tax reconciliation functionality.
//!
//! Compares the professional tax declared on the return with the amount
//! verified from challans and registers.

use rust_decimal::Decimal;

use crate::config::ProfessionalTaxRules;
use crate::models::{AuditStep, ProfessionalTaxInput, ProfessionalTaxResult, ProfessionalTaxStatus};

use super::numeric::{difference, format_plain};
use super::{AuditExplanation, standard_rules};

const NO_ACTION: &str = "No action required. Professional tax is properly declared.";
const PENALTY_NOTE: &str = "Penalty may be applicable.";

/// Reconciles professional tax with the standard penalty threshold.
///
/// # Examples
///
/// ```
/// use audit_engine::calculation::calculate_professional_tax;
/// use audit_engine::models::{ProfessionalTaxInput, ProfessionalTaxStatus};
/// use rust_decimal::Decimal;
///
/// let result = calculate_professional_tax(&ProfessionalTaxInput {
///     declared_amount: Decimal::from(18_000),
///     verified_amount: Decimal::from(20_000),
/// });
/// assert_eq!(result.difference, Decimal::from(2_000));
/// assert_eq!(result.compliance_status, ProfessionalTaxStatus::UnderDeclared);
/// assert!(result.penalty_applicable);
/// ```
pub fn calculate_professional_tax(input: &ProfessionalTaxInput) -> ProfessionalTaxResult {
    calculate_professional_tax_with(input, &standard_rules().professional_tax)
}

/// Reconciles professional tax with an explicit penalty threshold.
///
/// A shortfall is `Under-declared` and carries a penalty only above the
/// threshold; an excess is `Over-declared` and can be refunded.
///
/// The penalty note is appended after a single space. Without a penalty the
/// action ends at `professional tax.` with no trailing space, unlike the
/// dashboard text (`"Pay additional ₹300 professional tax. "`).
pub fn calculate_professional_tax_with(
    input: &ProfessionalTaxInput,
    rules: &ProfessionalTaxRules,
) -> ProfessionalTaxResult {
    let diff = difference(input.verified_amount, input.declared_amount);

    let (compliance_status, penalty_applicable, recommended_action) = if diff > Decimal::ZERO {
        let penalty = diff > rules.penalty_threshold;
        let mut action = format!("Pay additional ₹{} professional tax.", format_plain(diff));
        if penalty {
            action.push(' ');
            action.push_str(PENALTY_NOTE);
        }
        (ProfessionalTaxStatus::UnderDeclared, penalty, action)
    } else if diff < Decimal::ZERO {
        (
            ProfessionalTaxStatus::OverDeclared,
            false,
            format!(
                "Claim refund of ₹{} overpaid professional tax.",
                format_plain(diff.abs())
            ),
        )
    } else {
        (ProfessionalTaxStatus::Compliant, false, NO_ACTION.to_string())
    };

    ProfessionalTaxResult {
        declared_amount: input.declared_amount,
        verified_amount: input.verified_amount,
        difference: diff,
        compliance_status,
        penalty_applicable,
        recommended_action,
    }
}

/// Records how a professional tax result was reached.
pub fn explain_professional_tax(
    input: &ProfessionalTaxInput,
    result: &ProfessionalTaxResult,
    rules: &ProfessionalTaxRules,
    step_number: u32,
) -> AuditExplanation {
    let penalty_reasoning = match result.compliance_status {
        ProfessionalTaxStatus::UnderDeclared if result.penalty_applicable => format!(
            "; shortfall above ₹{} attracts a penalty",
            format_plain(rules.penalty_threshold)
        ),
        ProfessionalTaxStatus::UnderDeclared => format!(
            "; shortfall within ₹{} carries no penalty",
            format_plain(rules.penalty_threshold)
        ),
        _ => String::new(),
    };

    let step = AuditStep {
        step_number,
        rule_id: "professional_tax_declaration".to_string(),
        rule_name: "Professional Tax Declaration".to_string(),
        input: serde_json::json!({
            "declared_amount": format_plain(input.declared_amount),
            "verified_amount": format_plain(input.verified_amount),
            "penalty_threshold": format_plain(rules.penalty_threshold)
        }),
        output: serde_json::json!({
            "difference": format_plain(result.difference),
            "compliance_status": result.compliance_status.label(),
            "penalty_applicable": result.penalty_applicable
        }),
        reasoning: format!(
            "₹{} - ₹{} = ₹{} ({}){}",
            format_plain(input.verified_amount),
            format_plain(input.declared_amount),
            format_plain(result.difference),
            result.compliance_status,
            penalty_reasoning
        ),
    };

    AuditExplanation {
        steps: vec![step],
        warnings: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn reconcile(declared: &str, verified: &str) -> ProfessionalTaxResult {
        calculate_professional_tax(&ProfessionalTaxInput {
            declared_amount: dec(declared),
            verified_amount: dec(verified),
        })
    }

    #[test]
    fn test_under_declared_with_penalty() {
        let result = reconcile("18000", "20000");

        assert_eq!(result.declared_amount, dec("18000"));
        assert_eq!(result.verified_amount, dec("20000"));
        assert_eq!(result.difference, dec("2000"));
        assert_eq!(result.compliance_status, ProfessionalTaxStatus::UnderDeclared);
        assert!(result.penalty_applicable);
        assert_eq!(
            result.recommended_action,
            "Pay additional ₹2000 professional tax. Penalty may be applicable."
        );
    }

    #[test]
    fn test_under_declared_within_threshold_has_no_penalty() {
        let result = reconcile("2000", "2300");

        assert_eq!(result.compliance_status, ProfessionalTaxStatus::UnderDeclared);
        assert!(!result.penalty_applicable);
        assert_eq!(
            result.recommended_action,
            "Pay additional ₹300 professional tax."
        );
        assert!(!result.recommended_action.ends_with(' '));
    }

    #[test]
    fn test_penalty_threshold_is_exclusive() {
        assert!(!reconcile("1000", "1500").penalty_applicable);
        assert!(reconcile("1000", "1500.5").penalty_applicable);
    }

    #[test]
    fn test_over_declared_claims_refund() {
        let result = reconcile("20000", "18000");

        assert_eq!(result.difference, dec("-2000"));
        assert_eq!(result.compliance_status, ProfessionalTaxStatus::OverDeclared);
        assert!(!result.penalty_applicable);
        assert_eq!(
            result.recommended_action,
            "Claim refund of ₹2000 overpaid professional tax."
        );
    }

    #[test]
    fn test_matching_amounts_are_compliant() {
        let result = reconcile("2500", "2500.00");

        assert_eq!(result.difference, Decimal::ZERO);
        assert_eq!(result.compliance_status, ProfessionalTaxStatus::Compliant);
        assert!(!result.penalty_applicable);
        assert_eq!(
            result.recommended_action,
            "No action required. Professional tax is properly declared."
        );
    }

    #[test]
    fn test_custom_penalty_threshold() {
        let rules = ProfessionalTaxRules {
            penalty_threshold: dec("5000"),
        };
        let result = calculate_professional_tax_with(
            &ProfessionalTaxInput {
                declared_amount: dec("18000"),
                verified_amount: dec("20000"),
            },
            &rules,
        );
        assert!(!result.penalty_applicable);
    }

    #[test]
    fn test_explanation_mentions_penalty() {
        let input = ProfessionalTaxInput {
            declared_amount: dec("18000"),
            verified_amount: dec("20000"),
        };
        let result = calculate_professional_tax(&input);
        let explanation =
            explain_professional_tax(&input, &result, &ProfessionalTaxRules::default(), 4);

        let step = &explanation.steps[0];
        assert_eq!(step.step_number, 4);
        assert_eq!(step.output["compliance_status"], "Under-declared");
        assert!(step.reasoning.contains("attracts a penalty"));
    }
}

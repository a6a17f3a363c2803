//! Opening balance verification functionality.
//!
//! This module compares the opening balance carried in the books with the
//! audited figure, applies the materiality rule and drafts the correcting
//! journal entry when one is needed.

use rust_decimal::Decimal;

use crate::config::OpeningBalanceRules;
use crate::models::{
    AuditStep, AuditWarning, OpeningBalanceInput, OpeningBalanceResult, RiskLevel,
};

use super::numeric::{difference, format_plain, percentage_of, round_half_up};
use super::{AuditExplanation, standard_rules};

const NO_ADJUSTMENT: &str = "No adjustment required.";

/// Verifies an opening balance with the standard 5% materiality rule.
///
/// # Examples
///
/// ```
/// use audit_engine::calculation::calculate_opening_balance;
/// use audit_engine::models::{OpeningBalanceInput, RiskLevel};
/// use rust_decimal::Decimal;
///
/// let result = calculate_opening_balance(&OpeningBalanceInput {
///     book_balance: Decimal::from(2_500_000),
///     audited_balance: Decimal::from(2_485_000),
/// });
/// assert_eq!(result.variance, Decimal::from(-15_000));
/// assert_eq!(result.materiality_threshold, Decimal::from(125_000));
/// assert!(!result.is_material);
/// assert_eq!(result.risk_level, RiskLevel::Low);
/// ```
pub fn calculate_opening_balance(input: &OpeningBalanceInput) -> OpeningBalanceResult {
    calculate_opening_balance_with(input, &standard_rules().opening_balance)
}

/// Verifies an opening balance with explicit materiality rules.
///
/// Materiality and risk are decided on the unrounded threshold and
/// percentage; only the reported figures are rounded.
pub fn calculate_opening_balance_with(
    input: &OpeningBalanceInput,
    rules: &OpeningBalanceRules,
) -> OpeningBalanceResult {
    let book = input.book_balance;
    let audited = input.audited_balance;
    let variance = difference(audited, book);

    let variance_percentage = if book.is_zero() {
        Decimal::ZERO
    } else {
        percentage_of(variance, book)
    };

    let materiality_threshold = book.abs().saturating_mul(rules.materiality_rate);
    let is_material = variance.abs() > materiality_threshold;

    let (adjustment_entry, risk_level) = if is_material {
        (adjustment_entry(variance), RiskLevel::High)
    } else if variance_percentage.abs() > rules.medium_risk_variance_percent {
        (NO_ADJUSTMENT.to_string(), RiskLevel::Medium)
    } else {
        (NO_ADJUSTMENT.to_string(), RiskLevel::Low)
    };

    OpeningBalanceResult {
        book_balance: book,
        audited_balance: audited,
        variance,
        variance_percentage: round_half_up(variance_percentage, 2),
        materiality_threshold: round_half_up(materiality_threshold, 0),
        is_material,
        adjustment_entry,
        risk_level,
    }
}

/// Drafts the double entry that brings the books to the audited balance.
///
/// An audited balance above the books debits the opening balance; one below
/// credits it.
fn adjustment_entry(variance: Decimal) -> String {
    let amount = format_plain(variance.abs());
    if variance > Decimal::ZERO {
        format!(
            "Dr. Opening Balance ₹{} Cr. Adjustment Account ₹{}",
            amount, amount
        )
    } else {
        format!(
            "Dr. Adjustment Account ₹{} Cr. Opening Balance ₹{}",
            amount, amount
        )
    }
}

/// Records how an opening balance result was reached.
pub fn explain_opening_balance(
    input: &OpeningBalanceInput,
    result: &OpeningBalanceResult,
    rules: &OpeningBalanceRules,
    step_number: u32,
) -> AuditExplanation {
    let materiality_step = AuditStep {
        step_number,
        rule_id: "opening_balance_materiality".to_string(),
        rule_name: "Materiality Assessment".to_string(),
        input: serde_json::json!({
            "book_balance": format_plain(input.book_balance),
            "audited_balance": format_plain(input.audited_balance),
            "materiality_rate": format_plain(rules.materiality_rate)
        }),
        output: serde_json::json!({
            "variance": format_plain(result.variance),
            "materiality_threshold": format_plain(result.materiality_threshold),
            "is_material": result.is_material
        }),
        reasoning: format!(
            "|₹{}| {} {}% of |₹{}| (₹{})",
            format_plain(result.variance),
            if result.is_material { ">" } else { "<=" },
            format_plain(rules.materiality_rate.saturating_mul(Decimal::ONE_HUNDRED)),
            format_plain(input.book_balance),
            format_plain(result.materiality_threshold)
        ),
    };

    let risk_reasoning = match result.risk_level {
        RiskLevel::High => "Material variance requires an adjustment entry".to_string(),
        RiskLevel::Medium => format!(
            "Immaterial variance of {}% exceeds {}%",
            format_plain(result.variance_percentage),
            format_plain(rules.medium_risk_variance_percent)
        ),
        RiskLevel::Low => format!(
            "Immaterial variance of {}% is within {}%",
            format_plain(result.variance_percentage),
            format_plain(rules.medium_risk_variance_percent)
        ),
    };

    let risk_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "opening_balance_risk".to_string(),
        rule_name: "Opening Balance Risk".to_string(),
        input: serde_json::json!({
            "variance_percentage": format_plain(result.variance_percentage),
            "is_material": result.is_material
        }),
        output: serde_json::json!({
            "risk_level": result.risk_level.label(),
            "adjustment_entry": result.adjustment_entry
        }),
        reasoning: risk_reasoning,
    };

    let mut warnings = Vec::new();
    if input.book_balance.is_zero() && !result.variance.is_zero() {
        warnings.push(AuditWarning::new(
            "ZERO_BOOK_BALANCE",
            "Book balance is zero; every variance is material and the percentage is reported as zero",
            "high",
        ));
    }

    AuditExplanation {
        steps: vec![materiality_step, risk_step],
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn verify(book: &str, audited: &str) -> OpeningBalanceResult {
        calculate_opening_balance(&OpeningBalanceInput {
            book_balance: dec(book),
            audited_balance: dec(audited),
        })
    }

    #[test]
    fn test_small_shortfall_is_low_risk() {
        let result = verify("2500000", "2485000");

        assert_eq!(result.book_balance, dec("2500000"));
        assert_eq!(result.audited_balance, dec("2485000"));
        assert_eq!(result.variance, dec("-15000"));
        assert_eq!(result.variance_percentage, dec("-0.6"));
        assert_eq!(result.materiality_threshold, dec("125000"));
        assert!(!result.is_material);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.adjustment_entry, "No adjustment required.");
    }

    #[test]
    fn test_immaterial_variance_above_one_percent_is_medium_risk() {
        // 3% variance, threshold 5%
        let result = verify("1000000", "1030000");

        assert!(!result.is_material);
        assert_eq!(result.variance_percentage, dec("3"));
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.adjustment_entry, "No adjustment required.");
    }

    #[test]
    fn test_material_increase_debits_opening_balance() {
        let result = verify("1000000", "1100000");

        assert!(result.is_material);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(
            result.adjustment_entry,
            "Dr. Opening Balance ₹100000 Cr. Adjustment Account ₹100000"
        );
    }

    #[test]
    fn test_material_decrease_credits_opening_balance() {
        let result = verify("1000000", "900000");

        assert!(result.is_material);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(
            result.adjustment_entry,
            "Dr. Adjustment Account ₹100000 Cr. Opening Balance ₹100000"
        );
    }

    #[test]
    fn test_swapped_balances_swap_the_entry() {
        let forward = verify("1000000", "1100000");
        let backward = verify("1100000", "1000000");

        assert_eq!(forward.variance, dec("100000"));
        assert_eq!(backward.variance, dec("-100000"));
        assert!(forward.is_material && backward.is_material);
        assert_eq!(
            forward.adjustment_entry,
            "Dr. Opening Balance ₹100000 Cr. Adjustment Account ₹100000"
        );
        assert_eq!(
            backward.adjustment_entry,
            "Dr. Adjustment Account ₹100000 Cr. Opening Balance ₹100000"
        );
    }

    #[test]
    fn test_variance_equal_to_threshold_is_not_material() {
        let result = verify("1000000", "1050000");
        assert!(!result.is_material);
        assert_eq!(result.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_materiality_uses_unrounded_threshold() {
        // Threshold 0.5 rounds to 1 for display, but a variance of 0.75 is
        // still material against the exact 0.5.
        let result = verify("10", "10.75");
        assert_eq!(result.materiality_threshold, dec("1"));
        assert!(result.is_material);
    }

    #[test]
    fn test_zero_book_balance() {
        let result = verify("0", "500");

        assert_eq!(result.variance_percentage, Decimal::ZERO);
        assert_eq!(result.materiality_threshold, Decimal::ZERO);
        assert!(result.is_material);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_negative_book_balance_uses_absolute_threshold() {
        let result = verify("-1000000", "-1020000");

        assert_eq!(result.materiality_threshold, dec("50000"));
        assert!(!result.is_material);
        assert_eq!(result.variance, dec("-20000"));
        assert_eq!(result.variance_percentage, dec("2"));
        assert_eq!(result.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_identical_balances() {
        let result = verify("500000", "500000");
        assert_eq!(result.variance, Decimal::ZERO);
        assert!(!result.is_material);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_explanation_steps() {
        let input = OpeningBalanceInput {
            book_balance: dec("0"),
            audited_balance: dec("500"),
        };
        let result = calculate_opening_balance(&input);
        let explanation =
            explain_opening_balance(&input, &result, &OpeningBalanceRules::default(), 1);

        assert_eq!(explanation.steps.len(), 2);
        assert_eq!(explanation.steps[0].output["is_material"], true);
        assert_eq!(explanation.steps[1].output["risk_level"], "High");
        assert_eq!(explanation.warnings[0].code, "ZERO_BOOK_BALANCE");
    }
}

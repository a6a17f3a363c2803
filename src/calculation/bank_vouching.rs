//! Bank vouching functionality.
//!
//! Matches the bank statement balance against the cash book, lists the
//! usual causes for the gap and rates the reconciliation risk.

use rust_decimal::Decimal;

use crate::config::BankVouchingRules;
use crate::models::{AuditStep, AuditWarning, BankVouchingInput, BankVouchingResult, RiskLevel};

use super::numeric::{difference, format_plain, percentage_of, round_half_up};
use super::{AuditExplanation, standard_rules};

/// Causes suggested when the bank shows more than the cash book.
pub const BANK_EXCESS_CAUSES: &[&str] = &[
    "Bank charges not recorded in cash book",
    "Interest credited by bank not recorded",
    "Direct deposits not updated in cash book",
];

/// Causes suggested when the cash book shows more than the bank.
pub const CASH_BOOK_EXCESS_CAUSES: &[&str] = &[
    "Outstanding cheques not cleared",
    "Bank charges recorded twice",
    "Deposits in transit",
];

/// Procedures for an unreconciled balance.
pub const RECONCILIATION_STEPS: &[&str] = &[
    "Prepare bank reconciliation statement",
    "Verify outstanding items",
    "Update cash book with missing entries",
    "Confirm bank charges and interest",
];

/// Cause reported when both balances agree.
pub const RECONCILED_CAUSES: &[&str] = &["Bank and cash book are perfectly reconciled"];

/// Procedures when both balances agree.
pub const MONITORING_STEPS: &[&str] = &[
    "No immediate action required",
    "Continue regular monitoring",
];

/// Vouches a bank balance with the standard risk bands.
///
/// # Examples
///
/// ```
/// use audit_engine::calculation::calculate_bank_vouching;
/// use audit_engine::models::{BankVouchingInput, RiskLevel};
/// use rust_decimal::Decimal;
///
/// let result = calculate_bank_vouching(&BankVouchingInput {
///     bank_statement: Decimal::from(1_250_000),
///     cash_book: Decimal::from(1_245_000),
/// });
/// assert_eq!(result.difference, Decimal::from(5_000));
/// assert!(result.reconciliation_required);
/// assert_eq!(result.risk_assessment, RiskLevel::Low);
/// ```
pub fn calculate_bank_vouching(input: &BankVouchingInput) -> BankVouchingResult {
    calculate_bank_vouching_with(input, &standard_rules().bank_vouching)
}

/// Vouches a bank balance with explicit risk bands.
pub fn calculate_bank_vouching_with(
    input: &BankVouchingInput,
    rules: &BankVouchingRules,
) -> BankVouchingResult {
    let diff = difference(input.bank_statement, input.cash_book);
    let reconciliation_required = !diff.is_zero();

    let (causes, steps, risk_assessment) = if reconciliation_required {
        let causes = if diff > Decimal::ZERO {
            BANK_EXCESS_CAUSES
        } else {
            CASH_BOOK_EXCESS_CAUSES
        };
        let percentage = difference_percentage(diff, input.cash_book);
        (causes, RECONCILIATION_STEPS, risk_band(percentage, rules))
    } else {
        (RECONCILED_CAUSES, MONITORING_STEPS, RiskLevel::Low)
    };

    BankVouchingResult {
        bank_statement: input.bank_statement,
        cash_book: input.cash_book,
        difference: diff,
        reconciliation_required,
        possible_causes: to_owned(causes),
        next_steps: to_owned(steps),
        risk_assessment,
    }
}

/// Absolute difference as a percentage of the cash book; zero for an empty
/// cash book.
fn difference_percentage(diff: Decimal, cash_book: Decimal) -> Decimal {
    if cash_book.is_zero() {
        Decimal::ZERO
    } else {
        percentage_of(diff, cash_book).abs()
    }
}

fn risk_band(percentage: Decimal, rules: &BankVouchingRules) -> RiskLevel {
    if percentage > rules.high_risk_percent {
        RiskLevel::High
    } else if percentage > rules.medium_risk_percent {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Records how a bank vouching result was reached.
pub fn explain_bank_vouching(
    input: &BankVouchingInput,
    result: &BankVouchingResult,
    rules: &BankVouchingRules,
    step_number: u32,
) -> AuditExplanation {
    let difference_step = AuditStep {
        step_number,
        rule_id: "bank_difference".to_string(),
        rule_name: "Bank Statement Difference".to_string(),
        input: serde_json::json!({
            "bank_statement": format_plain(input.bank_statement),
            "cash_book": format_plain(input.cash_book)
        }),
        output: serde_json::json!({
            "difference": format_plain(result.difference),
            "reconciliation_required": result.reconciliation_required
        }),
        reasoning: format!(
            "₹{} - ₹{} = ₹{}",
            format_plain(input.bank_statement),
            format_plain(input.cash_book),
            format_plain(result.difference)
        ),
    };

    let percentage = difference_percentage(result.difference, input.cash_book);
    let risk_reasoning = if result.reconciliation_required {
        format!(
            "Difference is {}% of the cash book (medium above {}%, high above {}%)",
            format_plain(round_half_up(percentage, 2)),
            format_plain(rules.medium_risk_percent),
            format_plain(rules.high_risk_percent)
        )
    } else {
        "Balances agree".to_string()
    };

    let risk_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "bank_risk_assessment".to_string(),
        rule_name: "Reconciliation Risk".to_string(),
        input: serde_json::json!({
            "difference_percentage": format_plain(round_half_up(percentage, 2))
        }),
        output: serde_json::json!({
            "risk_assessment": result.risk_assessment.label()
        }),
        reasoning: risk_reasoning,
    };

    let mut warnings = Vec::new();
    if input.cash_book.is_zero() && result.reconciliation_required {
        warnings.push(AuditWarning::new(
            "ZERO_CASH_BOOK",
            "Cash book balance is zero; difference percentage is reported as zero",
            "medium",
        ));
    }

    AuditExplanation {
        steps: vec![difference_step, risk_step],
        warnings,
    }
}

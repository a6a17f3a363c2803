//! Rule profile types for the audit calculators.
//!
//! This module contains the strongly-typed rule structures that are
//! deserialized from YAML profile files. Every rule set defaults to the
//! standard constants, so a profile file only needs to name what it changes.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about a rule profile.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileMetadata {
    /// Short code identifying the profile (e.g., "standard").
    pub code: String,
    /// Human-readable profile name.
    pub name: String,
    /// Version or assessment year the profile targets.
    pub version: String,
}

impl Default for ProfileMetadata {
    fn default() -> Self {
        Self {
            code: "standard".to_string(),
            name: "Standard Audit Rules".to_string(),
            version: "built-in".to_string(),
        }
    }
}

/// One bracket of the progressive income tax schedule.
///
/// Tax for an income inside the slab is
/// `base_tax + (income - lower_bound) * rate_percent / 100`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxSlab {
    /// Income at which this slab's marginal rate starts.
    pub lower_bound: Decimal,
    /// Inclusive upper bound; `None` for the top slab.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// Tax accumulated by all lower slabs.
    pub base_tax: Decimal,
    /// Marginal rate as a percentage.
    pub rate_percent: Decimal,
}

impl TaxSlab {
    fn new(lower_bound: i64, upper_bound: Option<i64>, base_tax: i64, rate_percent: i64) -> Self {
        Self {
            lower_bound: Decimal::from(lower_bound),
            upper_bound: upper_bound.map(Decimal::from),
            base_tax: Decimal::from(base_tax),
            rate_percent: Decimal::from(rate_percent),
        }
    }
}

/// The progressive tax schedule.
///
/// Slabs are ordered by upper bound and the last slab is unbounded, so every
/// income falls into exactly one slab.
///
/// # Example
///
/// ```
/// use audit_engine::config::TaxRules;
/// use rust_decimal::Decimal;
///
/// let rules = TaxRules::default();
/// let slab = rules.slab_for(Decimal::from(600_000));
/// assert_eq!(slab.rate_percent, Decimal::from(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxRules {
    slabs: Vec<TaxSlab>,
}

impl TaxRules {
    /// Creates a schedule after checking the slabs are usable.
    ///
    /// Returns `InvalidRules` if the list is empty, if any slab but the last
    /// lacks an upper bound, if the last slab has one, or if the upper bounds
    /// are not strictly increasing.
    pub fn new(slabs: Vec<TaxSlab>) -> EngineResult<Self> {
        let Some((last, bounded)) = slabs.split_last() else {
            return Err(EngineError::InvalidRules {
                message: "no tax slabs defined".to_string(),
            });
        };

        if last.upper_bound.is_some() {
            return Err(EngineError::InvalidRules {
                message: "the last tax slab must not have an upper bound".to_string(),
            });
        }

        let mut previous: Option<Decimal> = None;
        for (index, slab) in bounded.iter().enumerate() {
            let upper = slab.upper_bound.ok_or_else(|| EngineError::InvalidRules {
                message: format!("tax slab {} is missing an upper bound", index + 1),
            })?;
            if previous.is_some_and(|p| upper <= p) {
                return Err(EngineError::InvalidRules {
                    message: format!(
                        "tax slab {} upper bound {} is not above the previous slab",
                        index + 1,
                        upper
                    ),
                });
            }
            previous = Some(upper);
        }

        Ok(Self { slabs })
    }

    /// Returns the slabs in ascending order.
    pub fn slabs(&self) -> &[TaxSlab] {
        &self.slabs
    }

    /// Returns the slab an income falls into.
    pub fn slab_for(&self, income: Decimal) -> &TaxSlab {
        self.slabs
            .iter()
            .find(|slab| slab.upper_bound.is_none_or(|upper| income <= upper))
            .unwrap_or_else(|| &self.slabs[self.slabs.len() - 1])
    }
}

impl Default for TaxRules {
    fn default() -> Self {
        Self {
            slabs: vec![
                TaxSlab::new(0, Some(250_000), 0, 0),
                TaxSlab::new(250_000, Some(500_000), 0, 5),
                TaxSlab::new(500_000, Some(750_000), 12_500, 10),
                TaxSlab::new(750_000, Some(1_000_000), 37_500, 15),
                TaxSlab::new(1_000_000, Some(1_250_000), 75_000, 20),
                TaxSlab::new(1_250_000, Some(1_500_000), 125_000, 25),
                TaxSlab::new(1_500_000, None, 187_500, 30),
            ],
        }
    }
}

/// Salary reconciliation thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SalaryRules {
    /// Absolute variance above which an adjustment is required.
    pub adjustment_threshold: Decimal,
}

impl Default for SalaryRules {
    fn default() -> Self {
        Self {
            adjustment_threshold: Decimal::from(1000),
        }
    }
}

/// Professional tax thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProfessionalTaxRules {
    /// Shortfall above which a penalty may apply.
    pub penalty_threshold: Decimal,
}

impl Default for ProfessionalTaxRules {
    fn default() -> Self {
        Self {
            penalty_threshold: Decimal::from(500),
        }
    }
}

/// Opening balance materiality rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OpeningBalanceRules {
    /// Fraction of the book balance treated as material (0.05 = 5%).
    pub materiality_rate: Decimal,
    /// Variance percentage above which an immaterial variance is medium risk.
    pub medium_risk_variance_percent: Decimal,
}

impl Default for OpeningBalanceRules {
    fn default() -> Self {
        Self {
            materiality_rate: Decimal::new(5, 2),
            medium_risk_variance_percent: Decimal::ONE,
        }
    }
}

/// Bank vouching risk tiers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BankVouchingRules {
    /// Difference percentage above which the risk is high.
    pub high_risk_percent: Decimal,
    /// Difference percentage above which the risk is medium.
    pub medium_risk_percent: Decimal,
}

impl Default for BankVouchingRules {
    fn default() -> Self {
        Self {
            high_risk_percent: Decimal::from(10),
            medium_risk_percent: Decimal::from(2),
        }
    }
}

/// Tax slab file structure (`tax_slabs.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct TaxSlabsConfig {
    /// The slabs in ascending order.
    pub slabs: Vec<TaxSlab>,
}

/// Threshold file structure (`thresholds.yaml`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThresholdsConfig {
    /// Salary reconciliation thresholds.
    pub salary: SalaryRules,
    /// Professional tax thresholds.
    pub professional_tax: ProfessionalTaxRules,
    /// Opening balance materiality rules.
    pub opening_balance: OpeningBalanceRules,
    /// Bank vouching risk tiers.
    pub bank_vouching: BankVouchingRules,
}

/// All rules needed by the five calculators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditRules {
    /// Tax audit schedule.
    pub tax: TaxRules,
    /// Salary reconciliation thresholds.
    pub salary: SalaryRules,
    /// Professional tax thresholds.
    pub professional_tax: ProfessionalTaxRules,
    /// Opening balance materiality rules.
    pub opening_balance: OpeningBalanceRules,
    /// Bank vouching risk tiers.
    pub bank_vouching: BankVouchingRules,
}

impl AuditRules {
    /// Assembles the rules from the parsed profile files.
    pub fn from_parts(tax: TaxRules, thresholds: ThresholdsConfig) -> EngineResult<Self> {
        let rules = Self {
            tax,
            salary: thresholds.salary,
            professional_tax: thresholds.professional_tax,
            opening_balance: thresholds.opening_balance,
            bank_vouching: thresholds.bank_vouching,
        };
        rules.validate()?;
        Ok(rules)
    }

    /// Checks that thresholds are non-negative and the bank tiers are ordered.
    pub fn validate(&self) -> EngineResult<()> {
        let thresholds = [
            ("salary.adjustment_threshold", self.salary.adjustment_threshold),
            (
                "professional_tax.penalty_threshold",
                self.professional_tax.penalty_threshold,
            ),
            (
                "opening_balance.materiality_rate",
                self.opening_balance.materiality_rate,
            ),
            (
                "opening_balance.medium_risk_variance_percent",
                self.opening_balance.medium_risk_variance_percent,
            ),
            (
                "bank_vouching.medium_risk_percent",
                self.bank_vouching.medium_risk_percent,
            ),
            (
                "bank_vouching.high_risk_percent",
                self.bank_vouching.high_risk_percent,
            ),
        ];

        if let Some((name, value)) = thresholds.iter().find(|(_, v)| v.is_sign_negative()) {
            return Err(EngineError::InvalidRules {
                message: format!("{} must not be negative (got {})", name, value),
            });
        }

        if self.bank_vouching.medium_risk_percent > self.bank_vouching.high_risk_percent {
            return Err(EngineError::InvalidRules {
                message: "bank_vouching.medium_risk_percent exceeds high_risk_percent".to_string(),
            });
        }

        Ok(())
    }
}

/// The complete rule profile.
#[derive(Debug, Clone, Default)]
pub struct AuditConfig {
    metadata: ProfileMetadata,
    rules: AuditRules,
}

impl AuditConfig {
    /// Creates a new AuditConfig from its component parts.
    pub fn new(metadata: ProfileMetadata, rules: AuditRules) -> Self {
        Self { metadata, rules }
    }

    /// Returns the profile metadata.
    pub fn profile(&self) -> &ProfileMetadata {
        &self.metadata
    }

    /// Returns the calculator rules.
    pub fn rules(&self) -> &AuditRules {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn test_default_schedule_is_valid() {
        let rules = TaxRules::default();
        assert!(TaxRules::new(rules.slabs().to_vec()).is_ok());
        assert_eq!(rules.slabs().len(), 7);
    }

    #[test]
    fn test_slab_for_uses_inclusive_upper_bounds() {
        let rules = TaxRules::default();
        assert_eq!(rules.slab_for(dec(250_000)).rate_percent, dec(0));
        assert_eq!(rules.slab_for(dec(250_001)).rate_percent, dec(5));
        assert_eq!(rules.slab_for(dec(1_500_000)).rate_percent, dec(25));
        assert_eq!(rules.slab_for(dec(9_000_000)).rate_percent, dec(30));
    }

    #[test]
    fn test_slab_for_negative_income_uses_first_slab() {
        let rules = TaxRules::default();
        assert_eq!(rules.slab_for(dec(-10)).rate_percent, dec(0));
    }

    #[test]
    fn test_empty_schedule_is_rejected() {
        assert!(matches!(
            TaxRules::new(vec![]),
            Err(EngineError::InvalidRules { .. })
        ));
    }

    #[test]
    fn test_bounded_top_slab_is_rejected() {
        let slabs = vec![TaxSlab::new(0, Some(100), 0, 0)];
        assert!(matches!(
            TaxRules::new(slabs),
            Err(EngineError::InvalidRules { message }) if message.contains("last tax slab")
        ));
    }

    #[test]
    fn test_unordered_slabs_are_rejected() {
        let slabs = vec![
            TaxSlab::new(0, Some(500), 0, 0),
            TaxSlab::new(500, Some(400), 0, 5),
            TaxSlab::new(400, None, 10, 10),
        ];
        assert!(matches!(
            TaxRules::new(slabs),
            Err(EngineError::InvalidRules { message }) if message.contains("slab 2")
        ));
    }

    #[test]
    fn test_default_thresholds() {
        let rules = AuditRules::default();
        assert_eq!(rules.salary.adjustment_threshold, dec(1000));
        assert_eq!(rules.professional_tax.penalty_threshold, dec(500));
        assert_eq!(rules.opening_balance.materiality_rate, Decimal::new(5, 2));
        assert_eq!(rules.bank_vouching.high_risk_percent, dec(10));
        assert_eq!(rules.bank_vouching.medium_risk_percent, dec(2));
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_negative_threshold_is_rejected() {
        let mut rules = AuditRules::default();
        rules.salary.adjustment_threshold = dec(-1);
        assert!(matches!(
            rules.validate(),
            Err(EngineError::InvalidRules { message }) if message.contains("salary.adjustment_threshold")
        ));
    }

    #[test]
    fn test_inverted_bank_tiers_are_rejected() {
        let mut rules = AuditRules::default();
        rules.bank_vouching.medium_risk_percent = dec(20);
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_partial_thresholds_file_keeps_defaults() {
        let yaml = "salary:\n  adjustment_threshold: 2500\n";
        let thresholds: ThresholdsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(thresholds.salary.adjustment_threshold, dec(2500));
        assert_eq!(thresholds.professional_tax.penalty_threshold, dec(500));
    }
}

//! Rule profile loading and management for the Audit Calculation Engine.
//!
//! This module loads the tax schedule and the variance, penalty, materiality
//! and risk thresholds from YAML files. Built-in defaults reproduce the
//! standard rules, so a profile directory is optional.
//!
//! # Example
//!
//! ```no_run
//! use audit_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Loaded profile: {}", config.profile().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AuditConfig, AuditRules, BankVouchingRules, OpeningBalanceRules, ProfessionalTaxRules,
    ProfileMetadata, SalaryRules, TaxRules, TaxSlab, TaxSlabsConfig, ThresholdsConfig,
};

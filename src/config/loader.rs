//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rule profiles
//! from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{
    AuditConfig, AuditRules, ProfileMetadata, TaxRules, TaxSlabsConfig, ThresholdsConfig,
};

/// Loads and provides access to a rule profile.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// ├── profile.yaml     # Profile metadata
/// ├── tax_slabs.yaml   # Progressive tax schedule
/// └── thresholds.yaml  # Variance, penalty, materiality and risk thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use audit_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// println!("Loaded profile: {}", loader.profile().name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AuditConfig,
}

impl ConfigLoader {
    /// Loads a rule profile from the specified directory.
    ///
    /// Returns an error if any file is missing, contains invalid YAML, or
    /// describes rules that fail validation.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use audit_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/standard")?;
    /// # Ok::<(), audit_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ProfileMetadata>(&path.join("profile.yaml"))?;
        let slabs = Self::load_yaml::<TaxSlabsConfig>(&path.join("tax_slabs.yaml"))?;
        let thresholds = Self::load_yaml::<ThresholdsConfig>(&path.join("thresholds.yaml"))?;

        let tax = TaxRules::new(slabs.slabs)?;
        let rules = AuditRules::from_parts(tax, thresholds)?;

        info!(
            profile = %metadata.code,
            version = %metadata.version,
            tax_slabs = rules.tax.slabs().len(),
            "Loaded audit rule profile"
        );

        Ok(Self {
            config: AuditConfig::new(metadata, rules),
        })
    }

    /// Returns a loader holding the built-in standard rules.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading profile file");

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying profile.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Returns the profile metadata.
    pub fn profile(&self) -> &ProfileMetadata {
        self.config.profile()
    }

    /// Returns the calculator rules.
    pub fn rules(&self) -> &AuditRules {
        self.config.rules()
    }
}

//! Application state for the Audit Calculation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::intake::{DocumentIntake, MockDocumentIntake};

/// Shared application state.
///
/// Holds the loaded rule profile and the document intake. Both are
/// immutable once the server starts.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rule profile.
    config: Arc<ConfigLoader>,
    /// Turns uploaded documents into calculator input.
    intake: Arc<dyn DocumentIntake>,
}

impl AppState {
    /// Creates state with the given rule profile and the mock intake.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_intake(config, Arc::new(MockDocumentIntake))
    }

    /// Creates state with an explicit document intake.
    pub fn with_intake(config: ConfigLoader, intake: Arc<dyn DocumentIntake>) -> Self {
        Self {
            config: Arc::new(config),
            intake,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the document intake.
    pub fn intake(&self) -> &dyn DocumentIntake {
        self.intake.as_ref()
    }
}

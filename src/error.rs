//! Error types for the Audit Calculation Engine.
//!
//! The calculators themselves never fail. These errors cover the layers
//! around them: loading rule profiles, resolving tools and accepting
//! uploaded documents.

use thiserror::Error;

/// The main error type for the Audit Calculation Engine.
///
/// # Example
///
/// ```
/// use audit_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/profile.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/profile.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The rule profile parsed but is not usable.
    #[error("Invalid audit rules: {message}")]
    InvalidRules {
        /// A description of what is wrong with the rules.
        message: String,
    },

    /// No audit tool exists with the given identifier.
    #[error("Audit tool not found: {id}")]
    ToolNotFound {
        /// The identifier that did not match any tool.
        id: String,
    },

    /// An upload slot of a document batch was left empty.
    #[error("No documents supplied for {tool}: {slot} is empty")]
    NoDocuments {
        /// The identifier of the tool the batch was meant for.
        tool: String,
        /// Label of the empty upload slot.
        slot: String,
    },

    /// An uploaded document was rejected.
    #[error("Invalid document '{name}': {message}")]
    InvalidDocument {
        /// The file name of the rejected document.
        name: String,
        /// Why the document was rejected.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

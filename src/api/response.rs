//! Response types for the Audit Calculation Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing content type error response.
    pub fn missing_content_type() -> Self {
        Self::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        )
    }

    /// Creates a tool not found error response.
    pub fn tool_not_found(id: &str) -> Self {
        Self::with_details(
            "TOOL_NOT_FOUND",
            format!("Audit tool not found: {}", id),
            format!(
                "Known tools are tax-audit, salary-reconciliation, professional-tax, opening-balance and bank-vouching; got '{}'",
                id
            ),
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRules { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid audit rules", message),
            },
            EngineError::ToolNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::tool_not_found(&id),
            },
            EngineError::NoDocuments { tool, slot } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "NO_DOCUMENTS",
                    format!("No documents supplied for {}: {} is empty", tool, slot),
                    "Upload at least one PDF, PNG or JPG document to every upload slot of the tool",
                ),
            ),
            EngineError::InvalidDocument { name, message } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_DOCUMENT",
                    format!("Invalid document '{}': {}", name, message),
                    "Documents must be PDF, PNG or JPG files of at most 10 MB. Each upload slot \
                     takes at most 3 files, 5 for the tax audit and bank vouching. The tax \
                     audit has a single slot",
                ),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_tool_not_found_maps_to_404() {
        let response: ApiErrorResponse = EngineError::ToolNotFound {
            id: "payroll".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "TOOL_NOT_FOUND");
        assert!(response.error.message.contains("payroll"));
    }

    #[test]
    fn test_document_errors_map_to_400() {
        let response: ApiErrorResponse = EngineError::NoDocuments {
            tool: "salary-reconciliation".to_string(),
            slot: "Actual Salary Documents".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "NO_DOCUMENTS");
        assert!(response.error.message.contains("Actual Salary Documents"));

        let response: ApiErrorResponse = EngineError::InvalidDocument {
            name: "ledger.xlsx".to_string(),
            message: "unsupported".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_DOCUMENT");
        assert!(
            response
                .error
                .details
                .as_deref()
                .unwrap()
                .contains("Each upload slot takes at most 3 files")
        );
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let errors = [
            EngineError::ConfigNotFound {
                path: "profile.yaml".to_string(),
            },
            EngineError::ConfigParseError {
                path: "tax_slabs.yaml".to_string(),
                message: "bad".to_string(),
            },
            EngineError::InvalidRules {
                message: "no tax slabs defined".to_string(),
            },
        ];
        for error in errors {
            let response: ApiErrorResponse = error.into();
            assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(response.error.code, "CONFIG_ERROR");
        }
    }
}

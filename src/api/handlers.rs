//! HTTP request handlers for the Audit Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::perform_audit;
use crate::intake::DocumentBatch;
use crate::models::{
    AuditRequest, AuditTool, AuditTrace, BankVouchingInput, CalculationEnvelope,
    OpeningBalanceInput, ProfessionalTaxInput, SalaryReconciliationInput, TaxAuditInput,
    ToolDescriptor,
};

use super::request::DocumentBatchRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/tools", get(tools_handler))
        .route("/tax-audit", post(audit_handler::<TaxAuditInput>))
        .route(
            "/salary-reconciliation",
            post(audit_handler::<SalaryReconciliationInput>),
        )
        .route(
            "/professional-tax",
            post(audit_handler::<ProfessionalTaxInput>),
        )
        .route("/opening-balance", post(audit_handler::<OpeningBalanceInput>))
        .route("/bank-vouching", post(audit_handler::<BankVouchingInput>))
        .route("/:tool/documents", post(documents_handler))
        .with_state(state)
}

/// Handler for GET /tools.
///
/// Lists the catalog entry of every audit tool.
async fn tools_handler() -> Json<Vec<ToolDescriptor>> {
    Json(AuditTool::ALL.iter().map(AuditTool::descriptor).collect())
}

/// Handler for the five calculator endpoints.
///
/// Accepts the calculator input for one tool and returns the calculation
/// envelope.
async fn audit_handler<T>(
    State(state): State<AppState>,
    payload: Result<Json<T>, JsonRejection>,
) -> Response
where
    T: DeserializeOwned + Into<AuditRequest> + Send + 'static,
{
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();

    let request: AuditRequest = match payload {
        Ok(Json(input)) => input.into(),
        Err(rejection) => {
            return ApiErrorResponse::bad_request(rejection_error(rejection, correlation_id))
                .into_response();
        }
    };
    info!(
        correlation_id = %correlation_id,
        tool = %request.tool(),
        "Processing audit request"
    );

    envelope_response(&state, correlation_id, &request)
}

/// Handler for POST /{tool}/documents.
///
/// Runs the uploaded documents through the document intake and calculates
/// the tool on the extracted figures. Each upload slot of the tool must
/// hold at least one document.
async fn documents_handler(
    State(state): State<AppState>,
    Path(tool_id): Path<String>,
    payload: Result<Json<DocumentBatchRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let tool = match AuditTool::from_id(&tool_id) {
        Ok(tool) => tool,
        Err(err) => {
            warn!(correlation_id = %correlation_id, tool = %tool_id, "Unknown audit tool");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let batch: DocumentBatch = match payload {
        Ok(Json(request)) => request.into(),
        Err(rejection) => {
            return ApiErrorResponse::bad_request(rejection_error(rejection, correlation_id))
                .into_response();
        }
    };
    info!(
        correlation_id = %correlation_id,
        tool = %tool,
        intake = state.intake().name(),
        primary = batch.primary.len(),
        secondary = batch.secondary.len(),
        "Processing document upload"
    );

    match state.intake().extract(tool, &batch) {
        Ok(request) => envelope_response(&state, correlation_id, &request),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Document intake failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Maps a JSON body rejection to the API error reported to the client.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiError::missing_content_type()
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn envelope_response(state: &AppState, correlation_id: Uuid, request: &AuditRequest) -> Response {
    let envelope = build_envelope(state, request);
    info!(
        correlation_id = %correlation_id,
        tool = %request.tool(),
        calculation_id = %envelope.calculation_id,
        duration_us = envelope.audit_trace.duration_us,
        "Audit completed successfully"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(envelope),
    )
        .into_response()
}

/// Runs the audit under the loaded profile and wraps it in an envelope.
fn build_envelope(state: &AppState, request: &AuditRequest) -> CalculationEnvelope {
    let start_time = Instant::now();
    let evaluation = perform_audit(request, state.config().rules());
    let duration_us = start_time.elapsed().as_micros() as u64;

    CalculationEnvelope {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        profile: state.config().profile().code.clone(),
        outcome: evaluation.outcome,
        audit_trace: AuditTrace {
            steps: evaluation.explanation.steps,
            warnings: evaluation.explanation.warnings,
            duration_us,
        },
    }
}

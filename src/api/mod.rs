//! HTTP API module for the Audit Calculation Engine.
//!
//! This module provides the REST API endpoints for the five audit
//! calculators, the tool catalog and the document upload flow.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::DocumentBatchRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

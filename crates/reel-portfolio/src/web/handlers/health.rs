//! Health check HTTP handlers

use axum::response::IntoResponse;

use crate::web::{
    extractors::RequestContext,
    responses::{HealthResponse, ok},
    utils::log_request,
};

/// Health check endpoint
pub async fn health_check(context: RequestContext) -> impl IntoResponse {
    log_request(&context);
    ok(HealthResponse::healthy())
}

/// Liveness check
pub async fn liveness_check() -> &'static str {
    "OK"
}

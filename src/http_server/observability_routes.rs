//! Observability HTTP Routes
//!
//! Liveness endpoint for load balancers and orchestrators.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};

/// Body returned by the health check
pub const HEALTH_CHECK_BODY: &str = "OK";

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health-check", get(health_handler))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, HEALTH_CHECK_BODY)
}

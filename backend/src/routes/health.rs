//! Health check endpoints
//!
//! Provides Kubernetes-compatible health check endpoints:
//! - /health - Basic health check
//! - /health/ready - Readiness check (checks the metrics recorder)
//! - /health/live - Liveness check (always returns OK if server is running)
//!
//! Also serves the Prometheus scrape endpoint at /metrics.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

/// Individual health checks
#[derive(Serialize)]
pub struct HealthChecks {
    pub metrics: CheckStatus,
}

/// Status of an individual check
#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    })
}

/// Readiness check - checks if the service is ready to accept traffic
///
/// The engine has no external dependencies, so the service is ready as
/// soon as it is serving. The metrics check is informational.
pub async fn readiness_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let metrics_check = match (&state.metrics, state.config().metrics.enabled) {
        (Some(_), _) => CheckStatus {
            status: "healthy".to_string(),
            message: None,
        },
        (None, true) => CheckStatus {
            status: "degraded".to_string(),
            message: Some("Metrics recorder not installed".to_string()),
        },
        (None, false) => CheckStatus {
            status: "disabled".to_string(),
            message: None,
        },
    };

    Json(HealthResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(HealthChecks {
            metrics: metrics_check,
        }),
    })
}

/// Liveness check - checks if the service is alive
/// Always returns OK if the server is running
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    })
}

/// Prometheus scrape endpoint
pub async fn metrics_export(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let handle = state
        .metrics
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("Metrics are disabled".to_string()))?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    ))
}

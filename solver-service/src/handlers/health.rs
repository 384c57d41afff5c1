use crate::dtos::Greeting;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

pub const GREETING: &str = "Hello from the solver service";

/// Fixed greeting; touches no external dependency.
pub async fn hello() -> Json<Greeting> {
    Json(Greeting {
        message: GREETING.to_string(),
    })
}

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "solver-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness check endpoint for K8s readiness probes.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.text_provider.health_check().await.map_err(|e| {
        tracing::warn!(provider = %state.text_provider.name(), error = %e, "Provider health check failed");
        AppError::ServiceUnavailable
    })?;

    Ok(StatusCode::OK)
}

pub async fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Not Found"))
}

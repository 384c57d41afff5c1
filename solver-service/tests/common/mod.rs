#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use secrecy::Secret;
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use solver_service::config::{
    GenerationSettings, GoogleConfig, ModelConfig, ObservabilityConfig, SolverConfig,
    DEFAULT_API_BASE, DEFAULT_TEXT_MODEL,
};
use solver_service::services::providers::mock::MockTextProvider;
use solver_service::startup::{build_router, AppState};
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;

/// Deadline used unless a test needs to trip it.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(2);

pub fn test_config(timeout: Duration) -> SolverConfig {
    SolverConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            log_level: "error".to_string(),
        },
        google: GoogleConfig {
            api_key: Secret::new("test-api-key".to_string()),
            api_base: DEFAULT_API_BASE.to_string(),
        },
        models: ModelConfig {
            text_model: DEFAULT_TEXT_MODEL.to_string(),
        },
        generation: GenerationSettings {
            timeout,
            temperature: None,
            max_output_tokens: None,
        },
        observability: ObservabilityConfig {
            otlp_endpoint: None,
        },
    }
}

pub fn router_with(provider: Arc<MockTextProvider>) -> Router {
    router_with_timeout(provider, TEST_TIMEOUT)
}

pub fn router_with_timeout(provider: Arc<MockTextProvider>, timeout: Duration) -> Router {
    build_router(AppState::new(test_config(timeout), provider))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a request through the router and decode the JSON body (`Null` if not JSON).
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

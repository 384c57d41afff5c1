//! Integration tests that run the full application on a random port.

mod common;

use common::{test_config, TEST_TIMEOUT};
use reqwest::Client;
use solver_service::handlers::health::GREETING;
use solver_service::services::providers::mock::MockTextProvider;
use solver_service::startup::Application;
use std::sync::Arc;
use std::time::Duration;

/// Spawn the application with `provider` and return its base address.
async fn spawn_app(provider: MockTextProvider) -> String {
    let app = Application::build_with_provider(test_config(TEST_TIMEOUT), Arc::new(provider))
        .await
        .expect("Failed to build application");

    let address = format!("http://127.0.0.1:{}", app.port());

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for the server to accept connections
    let client = Client::new();
    for _ in 0..50 {
        if client.get(format!("{}/health", address)).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    address
}

#[tokio::test]
async fn greeting_returns_fixed_payload() {
    // An unhealthy provider proves the greeting does not depend on it.
    let address = spawn_app(MockTextProvider::failing("down").unhealthy()).await;

    let response = Client::new()
        .get(format!("{}/api/py/helloFastApi", address))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, serde_json::json!({ "message": GREETING }));
}

#[tokio::test]
async fn health_check_returns_ok() {
    let address = spawn_app(MockTextProvider::responding("ok")).await;

    let response = Client::new()
        .get(format!("{}/health", address))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "solver-service");
}

#[tokio::test]
async fn readiness_follows_provider_health() {
    let healthy = spawn_app(MockTextProvider::responding("ok")).await;
    let unhealthy = spawn_app(MockTextProvider::responding("ok").unhealthy()).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", healthy))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 200);

    let response = client
        .get(format!("{}/ready", unhealthy))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 503);
}

#[tokio::test]
async fn solve_round_trip_over_http() {
    let address = spawn_app(MockTextProvider::responding("FINAL:\nx = 4\n")).await;

    let response = Client::new()
        .post(format!("{}/api/py/solve-math", address))
        .json(&serde_json::json!({ "problem": "2x = 8" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().contains_key("x-request-id"));
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["solution"], "FINAL:\nx = 4");
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let address = spawn_app(MockTextProvider::responding("ok")).await;

    let response = Client::new()
        .get(format!("{}/api/py/helloFastApi", address))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let address = spawn_app(MockTextProvider::responding("ok")).await;

    let response = Client::new()
        .get(format!("{}/api/py/does-not-exist", address))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, serde_json::json!({ "detail": "Not Found" }));
}

#[tokio::test]
async fn metrics_endpoint_serves_text() {
    let address = spawn_app(MockTextProvider::responding("ok")).await;

    let response = Client::new()
        .get(format!("{}/metrics", address))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

//! Application startup and lifecycle management.
//!
//! Builds the provider client once, wires it into the shared state, and serves
//! the HTTP API until a shutdown signal arrives.

use crate::config::SolverConfig;
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::{GenerationParams, TextProvider};
use crate::services::BoundedDelegate;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{make_request_span, metrics_middleware, request_id_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: SolverConfig,
    pub text_provider: Arc<dyn TextProvider>,
    pub delegate: BoundedDelegate,
    pub generation_params: GenerationParams,
}

impl AppState {
    pub fn new(config: SolverConfig, text_provider: Arc<dyn TextProvider>) -> Self {
        let delegate = BoundedDelegate::new(Arc::clone(&text_provider), config.generation.timeout);
        let generation_params = GenerationParams {
            temperature: config.generation.temperature,
            max_tokens: config.generation.max_output_tokens,
        };

        Self {
            config,
            text_provider,
            delegate,
            generation_params,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/py/helloFastApi", get(handlers::hello))
        .route("/api/py/models", get(handlers::list_models))
        .route("/api/py/solve-math", post(handlers::solve_math))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics::metrics))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
        // Development posture: any origin, method and header.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application against the Gemini API.
    pub async fn build(config: SolverConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.google.api_key.clone(),
            api_base: config.google.api_base.clone(),
            model: config.models.text_model.clone(),
        };
        let text_provider: Arc<dyn TextProvider> = Arc::new(
            GeminiTextProvider::new(gemini_config)
                .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?,
        );

        tracing::info!(
            model = %config.models.text_model,
            "Initialized Gemini text provider"
        );

        Self::build_with_provider(config, text_provider).await
    }

    /// Build the application with an already constructed provider.
    pub async fn build_with_provider(
        config: SolverConfig,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port,
            timeout_secs = config.generation.timeout.as_secs(),
            "Solver service listening"
        );

        Ok(Self {
            port,
            listener,
            state: AppState::new(config, text_provider),
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

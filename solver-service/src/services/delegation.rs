//! Bounded-time delegation of generation calls.
//!
//! A generation runs on its own tokio task and the caller waits for it under a
//! deadline. Every attempt ends in exactly one [`GenerationOutcome`]. When the
//! caller stops waiting, whether the deadline passed or the waiting future was
//! dropped, a cancellation token fires and the provider future is dropped with
//! its in-flight HTTP request.

use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use metrics::{counter, histogram};
use service_core::error::AppError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Client-facing detail for an expired deadline.
pub const TIMEOUT_DETAIL: &str = "Solution generation timed out";

/// Client-facing detail for a success without usable text.
pub const EMPTY_RESULT_DETAIL: &str = "Failed to generate solution";

/// Terminal state of one delegation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Raw provider text, untrimmed and unvalidated.
    Success(String),
    Timeout,
    ProviderError(String),
}

impl GenerationOutcome {
    fn label(&self) -> &'static str {
        match self {
            GenerationOutcome::Success(_) => "succeeded",
            GenerationOutcome::Timeout => "timed_out",
            GenerationOutcome::ProviderError(_) => "failed",
        }
    }

    /// Turn the outcome into trimmed solution text. Only an empty reply is a
    /// failure; whitespace-only text trims to an empty solution.
    pub fn into_solution(self) -> Result<String, SolveError> {
        match self {
            GenerationOutcome::Success(text) if text.is_empty() => Err(SolveError::EmptyResult),
            GenerationOutcome::Success(text) => Ok(text.trim().to_string()),
            GenerationOutcome::Timeout => Err(SolveError::Timeout),
            GenerationOutcome::ProviderError(message) => Err(SolveError::Provider(message)),
        }
    }
}

/// Request-scoped solve failures.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("{}", TIMEOUT_DETAIL)]
    Timeout,

    #[error("{0}")]
    Provider(String),

    #[error("{}", EMPTY_RESULT_DETAIL)]
    EmptyResult,
}

impl From<SolveError> for AppError {
    fn from(err: SolveError) -> Self {
        match err {
            SolveError::Timeout => AppError::GatewayTimeout(TIMEOUT_DETAIL.to_string()),
            other => AppError::InternalError(anyhow::Error::new(other)),
        }
    }
}

/// Runs provider generations under a wall-clock deadline.
#[derive(Clone)]
pub struct BoundedDelegate {
    provider: Arc<dyn TextProvider>,
    timeout: Duration,
}

impl BoundedDelegate {
    pub fn new(provider: Arc<dyn TextProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Generate text for `prompt`, waiting at most the configured timeout.
    ///
    /// Exactly one provider call is made. Nothing is retried.
    pub async fn generate(&self, prompt: String, params: GenerationParams) -> GenerationOutcome {
        let cancel = CancellationToken::new();
        let _cancel_on_exit = cancel.clone().drop_guard();

        let provider = Arc::clone(&self.provider);
        let started = Instant::now();

        let mut task = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(ProviderError::Cancelled),
                result = provider.generate(&prompt, &params) => result,
            }
        });

        let outcome = match tokio::time::timeout(self.timeout, &mut task).await {
            Ok(Ok(Ok(response))) => {
                tracing::debug!(
                    provider = %self.provider.name(),
                    input_tokens = response.input_tokens,
                    output_tokens = response.output_tokens,
                    finish_reason = ?response.finish_reason,
                    "Generation completed"
                );
                GenerationOutcome::Success(response.text.unwrap_or_default())
            }
            Ok(Ok(Err(e))) => {
                tracing::error!(provider = %self.provider.name(), error = %e, "Error generating solution");
                counter!(
                    "solver_provider_errors_total",
                    "provider" => self.provider.name().to_string(),
                    "error_type" => e.kind()
                )
                .increment(1);
                GenerationOutcome::ProviderError(e.to_string())
            }
            Ok(Err(join_error)) => {
                tracing::error!(error = %join_error, "Generation task failed");
                GenerationOutcome::ProviderError(format!("Generation task failed: {}", join_error))
            }
            Err(_) => {
                tracing::error!(
                    timeout_secs = self.timeout.as_secs_f64(),
                    "Generation timed out"
                );
                GenerationOutcome::Timeout
            }
        };

        histogram!(
            "solver_provider_latency_seconds",
            "provider" => self.provider.name().to_string(),
            "model" => self.provider.model().to_string()
        )
        .record(started.elapsed().as_secs_f64());
        counter!("solver_generation_outcomes_total", "outcome" => outcome.label()).increment(1);

        outcome
    }
}

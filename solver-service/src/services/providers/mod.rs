//! AI provider abstractions and implementations.
//!
//! This module provides a trait-based abstraction for text generation
//! providers, allowing the service to run against Gemini or a scripted mock.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Generation cancelled")]
    Cancelled,
}

impl ProviderError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::ApiError(_) => "api_error",
            ProviderError::RateLimited => "rate_limited",
            ProviderError::ContentFiltered => "content_filtered",
            ProviderError::NetworkError(_) => "network_error",
            ProviderError::Cancelled => "cancelled",
        }
    }
}

/// Result of a provider response.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Generated text, if the provider produced any.
    pub text: Option<String>,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,

    /// Finish reason.
    pub finish_reason: FinishReason,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
}

/// Generation parameters for AI requests.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Temperature (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Maximum output tokens.
    pub max_tokens: Option<i32>,
}

/// A model advertised by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub description: String,
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Provider label used in logs and metrics.
    fn name(&self) -> &str;

    /// Model generation requests are sent to.
    fn model(&self) -> &str;

    /// Generate a text response.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    /// List every model the provider exposes.
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}

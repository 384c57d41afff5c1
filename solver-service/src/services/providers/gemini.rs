//! Gemini AI provider implementation.
//!
//! Implements text generation and model listing against Google's Gemini REST API.
//! The API key travels in the `x-goog-api-key` header so it never shows up in
//! request URLs or in the transport errors built from them.

use super::{
    FinishReason, GenerationParams, ModelInfo, ProviderError, ProviderResponse, TextProvider,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Upper bound on a single HTTP exchange. The solve deadline is enforced by the
/// caller and is normally much shorter.
const HTTP_TIMEOUT: Duration = Duration::from_secs(120);

/// Page size requested when listing models.
const MODELS_PAGE_SIZE: u32 = 1000;

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Secret<String>,
    pub api_base: String,
    pub model: String,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        if config.api_key.expose_secret().is_empty() {
            return Err(ProviderError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| {
                ProviderError::NotConfigured(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    fn base(&self) -> &str {
        self.config.api_base.trim_end_matches('/')
    }

    /// Build the API URL for the configured model and method.
    fn api_url(&self, method: &str) -> String {
        format!("{}/models/{}:{}", self.base(), self.config.model, method)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(API_KEY_HEADER, self.config.api_key.expose_secret())
    }

    fn build_generation_config(&self, params: &GenerationParams) -> Option<GenerationConfig> {
        if params.temperature.is_none() && params.max_tokens.is_none() {
            return None;
        }

        Some(GenerationConfig {
            temperature: params.temperature,
            max_output_tokens: params.max_tokens,
        })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ProviderError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();

        if status.as_u16() == 429 {
            return Err(ProviderError::RateLimited);
        }

        Err(ProviderError::ApiError(format!(
            "Gemini API error {}: {}",
            status, error_text
        )))
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: self.build_generation_config(params),
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .send(self.client.post(self.api_url("generateContent")).json(&request))
            .await?;

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        if let Some(reason) = api_response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            tracing::warn!(block_reason = %reason, "Gemini blocked the prompt");
            return Err(ProviderError::ContentFiltered);
        }

        let candidate = api_response.candidates.first();

        let finish_reason = candidate
            .map(|c| match c.finish_reason.as_deref() {
                Some("MAX_TOKENS") => FinishReason::Length,
                Some("SAFETY") => FinishReason::ContentFilter,
                _ => FinishReason::Complete,
            })
            .unwrap_or(FinishReason::Complete);

        if finish_reason == FinishReason::ContentFilter {
            return Err(ProviderError::ContentFiltered);
        }

        // The answer may be split across several parts of the first candidate.
        let text = candidate
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .filter(|t| !t.is_empty());

        let usage = api_response.usage_metadata.unwrap_or_default();

        Ok(ProviderResponse {
            text,
            input_tokens: usage.prompt_token_count.unwrap_or(0),
            output_tokens: usage.candidates_token_count.unwrap_or(0),
            finish_reason,
        })
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        let url = format!("{}/models", self.base());
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(&url)
                .query(&[("pageSize", MODELS_PAGE_SIZE.to_string())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let page: ListModelsResponse = self.send(request).await?.json().await.map_err(|e| {
                ProviderError::ApiError(format!("Failed to parse model list: {}", e))
            })?;

            models.extend(page.models.into_iter().map(|m| ModelInfo {
                name: m.name,
                description: m.description.unwrap_or_default(),
            }));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        tracing::debug!(count = models.len(), "Listed Gemini models");
        Ok(models)
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        // Fetching the configured model checks both the key and the model name.
        let url = format!("{}/models/{}", self.base(), self.config.model);
        self.send(self.client.get(&url)).await.map(|_| ())
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

/// Only text parts matter here; other part kinds deserialize with `text: None`.
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<i32>,
    candidates_token_count: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<GeminiModel>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiModel {
    name: String,
    #[serde(default)]
    description: Option<String>,
}

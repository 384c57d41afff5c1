//! Mock provider implementation for testing.

use super::{
    FinishReason, GenerationParams, ModelInfo, ProviderError, ProviderResponse, TextProvider,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the mock does when asked to generate.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return this text.
    Respond(String),
    /// Return a successful response without any text.
    Empty,
    /// Fail with an API error carrying this message.
    Fail(String),
}

/// Scripted text provider.
///
/// Tracks how many generations were started and how many are still running,
/// so callers can observe whether an abandoned call was really dropped.
pub struct MockTextProvider {
    behavior: MockBehavior,
    delay: Duration,
    models: Result<Vec<ModelInfo>, String>,
    healthy: bool,
    calls: AtomicUsize,
    in_flight: Arc<AtomicUsize>,
    last_prompt: Mutex<Option<String>>,
}

impl MockTextProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            delay: Duration::ZERO,
            models: Ok(vec![ModelInfo {
                name: "models/mock-solver".to_string(),
                description: "Scripted model for tests".to_string(),
            }]),
            healthy: true,
            calls: AtomicUsize::new(0),
            in_flight: Arc::new(AtomicUsize::new(0)),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn responding(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Respond(text.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fail(message.into()))
    }

    /// Sleep this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_models(mut self, models: Vec<ModelInfo>) -> Self {
        self.models = Ok(models);
        self
    }

    pub fn with_models_failure(mut self, message: impl Into<String>) -> Self {
        self.models = Err(message.into());
        self
    }

    pub fn unhealthy(mut self) -> Self {
        self.healthy = false;
        self
    }

    /// Number of generate calls started.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of generate calls started but neither finished nor dropped.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }
}

/// Decrements the in-flight counter when the generate future completes or is dropped.
struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-solver"
    }

    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let _guard = InFlight::enter(&self.in_flight);

        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let text = match &self.behavior {
            MockBehavior::Respond(text) => Some(text.clone()),
            MockBehavior::Empty => None,
            MockBehavior::Fail(message) => return Err(ProviderError::ApiError(message.clone())),
        };

        Ok(ProviderResponse {
            text,
            input_tokens: i32::try_from(prompt.len() / 4).unwrap_or(i32::MAX),
            output_tokens: 10,
            finish_reason: FinishReason::Complete,
        })
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        self.models
            .clone()
            .map_err(ProviderError::ApiError)
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.healthy {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ))
        }
    }
}

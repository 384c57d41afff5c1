use crate::dtos::ModelsResponse;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// Pass the provider's model list through unchanged.
pub async fn list_models(State(state): State<AppState>) -> Result<Json<ModelsResponse>, AppError> {
    let available_models = state.text_provider.list_models().await.map_err(|e| {
        tracing::error!(provider = %state.text_provider.name(), error = %e, "Failed to list models");
        AppError::InternalError(anyhow::Error::new(e))
    })?;

    Ok(Json(ModelsResponse { available_models }))
}

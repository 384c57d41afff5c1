use crate::services::providers::ModelInfo;
use serde::{Deserialize, Serialize};

/// Body of `GET /api/py/models`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub available_models: Vec<ModelInfo>,
}

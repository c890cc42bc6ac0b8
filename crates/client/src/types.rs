//! Request and response records for the VibeFlow API
//!
//! Shapes mirror the backend's schemas. Fields the backend leaves as free-form
//! maps stay [`serde_json::Value`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Auth

/// Body for `POST /api/auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token pair returned by login and registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

// Projects

/// Body for `POST /api/projects`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

/// Body for `PUT /api/projects/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A project as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub goal: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Datasets

/// An uploaded dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetResponse {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub file_path: String,
    pub format: String,
    pub rows: Option<i64>,
    pub columns: Option<i64>,
    pub schema_info: Option<Value>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// First rows of a dataset for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetPreview {
    pub columns: Vec<String>,
    pub data: Vec<Value>,
    pub total_rows: i64,
}

// Models

/// Catalog entry for a fine-tunable base model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelCatalogResponse {
    pub id: i64,
    pub name: String,
    pub source: String,
    pub hf_model_id: Option<String>,
    pub size: String,
    pub task_types: Vec<String>,
    pub requirements: Value,
    pub description: String,
}

// Training

/// Hyperparameters for a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub learning_rate: f64,
    pub num_epochs: u32,
    pub batch_size: u32,
    pub max_length: u32,
    pub lora_r: u32,
    pub lora_alpha: u32,
    pub lora_dropout: f64,
    pub use_quantization: bool,
    pub quantization_type: String,
    pub gradient_accumulation_steps: u32,
    pub warmup_steps: u32,
    pub save_steps: u32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: 2e-4,
            num_epochs: 3,
            batch_size: 4,
            max_length: 512,
            lora_r: 8,
            lora_alpha: 32,
            lora_dropout: 0.1,
            use_quantization: true,
            quantization_type: "4bit".to_string(),
            gradient_accumulation_steps: 4,
            warmup_steps: 100,
            save_steps: 100,
        }
    }
}

/// Body for `POST /api/training/start`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingJobCreate {
    pub project_id: i64,
    pub dataset_id: i64,
    pub model_id: i64,
    pub config: TrainingConfig,
}

/// A training job and its progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingJobResponse {
    pub id: i64,
    pub project_id: i64,
    pub dataset_id: i64,
    pub model_id: i64,
    pub config: Value,
    pub status: String,
    pub progress: f64,
    pub metrics: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

// Agent

/// Body for `POST /api/agent/chat`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
}

/// Assistant reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentChatResponse {
    pub conversation_id: i64,
    pub message: String,
    pub suggestions: Option<Vec<String>>,
    pub recommendations: Option<Value>,
}

/// Body for `POST /api/agent/recommendations`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentRecommendationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
}

/// Model and configuration suggestion for a stated goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRecommendationResponse {
    pub recommended_model: Option<ModelCatalogResponse>,
    pub recommended_config: Option<TrainingConfig>,
    pub reasoning: String,
    pub alternatives: Option<Vec<ModelCatalogResponse>>,
}

// Service

/// Reply from `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_request_fields_are_omitted() {
        let body = AgentChatRequest {
            message: "hi".into(),
            conversation_id: None,
            project_id: Some(3),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "hi");
        assert_eq!(json["project_id"], 3);
        assert!(json.get("conversation_id").is_none());
    }

    #[test]
    fn training_config_defaults_match_backend() {
        let config = TrainingConfig::default();
        assert_eq!(config.num_epochs, 3);
        assert_eq!(config.quantization_type, "4bit");
        assert!(config.use_quantization);
    }
}

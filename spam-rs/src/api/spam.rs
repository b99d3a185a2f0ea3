//! Spam classification API endpoints
//!
//! `POST /train` retrains the model on the configured corpus, `POST /analyze`
//! classifies one message with the resident model.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::api::handlers::{ApiError, AppState};
use crate::spam::PredictionResult;
use crate::training::{ConfusionMatrix, TrainingReport};

/// API response wrapper. The payload's fields sit next to `success`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.to_string()),
        }
    }
}

/// Analyze request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub email_text: String,
}

/// Training response body
#[derive(Debug, Serialize)]
pub struct TrainResponse {
    pub results: TrainResults,
}

#[derive(Debug, Serialize)]
pub struct TrainResults {
    pub accuracy: f64,
    pub confusion_matrix: ConfusionMatrix,
    /// Fixed-width text table
    pub classification_report: String,
    pub run_id: Uuid,
    pub train_size: usize,
    pub test_size: usize,
    pub vocabulary_size: usize,
    pub converged: bool,
    pub trained_at: DateTime<Utc>,
}

impl From<TrainingReport> for TrainResults {
    fn from(report: TrainingReport) -> Self {
        Self {
            accuracy: report.accuracy,
            confusion_matrix: report.confusion_matrix,
            classification_report: report.classification_report.to_string(),
            run_id: report.run_id,
            train_size: report.train_size,
            test_size: report.test_size,
            vocabulary_size: report.vocabulary_size,
            converged: report.converged,
            trained_at: report.trained_at,
        }
    }
}

// === API Handlers ===

/// Retrain and replace the resident model
pub async fn train(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<TrainResponse>>, ApiError> {
    info!("Training requested");

    let report = state.spam_manager.train().await?;

    Ok(Json(ApiResponse::success(TrainResponse {
        results: report.into(),
    })))
}

/// Classify one message
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<PredictionResult>>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::validation(&format!("Invalid request body: {}", e.body_text())))?;

    let result = state.spam_manager.classify(&req.email_text).await?;

    Ok(Json(ApiResponse::success(result)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Label;

    #[test]
    fn test_success_is_flattened() {
        let result = PredictionResult::from_probabilities(Label::Spam, [0.25, 0.75], Uuid::nil());
        let json = serde_json::to_value(ApiResponse::success(result)).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["prediction"], "SPAM");
        assert_eq!(json["spam_probability"], 75.0);
        assert!(json.get("error").is_none());
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_error_shape() {
        let json = serde_json::to_value(ApiResponse::<()>::error("Model not trained")).unwrap();

        assert_eq!(json, serde_json::json!({"success": false, "error": "Model not trained"}));
    }

    #[test]
    fn test_missing_email_text_defaults_to_empty() {
        let req: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert!(req.email_text.is_empty());
    }
}

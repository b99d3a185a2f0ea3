//! Shared state, error mapping and service-level handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, warn};

use crate::api::spam::ApiResponse;
use crate::error::{ErrorKind, SpamError};
use crate::spam::SpamManager;

/// Shared application state
pub struct AppState {
    pub spam_manager: Arc<SpamManager>,
}

/// API error response
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, msg: &str) -> Self {
        Self {
            status,
            message: msg.to_string(),
        }
    }

    pub fn validation(msg: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }
}

impl From<SpamError> for ApiError {
    fn from(e: SpamError) -> Self {
        match e.kind() {
            ErrorKind::Validation => {
                warn!("Rejected request: {}", e);
                Self::new(StatusCode::BAD_REQUEST, &e.to_string())
            }
            ErrorKind::ModelUnavailable => {
                warn!("{}", e);
                Self::new(StatusCode::SERVICE_UNAVAILABLE, &e.to_string())
            }
            ErrorKind::Training => {
                error!("{}", e);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
            }
            ErrorKind::Internal => {
                // Full cause stays in the log
                error!("Internal error: {:?}", e);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::error(&self.message))).into_response()
    }
}

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let model = state.spam_manager.model_status().await;

    Json(json!({
        "status": "healthy",
        "service": "spam-rs",
        "version": env!("CARGO_PKG_VERSION"),
        "model": model,
    }))
}

/// Liveness probe
pub async fn test() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "message": "API is running",
    }))
}

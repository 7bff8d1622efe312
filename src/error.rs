use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

/// Response type for health check endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub products: usize,
}

/// Custom error type for API endpoints
///
/// Every failure is terminal for the request that caused it and is
/// rendered as a JSON body with a single `message` field.
#[derive(Debug)]
pub enum ApiError {
    /// Missing, malformed or out-of-range input
    Validation(String),
    /// A product with this id already exists
    Conflict(i64),
    /// No product matches the id
    NotFound(String),
    /// Path id is not a number
    InvalidId(String),
    /// Body could not be mapped onto the request type
    JsonError(serde_json::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_)
            | ApiError::Conflict(_)
            | ApiError::InvalidId(_)
            | ApiError::JsonError(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Conflict(_) => "Product with this ID already exists".to_string(),
            ApiError::NotFound(_) => "Product not found".to_string(),
            ApiError::InvalidId(_) => "Invalid product ID. Must be a number.".to_string(),
            ApiError::JsonError(err) => format!("Invalid request body: {}", err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Conflict(id) => tracing::warn!("Duplicate product id: {}", id),
            ApiError::NotFound(id) => tracing::debug!("No product for id: {}", id),
            ApiError::InvalidId(raw) => tracing::warn!("Non-numeric product id: {:?}", raw),
            ApiError::Validation(_) | ApiError::JsonError(_) => {}
        }

        let status = self.status();
        let body = Json(ErrorResponse {
            message: self.message(),
        });

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonError(err)
    }
}

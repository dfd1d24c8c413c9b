use crate::error::InterviewError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::{json, Value};
use tracing::error;

/// JSON error response: `{"error": ..., <detail>}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Session not found")
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    /// Attach an extra string field next to `error`
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.body[key] = Value::String(value.into());
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<InterviewError> for ApiError {
    fn from(err: InterviewError) -> Self {
        match &err {
            InterviewError::NotFound(_) => Self::not_found(),
            InterviewError::Validation(msg) => Self::bad_request(msg.clone()),
            InterviewError::Upstream(_) | InterviewError::ReportParse(_) => {
                error!("Evaluation failed: {}", err);
                Self::internal("Evaluation failed").with("message", err.to_string())
            }
            InterviewError::Bridge(_) => {
                error!("Room credential request failed: {}", err);
                Self::internal("Failed to create token").with("details", err.to_string())
            }
            InterviewError::AlreadyExists(_) => {
                error!("Session store error: {}", err);
                Self::internal("Internal server error")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

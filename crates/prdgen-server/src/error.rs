use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use prdgen_core::HttpError;
use prdgen_llm::GenerationError;
use thiserror::Error;

/// Everything `/api/generate` can fail with
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body missing, malformed, or out of range
    #[error("Invalid request data")]
    InvalidRequest {
        /// One human-readable entry per problem found
        details: Vec<String>,
    },

    /// Completion or parsing failed
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl HttpError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Generation(e) => e.status_code(),
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidRequest { .. } => "invalid_request_error",
            Self::Generation(e) => e.error_type(),
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::InvalidRequest { .. } => self.to_string(),
            Self::Generation(e) => e.client_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, error_type = self.error_type(), "generate request failed");
        } else {
            tracing::warn!(error = %self, error_type = self.error_type(), "generate request rejected");
        }

        let mut error = serde_json::json!({
            "type": self.error_type(),
            "message": self.client_message(),
        });

        if let Self::InvalidRequest { details } = &self {
            error["details"] = serde_json::json!(details);
        }

        (status, Json(serde_json::json!({ "error": error }))).into_response()
    }
}

use http::StatusCode;
use prdgen_core::HttpError;
use thiserror::Error;

/// Message used when a non-success response carries no readable error
pub const DEFAULT_TRANSPORT_MESSAGE: &str = "Failed to communicate with Groq API";

/// Errors that can occur during a completion round trip
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Required configuration value missing at client construction
    #[error("{0}")]
    Configuration(String),

    /// The HTTP call failed or returned a non-success status
    #[error("{message}")]
    Transport {
        /// Upstream status, absent when no response was received
        status: Option<StatusCode>,
        /// Provider error message, or a generic fallback
        message: String,
    },

    /// The call succeeded but the body does not match the expected shape
    #[error("Invalid response from Groq API")]
    Validation {
        /// Decoder diagnostic, logged but not shown to API consumers
        detail: String,
    },

    /// The body validated but held no generated text
    #[error("No response generated from Groq API")]
    EmptyResult,

    /// The outgoing request has no messages or a system message past position 0
    #[error("Malformed completion request: {detail}")]
    MalformedRequest {
        /// Which shape rule the request breaks
        detail: String,
    },
}

impl CompletionError {
    /// Upstream HTTP status, if this error came from a received response
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }

    fn is_rate_limited(&self) -> bool {
        self.status() == Some(StatusCode::TOO_MANY_REQUESTS)
    }
}

impl HttpError for CompletionError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Configuration(_) | Self::MalformedRequest { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Transport { .. } if self.is_rate_limited() => StatusCode::TOO_MANY_REQUESTS,
            Self::Transport { .. } | Self::Validation { .. } | Self::EmptyResult => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Configuration(_) => "configuration_error",
            Self::Transport { .. } if self.is_rate_limited() => "rate_limit_error",
            Self::Transport { .. } => "upstream_error",
            Self::Validation { .. } => "invalid_response_error",
            Self::EmptyResult => "empty_result_error",
            Self::MalformedRequest { .. } => "malformed_request_error",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_displays_provider_message() {
        let err = CompletionError::Transport {
            status: Some(StatusCode::TOO_MANY_REQUESTS),
            message: "API rate limit exceeded".to_owned(),
        };

        assert_eq!(err.to_string(), "API rate limit exceeded");
        assert_eq!(err.status(), Some(StatusCode::TOO_MANY_REQUESTS));
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.error_type(), "rate_limit_error");
    }

    #[test]
    fn other_upstream_statuses_map_to_bad_gateway() {
        let err = CompletionError::Transport {
            status: Some(StatusCode::SERVICE_UNAVAILABLE),
            message: DEFAULT_TRANSPORT_MESSAGE.to_owned(),
        };

        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.error_type(), "upstream_error");
    }

    #[test]
    fn validation_hides_decoder_detail() {
        let err = CompletionError::Validation {
            detail: "missing field `choices`".to_owned(),
        };

        assert_eq!(err.client_message(), "Invalid response from Groq API");
        assert!(err.status().is_none());
    }

    #[test]
    fn configuration_is_server_error() {
        let err = CompletionError::Configuration("GROQ_API_KEY environment variable is not set".to_owned());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_type(), "configuration_error");
    }

    #[test]
    fn malformed_request_is_server_error() {
        let err = CompletionError::MalformedRequest {
            detail: "request has no messages".to_owned(),
        };

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_type(), "malformed_request_error");
        assert_eq!(err.to_string(), "Malformed completion request: request has no messages");
    }
}

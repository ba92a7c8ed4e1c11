//! Server errors.

use actix_http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use hookfeed_models::EventType;
use thiserror::Error;

/// Server error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid JSON payload: {source}")]
    InvalidJson { source: serde_json::Error },

    #[error("Invalid JSON payload: expected an object")]
    PayloadNotAnObject,

    #[error("Error while parsing webhook event for type {event_type}: {source}")]
    EventParseError {
        event_type: EventType,
        source: serde_json::Error,
    },

    #[error("Could not set up metrics: {source}")]
    MetricsError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("I/O error: {source}")]
    IoError { source: std::io::Error },

    #[error("Domain error: {source}")]
    DomainError {
        source: hookfeed_core::DomainError,
    },
}

impl From<hookfeed_core::DomainError> for ServerError {
    fn from(e: hookfeed_core::DomainError) -> Self {
        Self::DomainError { source: e }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match &self {
            Self::InvalidJson { .. } | Self::PayloadNotAnObject | Self::EventParseError { .. } => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let message = if status_code.is_server_error() {
            tracing::error!(error = %self, message = "Request failed");
            "Processing failed.".to_string()
        } else {
            tracing::warn!(error = %self, message = "Rejected request");
            self.to_string()
        };

        HttpResponse::build(status_code).json(serde_json::json!({ "error": message }))
    }
}

/// Result alias for `ServerError`.
pub type Result<T> = core::result::Result<T, ServerError>;

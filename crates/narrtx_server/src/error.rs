//! HTTP mapping for pipeline errors.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use narrtx_error::{ProcessingError, ProcessingErrorKind};
use serde::{Deserialize, Serialize};
use tracing::error;

/// JSON body returned for 4xx/5xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Short error summary
    pub error: String,
    /// Underlying cause, when there is one worth showing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Errors a handler can return.
#[derive(Debug, derive_more::From)]
pub enum ApiError {
    /// Pipeline error
    Processing(ProcessingError),
    /// Body could not be read or decoded as JSON
    Rejection(JsonRejection),
}

impl ApiError {
    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Processing(e) => match e.kind() {
                ProcessingErrorKind::EmptyText => StatusCode::BAD_REQUEST,
                ProcessingErrorKind::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Rejection(rejection) => rejection.status(),
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::Processing(e) => match e.kind() {
                ProcessingErrorKind::EmptyText => ErrorBody {
                    error: e.kind().to_string(),
                    details: None,
                },
                ProcessingErrorKind::Unexpected(details) => ErrorBody {
                    error: "Failed to process narrative".to_string(),
                    details: Some(details.clone()),
                },
            },
            ApiError::Rejection(rejection) => ErrorBody {
                error: "Invalid request body".to_string(),
                details: Some(rejection.body_text()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = ?self, "Request failed");
        }
        (status, Json(self.body())).into_response()
    }
}

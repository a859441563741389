//! HTTP-facing errors. Every variant renders as `{"detail": "..."}`.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::registry::RegistryError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Missing required query parameter: email")]
    MissingEmail,

    #[error(transparent)]
    InvalidQuery(#[from] QueryRejection),

    #[error("template render failed: {0}")]
    Template(#[from] askama::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Registry(RegistryError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Registry(RegistryError::AlreadyRegistered)
            | ApiError::Registry(RegistryError::NotRegistered) => StatusCode::BAD_REQUEST,
            ApiError::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidQuery(rejection) => rejection.status(),
            ApiError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            // Render internals stay in the log.
            ApiError::Template(_) => "Internal server error".to_string(),
            ApiError::InvalidQuery(rejection) => rejection.body_text(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}

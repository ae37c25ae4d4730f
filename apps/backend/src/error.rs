//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cardgen_core::{Diagnostic, TemplateError};
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("No flashcards could be generated: {0}")]
    NoRecords(String),

    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Zero usable records, explained by whatever diagnostics were collected.
    pub fn no_records(diagnostics: &[Diagnostic]) -> Self {
        if diagnostics.is_empty() {
            return Self::NoRecords("the text did not contain any usable cards".to_string());
        }

        let reasons: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
        Self::NoRecords(reasons.join("; "))
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Internal(format!("worker failed: {}", e))
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Template(_) => (StatusCode::BAD_REQUEST, "template_error"),
            ApiError::NoRecords(_) => (StatusCode::UNPROCESSABLE_ENTITY, "no_records"),
            ApiError::ProviderNotConfigured(_) => {
                (StatusCode::BAD_GATEWAY, "provider_not_configured")
            }
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_error_status() {
        let error = ApiError::from(TemplateError::MissingPlaceholder);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_no_records_status() {
        let error = ApiError::no_records(&[]);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_provider_not_configured_status() {
        let error = ApiError::ProviderNotConfigured("anthropic".to_string());
        assert_eq!(error.to_string(), "Provider not configured: anthropic");
        assert_eq!(error.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_internal_error_status() {
        let error = ApiError::Internal("unexpected error".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_display_template() {
        let error = ApiError::from(TemplateError::MissingPlaceholder);
        assert_eq!(
            error.to_string(),
            "Template error: prompt template must contain the {text} placeholder"
        );
    }

    #[test]
    fn test_error_display_no_records_default() {
        let error = ApiError::no_records(&[]);
        assert_eq!(
            error.to_string(),
            "No flashcards could be generated: the text did not contain any usable cards"
        );
    }

    #[test]
    fn test_error_display_no_records_with_diagnostics() {
        let error = ApiError::no_records(&[
            Diagnostic::UpstreamFailure {
                reason: "API error: 500 - boom".to_string(),
            },
            Diagnostic::EmptyInput,
        ]);
        assert_eq!(
            error.to_string(),
            "No flashcards could be generated: completion request failed: API error: 500 - boom; input text is empty"
        );
    }
}

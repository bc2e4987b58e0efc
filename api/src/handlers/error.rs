//! Mapping of failures to HTTP error responses

use std::collections::HashMap;

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use validator::ValidationErrors;

use linka_core::errors::DomainError;

use crate::dto::ErrorResponse;

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Store failures are logged with their detail but answered with a generic
/// message.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            tracing::warn!(error = %message, "Rejected verification request");
            ErrorResponse::new("validation_error", message).to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::Persistence { message } => {
            tracing::error!(error = %message, "Verification store failure");
            ErrorResponse::new(
                "persistence_error",
                "The verification service is temporarily unavailable. Please try again later",
            )
            .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
        DomainError::Internal { message } => {
            tracing::error!(error = %message, "Internal error");
            ErrorResponse::new("internal_error", "An internal error occurred")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// 400 response listing the failed fields
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut field_errors = HashMap::new();
    for (field, errors) in errors.field_errors() {
        let messages: Vec<String> = errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        field_errors.insert(field.to_string(), serde_json::json!(messages));
    }

    ErrorResponse::new("validation_error", "Invalid request data")
        .with_details(field_errors)
        .to_response(StatusCode::BAD_REQUEST)
}

/// 503 response for a code that was stored but could not be delivered
pub fn mail_delivery_failed() -> HttpResponse {
    ErrorResponse::new(
        "mail_delivery_failed",
        "The verification email could not be sent. Please request a new code",
    )
    .to_response(StatusCode::SERVICE_UNAVAILABLE)
}

/// Turn unreadable JSON bodies into the standard 400 body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let (status, message) = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            (StatusCode::PAYLOAD_TOO_LARGE, "Request body is too large".to_string())
        }
        JsonPayloadError::ContentType => (
            StatusCode::BAD_REQUEST,
            "Content-Type must be application/json".to_string(),
        ),
        other => (StatusCode::BAD_REQUEST, format!("Invalid JSON body: {}", other)),
    };

    let response = ErrorResponse::new("validation_error", message).to_response(status);
    InternalError::from_response(err, response).into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    ErrorResponse::new("not_found", "The requested resource was not found")
        .to_response(StatusCode::NOT_FOUND)
}

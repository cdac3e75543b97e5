use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use validator::ValidationErrors;

use crate::repositories::contact_repository::RepositoryError;

/// Body text of every 500 response.
pub const GENERIC_FAILURE: &str = "Something went wrong, please try again later";

/// Error type returned by every handler. Storage and runtime failures are
/// logged here and reach the client only as a generic message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("contact inbox is not configured")]
    InboxNotConfigured,

    #[error("too many submissions")]
    RateLimited,

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation failed",
                    "fields": field_messages(errors),
                }),
            ),
            // Keeps the extractor's status: 400 for bad syntax, 415 without a
            // JSON content type, 422 for well-formed JSON of the wrong shape.
            ApiError::InvalidBody(rejection) => {
                tracing::debug!(error = %rejection, "Rejected request body");
                (rejection.status(), json!({ "error": rejection.body_text() }))
            }
            ApiError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": message }),
            ),
            ApiError::InboxNotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({ "error": "Contact inbox is not configured" }),
            ),
            ApiError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                json!({ "error": "Too many submissions, please try again in a minute" }),
            ),
            ApiError::Repository(err) => {
                tracing::error!(error = %err, "Contact storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": GENERIC_FAILURE }))
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": GENERIC_FAILURE }))
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Rust field names as they appear on the wire.
fn wire_name(field: &str) -> String {
    match field {
        "project_type" => "projectType".to_string(),
        other => other.to_string(),
    }
}

fn field_label(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => spaced,
    }
}

fn field_messages(errors: &ValidationErrors) -> Value {
    let mut fields = Map::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<Value> = field_errors
            .iter()
            .map(|e| {
                let message = match (&e.message, e.code.as_ref()) {
                    (Some(message), _) => message.to_string(),
                    (None, "required") => format!("{} is required", field_label(&field)),
                    (None, _) => format!("{} is invalid", field_label(&field)),
                };
                Value::String(message)
            })
            .collect();
        fields.insert(wire_name(&field), Value::Array(messages));
    }
    Value::Object(fields)
}

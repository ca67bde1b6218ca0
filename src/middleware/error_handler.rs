use actix_web::{error::JsonPayloadError, HttpRequest};

use crate::core::AppError;

/// Turns malformed JSON bodies into the standard error envelope
///
/// Registered through `web::JsonConfig::error_handler`.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected request body");

    let message = match &err {
        JsonPayloadError::Deserialize(inner) => format!("Invalid request body: {}", inner),
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        other => format!("Invalid request body: {}", other),
    };

    AppError::validation(message).into()
}

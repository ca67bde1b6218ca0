use actix_web::{web, HttpResponse};

use crate::modules::identifiers::models::ValidateIdentifierRequest;
use crate::modules::identifiers::services::{validate_gstin, validate_pan};

/// Validate a GSTIN
///
/// POST /identifiers/gstin/validate
///
/// Always answers 200; `is_valid` and `error` carry the outcome.
pub async fn validate_gstin_handler(request: web::Json<ValidateIdentifierRequest>) -> HttpResponse {
    let result = validate_gstin(&request.value);

    if !result.is_valid {
        tracing::debug!(error = ?result.error, "GSTIN rejected");
    }

    HttpResponse::Ok().json(result)
}

/// Validate a PAN
///
/// POST /identifiers/pan/validate
pub async fn validate_pan_handler(request: web::Json<ValidateIdentifierRequest>) -> HttpResponse {
    HttpResponse::Ok().json(validate_pan(&request.value))
}

/// Configure identifier routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/identifiers")
            .route("/gstin/validate", web::post().to(validate_gstin_handler))
            .route("/pan/validate", web::post().to(validate_pan_handler)),
    );
}

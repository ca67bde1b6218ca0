use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::documents::models::{CalculateDocumentRequest, DocumentKind};
use crate::modules::documents::services::DocumentService;

/// Price a quotation
/// POST /quotations/calculate
pub async fn calculate_quotation(
    service: web::Data<DocumentService>,
    request: web::Json<CalculateDocumentRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.calculate(DocumentKind::Quotation, request.into_inner())?;
    Ok(HttpResponse::Ok().json(response))
}

/// Price an invoice
/// POST /invoices/calculate
pub async fn calculate_invoice(
    service: web::Data<DocumentService>,
    request: web::Json<CalculateDocumentRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.calculate(DocumentKind::Invoice, request.into_inner())?;
    Ok(HttpResponse::Ok().json(response))
}

/// Configure document routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/quotations/calculate", web::post().to(calculate_quotation))
        .route("/invoices/calculate", web::post().to(calculate_invoice));
}

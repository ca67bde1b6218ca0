//! Tax reference endpoints
//!
//! Read-only lookups the quotation and invoice forms use to populate their
//! rate and state pickers.

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::taxes::models::{all_states, GstSlab, GstState};

#[derive(Debug, Serialize)]
pub struct GstSlabResponse {
    pub slab: GstSlab,
    pub label: String,
    pub rate: Decimal,
}

/// List standard GST slabs
///
/// GET /gst/slabs
pub async fn list_slabs() -> HttpResponse {
    let slabs: Vec<GstSlabResponse> = GstSlab::ALL
        .into_iter()
        .map(|slab| GstSlabResponse {
            slab,
            label: slab.to_string(),
            rate: slab.rate(),
        })
        .collect();

    HttpResponse::Ok().json(serde_json::json!({ "slabs": slabs }))
}

/// List GST state codes
///
/// GET /gst/states
pub async fn list_states() -> HttpResponse {
    let states: &[GstState] = all_states();
    HttpResponse::Ok().json(serde_json::json!({ "states": states }))
}

/// Configure tax routes
pub fn configure_tax_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/gst")
            .route("/slabs", web::get().to(list_slabs))
            .route("/states", web::get().to(list_states)),
    );
}

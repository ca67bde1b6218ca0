//! gstdesk GST calculation service
//!
//! Prices quotations and invoices for an interior-design CRM: per-line GST
//! with the CGST/SGST or IGST split, document totals with a discount, and
//! structural GSTIN/PAN checks. Exposed as a library and as a small
//! stateless HTTP API.

use actix_web::web;

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::documents;
pub use modules::identifiers;
pub use modules::taxes;

/// Register every route; shared by the binary and the contract tests
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(middleware::json_error_handler))
        .configure(modules::health::controllers::configure)
        .service(
            web::scope("/api")
                .configure(modules::documents::controllers::configure)
                .configure(modules::identifiers::controllers::configure)
                .configure(modules::taxes::controllers::configure_tax_routes),
        );
}

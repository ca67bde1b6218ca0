// Identifiers module: GSTIN, PAN and HSN/SAC shape checks

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{HsnSacCode, IdentifierValidation};
pub use services::{validate_gstin, validate_hsn_sac, validate_pan};

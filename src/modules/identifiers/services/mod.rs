pub mod gstin_validator;
pub mod hsn_validator;
pub mod pan_validator;

pub use gstin_validator::validate_gstin;
pub use hsn_validator::validate_hsn_sac;
pub use pan_validator::validate_pan;

mod hsn_sac;
mod identifier_validation;

pub use hsn_sac::HsnSacCode;
pub use identifier_validation::{IdentifierValidation, ValidateIdentifierRequest};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::modules::identifiers::models::IdentifierValidation;

pub const PAN_LENGTH: usize = 10;

static PAN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("PAN pattern is a valid regex"));

/// Validate the shape of a PAN (5 letters, 4 digits, 1 letter)
pub fn validate_pan(input: &str) -> IdentifierValidation {
    let pan = input.trim().to_ascii_uppercase();

    if pan.is_empty() {
        return IdentifierValidation::invalid("PAN is required");
    }

    let length = pan.chars().count();
    if length != PAN_LENGTH {
        return IdentifierValidation::invalid(format!(
            "PAN must be exactly {} characters, got {}",
            PAN_LENGTH, length
        ));
    }

    if !PAN_PATTERN.is_match(&pan) {
        return IdentifierValidation::invalid(
            "PAN must be 5 letters, 4 digits and a letter (e.g. ABCDE1234F)",
        );
    }

    IdentifierValidation::valid(None, Some(pan))
}

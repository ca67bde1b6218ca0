//! Structural GSTIN validation.
//!
//! Layout: `SS PPPPPPPPPP E Z C`
//! - `SS`  two-digit state code
//! - `P…`  PAN of the registered person (5 letters, 4 digits, 1 letter)
//! - `E`   entity number for that PAN within the state (1-9, A-Z)
//! - `Z`   fixed letter
//! - `C`   check character
//!
//! Only the shape is checked. The check character is not recomputed and no
//! registry lookup is made.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::modules::identifiers::models::IdentifierValidation;

pub const GSTIN_LENGTH: usize = 15;

static GSTIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$")
        .expect("GSTIN pattern is a valid regex")
});

/// Validate a GSTIN and extract its state code and PAN
pub fn validate_gstin(input: &str) -> IdentifierValidation {
    let gstin = input.trim().to_ascii_uppercase();

    if gstin.is_empty() {
        return IdentifierValidation::invalid("GSTIN is required");
    }

    if GSTIN_PATTERN.is_match(&gstin) {
        return IdentifierValidation::valid(
            Some(gstin[0..2].to_string()),
            Some(gstin[2..12].to_string()),
        );
    }

    IdentifierValidation::invalid(describe_mismatch(&gstin))
}

/// Names the first part of a non-matching GSTIN that is malformed
fn describe_mismatch(gstin: &str) -> String {
    let chars: Vec<char> = gstin.chars().collect();

    if chars.len() != GSTIN_LENGTH {
        return format!(
            "GSTIN must be exactly {} characters, got {}",
            GSTIN_LENGTH,
            chars.len()
        );
    }

    let all = |range: std::ops::Range<usize>, pred: fn(&char) -> bool| chars[range].iter().all(pred);

    if !all(0..2, char::is_ascii_digit) {
        return "GSTIN must start with a 2-digit state code".to_string();
    }
    if !all(2..7, char::is_ascii_uppercase)
        || !all(7..11, char::is_ascii_digit)
        || !chars[11].is_ascii_uppercase()
    {
        return "Characters 3-12 of GSTIN must be a valid PAN (5 letters, 4 digits, 1 letter)"
            .to_string();
    }
    if !(('1'..='9').contains(&chars[12]) || chars[12].is_ascii_uppercase()) {
        return "Character 13 of GSTIN (entity number) must be 1-9 or A-Z".to_string();
    }
    if chars[13] != 'Z' {
        return "Character 14 of GSTIN must be 'Z'".to_string();
    }

    "Character 15 of GSTIN (check character) must be a letter or digit".to_string()
}

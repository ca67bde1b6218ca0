use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{AppError, Result};
use crate::modules::identifiers::models::HsnSacCode;

static HSN_SAC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]{4}|[0-9]{6}|[0-9]{8})$").expect("HSN/SAC pattern is a valid regex")
});

/// Classify and validate an HSN (goods) or SAC (services) code.
///
/// HSN codes are 4, 6 or 8 digits. SAC codes are 6 digits in chapter 99.
pub fn validate_hsn_sac(input: &str) -> Result<HsnSacCode> {
    let code = input.trim();

    if !HSN_SAC_PATTERN.is_match(code) {
        return Err(AppError::validation(format!(
            "HSN/SAC code must be 4, 6 or 8 digits, got '{}'",
            code
        )));
    }

    if code.len() == 6 && code.starts_with("99") {
        Ok(HsnSacCode::Sac(code.to_string()))
    } else {
        Ok(HsnSacCode::Hsn(code.to_string()))
    }
}

use serde::{Deserialize, Serialize};

/// Outcome of a structural identifier check.
///
/// Invalid input is reported here rather than as an error so forms can show
/// the reason inline next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierValidation {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Two-digit state code embedded in a GSTIN
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    /// PAN embedded in a GSTIN, or the normalised PAN itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
}

impl IdentifierValidation {
    pub fn valid(state_code: Option<String>, pan: Option<String>) -> Self {
        Self {
            is_valid: true,
            error: None,
            state_code,
            pan,
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(reason.into()),
            state_code: None,
            pan: None,
        }
    }
}

/// Request body for the validation endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateIdentifierRequest {
    pub value: String,
}

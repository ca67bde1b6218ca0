use serde::Serialize;
use std::fmt;

/// Goods (HSN) or services (SAC) classification code on a line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "scheme", content = "code", rename_all = "lowercase")]
pub enum HsnSacCode {
    Hsn(String),
    Sac(String),
}

impl HsnSacCode {
    pub fn as_str(&self) -> &str {
        match self {
            HsnSacCode::Hsn(code) | HsnSacCode::Sac(code) => code,
        }
    }

    pub fn is_service(&self) -> bool {
        matches!(self, HsnSacCode::Sac(_))
    }
}

impl fmt::Display for HsnSacCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! GST state and union-territory codes.
//!
//! The first two digits of every GSTIN are one of these codes. Codes 25 and 28
//! belonged to territories since merged into 26 and 37 and are not issued to
//! new registrations.

use serde::Serialize;

/// A GST state or union territory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GstState {
    pub code: &'static str,
    pub name: &'static str,
}

const STATES: &[GstState] = &[
    GstState { code: "01", name: "Jammu and Kashmir" },
    GstState { code: "02", name: "Himachal Pradesh" },
    GstState { code: "03", name: "Punjab" },
    GstState { code: "04", name: "Chandigarh" },
    GstState { code: "05", name: "Uttarakhand" },
    GstState { code: "06", name: "Haryana" },
    GstState { code: "07", name: "Delhi" },
    GstState { code: "08", name: "Rajasthan" },
    GstState { code: "09", name: "Uttar Pradesh" },
    GstState { code: "10", name: "Bihar" },
    GstState { code: "11", name: "Sikkim" },
    GstState { code: "12", name: "Arunachal Pradesh" },
    GstState { code: "13", name: "Nagaland" },
    GstState { code: "14", name: "Manipur" },
    GstState { code: "15", name: "Mizoram" },
    GstState { code: "16", name: "Tripura" },
    GstState { code: "17", name: "Meghalaya" },
    GstState { code: "18", name: "Assam" },
    GstState { code: "19", name: "West Bengal" },
    GstState { code: "20", name: "Jharkhand" },
    GstState { code: "21", name: "Odisha" },
    GstState { code: "22", name: "Chhattisgarh" },
    GstState { code: "23", name: "Madhya Pradesh" },
    GstState { code: "24", name: "Gujarat" },
    GstState { code: "26", name: "Dadra and Nagar Haveli and Daman and Diu" },
    GstState { code: "27", name: "Maharashtra" },
    GstState { code: "29", name: "Karnataka" },
    GstState { code: "30", name: "Goa" },
    GstState { code: "31", name: "Lakshadweep" },
    GstState { code: "32", name: "Kerala" },
    GstState { code: "33", name: "Tamil Nadu" },
    GstState { code: "34", name: "Puducherry" },
    GstState { code: "35", name: "Andaman and Nicobar Islands" },
    GstState { code: "36", name: "Telangana" },
    GstState { code: "37", name: "Andhra Pradesh" },
    GstState { code: "38", name: "Ladakh" },
    GstState { code: "97", name: "Other Territory" },
    GstState { code: "99", name: "Centre Jurisdiction" },
];

/// All known state codes in ascending order
pub fn all_states() -> &'static [GstState] {
    STATES
}

/// Looks up the state or territory name for a two-digit code
pub fn state_name(code: &str) -> Option<&'static str> {
    STATES
        .iter()
        .find(|state| state.code == code)
        .map(|state| state.name)
}

pub fn is_known_state_code(code: &str) -> bool {
    state_name(code).is_some()
}

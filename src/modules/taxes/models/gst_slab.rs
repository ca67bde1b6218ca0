use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard GST rate slabs notified under the CGST/IGST schedules.
///
/// The calculator itself accepts any rate between 0 and 100; slabs exist so
/// forms can offer the usual choices and flag unusual rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GstSlab {
    /// Nil-rated and exempt supplies
    Nil,
    /// Rough precious and semi-precious stones
    Quarter,
    /// Gold, silver, jewellery
    Three,
    Five,
    Twelve,
    Eighteen,
    /// Luxury and demerit goods
    TwentyEight,
}

impl GstSlab {
    pub const ALL: [GstSlab; 7] = [
        GstSlab::Nil,
        GstSlab::Quarter,
        GstSlab::Three,
        GstSlab::Five,
        GstSlab::Twelve,
        GstSlab::Eighteen,
        GstSlab::TwentyEight,
    ];

    /// Rate in percent (18 for 18%)
    pub fn rate(&self) -> Decimal {
        match self {
            GstSlab::Nil => Decimal::ZERO,
            GstSlab::Quarter => Decimal::new(25, 2),
            GstSlab::Three => Decimal::from(3),
            GstSlab::Five => Decimal::from(5),
            GstSlab::Twelve => Decimal::from(12),
            GstSlab::Eighteen => Decimal::from(18),
            GstSlab::TwentyEight => Decimal::from(28),
        }
    }

    /// Finds the slab for a rate; `18`, `18.0` and `18.00` all match
    pub fn from_rate(rate: Decimal) -> Option<GstSlab> {
        Self::ALL.into_iter().find(|slab| slab.rate() == rate)
    }
}

impl fmt::Display for GstSlab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.rate())
    }
}

//! Rental price quote

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Duration and total cost of a rental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Number of billed days
    pub days: i64,

    /// `days * price_per_day`, rounded to cents
    pub total_price: Decimal,
}

impl Quote {
    /// The quote returned for invalid or incomplete input
    pub const ZERO: Quote = Quote {
        days: 0,
        total_price: Decimal::ZERO,
    };

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.days == 0
    }
}

impl Default for Quote {
    fn default() -> Self {
        Self::ZERO
    }
}

//! Transaction date model.

use serde::{Deserialize, Serialize};

use super::Month;

/// A transaction date stored as independent day/month/year fields.
///
/// This is deliberately *not* a calendar date: the original data model
/// keeps the three fields separate and groups by exact field equality.
/// The typed `day`/`month` representation makes the classic `"1"` vs
/// `"01"` key-normalization bug unrepresentable, but `day` is not range
/// checked on construction — the aggregation engine validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxDate {
    /// Day of the month (1–31).
    pub day: u8,
    /// Three-letter month token.
    pub month: Month,
    /// Calendar year.
    pub year: i32,
}

impl TxDate {
    /// Creates a date from its three fields.
    #[inline]
    #[must_use]
    pub const fn new(day: u8, month: Month, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Returns `true` if `day` lies in the valid 1–31 range.
    #[inline]
    #[must_use]
    pub const fn day_in_range(&self) -> bool {
        self.day >= 1 && self.day <= 31
    }
}

impl core::fmt::Display for TxDate {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let date = TxDate::new(5, Month::Jan, 2024);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"day":5,"month":"Jan","year":2024}"#);
        let deserialized: TxDate = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, date);
    }

    #[test]
    fn display_matches_original_full_date_format() {
        let date = TxDate::new(31, Month::Dec, 2023);
        assert_eq!(date.to_string(), "31 Dec 2023");
    }

    #[test]
    fn day_range_check() {
        assert!(TxDate::new(1, Month::Jan, 2024).day_in_range());
        assert!(TxDate::new(31, Month::Jan, 2024).day_in_range());
        assert!(!TxDate::new(0, Month::Jan, 2024).day_in_range());
        assert!(!TxDate::new(32, Month::Jan, 2024).day_in_range());
    }

    #[test]
    fn equality_is_exact_triple_equality() {
        let a = TxDate::new(5, Month::Jan, 2024);
        let b = TxDate::new(5, Month::Jan, 2024);
        let c = TxDate::new(5, Month::Feb, 2024);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

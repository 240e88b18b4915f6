//! Enumeration types for constrained values.

use serde::{Deserialize, Serialize};

/// Whether a category records money coming in or going out.
///
/// The sign convention follows the original application: expense
/// transaction values are negative, income values positive. The kind is
/// carried on the category, not derived from the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Money coming in (salary, gifts, ...).
    Income,
    /// Money going out (food, rent, ...).
    Expense,
}

/// Calendar month as the three-letter token used throughout the data
/// model.
///
/// Transactions store the month as one of these twelve tokens rather
/// than a numeric field; the variants serialize as the token itself
/// (`"Jan"`, `"Feb"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    /// January.
    Jan,
    /// February.
    Feb,
    /// March.
    Mar,
    /// April.
    Apr,
    /// May.
    May,
    /// June.
    Jun,
    /// July.
    Jul,
    /// August.
    Aug,
    /// September.
    Sep,
    /// October.
    Oct,
    /// November.
    Nov,
    /// December.
    Dec,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Oct,
        Self::Nov,
        Self::Dec,
    ];

    /// Returns the three-letter token for this month.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jan => "Jan",
            Self::Feb => "Feb",
            Self::Mar => "Mar",
            Self::Apr => "Apr",
            Self::May => "May",
            Self::Jun => "Jun",
            Self::Jul => "Jul",
            Self::Aug => "Aug",
            Self::Sep => "Sep",
            Self::Oct => "Oct",
            Self::Nov => "Nov",
            Self::Dec => "Dec",
        }
    }

    /// Returns the calendar number of this month (1 for January through
    /// 12 for December).
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl core::fmt::Display for Month {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized month token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized month token: {0}")]
pub struct ParseMonthError(String);

impl core::str::FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|month| month.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseMonthError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_kind_serde_lowercase() {
        let json = serde_json::to_string(&CategoryKind::Expense).unwrap();
        assert_eq!(json, r#""expense""#);
        let deserialized: CategoryKind = serde_json::from_str(r#""income""#).unwrap();
        assert_eq!(deserialized, CategoryKind::Income);
    }

    #[test]
    fn month_serializes_as_token() {
        let json = serde_json::to_string(&Month::Jan).unwrap();
        assert_eq!(json, r#""Jan""#);
        let deserialized: Month = serde_json::from_str(r#""Dec""#).unwrap();
        assert_eq!(deserialized, Month::Dec);
    }

    #[test]
    fn month_numbers() {
        assert_eq!(Month::Jan.number(), 1);
        assert_eq!(Month::Jun.number(), 6);
        assert_eq!(Month::Dec.number(), 12);
    }

    #[test]
    fn month_ordering_is_calendar_order() {
        assert!(Month::Jan < Month::Feb);
        assert!(Month::Nov < Month::Dec);
    }

    #[test]
    fn month_from_str_case_insensitive() {
        assert_eq!("jan".parse::<Month>().unwrap(), Month::Jan);
        assert_eq!("SEP".parse::<Month>().unwrap(), Month::Sep);
    }

    #[test]
    fn month_from_str_rejects_unknown() {
        let err = "January".parse::<Month>().unwrap_err();
        assert!(err.to_string().contains("January"));
    }

    #[test]
    fn all_months_roundtrip() {
        for month in Month::ALL {
            let json = serde_json::to_string(&month).unwrap();
            let deserialized: Month = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, month);
            assert_eq!(month.as_str().parse::<Month>().unwrap(), month);
        }
    }
}

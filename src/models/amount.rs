//! Monetary amount model.

use serde::{Deserialize, Serialize};

/// A signed monetary amount with its currency code.
///
/// Expense amounts are negative, income amounts positive (enforced by
/// the caller, not verified here). Sums across mixed currencies are not
/// detected — the first member of a group labels the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    /// Signed value in minor-unit-free decimal (the original app stores
    /// whole VND).
    pub value: f64,
    /// Currency code, e.g. `"VND"` or `"USD"`.
    pub currency: String,
}

impl Amount {
    /// Creates an amount from a value and currency code.
    #[inline]
    #[must_use]
    pub fn new<C: Into<String>>(value: f64, currency: C) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }

    /// Formats this amount for display, e.g. `-50,000 VND`.
    #[inline]
    #[must_use]
    pub fn formatted(&self) -> String {
        format_value(self.value, &self.currency)
    }
}

impl core::fmt::Display for Amount {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Formats a monetary value with thousands separators and an explicit
/// currency code.
///
/// A pure function: both inputs are parameters, there is no shared
/// formatter instance. Fractional parts are rounded to two decimals and
/// omitted entirely when zero.
#[must_use]
pub fn format_value(value: f64, currency: &str) -> String {
    if !value.is_finite() {
        return format!("{value} {currency}");
    }
    let sign = if value < 0.0_f64 { "-" } else { "" };
    #[allow(
        clippy::cast_possible_truncation,
        reason = "values are far below 2^63 cents in practice"
    )]
    let total_cents = (value.abs() * 100.0_f64).round() as i64;
    let whole = total_cents.div_euclid(100);
    let cents = total_cents.rem_euclid(100);
    let grouped = group_thousands(&whole.to_string());
    if cents == 0 {
        format!("{sign}{grouped} {currency}")
    } else {
        format!("{sign}{grouped}.{cents:02} {currency}")
    }
}

/// Inserts `,` separators every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len.div_euclid(3));
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

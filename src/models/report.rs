//! Report value objects produced by the aggregation engine.
//!
//! All types here are computed fresh on every report request and never
//! persisted or cached.

use serde::{Deserialize, Serialize};

use super::{Amount, Category, Month, Transaction};

/// All transactions sharing one calendar day, with their summed amount.
///
/// Members keep their original input order; the group amount is the
/// exact sum of member values with the currency of the first member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyGroup {
    /// The common date of the member transactions.
    pub date: super::TxDate,
    /// Sum of member values, labelled with the first member's currency.
    pub amount: Amount,
    /// Member transactions in input order.
    pub transactions: Vec<Transaction>,
}

/// The summed amount for all transactions sharing a category name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category metadata taken from the first member encountered.
    pub category: Category,
    /// Sum of member values, labelled with the first member's currency.
    pub amount: Amount,
}

/// Total income and total expense for a month.
///
/// A side with no transactions is `None` — absence means "no data",
/// never a zero-value record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Sum of all expense-type transaction values, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense: Option<Amount>,
    /// Sum of all income-type transaction values, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<Amount>,
}

/// Per-category totals partitioned by category kind.
///
/// Entries within each bucket appear in first-seen input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Totals for expense categories.
    pub expense: Vec<CategoryTotal>,
    /// Totals for income categories.
    pub income: Vec<CategoryTotal>,
}

/// The month/year a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Report month.
    pub month: Month,
    /// Report year.
    pub year: i32,
}

impl Period {
    /// Creates a period from a month and year.
    #[inline]
    #[must_use]
    pub const fn new(month: Month, year: i32) -> Self {
        Self { month, year }
    }
}

impl core::fmt::Display for Period {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// The full monthly report: cash flow plus per-category totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// The month/year the report covers.
    pub period: Period,
    /// Total income and expense for the period.
    pub cash_flow: CashFlow,
    /// Per-category expense totals in first-seen order.
    pub expense: Vec<CategoryTotal>,
    /// Per-category income totals in first-seen order.
    pub income: Vec<CategoryTotal>,
}

/// The category catalog partitioned by kind, used to populate pickers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    /// Expense categories in first-seen order.
    pub expense: Vec<Category>,
    /// Income categories in first-seen order.
    pub income: Vec<Category>,
}

//! The aggregation engine: pure transforms from flat transaction lists
//! into daily groups and monthly reports.
//!
//! Every function here is synchronous, side-effect free, and allocates
//! fresh outputs per call, so concurrent invocation is safe. The caller
//! is expected to have scoped the input to one user and one month/year
//! (or one day) — the engine groups and sums, it does not filter.
//!
//! Grouping is a single explicit pass per function: compute the key,
//! look up the accumulator slot, insert or update. First-seen input
//! order decides which member labels a group (currency, category
//! metadata) and the order of category buckets. Mixed currencies within
//! a group are *not* detected; the first member's currency labels the
//! sum, matching the original application's behavior.

use std::collections::HashMap;

use crate::error::{CashbookError, Result};
use crate::models::{
    Amount, CashFlow, Category, CategoryBreakdown, CategoryCatalog, CategoryKind, CategoryTotal,
    DailyGroup, Month, MonthlyReport, Period, Transaction,
};

/// Rejects malformed records before they can poison an aggregate.
///
/// A record with an out-of-range day or a non-finite value fails the
/// whole call — a partial sum would be worse than no sum.
fn check(tx: &Transaction) -> Result<()> {
    if !tx.date.day_in_range() {
        return Err(CashbookError::InvalidRecord {
            transaction: tx.id.to_string(),
            reason: format!("day {} is out of range 1-31", tx.date.day),
        });
    }
    if !tx.amount.value.is_finite() {
        return Err(CashbookError::InvalidRecord {
            transaction: tx.id.to_string(),
            reason: format!("amount value {} is not finite", tx.amount.value),
        });
    }
    Ok(())
}

/// Groups transactions by their exact `(day, month, year)` triple.
///
/// One [`DailyGroup`] per distinct triple present in the input; members
/// keep input order, the group amount is the exact sum of member
/// values, and the currency comes from the first member of the day.
///
/// The result is sorted by `day` descending. Only the day participates
/// in the sort — correct because callers scope the input to a single
/// month/year. Empty input yields an empty vec.
///
/// # Errors
///
/// Returns [`CashbookError::InvalidRecord`] if any transaction has an
/// out-of-range day or a non-finite amount.
pub fn group_by_day(transactions: &[Transaction]) -> Result<Vec<DailyGroup>> {
    let mut slots: HashMap<(u8, Month, i32), usize> = HashMap::new();
    let mut groups: Vec<DailyGroup> = Vec::new();

    for tx in transactions {
        check(tx)?;
        let key = (tx.date.day, tx.date.month, tx.date.year);
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(DailyGroup {
                date: tx.date,
                amount: Amount::new(0.0, tx.amount.currency.clone()),
                transactions: Vec::new(),
            });
            groups.len() - 1
        });
        if let Some(group) = groups.get_mut(slot) {
            group.amount.value += tx.amount.value;
            group.transactions.push(tx.clone());
        }
    }

    groups.sort_by(|a, b| b.date.day.cmp(&a.date.day));
    Ok(groups)
}

/// Sums transactions into the month's total income and total expense.
///
/// Transactions are partitioned by `category.kind`; a partition with no
/// members yields `None` rather than a zero amount, so callers can tell
/// "no data" from "net zero". The first member of each partition labels
/// its sum with a currency.
///
/// # Errors
///
/// Returns [`CashbookError::InvalidRecord`] on malformed input, as for
/// [`group_by_day`].
pub fn cash_flow(transactions: &[Transaction]) -> Result<CashFlow> {
    let mut flow = CashFlow::default();
    for tx in transactions {
        check(tx)?;
        let side = match tx.category.kind {
            CategoryKind::Income => &mut flow.income,
            CategoryKind::Expense => &mut flow.expense,
        };
        match side.as_mut() {
            Some(total) => total.value += tx.amount.value,
            None => *side = Some(tx.amount.clone()),
        }
    }
    Ok(flow)
}

/// Sums transactions per category and partitions the totals by kind.
///
/// The grouping key is `(category.kind, category.name)` — *name*, not
/// id, so two categories with different ids but identical names
/// collapse into one total. The first member of each group supplies the
/// full category metadata and the currency. Bucket entries appear in
/// first-seen input order; this is a documented contract, not an
/// accident of map iteration.
///
/// # Errors
///
/// Returns [`CashbookError::InvalidRecord`] on malformed input.
pub fn category_totals(transactions: &[Transaction]) -> Result<CategoryBreakdown> {
    let mut slots: HashMap<(CategoryKind, &str), usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for tx in transactions {
        check(tx)?;
        let key = (tx.category.kind, tx.category.name.as_str());
        match slots.get(&key) {
            Some(&slot) => {
                if let Some(total) = totals.get_mut(slot) {
                    total.amount.value += tx.amount.value;
                }
            }
            None => {
                let _prev = slots.insert(key, totals.len());
                totals.push(CategoryTotal {
                    category: tx.category.clone(),
                    amount: tx.amount.clone(),
                });
            }
        }
    }

    let mut breakdown = CategoryBreakdown::default();
    for total in totals {
        match total.category.kind {
            CategoryKind::Expense => breakdown.expense.push(total),
            CategoryKind::Income => breakdown.income.push(total),
        }
    }
    Ok(breakdown)
}

/// Builds the full monthly report for a period from its transactions.
///
/// # Errors
///
/// Returns [`CashbookError::InvalidRecord`] on malformed input.
pub fn monthly_report(transactions: &[Transaction], period: Period) -> Result<MonthlyReport> {
    let flow = cash_flow(transactions)?;
    let breakdown = category_totals(transactions)?;
    Ok(MonthlyReport {
        period,
        cash_flow: flow,
        expense: breakdown.expense,
        income: breakdown.income,
    })
}

/// Partitions the category catalog by kind, preserving input order.
///
/// No aggregation happens here; the two-bucket output shape matches the
/// report types so pickers and reports stay consistent.
#[must_use]
pub fn partition_categories(categories: &[Category]) -> CategoryCatalog {
    let mut catalog = CategoryCatalog::default();
    for category in categories {
        match category.kind {
            CategoryKind::Expense => catalog.expense.push(category.clone()),
            CategoryKind::Income => catalog.income.push(category.clone()),
        }
    }
    catalog
}

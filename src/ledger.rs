//! High-level ledger service with integrated storage.
//!
//! Combines a [`Storage`] / [`BlockingStorage`] backend with the
//! aggregation engine in [`crate::report`] to provide transaction CRUD,
//! scoped queries, and report generation.

use chrono::{DateTime, Utc};

use crate::error::{CashbookError, Result};
use crate::models::{Amount, CategoryId, Month, Transaction, TransactionId, TxDate, UserId};

/// Composable query for scoping transactions read from storage.
///
/// Use builder-style methods to chain multiple criteria. All conditions
/// are combined — a transaction must satisfy every set criterion to pass.
///
/// # Examples
///
/// ```
/// use cashbook_rs::ledger::TransactionQuery;
/// use cashbook_rs::models::{Month, UserId};
///
/// let query = TransactionQuery::new()
///     .user(UserId::new("u-1".to_owned()))
///     .period(Month::Jan, 2024);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransactionQuery {
    /// Owner user ID.
    pub user: Option<UserId>,
    /// Calendar month.
    pub month: Option<Month>,
    /// Calendar year.
    pub year: Option<i32>,
    /// Day of month.
    pub day: Option<u8>,
}

impl TransactionQuery {
    /// Creates an empty query that matches all transactions.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to transactions owned by the given user.
    #[inline]
    #[must_use]
    pub fn user(mut self, id: UserId) -> Self {
        self.user = Some(id);
        self
    }

    /// Restricts to transactions within the given month and year.
    #[inline]
    #[must_use]
    pub const fn period(mut self, month: Month, year: i32) -> Self {
        self.month = Some(month);
        self.year = Some(year);
        self
    }

    /// Restricts to transactions on the given day of month.
    #[inline]
    #[must_use]
    pub const fn day(mut self, day: u8) -> Self {
        self.day = Some(day);
        self
    }

    /// Returns `true` if the transaction satisfies all set criteria.
    #[inline]
    pub(crate) fn matches(&self, tx: &Transaction) -> bool {
        self.matches_user(tx) && self.matches_date(tx)
    }

    /// Checks owner criteria.
    fn matches_user(&self, tx: &Transaction) -> bool {
        self.user.as_ref().is_none_or(|user| tx.user == *user)
    }

    /// Checks month/year/day criteria.
    fn matches_date(&self, tx: &Transaction) -> bool {
        self.month.is_none_or(|month| tx.date.month == month)
            && self.year.is_none_or(|year| tx.date.year == year)
            && self.day.is_none_or(|day| tx.date.day == day)
    }
}

/// Input for creating a transaction.
///
/// The category is referenced by ID and resolved against the stored
/// catalog at write time; the resolved snapshot is embedded in the
/// created [`Transaction`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// Owner user ID.
    pub user: UserId,
    /// Category to resolve and embed.
    pub category: CategoryId,
    /// Transaction date.
    pub date: TxDate,
    /// Signed amount — negative for expenses, positive for income.
    pub amount: Amount,
    /// Optional free-text note.
    pub note: Option<String>,
}

/// Partial update for an existing transaction.
///
/// Unset fields keep their current value. Setting `category` re-resolves
/// the embedded snapshot from the stored catalog.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransactionUpdate {
    /// New category, if changing.
    pub category: Option<CategoryId>,
    /// New date, if changing.
    pub date: Option<TxDate>,
    /// New amount, if changing.
    pub amount: Option<Amount>,
    /// New note, if changing.
    pub note: Option<String>,
}

impl TransactionUpdate {
    /// Creates an empty update that changes nothing.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes the category.
    #[inline]
    #[must_use]
    pub fn category(mut self, id: CategoryId) -> Self {
        self.category = Some(id);
        self
    }

    /// Changes the date.
    #[inline]
    #[must_use]
    pub const fn date(mut self, date: TxDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Changes the amount.
    #[inline]
    #[must_use]
    pub fn amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Changes the note.
    #[inline]
    #[must_use]
    pub fn note<T: Into<String>>(mut self, note: T) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Rejects a write whose date or amount would poison later reports.
fn validate_record(id: &TransactionId, date: TxDate, amount: &Amount) -> Result<()> {
    if !date.day_in_range() {
        return Err(CashbookError::InvalidRecord {
            transaction: id.to_string(),
            reason: format!("day {} is out of range 1-31", date.day),
        });
    }
    if !amount.value.is_finite() {
        return Err(CashbookError::InvalidRecord {
            transaction: id.to_string(),
            reason: format!("amount value {} is not finite", amount.value),
        });
    }
    Ok(())
}

/// Mints a fresh transaction ID.
fn mint_transaction_id() -> TransactionId {
    TransactionId::new(uuid::Uuid::new_v4().to_string())
}

/// Applies an update onto an existing transaction, stamping `changed`.
fn apply_update(
    tx: &mut Transaction,
    update: TransactionUpdate,
    category: Option<crate::models::Category>,
    now: DateTime<Utc>,
) {
    if let Some(resolved) = category {
        tx.category = resolved;
    }
    if let Some(date) = update.date {
        tx.date = date;
    }
    if let Some(amount) = update.amount {
        tx.amount = amount;
    }
    if let Some(note) = update.note {
        tx.note = Some(note);
    }
    tx.changed = now;
}

/// Generates a high-level ledger service (async or blocking).
macro_rules! define_ledger {
    (
        ledger_name: $ledger:ident,
        storage_trait: $storage_trait:ident,
        ledger_doc: $ledger_doc:expr,
        $(async_kw: $async_kw:tt,)?
        $(await_kw: $await_ext:tt,)?
    ) => {
        #[doc = $ledger_doc]
        #[derive(Debug)]
        pub struct $ledger<S: $storage_trait> {
            /// Storage backend.
            storage: S,
        }

        impl<S: $storage_trait> $ledger<S> {
            /// Creates a ledger over the given storage backend.
            #[inline]
            #[must_use]
            pub const fn new(storage: S) -> Self {
                Self { storage }
            }

            /// Returns a reference to the storage backend.
            #[inline]
            #[must_use]
            pub const fn storage(&self) -> &S {
                &self.storage
            }

            /// Returns all stored users.
            ///
            /// # Errors
            ///
            /// Returns an error if the storage backend fails to read.
            #[inline]
            pub $($async_kw)? fn users(&self) -> Result<Vec<User>> {
                self.storage.users() $( .$await_ext )?
            }

            /// Returns all stored categories.
            ///
            /// # Errors
            ///
            /// Returns an error if the storage backend fails to read.
            #[inline]
            pub $($async_kw)? fn categories(&self) -> Result<Vec<Category>> {
                self.storage.categories() $( .$await_ext )?
            }

            /// Returns all stored transactions.
            ///
            /// # Errors
            ///
            /// Returns an error if the storage backend fails to read.
            #[inline]
            pub $($async_kw)? fn transactions(&self) -> Result<Vec<Transaction>> {
                self.storage.transactions() $( .$await_ext )?
            }

            /// Inserts or updates users.
            ///
            /// # Errors
            ///
            /// Returns an error if the storage backend fails to write.
            #[inline]
            pub $($async_kw)? fn upsert_users(&self, users: Vec<User>) -> Result<()> {
                self.storage.upsert_users(users) $( .$await_ext )?
            }

            /// Inserts or updates categories in the catalog.
            ///
            /// # Errors
            ///
            /// Returns an error if the storage backend fails to write.
            #[tracing::instrument(skip_all, fields(count = categories.len()))]
            pub $($async_kw)? fn seed_categories(&self, categories: Vec<Category>) -> Result<()> {
                self.storage.upsert_categories(categories) $( .$await_ext )?
            }

            /// Looks up a category by ID.
            ///
            /// # Errors
            ///
            /// Returns [`CashbookError::NotFound`] if no category has the
            /// given ID, or a storage error if the read fails.
            pub $($async_kw)? fn category(&self, id: &CategoryId) -> Result<Category> {
                let all = self.storage.categories() $( .$await_ext )? ?;
                all.into_iter()
                    .find(|cat| cat.id == *id)
                    .ok_or_else(|| CashbookError::NotFound {
                        entity: "category",
                        id: id.to_string(),
                    })
            }

            /// Finds a category by name (case-insensitive).
            ///
            /// # Errors
            ///
            /// Returns an error if the storage backend fails to read.
            pub $($async_kw)? fn find_category_by_name(
                &self,
                name: &str,
            ) -> Result<Option<Category>> {
                let all = self.storage.categories() $( .$await_ext )? ?;
                let lower = name.to_lowercase();
                Ok(all.into_iter().find(|cat| cat.name.to_lowercase() == lower))
            }

            /// Creates a transaction from the given input.
            ///
            /// Resolves the category snapshot, mints a fresh UUID, stamps
            /// `created`/`changed` with the current time, and persists the
            /// record. Returns the stored transaction.
            ///
            /// # Errors
            ///
            /// Returns [`CashbookError::NotFound`] if the category does not
            /// exist, [`CashbookError::InvalidRecord`] if the date or amount
            /// is malformed, or a storage error if the write fails.
            #[tracing::instrument(skip_all, fields(user = %new.user, category = %new.category))]
            pub $($async_kw)? fn add_transaction(
                &self,
                new: NewTransaction,
            ) -> Result<Transaction> {
                let category = self.category(&new.category) $( .$await_ext )? ?;
                let id = mint_transaction_id();
                validate_record(&id, new.date, &new.amount)?;
                let now = Utc::now();
                let tx = Transaction {
                    id,
                    user: new.user,
                    category,
                    date: new.date,
                    amount: new.amount,
                    note: new.note,
                    created: now,
                    changed: now,
                };
                self.storage.upsert_transactions(vec![tx.clone()]) $( .$await_ext )? ?;
                tracing::debug!(id = %tx.id, "transaction added");
                Ok(tx)
            }

            /// Applies a partial update to an existing transaction.
            ///
            /// Returns the updated transaction with `changed` stamped to the
            /// current time.
            ///
            /// # Errors
            ///
            /// Returns [`CashbookError::NotFound`] if no transaction has the
            /// given ID (or the new category does not exist),
            /// [`CashbookError::InvalidRecord`] if the updated date or
            /// amount is malformed, or a storage error on failure.
            #[tracing::instrument(skip_all, fields(id = %id))]
            pub $($async_kw)? fn update_transaction(
                &self,
                id: &TransactionId,
                update: TransactionUpdate,
            ) -> Result<Transaction> {
                let all = self.storage.transactions() $( .$await_ext )? ?;
                let mut tx = all
                    .into_iter()
                    .find(|tx| tx.id == *id)
                    .ok_or_else(|| CashbookError::NotFound {
                        entity: "transaction",
                        id: id.to_string(),
                    })?;
                let category = match update.category.as_ref() {
                    Some(cat_id) => Some(self.category(cat_id) $( .$await_ext )? ?),
                    None => None,
                };
                apply_update(&mut tx, update, category, Utc::now());
                validate_record(&tx.id, tx.date, &tx.amount)?;
                self.storage.upsert_transactions(vec![tx.clone()]) $( .$await_ext )? ?;
                tracing::debug!(id = %tx.id, "transaction updated");
                Ok(tx)
            }

            /// Removes a transaction by ID.
            ///
            /// Removing an unknown ID is not an error; the operation is
            /// idempotent.
            ///
            /// # Errors
            ///
            /// Returns an error if the storage backend fails to write.
            #[tracing::instrument(skip_all, fields(id = %id))]
            pub $($async_kw)? fn remove_transaction(&self, id: &TransactionId) -> Result<()> {
                self.storage.remove_transactions(core::slice::from_ref(id)) $( .$await_ext )?
            }

            /// Returns transactions matching the given query, in storage
            /// order.
            ///
            /// # Errors
            ///
            /// Returns an error if the storage backend fails to read.
            pub $($async_kw)? fn filter_transactions(
                &self,
                query: &TransactionQuery,
            ) -> Result<Vec<Transaction>> {
                let all = self.storage.transactions() $( .$await_ext )? ?;
                Ok(all.into_iter().filter(|tx| query.matches(tx)).collect())
            }

            /// Returns matching transactions grouped per calendar day,
            /// newest day first.
            ///
            /// # Errors
            ///
            /// Returns an error if the storage read fails or a stored
            /// record is malformed.
            pub $($async_kw)? fn daily_transactions(
                &self,
                query: &TransactionQuery,
            ) -> Result<Vec<DailyGroup>> {
                let matching = self.filter_transactions(query) $( .$await_ext )? ?;
                report::group_by_day(&matching)
            }

            /// Builds the monthly report for one user and period.
            ///
            /// # Errors
            ///
            /// Returns an error if the storage read fails or a stored
            /// record is malformed.
            #[tracing::instrument(skip_all, fields(user = %user, period = %period))]
            pub $($async_kw)? fn monthly_report(
                &self,
                user: &UserId,
                period: Period,
            ) -> Result<MonthlyReport> {
                let query = TransactionQuery::new()
                    .user(user.clone())
                    .period(period.month, period.year);
                let matching = self.filter_transactions(&query) $( .$await_ext )? ?;
                report::monthly_report(&matching, period)
            }

            /// Returns the stored category catalog partitioned by kind.
            ///
            /// # Errors
            ///
            /// Returns an error if the storage backend fails to read.
            pub $($async_kw)? fn category_catalog(&self) -> Result<CategoryCatalog> {
                let all = self.storage.categories() $( .$await_ext )? ?;
                Ok(report::partition_categories(&all))
            }
        }
    };
}

// ── Async variant ───────────────────────────────────────────────────────

#[cfg(feature = "async")]
mod async_ledger {
    //! Async high-level ledger.

    use crate::error::{CashbookError, Result};
    use crate::models::{
        Category, CategoryCatalog, CategoryId, DailyGroup, MonthlyReport, Period, Transaction,
        TransactionId, User, UserId,
    };
    use crate::report;
    use crate::storage::Storage;
    use chrono::Utc;

    use super::{
        NewTransaction, TransactionQuery, TransactionUpdate, apply_update, mint_transaction_id,
        validate_record,
    };

    define_ledger! {
        ledger_name: Ledger,
        storage_trait: Storage,
        ledger_doc: "High-level async ledger with integrated storage.\n\nConstruct with [`Ledger::new`] over any [`Storage`] backend.",
        async_kw: async,
        await_kw: await,
    }
}

// ── Blocking variant ────────────────────────────────────────────────────

#[cfg(feature = "blocking")]
mod blocking_ledger {
    //! Blocking high-level ledger.

    use crate::error::{CashbookError, Result};
    use crate::models::{
        Category, CategoryCatalog, CategoryId, DailyGroup, MonthlyReport, Period, Transaction,
        TransactionId, User, UserId,
    };
    use crate::report;
    use crate::storage::BlockingStorage;
    use chrono::Utc;

    use super::{
        NewTransaction, TransactionQuery, TransactionUpdate, apply_update, mint_transaction_id,
        validate_record,
    };

    define_ledger! {
        ledger_name: LedgerBlocking,
        storage_trait: BlockingStorage,
        ledger_doc: "High-level blocking ledger with integrated storage.\n\nConstruct with [`LedgerBlocking::new`] over any [`BlockingStorage`] backend.",
    }
}

#[cfg(feature = "async")]
pub use async_ledger::Ledger;
#[cfg(feature = "blocking")]
pub use blocking_ledger::LedgerBlocking;

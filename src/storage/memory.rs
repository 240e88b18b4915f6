//! In-memory storage backend for testing.
//!
//! Provides [`InMemoryStorage`], a thread-safe in-memory implementation of
//! the storage traits. Ideal for unit and integration tests where file I/O
//! is undesirable.

use core::hash::Hash;
use std::collections::HashSet;
use std::sync::Mutex;

#[cfg(feature = "async")]
use core::future::{self, Future};

use crate::error::{CashbookError, Result};
use crate::models::{Category, CategoryId, Transaction, TransactionId, User, UserId};

/// Thread-safe in-memory storage for testing.
///
/// This type implements both [`super::Storage`] (async) and
/// [`super::BlockingStorage`] (blocking) traits, providing a zero-setup
/// storage backend for tests.
///
/// # Upsert semantics
///
/// Like [`super::FileStorage`], upserts merge by key: an existing item
/// with a matching ID is replaced in place, new items are appended.
/// Insertion order is stable, which the report layer relies on for its
/// first-seen bucket ordering.
///
/// # Example
///
/// ```rust
/// use cashbook_rs::storage::InMemoryStorage;
///
/// let storage = InMemoryStorage::new();
/// // Use with the Ledger builders:
/// // Ledger::new(storage)
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    /// All state behind a single mutex for thread-safe interior mutability.
    inner: Mutex<Inner>,
}

/// Inner mutable state.
#[derive(Debug, Default)]
struct Inner {
    /// Stored users.
    users: Vec<User>,
    /// Stored categories.
    categories: Vec<Category>,
    /// Stored transactions.
    transactions: Vec<Transaction>,
}

impl InMemoryStorage {
    /// Creates a new empty in-memory storage.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the inner lock and applies a closure.
    fn with_lock<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> Result<R> {
        let mut inner = self.inner.lock().map_err(|err| lock_error(&err))?;
        Ok(f(&mut inner))
    }
}

/// Merges `new_items` into `existing` by key, keeping insertion order.
///
/// An existing item with a matching key is replaced in place; items with
/// unseen keys are appended.
fn upsert_by_key<T, K>(existing: &mut Vec<T>, new_items: Vec<T>, key_fn: fn(&T) -> K)
where
    K: Eq,
{
    for item in new_items {
        let key = key_fn(&item);
        match existing.iter_mut().find(|e| key_fn(e) == key) {
            Some(slot) => *slot = item,
            None => existing.push(item),
        }
    }
}

/// Removes items whose key is in `ids`.
fn remove_by_key<T, K>(existing: &mut Vec<T>, ids: &[K], key_fn: fn(&T) -> K)
where
    K: Hash + Eq,
{
    let id_set: HashSet<&K> = ids.iter().collect();
    existing.retain(|item| !id_set.contains(&key_fn(item)));
}

/// Wraps a mutex poison error.
fn lock_error<T>(err: &std::sync::PoisonError<T>) -> CashbookError {
    CashbookError::Storage(err.to_string().into())
}

// ── BlockingStorage implementation ──────────────────────────────────────

#[cfg(feature = "blocking")]
impl super::BlockingStorage for InMemoryStorage {
    #[inline]
    fn users(&self) -> Result<Vec<User>> {
        self.with_lock(|inner| inner.users.clone())
    }

    #[inline]
    fn categories(&self) -> Result<Vec<Category>> {
        self.with_lock(|inner| inner.categories.clone())
    }

    #[inline]
    fn transactions(&self) -> Result<Vec<Transaction>> {
        self.with_lock(|inner| inner.transactions.clone())
    }

    #[inline]
    fn upsert_users(&self, items: Vec<User>) -> Result<()> {
        self.with_lock(|inner| upsert_by_key(&mut inner.users, items, |u| u.id.clone()))
    }

    #[inline]
    fn upsert_categories(&self, items: Vec<Category>) -> Result<()> {
        self.with_lock(|inner| upsert_by_key(&mut inner.categories, items, |c| c.id.clone()))
    }

    #[inline]
    fn upsert_transactions(&self, items: Vec<Transaction>) -> Result<()> {
        self.with_lock(|inner| upsert_by_key(&mut inner.transactions, items, |t| t.id.clone()))
    }

    #[inline]
    fn remove_users(&self, ids: &[UserId]) -> Result<()> {
        self.with_lock(|inner| remove_by_key(&mut inner.users, ids, |u| u.id.clone()))
    }

    #[inline]
    fn remove_categories(&self, ids: &[CategoryId]) -> Result<()> {
        self.with_lock(|inner| remove_by_key(&mut inner.categories, ids, |c| c.id.clone()))
    }

    #[inline]
    fn remove_transactions(&self, ids: &[TransactionId]) -> Result<()> {
        self.with_lock(|inner| remove_by_key(&mut inner.transactions, ids, |t| t.id.clone()))
    }

    #[inline]
    fn clear(&self) -> Result<()> {
        self.with_lock(|inner| *inner = Inner::default())
    }
}

// ── Storage (async) implementation ──────────────────────────────────────

#[cfg(feature = "async")]
impl super::Storage for InMemoryStorage {
    #[inline]
    fn users(&self) -> impl Future<Output = Result<Vec<User>>> + Send {
        future::ready(self.with_lock(|inner| inner.users.clone()))
    }

    #[inline]
    fn categories(&self) -> impl Future<Output = Result<Vec<Category>>> + Send {
        future::ready(self.with_lock(|inner| inner.categories.clone()))
    }

    #[inline]
    fn transactions(&self) -> impl Future<Output = Result<Vec<Transaction>>> + Send {
        future::ready(self.with_lock(|inner| inner.transactions.clone()))
    }

    #[inline]
    fn upsert_users(&self, items: Vec<User>) -> impl Future<Output = Result<()>> + Send {
        future::ready(
            self.with_lock(|inner| upsert_by_key(&mut inner.users, items, |u| u.id.clone())),
        )
    }

    #[inline]
    fn upsert_categories(&self, items: Vec<Category>) -> impl Future<Output = Result<()>> + Send {
        future::ready(
            self.with_lock(|inner| upsert_by_key(&mut inner.categories, items, |c| c.id.clone())),
        )
    }

    #[inline]
    fn upsert_transactions(
        &self,
        items: Vec<Transaction>,
    ) -> impl Future<Output = Result<()>> + Send {
        future::ready(
            self.with_lock(|inner| upsert_by_key(&mut inner.transactions, items, |t| t.id.clone())),
        )
    }

    #[inline]
    fn remove_users(&self, ids: &[UserId]) -> impl Future<Output = Result<()>> + Send {
        future::ready(
            self.with_lock(|inner| remove_by_key(&mut inner.users, ids, |u| u.id.clone())),
        )
    }

    #[inline]
    fn remove_categories(&self, ids: &[CategoryId]) -> impl Future<Output = Result<()>> + Send {
        future::ready(
            self.with_lock(|inner| remove_by_key(&mut inner.categories, ids, |c| c.id.clone())),
        )
    }

    #[inline]
    fn remove_transactions(
        &self,
        ids: &[TransactionId],
    ) -> impl Future<Output = Result<()>> + Send {
        future::ready(
            self.with_lock(|inner| remove_by_key(&mut inner.transactions, ids, |t| t.id.clone())),
        )
    }

    #[inline]
    fn clear(&self) -> impl Future<Output = Result<()>> + Send {
        future::ready(self.with_lock(|inner| *inner = Inner::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, CategoryKind, Month, TxDate};
    use chrono::{DateTime, Utc};

    // ── Test helpers ───────────────────────────────────────────────────

    fn ts() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn test_user(id: &str) -> User {
        User {
            id: UserId::new(id.to_owned()),
            name: format!("User {id}"),
            email: format!("{id}@example.com"),
            avatar: None,
        }
    }

    fn test_category(id: &str) -> Category {
        Category {
            id: CategoryId::new(id.to_owned()),
            name: format!("Category {id}"),
            icon: "pricetag".to_owned(),
            icon_color: "#ffffff".to_owned(),
            background_color: "#4682b4".to_owned(),
            kind: CategoryKind::Expense,
        }
    }

    fn test_transaction(id: &str) -> Transaction {
        Transaction {
            id: TransactionId::new(id.to_owned()),
            user: UserId::new("u-1".to_owned()),
            category: test_category("c-1"),
            date: TxDate::new(5, Month::Jan, 2024),
            amount: Amount::new(-50_000.0, "VND"),
            note: None,
            created: ts(),
            changed: ts(),
        }
    }

    // ── Blocking tests ─────────────────────────────────────────────────

    #[cfg(feature = "blocking")]
    mod blocking {
        use super::*;
        use crate::storage::BlockingStorage;

        #[test]
        fn upsert_and_read_users() {
            let s = InMemoryStorage::new();
            s.upsert_users(vec![test_user("u-1"), test_user("u-2")])
                .unwrap();
            assert_eq!(s.users().unwrap().len(), 2);
            // Upsert replaces existing by key.
            s.upsert_users(vec![test_user("u-1")]).unwrap();
            assert_eq!(s.users().unwrap().len(), 2);
        }

        #[test]
        fn upsert_keeps_insertion_order() {
            let s = InMemoryStorage::new();
            s.upsert_categories(vec![test_category("c-1"), test_category("c-2")])
                .unwrap();
            let mut updated = test_category("c-1");
            updated.name = "Renamed".to_owned();
            s.upsert_categories(vec![updated]).unwrap();
            let cats = s.categories().unwrap();
            assert_eq!(cats[0].name, "Renamed");
            assert_eq!(cats[1].id, CategoryId::new("c-2".to_owned()));
        }

        #[test]
        fn remove_users() {
            let s = InMemoryStorage::new();
            s.upsert_users(vec![test_user("u-1")]).unwrap();
            s.remove_users(&[UserId::new("u-1".to_owned())]).unwrap();
            assert!(s.users().unwrap().is_empty());
        }

        #[test]
        fn remove_unknown_id_is_noop() {
            let s = InMemoryStorage::new();
            s.upsert_transactions(vec![test_transaction("t-1")])
                .unwrap();
            s.remove_transactions(&[TransactionId::new("t-missing".to_owned())])
                .unwrap();
            assert_eq!(s.transactions().unwrap().len(), 1);
        }

        #[test]
        fn upsert_and_remove_transactions() {
            let s = InMemoryStorage::new();
            s.upsert_transactions(vec![test_transaction("t-1")])
                .unwrap();
            assert_eq!(s.transactions().unwrap().len(), 1);
            s.remove_transactions(&[TransactionId::new("t-1".to_owned())])
                .unwrap();
            assert!(s.transactions().unwrap().is_empty());
        }

        #[test]
        fn clear_resets_everything() {
            let s = InMemoryStorage::new();
            s.upsert_users(vec![test_user("u-1")]).unwrap();
            s.upsert_categories(vec![test_category("c-1")]).unwrap();
            s.upsert_transactions(vec![test_transaction("t-1")])
                .unwrap();
            s.clear().unwrap();
            assert!(s.users().unwrap().is_empty());
            assert!(s.categories().unwrap().is_empty());
            assert!(s.transactions().unwrap().is_empty());
        }
    }

    // ── Async tests ────────────────────────────────────────────────────

    #[cfg(feature = "async")]
    mod async_tests {
        use super::*;
        use crate::storage::Storage;

        #[tokio::test]
        async fn upsert_and_read_users() {
            let s = InMemoryStorage::new();
            s.upsert_users(vec![test_user("u-1"), test_user("u-2")])
                .await
                .unwrap();
            assert_eq!(s.users().await.unwrap().len(), 2);
        }

        #[tokio::test]
        async fn upsert_and_remove_categories() {
            let s = InMemoryStorage::new();
            s.upsert_categories(vec![test_category("c-1")])
                .await
                .unwrap();
            assert_eq!(s.categories().await.unwrap().len(), 1);
            s.remove_categories(&[CategoryId::new("c-1".to_owned())])
                .await
                .unwrap();
            assert!(s.categories().await.unwrap().is_empty());
        }

        #[tokio::test]
        async fn upsert_and_remove_transactions() {
            let s = InMemoryStorage::new();
            s.upsert_transactions(vec![test_transaction("t-1")])
                .await
                .unwrap();
            assert_eq!(s.transactions().await.unwrap().len(), 1);
            s.remove_transactions(&[TransactionId::new("t-1".to_owned())])
                .await
                .unwrap();
            assert!(s.transactions().await.unwrap().is_empty());
        }

        #[tokio::test]
        async fn clear_resets_everything() {
            let s = InMemoryStorage::new();
            s.upsert_users(vec![test_user("u-1")]).await.unwrap();
            s.upsert_transactions(vec![test_transaction("t-1")])
                .await
                .unwrap();
            s.clear().await.unwrap();
            assert!(s.users().await.unwrap().is_empty());
            assert!(s.transactions().await.unwrap().is_empty());
        }
    }
}

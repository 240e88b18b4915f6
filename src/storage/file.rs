//! JSON-file-based storage backend.
//!
//! Stores each entity type in a separate JSON file under a configurable
//! directory (default: `$XDG_DATA_HOME/cashbook-rs/`).

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;

#[cfg(feature = "async")]
use core::future::Future;

use crate::error::{CashbookError, Result};
use crate::models::{Category, CategoryId, Transaction, TransactionId, User, UserId};

/// Application name used for the XDG data directory.
const APP_NAME: &str = "cashbook-rs";

/// File name for users.
const USERS_FILE: &str = "users.json";
/// File name for categories.
const CATEGORIES_FILE: &str = "categories.json";
/// File name for transactions.
const TRANSACTIONS_FILE: &str = "transactions.json";
/// Sentinel file used for cross-process file locking.
const LOCK_FILE: &str = "storage.lock";

/// File-backed storage that persists cashbook data as JSON files.
///
/// Each entity type is stored in a separate `.json` file holding a JSON
/// array in insertion order.
///
/// # Concurrency
///
/// Thread safety within a single process is provided by an in-process
/// [`Mutex`]. Cross-process safety is achieved via an advisory file lock
/// on `storage.lock` (using [`std::fs::File::lock`] /
/// [`std::fs::File::lock_shared`]).
///
/// Read operations acquire a shared lock (allowing concurrent readers),
/// while write operations acquire an exclusive lock.
///
/// # File layout
///
/// ```text
/// <dir>/
///   storage.lock          (cross-process lock sentinel)
///   users.json
///   categories.json
///   transactions.json
/// ```
#[derive(Debug)]
pub struct FileStorage {
    /// Root directory containing all JSON files.
    dir: PathBuf,
    /// Mutex serializing concurrent in-process access.
    lock: Mutex<()>,
    /// Sentinel file for cross-process advisory locking.
    lock_file: fs::File,
}

impl FileStorage {
    /// Creates a new file storage rooted at the given directory.
    ///
    /// Creates the directory (and parents) if it does not exist. Also
    /// opens (or creates) the `storage.lock` sentinel file used for
    /// cross-process advisory locking.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the lock
    /// file cannot be opened.
    #[inline]
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir).map_err(storage_io_error)?;
        let lock_file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(dir.join(LOCK_FILE))
            .map_err(storage_io_error)?;
        Ok(Self {
            dir,
            lock: Mutex::new(()),
            lock_file,
        })
    }

    /// Returns the default XDG-compliant data directory for this application.
    ///
    /// On Linux: `$XDG_DATA_HOME/cashbook-rs/` (typically
    /// `~/.local/share/cashbook-rs/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform data directory cannot be determined.
    #[inline]
    pub fn default_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|data_path| data_path.join(APP_NAME))
            .ok_or_else(|| {
                CashbookError::Storage("could not determine platform data directory".into())
            })
    }

    // ── Private helpers ─────────────────────────────────────────────

    /// Returns the full path for a given file name.
    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Acquires an in-process mutex guard and a shared (read) file lock,
    /// executes `op`, then releases the file lock.
    fn with_shared_lock<R, F: FnOnce() -> Result<R>>(&self, op: F) -> Result<R> {
        let _guard: MutexGuard<'_, ()> = self.lock.lock().map_err(|err| lock_poison_error(&err))?;
        self.lock_file.lock_shared().map_err(storage_io_error)?;
        let result = op();
        // Only surface the unlock error when the operation succeeded;
        // otherwise the original error is more useful.
        if let Err(err) = self.lock_file.unlock()
            && result.is_ok()
        {
            return Err(storage_io_error(err));
        }
        result
    }

    /// Acquires an in-process mutex guard and an exclusive (write) file
    /// lock, executes `op`, then releases the file lock.
    fn with_exclusive_lock<R, F: FnOnce() -> Result<R>>(&self, op: F) -> Result<R> {
        let _guard: MutexGuard<'_, ()> = self.lock.lock().map_err(|err| lock_poison_error(&err))?;
        self.lock_file.lock().map_err(storage_io_error)?;
        let result = op();
        if let Err(err) = self.lock_file.unlock()
            && result.is_ok()
        {
            return Err(storage_io_error(err));
        }
        result
    }

    /// Reads and deserializes a JSON file. Returns an empty `Vec` if the
    /// file does not exist.
    fn read_entities<T: serde::de::DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let path = self.path(name);
        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(CashbookError::from),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(storage_io_error(err)),
        }
    }

    /// Atomically writes a serialized JSON file (write-to-tmp then rename).
    fn write_entities<T: Serialize>(&self, name: &str, items: &[T]) -> Result<()> {
        let path = self.path(name);
        let tmp_path = self.path(&format!("{name}.tmp"));
        let json = serde_json::to_string_pretty(items).map_err(CashbookError::from)?;
        fs::write(&tmp_path, json).map_err(storage_io_error)?;
        fs::rename(&tmp_path, &path).map_err(storage_io_error)?;
        Ok(())
    }

    /// Merges new items into an entity file by key (insert-or-replace).
    ///
    /// Insertion order is preserved: existing items are replaced in
    /// place, unseen items are appended.
    fn upsert_file<T, K>(&self, name: &str, new_items: Vec<T>, key_fn: fn(&T) -> K) -> Result<()>
    where
        T: Serialize + serde::de::DeserializeOwned,
        K: Eq,
    {
        if new_items.is_empty() {
            return Ok(());
        }
        self.with_exclusive_lock(|| {
            let mut existing: Vec<T> = self.read_entities(name)?;
            upsert_by_key(&mut existing, new_items, key_fn);
            self.write_entities(name, &existing)
        })
    }

    /// Removes items from an entity file by key.
    fn remove_file<T, K>(&self, name: &str, ids: &[K], key_fn: fn(&T) -> K) -> Result<()>
    where
        T: Serialize + serde::de::DeserializeOwned,
        K: Eq,
    {
        if ids.is_empty() {
            return Ok(());
        }
        self.with_exclusive_lock(|| {
            let existing: Vec<T> = self.read_entities(name)?;
            let filtered = remove_by_key(existing, ids, key_fn);
            self.write_entities(name, &filtered)
        })
    }

    /// Deletes all entity files.
    ///
    /// The `storage.lock` sentinel is kept; it is infrastructure, not
    /// data.
    fn clear_all(&self) -> Result<()> {
        self.with_exclusive_lock(|| {
            let files = [USERS_FILE, CATEGORIES_FILE, TRANSACTIONS_FILE];
            for name in files {
                let path = self.path(name);
                match fs::remove_file(&path) {
                    Ok(()) => {}
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                    Err(err) => return Err(storage_io_error(err)),
                }
            }
            Ok(())
        })
    }
}

// ── Free-standing helpers ───────────────────────────────────────────────

/// Wraps an I/O error into a [`CashbookError::Storage`].
fn storage_io_error(err: std::io::Error) -> CashbookError {
    CashbookError::Storage(Box::new(err))
}

/// Wraps a mutex poison error into a [`CashbookError::Storage`].
fn lock_poison_error<T>(err: &std::sync::PoisonError<T>) -> CashbookError {
    CashbookError::Storage(err.to_string().into())
}

/// Merges `new_items` into `existing` by key, keeping insertion order.
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
fn remove_by_key<T, K>(existing: Vec<T>, ids: &[K], key_fn: fn(&T) -> K) -> Vec<T>
where
    K: Eq,
{
    existing
        .into_iter()
        .filter(|item| !ids.contains(&key_fn(item)))
        .collect()
}

// ── Key extraction functions ────────────────────────────────────────────

/// Extracts the user ID.
fn user_key(item: &User) -> UserId {
    item.id.clone()
}

/// Extracts the category ID.
fn category_key(item: &Category) -> CategoryId {
    item.id.clone()
}

/// Extracts the transaction ID.
fn transaction_key(item: &Transaction) -> TransactionId {
    item.id.clone()
}

// ── BlockingStorage implementation ──────────────────────────────────────

#[cfg(feature = "blocking")]
impl super::BlockingStorage for FileStorage {
    #[inline]
    fn users(&self) -> Result<Vec<User>> {
        self.with_shared_lock(|| self.read_entities(USERS_FILE))
    }

    #[inline]
    fn categories(&self) -> Result<Vec<Category>> {
        self.with_shared_lock(|| self.read_entities(CATEGORIES_FILE))
    }

    #[inline]
    fn transactions(&self) -> Result<Vec<Transaction>> {
        self.with_shared_lock(|| self.read_entities(TRANSACTIONS_FILE))
    }

    #[inline]
    fn upsert_users(&self, items: Vec<User>) -> Result<()> {
        self.upsert_file(USERS_FILE, items, user_key)
    }

    #[inline]
    fn upsert_categories(&self, items: Vec<Category>) -> Result<()> {
        self.upsert_file(CATEGORIES_FILE, items, category_key)
    }

    #[inline]
    fn upsert_transactions(&self, items: Vec<Transaction>) -> Result<()> {
        self.upsert_file(TRANSACTIONS_FILE, items, transaction_key)
    }

    #[inline]
    fn remove_users(&self, ids: &[UserId]) -> Result<()> {
        self.remove_file(USERS_FILE, ids, user_key)
    }

    #[inline]
    fn remove_categories(&self, ids: &[CategoryId]) -> Result<()> {
        self.remove_file(CATEGORIES_FILE, ids, category_key)
    }

    #[inline]
    fn remove_transactions(&self, ids: &[TransactionId]) -> Result<()> {
        self.remove_file(TRANSACTIONS_FILE, ids, transaction_key)
    }

    #[inline]
    fn clear(&self) -> Result<()> {
        self.clear_all()
    }
}

// ── Storage (async) implementation ──────────────────────────────────────

#[cfg(feature = "async")]
impl super::Storage for FileStorage {
    #[inline]
    fn users(&self) -> impl Future<Output = Result<Vec<User>>> + Send {
        core::future::ready(self.with_shared_lock(|| self.read_entities(USERS_FILE)))
    }

    #[inline]
    fn categories(&self) -> impl Future<Output = Result<Vec<Category>>> + Send {
        core::future::ready(self.with_shared_lock(|| self.read_entities(CATEGORIES_FILE)))
    }

    #[inline]
    fn transactions(&self) -> impl Future<Output = Result<Vec<Transaction>>> + Send {
        core::future::ready(self.with_shared_lock(|| self.read_entities(TRANSACTIONS_FILE)))
    }

    #[inline]
    fn upsert_users(&self, items: Vec<User>) -> impl Future<Output = Result<()>> + Send {
        core::future::ready(self.upsert_file(USERS_FILE, items, user_key))
    }

    #[inline]
    fn upsert_categories(&self, items: Vec<Category>) -> impl Future<Output = Result<()>> + Send {
        core::future::ready(self.upsert_file(CATEGORIES_FILE, items, category_key))
    }

    #[inline]
    fn upsert_transactions(
        &self,
        items: Vec<Transaction>,
    ) -> impl Future<Output = Result<()>> + Send {
        core::future::ready(self.upsert_file(TRANSACTIONS_FILE, items, transaction_key))
    }

    #[inline]
    fn remove_users(&self, ids: &[UserId]) -> impl Future<Output = Result<()>> + Send {
        core::future::ready(self.remove_file(USERS_FILE, ids, user_key))
    }

    #[inline]
    fn remove_categories(&self, ids: &[CategoryId]) -> impl Future<Output = Result<()>> + Send {
        core::future::ready(self.remove_file(CATEGORIES_FILE, ids, category_key))
    }

    #[inline]
    fn remove_transactions(
        &self,
        ids: &[TransactionId],
    ) -> impl Future<Output = Result<()>> + Send {
        core::future::ready(self.remove_file(TRANSACTIONS_FILE, ids, transaction_key))
    }

    #[inline]
    fn clear(&self) -> impl Future<Output = Result<()>> + Send {
        core::future::ready(self.clear_all())
    }
}

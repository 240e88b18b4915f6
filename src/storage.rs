//! Pluggable storage backends for persisting cashbook data.
//!
//! This module defines the [`Storage`] (async) and [`BlockingStorage`]
//! (blocking) traits via a shared macro, mirroring the service generation
//! pattern in [`crate::ledger`].

#[cfg(feature = "storage-file")]
mod file;
mod memory;

#[cfg(feature = "storage-file")]
pub use file::FileStorage;
pub use memory::InMemoryStorage;

/// Generates a storage trait (async or blocking) with all entity methods.
///
/// Uses `@methods` to define the method list once, and `@method` to render
/// each method in async (`impl Future + Send`) or blocking (`fn`) style.
macro_rules! define_storage {
    // ── Entry points ────────────────────────────────────────────────
    (
        trait_name: $trait_name:ident,
        trait_doc: $trait_doc:expr,
        mode: async_mode,
    ) => {
        #[doc = $trait_doc]
        pub trait $trait_name: core::fmt::Debug + Send + Sync {
            define_storage!(@methods async_mode);
        }
    };
    (
        trait_name: $trait_name:ident,
        trait_doc: $trait_doc:expr,
        mode: blocking,
    ) => {
        #[doc = $trait_doc]
        pub trait $trait_name: core::fmt::Debug + Send + Sync {
            define_storage!(@methods blocking);
        }
    };

    // ── Single method list (shared between both variants) ───────────
    (@methods $mode:ident) => {
        // Read
        define_storage!(@method $mode, users,
            "Returns all stored users.\n\n# Errors\n\nReturns an error if the storage backend fails to read.",
            -> Result<Vec<User>>);
        define_storage!(@method $mode, categories,
            "Returns all stored categories, in insertion order.\n\n# Errors\n\nReturns an error if the storage backend fails to read.",
            -> Result<Vec<Category>>);
        define_storage!(@method $mode, transactions,
            "Returns all stored transactions, in insertion order.\n\n# Errors\n\nReturns an error if the storage backend fails to read.",
            -> Result<Vec<Transaction>>);

        // Upsert
        define_storage!(@method $mode, upsert_users,
            "Inserts or updates users (matched by ID).\n\nExisting items are replaced in place; new items are appended, so\ninsertion order is stable across upserts.\n\n# Errors\n\nReturns an error if the storage backend fails to write.",
            items: Vec<User>, -> Result<()>);
        define_storage!(@method $mode, upsert_categories,
            "Inserts or updates categories (matched by ID).\n\nExisting items are replaced in place; new items are appended, so\ninsertion order is stable across upserts.\n\n# Errors\n\nReturns an error if the storage backend fails to write.",
            items: Vec<Category>, -> Result<()>);
        define_storage!(@method $mode, upsert_transactions,
            "Inserts or updates transactions (matched by ID).\n\nExisting items are replaced in place; new items are appended, so\ninsertion order is stable across upserts.\n\n# Errors\n\nReturns an error if the storage backend fails to write.",
            items: Vec<Transaction>, -> Result<()>);

        // Remove
        define_storage!(@method $mode, remove_users,
            "Removes users by their IDs. Unknown IDs are ignored.\n\n# Errors\n\nReturns an error if the storage backend fails to write.",
            ids: &[UserId], -> Result<()>);
        define_storage!(@method $mode, remove_categories,
            "Removes categories by their IDs. Unknown IDs are ignored.\n\n# Errors\n\nReturns an error if the storage backend fails to write.",
            ids: &[CategoryId], -> Result<()>);
        define_storage!(@method $mode, remove_transactions,
            "Removes transactions by their IDs. Unknown IDs are ignored.\n\n# Errors\n\nReturns an error if the storage backend fails to write.",
            ids: &[TransactionId], -> Result<()>);

        // Clear
        define_storage!(@method $mode, clear,
            "Removes all stored data.\n\n# Errors\n\nReturns an error if the storage backend fails to write.",
            -> Result<()>);
    };

    // ── Blocking method renderer ────────────────────────────────────
    (@method blocking, $name:ident, $doc:expr,
     $($param:ident: $param_ty:ty,)* -> $ret:ty) => {
        #[doc = $doc]
        fn $name(&self $(, $param: $param_ty)*) -> $ret;
    };

    // ── Async method renderer (returns impl Future + Send) ──────────
    (@method async_mode, $name:ident, $doc:expr,
     $($param:ident: $param_ty:ty,)* -> $ret:ty) => {
        #[doc = $doc]
        fn $name(&self $(, $param: $param_ty)*)
            -> impl core::future::Future<Output = $ret> + Send;
    };
}

#[cfg(feature = "async")]
mod async_storage {
    //! Async storage trait definition.

    use crate::error::Result;
    use crate::models::{Category, CategoryId, Transaction, TransactionId, User, UserId};

    define_storage! {
        trait_name: Storage,
        trait_doc: "Async storage backend for persisting cashbook data.\n\nAll methods take `&self` — implementations should use interior mutability\n(e.g. `Mutex`) for thread-safe mutation.",
        mode: async_mode,
    }
}

#[cfg(feature = "blocking")]
mod blocking_storage {
    //! Blocking storage trait definition.

    use crate::error::Result;
    use crate::models::{Category, CategoryId, Transaction, TransactionId, User, UserId};

    define_storage! {
        trait_name: BlockingStorage,
        trait_doc: "Blocking storage backend for persisting cashbook data.\n\nAll methods take `&self` — implementations should use interior mutability\n(e.g. `Mutex`) for thread-safe mutation.",
        mode: blocking,
    }
}

#[cfg(feature = "async")]
pub use async_storage::Storage;
#[cfg(feature = "blocking")]
pub use blocking_storage::BlockingStorage;

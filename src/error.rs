//! Error types for the cashbook library.

/// Convenience alias for results produced by this crate.
pub type Result<T> = core::result::Result<T, CashbookError>;

/// All errors that can occur when using the cashbook library.
#[derive(Debug, thiserror::Error)]
pub enum CashbookError {
    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Storage backend failed.
    #[error("storage error: {0}")]
    Storage(Box<dyn core::error::Error + Send + Sync>),

    /// A transaction record is malformed and cannot be aggregated.
    ///
    /// Aggregation fails as a whole rather than silently skipping the
    /// record or producing a partial sum.
    #[error("invalid transaction record {transaction}: {reason}")]
    InvalidRecord {
        /// Identifier of the offending transaction.
        transaction: String,
        /// What exactly is malformed.
        reason: String,
    },

    /// A referenced entity does not exist in storage.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind ("transaction", "category", "user").
        entity: &'static str,
        /// The identifier that failed to resolve.
        id: String,
    },
}

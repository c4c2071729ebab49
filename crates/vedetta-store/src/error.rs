/// Errors that can occur within the persistence layer.
///
/// Load paths deliberately do not use this type: a ledger or checkpoint
/// that cannot be read is treated as empty so the monitor keeps running.
/// Only writes are fallible to the caller.
///
/// # Examples
///
/// ```rust
/// use vedetta_store::error::StoreError;
///
/// let err = StoreError::Io(std::io::Error::other("disk full"));
/// assert!(err.to_string().contains("disk full"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying filesystem error.
    #[error("Store: I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The ledger contents could not be serialized.
    #[error("Store: JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience `Result` alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

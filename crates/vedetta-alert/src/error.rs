use vedetta_notify::error::NotifyError;
use vedetta_store::error::StoreError;

/// Errors surfaced by a dispatch decision.
///
/// A delivery failure is reported to the caller but the ledger mutation
/// it followed always stands; persistence failures on the decision path
/// are logged and absorbed instead (the next cycle re-derives state from
/// whatever was last durably written).
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The transport exhausted its retries or is misconfigured.
    #[error("Dispatch: delivery failed: {0}")]
    Delivery(#[from] NotifyError),

    /// A ledger write failed outside the absorb-and-continue path.
    #[error("Dispatch: {0}")]
    Store(#[from] StoreError),
}

/// Convenience `Result` alias for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;

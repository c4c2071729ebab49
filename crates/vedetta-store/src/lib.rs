//! Persisted state owned by the alert core.
//!
//! Two small file-backed stores: the [`ledger::AlertLedger`] (the durable
//! source of truth for which alerts are currently active) and the
//! [`checkpoint::TailCheckpoint`] (how far the log source has been
//! consumed). Both are best-effort durable and treat missing or corrupt
//! content as reset-to-empty, favoring availability over continuity.
//!
//! A single monitor instance is assumed to own both files; concurrent
//! writers are not coordinated.

pub mod checkpoint;
pub mod error;
pub mod ledger;

#[cfg(test)]
mod tests;

//! Shared types for the vedetta host monitor.
//!
//! Defines the alert taxonomy ([`types::AlertType`]), the persisted
//! [`types::AlertRecord`], the trigger/clear events detectors emit, the
//! per-cycle [`settings::MonitorSettings`] snapshot, and duration
//! formatting helpers used in notification text.

pub mod fmt;
pub mod settings;
pub mod types;

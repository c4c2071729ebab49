use crate::util;
use std::path::PathBuf;
use vedetta_common::fmt::format_duration_long;
use vedetta_common::types::{AlertType, TriggerEvent};

/// Ledger key for the reboot condition.
pub const REBOOT_ALERT_KEY: &str = "reboot";

/// Baselines below this are boot-time noise, not a real previous uptime.
const MIN_BASELINE_SECS: f64 = 10.0;

/// Detects a reboot as a regression of the monotonic system uptime.
///
/// The baseline starts unset; the first observation only seeds it, so the
/// initial read after startup can never fire a false trigger. The baseline
/// is updated on every observation and never persisted.
pub struct RebootDetector {
    sources: Vec<PathBuf>,
    last_uptime: Option<f64>,
}

impl RebootDetector {
    /// `sources` are tried in order; the first readable one wins
    /// (typically `/proc/uptime` with a container-host fallback).
    pub fn new(sources: Vec<PathBuf>) -> Self {
        Self {
            sources,
            last_uptime: None,
        }
    }

    /// Read the current uptime and advance the baseline.
    pub fn poll(&mut self) -> Option<TriggerEvent> {
        let current = self.read_uptime();
        self.observe(current)
    }

    /// Fires exactly once per regression: when the current uptime drops
    /// below a baseline that was itself past the boot-noise guard.
    pub fn observe(&mut self, current: f64) -> Option<TriggerEvent> {
        let event = match self.last_uptime {
            Some(previous) if current < previous && previous > MIN_BASELINE_SECS => {
                tracing::warn!(
                    previous_uptime = previous,
                    current_uptime = current,
                    "Reboot detected, uptime decreased"
                );
                Some(TriggerEvent {
                    key: REBOOT_ALERT_KEY.to_string(),
                    alert_type: AlertType::Reboot,
                    message: format!(
                        "🔄 *Server riavviato*\n\nHostname: *{}* ({})\nUptime attuale: {}",
                        util::hostname(),
                        util::local_ip(),
                        format_duration_long(current.max(0.0) as u64)
                    ),
                    force: true,
                })
            }
            _ => None,
        };
        self.last_uptime = Some(current);
        event
    }

    /// Current system uptime in seconds; 0 when no source is readable.
    pub fn read_uptime(&self) -> f64 {
        for path in &self.sources {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Some(value) = content
                    .split_whitespace()
                    .next()
                    .and_then(|field| field.parse().ok())
                {
                    return value;
                }
                tracing::debug!(path = %path.display(), "Unreadable uptime value, trying next source");
            }
        }
        0.0
    }
}

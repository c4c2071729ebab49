//! Per-cycle settings snapshot.
//!
//! The monitor re-reads the operator settings file on every scheduler
//! cycle, so edits made through the configuration surface take effect
//! within one tick without a restart. A missing or corrupt file yields
//! the built-in defaults; the engine never fails on settings input.

use crate::types::AlertType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Reminder interval applied when a type has settings but no explicit
/// `reminder_interval` entry.
pub const DEFAULT_REMINDER_INTERVAL: u64 = 3_600;

/// Per-type alerting behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertTypeSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Seconds between reminders for a still-active alert; 0 = never remind.
    #[serde(default = "default_reminder_interval")]
    pub reminder_interval: u64,
    #[serde(default = "default_notify_recovery")]
    pub notify_recovery: bool,
}

impl Default for AlertTypeSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            reminder_interval: default_reminder_interval(),
            notify_recovery: default_notify_recovery(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_reminder_interval() -> u64 {
    DEFAULT_REMINDER_INTERVAL
}

fn default_notify_recovery() -> bool {
    true
}

/// A mount point monitored by the disk resource view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MountPoint {
    pub path: String,
    #[serde(default = "default_mount_threshold")]
    pub threshold: u8,
}

fn default_mount_threshold() -> u8 {
    90
}

/// The full operator settings snapshot, read fresh each cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorSettings {
    #[serde(default = "default_excluded_ips")]
    pub excluded_ips: Vec<String>,
    /// Keyed by alert type name (`"ssh"`, `"internet"`, ...). Types with
    /// no entry fall back to the global flags below, then to permissive
    /// defaults.
    #[serde(default)]
    pub alert_settings: HashMap<String, AlertTypeSettings>,
    #[serde(default = "default_enabled")]
    pub notify_ssh: bool,
    #[serde(default = "default_enabled")]
    pub notify_reboot: bool,
    #[serde(default)]
    pub bot_token: String,
    #[serde(default)]
    pub chat_id: String,
    #[serde(default)]
    pub mount_points: Vec<MountPoint>,
}

fn default_excluded_ips() -> Vec<String> {
    [
        "127.0.0.1",
        "192.168.0.0/16",
        "10.0.0.0/8",
        "172.16.0.0/12",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for MonitorSettings {
    fn default() -> Self {
        let mut alert_settings = HashMap::new();
        alert_settings.insert(
            "ssh".to_string(),
            AlertTypeSettings {
                enabled: true,
                reminder_interval: 0,
                notify_recovery: false,
            },
        );
        alert_settings.insert(
            "internet".to_string(),
            AlertTypeSettings {
                enabled: true,
                // Reminders cannot be delivered while the link is down.
                reminder_interval: 0,
                notify_recovery: true,
            },
        );
        Self {
            excluded_ips: default_excluded_ips(),
            alert_settings,
            notify_ssh: true,
            notify_reboot: true,
            bot_token: String::new(),
            chat_id: String::new(),
            mount_points: Vec::new(),
        }
    }
}

impl MonitorSettings {
    /// Read the settings file, falling back to defaults on any failure.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Invalid settings file, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot read settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Explicit per-type settings, if the operator configured any.
    pub fn type_settings(&self, alert_type: AlertType) -> Option<&AlertTypeSettings> {
        self.alert_settings.get(&alert_type.to_string())
    }

    /// Reminder interval for a type, with the permissive default for
    /// types that carry no settings entry.
    pub fn reminder_interval(&self, alert_type: AlertType) -> u64 {
        self.type_settings(alert_type)
            .map(|s| s.reminder_interval)
            .unwrap_or(DEFAULT_REMINDER_INTERVAL)
    }

    /// Per-type `enabled` takes precedence over the global `notify_ssh` flag.
    pub fn ssh_alerts_enabled(&self) -> bool {
        self.type_settings(AlertType::Ssh)
            .map(|s| s.enabled)
            .unwrap_or(self.notify_ssh)
    }

    /// Per-type `enabled` takes precedence over the global `notify_reboot` flag.
    pub fn reboot_alerts_enabled(&self) -> bool {
        self.type_settings(AlertType::Reboot)
            .map(|s| s.enabled)
            .unwrap_or(self.notify_reboot)
    }

    /// Whether a connectivity recovery should be notified (the record is
    /// discarded either way).
    pub fn internet_recovery_enabled(&self) -> bool {
        self.type_settings(AlertType::Internet)
            .map(|s| s.notify_recovery)
            .unwrap_or(true)
    }
}

use serde::{Deserialize, Serialize};

/// Class of a monitored condition, governing which settings apply.
///
/// # Examples
///
/// ```
/// use vedetta_common::types::AlertType;
///
/// let t: AlertType = "internet".parse().unwrap();
/// assert_eq!(t, AlertType::Internet);
/// assert_eq!(t.to_string(), "internet");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Ssh,
    Internet,
    Reboot,
    Generic,
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertType::Ssh => write!(f, "ssh"),
            AlertType::Internet => write!(f, "internet"),
            AlertType::Reboot => write!(f, "reboot"),
            AlertType::Generic => write!(f, "generic"),
        }
    }
}

impl std::str::FromStr for AlertType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ssh" => Ok(AlertType::Ssh),
            "internet" => Ok(AlertType::Internet),
            "reboot" => Ok(AlertType::Reboot),
            "generic" => Ok(AlertType::Generic),
            _ => Err(format!("unknown alert type: {s}")),
        }
    }
}

/// Persisted state of one active alert. A key is present in the ledger
/// iff its condition is still considered active; `last_notification` is
/// never earlier than `start_time`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRecord {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// Human-readable text as first triggered.
    pub message: String,
    /// Seconds since epoch.
    pub start_time: i64,
    /// Seconds since epoch; refreshed on every sent reminder.
    pub last_notification: i64,
    /// Number of reminders actually sent (not suppressed attempts).
    pub reminder_count: u32,
}

/// A detector's signal that a watched condition has become true.
#[derive(Debug, Clone)]
pub struct TriggerEvent {
    pub key: String,
    pub alert_type: AlertType,
    pub message: String,
    /// Bypass the reminder-interval check for an already-active key.
    pub force: bool,
}

/// A detector's signal that a previously true condition is no longer true.
#[derive(Debug, Clone)]
pub struct ClearEvent {
    pub key: String,
    pub alert_type: AlertType,
    /// Overrides the stored original message in the recovery text.
    pub message: Option<String>,
}

/// Unified detector output fed to the dispatcher.
#[derive(Debug, Clone)]
pub enum MonitorEvent {
    Trigger(TriggerEvent),
    Clear(ClearEvent),
}

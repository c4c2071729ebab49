use serde::Deserialize;
use std::path::PathBuf;

/// Daemon bootstrap configuration, loaded once at startup.
///
/// Operator-facing alerting settings live in the separate settings file
/// (`settings_path`), which is re-read every cycle; this struct only
/// carries paths and cadences.
#[derive(Debug, Deserialize)]
pub struct DaemonConfig {
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
    #[serde(default = "default_auth_log_path")]
    pub auth_log_path: PathBuf,
    #[serde(default = "default_checkpoint_path")]
    pub checkpoint_path: PathBuf,
    #[serde(default = "default_ledger_path")]
    pub ledger_path: PathBuf,
    #[serde(default = "default_tick_secs")]
    pub tick_secs: u64,
    #[serde(default = "default_ssh_check_secs")]
    pub ssh_check_secs: u64,
    #[serde(default = "default_connectivity_check_secs")]
    pub connectivity_check_secs: u64,
    /// Uptime sources tried in order; the container-host fallback covers
    /// running inside a namespace where `/proc` is not the host's.
    #[serde(default = "default_uptime_paths")]
    pub uptime_paths: Vec<PathBuf>,
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("config.json")
}

fn default_auth_log_path() -> PathBuf {
    PathBuf::from("/var/log/auth.log")
}

fn default_checkpoint_path() -> PathBuf {
    PathBuf::from("/tmp/last_log_position.txt")
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("/tmp/active_alerts.json")
}

fn default_tick_secs() -> u64 {
    10
}

fn default_ssh_check_secs() -> u64 {
    30
}

fn default_connectivity_check_secs() -> u64 {
    60
}

fn default_uptime_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/proc/uptime"),
        PathBuf::from("/host/proc/uptime"),
    ]
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            settings_path: default_settings_path(),
            auth_log_path: default_auth_log_path(),
            checkpoint_path: default_checkpoint_path(),
            ledger_path: default_ledger_path(),
            tick_secs: default_tick_secs(),
            ssh_check_secs: default_ssh_check_secs(),
            connectivity_check_secs: default_connectivity_check_secs(),
            uptime_paths: default_uptime_paths(),
        }
    }
}

impl DaemonConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Missing config file is fine: everything has a default.
    pub fn load_or_default(path: &str) -> anyhow::Result<Self> {
        if std::path::Path::new(path).exists() {
            Self::load(path)
        } else {
            tracing::info!(path, "No daemon config file, using defaults");
            Ok(Self::default())
        }
    }
}

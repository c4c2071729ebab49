use crate::error::{DetectError, Result};
use crate::exclude::is_excluded;
use chrono::{Datelike, Local, NaiveDateTime};
use regex::Regex;
use sha2::{Digest, Sha256};
use std::fmt::Write;
use std::sync::LazyLock;
use vedetta_common::types::{AlertType, TriggerEvent};

/// Accepted-login records as written by sshd to the auth log:
/// `<timestamp> <host> sshd[pid]: Accepted <method> for <user> from <ip>`
static LOGIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\w+\s+\d+\s+\d+:\d+:\d+)\s+(\S+)\s+sshd\[\d+\]:\s+Accepted\s+(\S+)\s+for\s+(\S+)\s+from\s+(\S+)",
    )
    .unwrap()
});

/// Scan newly tailed lines for successful SSH logins from non-excluded
/// sources and produce one trigger event per detected principal.
///
/// Keys are stable per `(source ip, username)`, so repeated logins by the
/// same principal dedup against the active record instead of opening a
/// new alert per log line.
pub fn scan(lines: &[String], excluded: &[String], local_ip: &str) -> Vec<TriggerEvent> {
    let mut events = Vec::new();

    for line in lines {
        let Some(captures) = LOGIN_PATTERN.captures(line) else {
            continue;
        };
        let raw_timestamp = &captures[1];
        let hostname = &captures[2];
        let username = &captures[4];
        let source_ip = &captures[5];

        if is_excluded(source_ip, excluded) {
            tracing::debug!(source_ip, "SSH login from excluded address, skipping");
            continue;
        }

        let date = match display_timestamp(raw_timestamp) {
            Ok(date) => date,
            Err(e) => {
                tracing::debug!(error = %e, "Keeping raw log timestamp");
                raw_timestamp.to_string()
            }
        };

        let message = format!(
            "*SSH Connection detected*\n\
             Connection from *{source_ip}* as *{username}* on *{hostname}* ({local_ip})\n\
             Date: {date}\n\
             More information: https://ipinfo.io/{source_ip}"
        );

        tracing::info!(username, source_ip, hostname, "New SSH login detected");
        events.push(TriggerEvent {
            key: alert_key(source_ip, username),
            alert_type: AlertType::Ssh,
            message,
            force: false,
        });
    }

    events
}

/// `ssh_<hex>` where `<hex>` fingerprints the `(ip, user)` pair.
fn alert_key(source_ip: &str, username: &str) -> String {
    let digest = Sha256::digest(format!("{source_ip}/{username}"));
    let mut key = String::from("ssh_");
    for b in &digest[..4] {
        let _ = write!(key, "{b:02x}");
    }
    key
}

/// Resolve the syslog timestamp (which lacks a year) against the current
/// year for display. Misattributes events read across a year boundary;
/// accepted, since the raw string is kept on any parse failure anyway.
fn display_timestamp(raw: &str) -> Result<String> {
    let year = Local::now().year();
    let full = format!("{raw} {year}");
    let parsed = NaiveDateTime::parse_from_str(&full, "%b %d %H:%M:%S %Y")
        .map_err(|e| DetectError::ParseFailure(format!("timestamp '{raw}': {e}")))?;
    Ok(parsed.format("%d %b %Y %H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_key_is_stable_per_principal() {
        let a = alert_key("203.0.113.9", "root");
        let b = alert_key("203.0.113.9", "root");
        let c = alert_key("203.0.113.9", "deploy");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.starts_with("ssh_"));
        assert_eq!(a.len(), "ssh_".len() + 8);
    }

    #[test]
    fn display_timestamp_resolves_current_year() {
        let date = display_timestamp("Mar 15 14:30:22").unwrap();
        let year = Local::now().year().to_string();
        assert!(date.contains(&year), "got: {date}");
        assert!(date.contains("Mar"), "got: {date}");
    }

    #[test]
    fn display_timestamp_rejects_garbage() {
        assert!(display_timestamp("not a timestamp").is_err());
    }
}

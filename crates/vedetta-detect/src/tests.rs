use crate::connectivity::{ConnectivityDetector, INTERNET_ALERT_KEY};
use crate::error::DetectError;
use crate::exclude::is_excluded;
use crate::reboot::RebootDetector;
use crate::ssh;
use crate::tail::tail;
use std::io::Write;
use tempfile::TempDir;
use vedetta_common::types::MonitorEvent;

fn default_exclusions() -> Vec<String> {
    ["127.0.0.1", "192.168.0.0/16", "10.0.0.0/8", "172.16.0.0/12"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// ---- tail ----

#[test]
fn tail_missing_file_is_source_unavailable() {
    let dir = TempDir::new().unwrap();
    let result = tail(&dir.path().join("auth.log"), 0);
    assert!(matches!(result, Err(DetectError::SourceUnavailable { .. })));
}

#[test]
fn tail_sequential_reads_cover_every_byte_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("auth.log");
    std::fs::write(&path, "line one\nline two\n").unwrap();

    let first = tail(&path, 0).unwrap();
    assert_eq!(first.lines, vec!["line one", "line two"]);
    assert_eq!(first.checkpoint, 18);

    let mut file = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
    file.write_all(b"line three\n").unwrap();

    let second = tail(&path, first.checkpoint).unwrap();
    assert_eq!(second.lines, vec!["line three"]);

    // No gaps, no overlaps: the chunks reassemble the whole file.
    let mut all = first.lines.clone();
    all.extend(second.lines.clone());
    assert_eq!(all.join("\n") + "\n", "line one\nline two\nline three\n");
    assert_eq!(second.checkpoint, std::fs::metadata(&path).unwrap().len());
}

#[test]
fn tail_without_growth_returns_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("auth.log");
    std::fs::write(&path, "line one\n").unwrap();

    let chunk = tail(&path, 0).unwrap();
    let again = tail(&path, chunk.checkpoint).unwrap();
    assert!(again.lines.is_empty());
    assert_eq!(again.checkpoint, chunk.checkpoint);
}

#[test]
fn tail_restarts_after_rotation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("auth.log");
    std::fs::write(&path, "a much longer file before rotation\n").unwrap();
    let chunk = tail(&path, 0).unwrap();

    // Rotated: the new file is smaller than the stored checkpoint.
    std::fs::write(&path, "fresh\n").unwrap();
    let after = tail(&path, chunk.checkpoint).unwrap();
    assert_eq!(after.lines, vec!["fresh"]);
    assert_eq!(after.checkpoint, 6);
}

// ---- exclusion filter ----

#[test]
fn private_range_address_is_excluded() {
    assert!(is_excluded("10.5.5.5", &default_exclusions()));
    assert!(is_excluded("192.168.1.77", &default_exclusions()));
    assert!(is_excluded("127.0.0.1", &default_exclusions()));
}

#[test]
fn public_address_is_not_excluded() {
    assert!(!is_excluded("203.0.113.9", &default_exclusions()));
}

#[test]
fn unparsable_or_empty_address_is_excluded() {
    assert!(is_excluded("not-an-ip", &default_exclusions()));
    assert!(is_excluded("", &default_exclusions()));
}

#[test]
fn literal_entry_matches_exactly() {
    let entries = vec!["203.0.113.9".to_string()];
    assert!(is_excluded("203.0.113.9", &entries));
    assert!(!is_excluded("203.0.113.10", &entries));
}

#[test]
fn invalid_entries_are_skipped() {
    let entries = vec!["bogus/entry".to_string(), "10.0.0.0/8".to_string()];
    assert!(is_excluded("10.1.2.3", &entries));
    assert!(!is_excluded("203.0.113.9", &entries));
}

// ---- ssh detector ----

const LOGIN_LINE: &str =
    "Mar 15 14:30:22 myhost sshd[1234]: Accepted password for root from 203.0.113.9 port 54321 ssh2";

#[test]
fn ssh_scan_emits_trigger_for_accepted_login() {
    let lines = vec![LOGIN_LINE.to_string()];
    let events = ssh::scan(&lines, &default_exclusions(), "192.168.1.10");

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert!(event.key.starts_with("ssh_"));
    assert!(!event.force);
    assert!(event.message.contains("*203.0.113.9*"));
    assert!(event.message.contains("*root*"));
    assert!(event.message.contains("*myhost*"));
    assert!(event.message.contains("(192.168.1.10)"));
    assert!(event.message.contains("https://ipinfo.io/203.0.113.9"));
}

#[test]
fn ssh_scan_skips_excluded_sources() {
    let lines = vec![
        "Mar 15 14:30:22 myhost sshd[1234]: Accepted publickey for admin from 10.5.5.5 port 2 ssh2"
            .to_string(),
    ];
    assert!(ssh::scan(&lines, &default_exclusions(), "host").is_empty());
}

#[test]
fn ssh_scan_ignores_non_login_lines() {
    let lines = vec![
        "Mar 15 14:30:22 myhost sshd[1234]: Failed password for root from 203.0.113.9 port 1 ssh2"
            .to_string(),
        "Mar 15 14:30:23 myhost CRON[99]: pam_unix(cron:session): session opened".to_string(),
    ];
    assert!(ssh::scan(&lines, &default_exclusions(), "host").is_empty());
}

#[test]
fn ssh_scan_same_principal_yields_same_key() {
    let lines = vec![LOGIN_LINE.to_string()];
    let first = ssh::scan(&lines, &default_exclusions(), "host");
    let later_line = LOGIN_LINE.replace("14:30:22", "18:02:51");
    let second = ssh::scan(&[later_line], &default_exclusions(), "host");
    assert_eq!(first[0].key, second[0].key);
}

// ---- connectivity detector ----

#[test]
fn connectivity_stays_silent_without_transition() {
    let mut detector = ConnectivityDetector::new();
    assert!(detector.observe(true, 100).is_none());
    assert!(detector.observe(true, 160).is_none());
}

#[test]
fn connectivity_down_then_up_reports_downtime() {
    let mut detector = ConnectivityDetector::new();

    let down = detector.observe(false, 1_000).expect("down transition");
    let MonitorEvent::Trigger(trigger) = down else {
        panic!("expected trigger");
    };
    assert_eq!(trigger.key, INTERNET_ALERT_KEY);
    assert!(trigger.message.contains("CONNESSIONE INTERNET PERSA"));

    // Still down: no repeated event.
    assert!(detector.observe(false, 1_060).is_none());

    let up = detector.observe(true, 1_125).expect("up transition");
    let MonitorEvent::Clear(clear) = up else {
        panic!("expected clear");
    };
    assert_eq!(clear.key, INTERNET_ALERT_KEY);
    let message = clear.message.unwrap();
    assert!(
        message.contains("2 minuti, 5 secondi"),
        "got: {message}"
    );

    // Back up: no further events.
    assert!(detector.observe(true, 1_200).is_none());
}

// ---- reboot detector ----

#[test]
fn reboot_fires_once_on_uptime_regression() {
    let mut detector = RebootDetector::new(Vec::new());

    assert!(detector.observe(50_000.0).is_none(), "first read only seeds");
    assert!(detector.observe(50_010.0).is_none(), "growing uptime is normal");

    let event = detector.observe(12.0).expect("regression fires");
    assert_eq!(event.key, "reboot");
    assert!(event.force);
    assert!(event.message.contains("Server riavviato"));

    assert!(detector.observe(22.0).is_none(), "one-shot per regression");
}

#[test]
fn reboot_guard_ignores_boot_noise_baselines() {
    let mut detector = RebootDetector::new(Vec::new());
    assert!(detector.observe(5.0).is_none());
    assert!(detector.observe(2.0).is_none(), "baseline was below the guard");
}

#[test]
fn read_uptime_falls_back_through_sources() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("uptime");
    std::fs::write(&path, "12345.67 98765.43\n").unwrap();

    let detector = RebootDetector::new(vec![dir.path().join("missing"), path]);
    assert!((detector.read_uptime() - 12_345.67).abs() < f64::EPSILON);

    let empty = RebootDetector::new(vec![dir.path().join("also-missing")]);
    assert_eq!(empty.read_uptime(), 0.0);
}

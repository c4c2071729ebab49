use crate::checkpoint::TailCheckpoint;
use crate::ledger::AlertLedger;
use std::collections::HashMap;
use tempfile::TempDir;
use vedetta_common::types::{AlertRecord, AlertType};

fn make_record(alert_type: AlertType, start: i64) -> AlertRecord {
    AlertRecord {
        alert_type,
        message: "test alert".to_string(),
        start_time: start,
        last_notification: start,
        reminder_count: 0,
    }
}

#[test]
fn ledger_load_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let ledger = AlertLedger::new(dir.path().join("active_alerts.json"));
    assert!(ledger.load().is_empty());
}

#[test]
fn ledger_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let ledger = AlertLedger::new(dir.path().join("active_alerts.json"));

    let mut alerts = HashMap::new();
    alerts.insert(
        "internet_connection".to_string(),
        make_record(AlertType::Internet, 1_000),
    );
    alerts.insert("ssh_ab12cd34".to_string(), make_record(AlertType::Ssh, 2_000));
    ledger.save(&alerts).unwrap();

    let loaded = ledger.load();
    assert_eq!(loaded.len(), 2);
    let record = &loaded["internet_connection"];
    assert_eq!(record.alert_type, AlertType::Internet);
    assert_eq!(record.start_time, 1_000);
}

#[test]
fn ledger_corrupt_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("active_alerts.json");
    std::fs::write(&path, "{not json").unwrap();

    let ledger = AlertLedger::new(path);
    assert!(ledger.load().is_empty());
}

#[test]
fn ledger_save_creates_parent_directory() {
    let dir = TempDir::new().unwrap();
    let ledger = AlertLedger::new(dir.path().join("state/alerts.json"));
    ledger.save(&HashMap::new()).unwrap();
    assert!(ledger.path().exists());
}

#[test]
fn checkpoint_round_trip() {
    let dir = TempDir::new().unwrap();
    let checkpoint = TailCheckpoint::new(dir.path().join("position.txt"));

    assert_eq!(checkpoint.load(), 0);
    checkpoint.save(4_096).unwrap();
    assert_eq!(checkpoint.load(), 4_096);
}

#[test]
fn checkpoint_corrupt_file_resets_to_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("position.txt");
    std::fs::write(&path, "not a number").unwrap();

    let checkpoint = TailCheckpoint::new(path);
    assert_eq!(checkpoint.load(), 0);
}

#[test]
fn checkpoint_tolerates_surrounding_whitespace() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("position.txt");
    std::fs::write(&path, " 123\n").unwrap();

    let checkpoint = TailCheckpoint::new(path);
    assert_eq!(checkpoint.load(), 123);
}

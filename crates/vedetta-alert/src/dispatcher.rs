use crate::error::Result;
use chrono::Utc;
use vedetta_common::fmt::format_duration_short;
use vedetta_common::settings::MonitorSettings;
use vedetta_common::types::{AlertRecord, ClearEvent, TriggerEvent};
use vedetta_notify::NotificationChannel;
use vedetta_store::ledger::AlertLedger;

/// What a dispatch decision did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A notification was delivered (first trigger, reminder, or recovery).
    Notified,
    /// The event was consumed without delivery (disabled type, reminder
    /// interval not yet elapsed, or reminders off for the type).
    Suppressed,
    /// Nothing to do (e.g. a clear for a key that was not active).
    NoOp,
}

/// The dedup/reminder/recovery state machine.
///
/// Sole mutator of the alert ledger. Each decision is one
/// load + mutate + save round over the ledger file, persisted before the
/// delivery attempt.
pub struct AlertDispatcher {
    ledger: AlertLedger,
    channel: Box<dyn NotificationChannel>,
}

impl AlertDispatcher {
    pub fn new(ledger: AlertLedger, channel: Box<dyn NotificationChannel>) -> Self {
        Self { ledger, channel }
    }

    /// Handle a trigger event for a condition that is (still) true.
    ///
    /// First trigger for a key inserts an active record and notifies
    /// immediately. While the key stays active, further triggers become
    /// reminders only once the type's reminder interval has elapsed
    /// (never, for interval 0); `event.force` bypasses the interval
    /// check. A type explicitly disabled in the settings is a no-op.
    pub async fn trigger(
        &self,
        event: &TriggerEvent,
        settings: &MonitorSettings,
    ) -> Result<Outcome> {
        if let Some(type_settings) = settings.type_settings(event.alert_type) {
            if !type_settings.enabled {
                tracing::debug!(
                    alert_type = %event.alert_type,
                    key = %event.key,
                    "Alert type disabled, ignoring trigger"
                );
                return Ok(Outcome::Suppressed);
            }
        }

        let now = Utc::now().timestamp();
        let mut active = self.ledger.load();

        let text = match active.get_mut(&event.key) {
            None => {
                active.insert(
                    event.key.clone(),
                    AlertRecord {
                        alert_type: event.alert_type,
                        message: event.message.clone(),
                        start_time: now,
                        last_notification: now,
                        reminder_count: 0,
                    },
                );
                event.message.clone()
            }
            Some(record) => {
                if !event.force {
                    let interval = settings.reminder_interval(event.alert_type);
                    if interval == 0 {
                        tracing::debug!(
                            alert_type = %event.alert_type,
                            key = %event.key,
                            "Reminders disabled for this type"
                        );
                        return Ok(Outcome::Suppressed);
                    }
                    let elapsed = now - record.last_notification;
                    if elapsed < interval as i64 {
                        tracing::debug!(
                            key = %event.key,
                            next_in_secs = interval as i64 - elapsed,
                            "Alert already active, reminder not due yet"
                        );
                        return Ok(Outcome::Suppressed);
                    }
                }
                record.reminder_count += 1;
                record.last_notification = now;
                format!("🔄 REMINDER ({}) - {}", record.reminder_count, event.message)
            }
        };

        self.persist(&active);
        self.channel.send(&text).await?;
        Ok(Outcome::Notified)
    }

    /// Handle a clear event: the condition is no longer true.
    ///
    /// Removes the record, then delivers a recovery message carrying the
    /// elapsed active duration. Recovery delivery is always forced; the
    /// caller decides per `notify_recovery` whether to request it at all
    /// (see [`AlertDispatcher::discard`] for the silent path).
    pub async fn clear(&self, event: &ClearEvent) -> Result<Outcome> {
        let now = Utc::now().timestamp();
        let mut active = self.ledger.load();

        let Some(record) = active.remove(&event.key) else {
            tracing::debug!(key = %event.key, "No active alert to recover");
            return Ok(Outcome::NoOp);
        };
        self.persist(&active);

        let elapsed = (now - record.start_time).max(0) as u64;
        let base = event.message.clone().unwrap_or(record.message);
        let text = format!(
            "✅ RISOLTO - {base} (durata: {})",
            format_duration_short(elapsed)
        );

        tracing::info!(
            key = %event.key,
            alert_type = %record.alert_type,
            elapsed_secs = elapsed,
            "Alert recovered"
        );
        self.channel.send(&text).await?;
        Ok(Outcome::Notified)
    }

    /// Remove an active record without notifying, preserving the
    /// "key present iff condition active" invariant when recovery
    /// notifications are turned off. Returns whether the key was active.
    pub fn discard(&self, key: &str) -> bool {
        let mut active = self.ledger.load();
        if active.remove(key).is_none() {
            return false;
        }
        self.persist(&active);
        tracing::debug!(key, "Alert discarded without recovery notification");
        true
    }

    /// Persistence failures are logged, never fatal: the in-memory state
    /// still backs this cycle's decision and the next cycle re-derives
    /// from the last durable write.
    fn persist(&self, active: &std::collections::HashMap<String, AlertRecord>) {
        if let Err(e) = self.ledger.save(active) {
            tracing::warn!(error = %e, "Failed to persist alert ledger");
        }
    }
}

use crate::config::DaemonConfig;
use anyhow::Result;
use std::time::{Duration, Instant};
use tokio::signal;
use tokio::time::interval;
use vedetta_alert::AlertDispatcher;
use vedetta_common::settings::MonitorSettings;
use vedetta_common::types::MonitorEvent;
use vedetta_detect::connectivity::ConnectivityDetector;
use vedetta_detect::error::DetectError;
use vedetta_detect::reboot::RebootDetector;
use vedetta_detect::{ssh, tail, util};
use vedetta_store::checkpoint::TailCheckpoint;

/// The control loop: ticks the detectors at their cadences and feeds
/// their events to the dispatcher.
///
/// Sole owner of the detector state and the only writer of the ledger
/// and checkpoint files. Errors propagate to a single catch-and-continue
/// boundary per cycle; the loop itself only ends on process shutdown.
pub struct Monitor {
    config: DaemonConfig,
    dispatcher: AlertDispatcher,
    connectivity: ConnectivityDetector,
    reboot: RebootDetector,
    checkpoint: TailCheckpoint,
    last_ssh_check: Option<Instant>,
    last_connectivity_check: Option<Instant>,
}

impl Monitor {
    pub fn new(config: DaemonConfig, dispatcher: AlertDispatcher) -> Self {
        let reboot = RebootDetector::new(config.uptime_paths.clone());
        let checkpoint = TailCheckpoint::new(&config.checkpoint_path);
        Self {
            config,
            dispatcher,
            connectivity: ConnectivityDetector::new(),
            reboot,
            checkpoint,
            last_ssh_check: None,
            last_connectivity_check: None,
        }
    }

    pub async fn run(mut self) {
        tracing::info!(
            tick_secs = self.config.tick_secs,
            auth_log = %self.config.auth_log_path.display(),
            "Monitor loop started"
        );

        let mut tick = interval(Duration::from_secs(self.config.tick_secs));
        loop {
            tokio::select! {
                _ = tick.tick() => {
                    if let Err(e) = self.cycle().await {
                        tracing::error!(error = %e, "Monitor cycle failed");
                    }
                }
                _ = signal::ctrl_c() => {
                    tracing::info!("Shutting down");
                    break;
                }
            }
        }
    }

    /// One scheduler tick. Settings are re-read here so operator changes
    /// apply within a cycle.
    async fn cycle(&mut self) -> Result<()> {
        let settings = MonitorSettings::load(&self.config.settings_path);

        self.check_reboot(&settings).await?;

        if due(&mut self.last_connectivity_check, self.config.connectivity_check_secs) {
            self.check_connectivity(&settings).await?;
        }

        if due(&mut self.last_ssh_check, self.config.ssh_check_secs) {
            if settings.ssh_alerts_enabled() {
                self.check_ssh(&settings).await?;
            } else {
                tracing::debug!("SSH notifications disabled by settings");
            }
        }
        Ok(())
    }

    async fn check_reboot(&mut self, settings: &MonitorSettings) -> Result<()> {
        let Some(event) = self.reboot.poll() else {
            return Ok(());
        };
        if !settings.reboot_alerts_enabled() {
            tracing::info!("Reboot detected but notifications are disabled");
            return Ok(());
        }
        self.dispatcher.trigger(&event, settings).await?;
        Ok(())
    }

    async fn check_connectivity(&mut self, settings: &MonitorSettings) -> Result<()> {
        match self.connectivity.poll() {
            Some(MonitorEvent::Trigger(event)) => {
                // Delivery usually fails with the link down; the ledger
                // entry lands regardless, so the eventual recovery still
                // reports the full outage duration.
                if let Err(e) = self.dispatcher.trigger(&event, settings).await {
                    tracing::warn!(error = %e, "Could not deliver disconnection alert");
                }
            }
            Some(MonitorEvent::Clear(event)) => {
                if settings.internet_recovery_enabled() {
                    self.dispatcher.clear(&event).await?;
                } else {
                    self.dispatcher.discard(&event.key);
                }
            }
            None => {}
        }
        Ok(())
    }

    async fn check_ssh(&mut self, settings: &MonitorSettings) -> Result<()> {
        let chunk = match tail::tail(&self.config.auth_log_path, self.checkpoint.load()) {
            Ok(chunk) => chunk,
            Err(DetectError::SourceUnavailable { path }) => {
                // Skip this cycle, checkpoint untouched.
                tracing::warn!(path = %path, "Auth log not found, skipping SSH check");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        if let Err(e) = self.checkpoint.save(chunk.checkpoint) {
            tracing::warn!(error = %e, "Failed to persist tail checkpoint");
        }
        if chunk.lines.is_empty() {
            return Ok(());
        }

        let local_ip = util::local_ip();
        for event in ssh::scan(&chunk.lines, &settings.excluded_ips, &local_ip) {
            // Events in a batch are independent; one failed delivery must
            // not drop the rest.
            if let Err(e) = self.dispatcher.trigger(&event, settings).await {
                tracing::error!(error = %e, key = %event.key, "Failed to deliver SSH alert");
            }
        }
        Ok(())
    }
}

/// Cadence gate: true when the period has elapsed (or on the first call),
/// stamping the new run time.
fn due(last: &mut Option<Instant>, period_secs: u64) -> bool {
    match last {
        Some(at) if at.elapsed() < Duration::from_secs(period_secs) => false,
        _ => {
            *last = Some(Instant::now());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_runs_first_time_then_waits() {
        let mut last = None;
        assert!(due(&mut last, 3_600));
        assert!(!due(&mut last, 3_600));
    }

    #[test]
    fn due_with_zero_period_always_runs() {
        let mut last = None;
        assert!(due(&mut last, 0));
        assert!(due(&mut last, 0));
    }
}

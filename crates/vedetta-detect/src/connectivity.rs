use chrono::Utc;
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;
use vedetta_common::fmt::format_duration_long;
use vedetta_common::types::{AlertType, ClearEvent, MonitorEvent, TriggerEvent};

/// Ledger key for the connectivity condition; there is only ever one.
pub const INTERNET_ALERT_KEY: &str = "internet_connection";

/// Public resolvers probed on the DNS port, in order: Google, Cloudflare,
/// OpenDNS. One successful TCP connect means the link is up.
const PROBE_ADDRS: [&str; 3] = ["8.8.8.8:53", "1.1.1.1:53", "208.67.222.222:53"];

const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Up/down connectivity tracker.
///
/// Starts connected: a fresh process assumes the link is up until a probe
/// round proves otherwise, so a restart during an outage re-detects the
/// outage rather than inventing a recovery. State is never persisted.
/// A failure of the probing mechanism itself is indistinguishable from a
/// genuine disconnection.
pub struct ConnectivityDetector {
    connected: bool,
    disconnected_since: Option<i64>,
}

impl Default for ConnectivityDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectivityDetector {
    pub fn new() -> Self {
        Self {
            connected: true,
            disconnected_since: None,
        }
    }

    pub fn connected(&self) -> bool {
        self.connected
    }

    /// Probe the endpoints and advance the state machine.
    pub fn poll(&mut self) -> Option<MonitorEvent> {
        let reachable = probe_any();
        self.observe(reachable, Utc::now().timestamp())
    }

    /// Pure transition: only the Up→Down and Down→Up edges produce an
    /// event.
    pub fn observe(&mut self, reachable: bool, now: i64) -> Option<MonitorEvent> {
        match (self.connected, reachable) {
            (true, false) => {
                self.connected = false;
                self.disconnected_since = Some(now);
                tracing::warn!("Internet connection lost");
                Some(MonitorEvent::Trigger(TriggerEvent {
                    key: INTERNET_ALERT_KEY.to_string(),
                    alert_type: AlertType::Internet,
                    message: "⚠️ CONNESSIONE INTERNET PERSA".to_string(),
                    force: false,
                }))
            }
            (false, true) => {
                self.connected = true;
                let downtime = self
                    .disconnected_since
                    .take()
                    .map(|since| (now - since).max(0) as u64)
                    .unwrap_or(0);
                tracing::info!(downtime_secs = downtime, "Internet connection restored");
                Some(MonitorEvent::Clear(ClearEvent {
                    key: INTERNET_ALERT_KEY.to_string(),
                    alert_type: AlertType::Internet,
                    message: Some(format!(
                        "Connessione internet ripristinata dopo {} di disconnessione",
                        format_duration_long(downtime)
                    )),
                }))
            }
            _ => None,
        }
    }
}

fn probe_any() -> bool {
    for addr in PROBE_ADDRS {
        let Ok(addr) = addr.parse::<SocketAddr>() else {
            continue;
        };
        match TcpStream::connect_timeout(&addr, PROBE_TIMEOUT) {
            Ok(_) => return true,
            Err(e) => {
                tracing::debug!(addr = %addr, error = %e, "Connectivity probe failed");
            }
        }
    }
    false
}

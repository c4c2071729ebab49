use std::fmt::Write;
use sysinfo::Networks;

const MIB: f64 = (1024u64 * 1024) as f64;
const MAX_INTERFACES: usize = 5;

/// Network overview: cumulative traffic and per-interface IPv4 addresses.
pub fn summary() -> String {
    let networks = Networks::new_with_refreshed_list();

    let mut sent = 0u64;
    let mut received = 0u64;
    for (_, data) in &networks {
        sent += data.total_transmitted();
        received += data.total_received();
    }

    let mut text = format!(
        "*Informazioni Rete*\n\
         Dati inviati: {:.2} MB\n\
         Dati ricevuti: {:.2} MB\n\
         *Interfacce*:",
        sent as f64 / MIB,
        received as f64 / MIB,
    );

    let mut interfaces: Vec<(&String, _)> = networks.iter().collect();
    interfaces.sort_by(|a, b| a.0.cmp(b.0));
    for (name, data) in interfaces.into_iter().take(MAX_INTERFACES) {
        let addr = data
            .ip_networks()
            .iter()
            .find(|net| net.addr.is_ipv4())
            .map(|net| net.addr.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = write!(text, "\n{name}: {addr}");
    }
    text
}

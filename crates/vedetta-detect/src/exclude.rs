use ipnet::IpNet;
use std::net::IpAddr;

/// Whether an address should be excluded from alerting.
///
/// Entries may be literal addresses or CIDR ranges. Fail-safe: an empty
/// or unparsable address counts as excluded, so the monitor never alerts
/// on input it cannot classify. Entries that fail to parse are skipped.
pub fn is_excluded(address: &str, entries: &[String]) -> bool {
    if address.is_empty() {
        return true;
    }
    let ip: IpAddr = match address.parse() {
        Ok(ip) => ip,
        Err(_) => return true,
    };

    for entry in entries {
        if entry.contains('/') {
            match entry.parse::<IpNet>() {
                Ok(net) if net.contains(&ip) => return true,
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(entry = %entry, error = %e, "Skipping invalid exclusion entry");
                }
            }
        } else if address == entry {
            return true;
        }
    }
    false
}

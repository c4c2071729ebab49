//! Human-readable resource snapshots.
//!
//! Stateless Markdown formatting over [`sysinfo`], one module per
//! resource class. These views carry no alerting logic; they exist for
//! the presentation surfaces (chat commands, the daemon's `report`
//! subcommand).

pub mod cpu;
pub mod disk;
pub mod memory;
pub mod network;

const GIB: f64 = (1024u64 * 1024 * 1024) as f64;

fn percent(used: f64, total: f64) -> f64 {
    if total > 0.0 {
        used / total * 100.0
    } else {
        0.0
    }
}

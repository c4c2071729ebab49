use crate::{percent, GIB};
use std::fmt::Write;
use sysinfo::Disks;

/// Disk overview: root filesystem plus any configured mount points.
pub fn summary(mounts: &[String]) -> String {
    let disks = Disks::new_with_refreshed_list();

    let usage_of = |path: &str| {
        disks
            .iter()
            .find(|d| d.mount_point().to_string_lossy() == path)
            .map(|d| {
                let total = d.total_space() as f64;
                let used = total - d.available_space() as f64;
                (used, total)
            })
    };

    let mut text = String::from("*Informazioni Disco*\n");
    match usage_of("/") {
        Some((used, total)) => {
            let _ = write!(
                text,
                "Root Usage: *{:.1}%*\nUsato: {:.1} GB\nLibero: {:.1} GB\nTotale: {:.1} GB\n",
                percent(used, total),
                used / GIB,
                (total - used) / GIB,
                total / GIB,
            );
        }
        None => text.push_str("Root: informazioni non disponibili\n"),
    }

    if mounts.is_empty() {
        text.push_str("\nNessun mount point configurato.");
        return text;
    }

    text.push_str("*Mount Points Monitorati*:");
    for path in mounts {
        match usage_of(path) {
            Some((used, total)) => {
                let _ = write!(
                    text,
                    "\n{path}: {:.1}% usato ({:.1} GB / {:.1} GB)",
                    percent(used, total),
                    used / GIB,
                    total / GIB,
                );
            }
            None => {
                let _ = write!(text, "\n{path}: non trovato");
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_without_mounts_mentions_it() {
        let text = summary(&[]);
        assert!(text.contains("Informazioni Disco"));
        assert!(text.contains("Nessun mount point configurato"));
    }

    #[test]
    fn summary_reports_unknown_mounts() {
        let text = summary(&["/definitely/not/mounted".to_string()]);
        assert!(text.contains("/definitely/not/mounted: non trovato"));
    }
}

use crate::error::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use vedetta_common::types::AlertRecord;

/// File-backed mapping from alert key to active-alert record.
///
/// The ledger is the only durable source of truth for "what is currently
/// active". `load` never fails: a missing or unparsable file is an empty
/// ledger. `save` is a whole-file overwrite; callers treat
/// load + mutate + save as the unit of work for one dispatch decision.
pub struct AlertLedger {
    path: PathBuf,
}

impl AlertLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all active alerts. Missing file is a normal empty ledger;
    /// corrupt content is logged and treated the same way.
    pub fn load(&self) -> HashMap<String, AlertRecord> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Cannot read alert ledger, treating as empty");
                return HashMap::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(alerts) => alerts,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Corrupt alert ledger, treating as empty");
                HashMap::new()
            }
        }
    }

    /// Overwrite the ledger file with the given state, creating the
    /// parent directory if needed.
    pub fn save(&self, alerts: &HashMap<String, AlertRecord>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(alerts)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

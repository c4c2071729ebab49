use crate::error::Result;
use std::path::{Path, PathBuf};

/// Durable byte offset into the monitored log, persisted as plain text.
///
/// Missing or unparsable content reads as 0, which simply re-tails the
/// source from the start; the dispatcher's dedup absorbs re-delivered
/// lines.
pub struct TailCheckpoint {
    path: PathBuf,
}

impl TailCheckpoint {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> u64 {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => match content.trim().parse() {
                Ok(offset) => offset,
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "Corrupt tail checkpoint, restarting from 0");
                    0
                }
            },
            Err(_) => 0,
        }
    }

    pub fn save(&self, offset: u64) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, offset.to_string())?;
        Ok(())
    }
}

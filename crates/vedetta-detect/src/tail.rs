use crate::error::{DetectError, Result};
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Lines appended since the last checkpoint, plus the new checkpoint.
#[derive(Debug)]
pub struct TailChunk {
    pub lines: Vec<String>,
    pub checkpoint: u64,
}

/// Read the log from `checkpoint` to end of file.
///
/// If the file has shrunk below the checkpoint it was rotated or
/// truncated: reading restarts from offset 0. The caller is responsible
/// for persisting the returned checkpoint immediately after a successful
/// read; a crash in between re-delivers the same lines on the next run,
/// which the dispatcher's key dedup absorbs.
pub fn tail(path: &Path, checkpoint: u64) -> Result<TailChunk> {
    let size = match std::fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DetectError::SourceUnavailable {
                path: path.display().to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    let start = if size < checkpoint {
        tracing::info!(
            path = %path.display(),
            size,
            checkpoint,
            "Log rotated or truncated, restarting from offset 0"
        );
        0
    } else {
        checkpoint
    };

    let mut file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DetectError::SourceUnavailable {
                path: path.display().to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };
    file.seek(SeekFrom::Start(start))?;

    let mut buffer = Vec::new();
    let read = file.read_to_end(&mut buffer)?;

    let lines = String::from_utf8_lossy(&buffer)
        .lines()
        .map(str::to_string)
        .collect();

    Ok(TailChunk {
        lines,
        checkpoint: start + read as u64,
    })
}

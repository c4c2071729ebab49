/// Errors that can occur while observing the host.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// The monitored log file does not exist. The caller skips the cycle
    /// and leaves its checkpoint untouched.
    #[error("Detect: log source unavailable: {path}")]
    SourceUnavailable { path: String },

    /// A log line or timestamp did not match the expected shape. Only
    /// the offending line is skipped, never the whole batch.
    #[error("Detect: cannot parse: {0}")]
    ParseFailure(String),

    /// Underlying filesystem error while reading a source.
    #[error("Detect: I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` alias for detector operations.
pub type Result<T> = std::result::Result<T, DetectError>;

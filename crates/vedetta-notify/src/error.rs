/// Errors that can occur within the notification subsystem.
///
/// # Examples
///
/// ```rust
/// use vedetta_notify::error::NotifyError;
///
/// let err = NotifyError::InvalidConfig("bot token not set".to_string());
/// assert!(err.to_string().contains("bot token"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The channel is missing or carries placeholder credentials; no
    /// delivery attempt is made.
    #[error("Notify: invalid channel configuration: {0}")]
    InvalidConfig(String),

    /// An HTTP request to the notification endpoint failed.
    #[error("Notify: HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The external API returned a non-success response.
    #[error("Notify: API error: status={status}, body={body}")]
    Api { status: u16, body: String },
}

/// Convenience `Result` alias for notification operations.
pub type Result<T> = std::result::Result<T, NotifyError>;

//! Notification delivery for the vedetta host monitor.
//!
//! Alert text is handed to a [`NotificationChannel`], which owns the
//! transport details and its own bounded retries. The shipped channel
//! posts to the Telegram Bot API; the dispatcher only ever sees the
//! trait.

pub mod error;
pub mod telegram;

use async_trait::async_trait;
use error::Result;

/// A delivery channel that sends alert text to a fixed destination.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Delivers the message through this channel.
    ///
    /// # Errors
    ///
    /// Returns an error once the channel's own bounded retries are
    /// exhausted, or immediately when the channel is misconfigured.
    async fn send(&self, text: &str) -> Result<()>;

    /// Returns the channel type name (e.g., `"telegram"`).
    fn channel_name(&self) -> &str;
}

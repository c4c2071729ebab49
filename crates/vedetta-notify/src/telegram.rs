use crate::error::{NotifyError, Result};
use crate::NotificationChannel;
use async_trait::async_trait;
use std::time::Duration;

const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Telegram Bot API channel delivering to a single chat.
pub struct TelegramChannel {
    client: reqwest::Client,
    token: String,
    chat_id: String,
    api_base: String,
}

impl TelegramChannel {
    pub fn new(token: &str, chat_id: &str) -> Self {
        Self::with_api_base(token, chat_id, "https://api.telegram.org")
    }

    /// The API base is overridable so tests can point at a local server.
    pub fn with_api_base(token: &str, chat_id: &str, api_base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.to_string(),
            chat_id: chat_id.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Credentials are validated at send time, not construction, so the
    /// monitor keeps running (and logging) with an unconfigured bot.
    fn check_credentials(&self) -> Result<()> {
        if self.token.is_empty() || self.token == "token" {
            return Err(NotifyError::InvalidConfig("bot token not set".to_string()));
        }
        if self.chat_id.is_empty() || self.chat_id == "id" {
            return Err(NotifyError::InvalidConfig("chat id not set".to_string()));
        }
        Ok(())
    }

    async fn send_once(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({
                "chat_id": self.chat_id,
                "text": text,
                "parse_mode": "Markdown",
            }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(NotifyError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl NotificationChannel for TelegramChannel {
    async fn send(&self, text: &str) -> Result<()> {
        self.check_credentials()?;

        let mut last_err = None;
        for attempt in 1..=MAX_ATTEMPTS {
            match self.send_once(text).await {
                Ok(()) => {
                    tracing::debug!(attempt, "Telegram message sent");
                    return Ok(());
                }
                Err(e) => {
                    if attempt < MAX_ATTEMPTS {
                        tracing::warn!(
                            attempt,
                            max_attempts = MAX_ATTEMPTS,
                            error = %e,
                            "Telegram send failed, retrying"
                        );
                        tokio::time::sleep(RETRY_DELAY).await;
                    } else {
                        tracing::error!(error = %e, "Telegram send failed after all attempts");
                    }
                    last_err = Some(e);
                }
            }
        }
        // last_err is always set when the loop falls through.
        Err(last_err.unwrap_or_else(|| NotifyError::InvalidConfig("no attempt made".to_string())))
    }

    fn channel_name(&self) -> &str {
        "telegram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NotificationChannel;

    #[tokio::test]
    async fn placeholder_credentials_fail_without_attempts() {
        let channel = TelegramChannel::new("token", "id");
        let err = channel.send("ciao").await.unwrap_err();
        assert!(matches!(err, NotifyError::InvalidConfig(_)));

        let channel = TelegramChannel::new("", "123456");
        assert!(channel.send("ciao").await.is_err());
    }
}

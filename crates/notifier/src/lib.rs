//! Telegram delivery.
//!
//! Every notification is one `sendMessage` call against the Bot API, aimed
//! at a single preconfigured chat. Delivery failures wrap into
//! [`CourierError::MessageNotSent`] so the control loop can classify them.

use std::time::Duration;

use courier_common::config::AppConfig;
use courier_common::error::CourierError;

/// Telegram notifier bound to one bot token and one chat.
pub struct TelegramNotifier {
    http: reqwest::Client,
    send_url: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            send_url: format!(
                "{}/bot{}/sendMessage",
                config.telegram_api_url.trim_end_matches('/'),
                config.telegram_token
            ),
            chat_id: config.telegram_chat_id.clone(),
        })
    }

    /// Send `text` to the configured chat. Success is silent apart from a
    /// debug-level observation.
    pub async fn send(&self, text: &str) -> Result<(), CourierError> {
        tracing::info!(chat_id = %self.chat_id, text, "Sending chat message");

        let response = self
            .http
            .post(&self.send_url)
            .json(&serde_json::json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .await
            .map_err(|e| self.not_sent(text, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(self.not_sent(text, format!("HTTP {status}: {detail}")));
        }

        tracing::debug!(chat_id = %self.chat_id, "Chat message delivered");
        Ok(())
    }

    fn not_sent(&self, text: &str, detail: String) -> CourierError {
        CourierError::MessageNotSent {
            chat_id: self.chat_id.clone(),
            text: text.to_string(),
            detail,
        }
    }
}

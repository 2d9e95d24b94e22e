//! Outbound Telegram notifications

use compact_str::CompactString;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error, instrument};

use crate::{
    config::AppConfig,
    result::{PollError, Result},
};

/// Sends plain-text messages to one fixed Telegram chat.
#[derive(Debug)]
pub struct TelegramNotifier {
    client: Client,
    api_url: CompactString,
    bot_token: CompactString,
    chat_id: CompactString,
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramNotifier {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(PollError::notification)?;

        Ok(Self {
            client,
            api_url: config.telegram_api_url.clone(),
            bot_token: config.telegram_token.clone(),
            chat_id: config.telegram_chat_id.clone(),
        })
    }

    /// Deliver one message to the configured chat.
    ///
    /// No retry here; the poll loop's fixed interval is the only retry
    /// mechanism.
    #[instrument(skip(self, text))]
    pub async fn send(&self, text: &str) -> Result<()> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.api_url.trim_end_matches('/'),
            self.bot_token
        );

        let response = self
            .client
            .post(&url)
            .json(&SendMessage {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "failed to send Telegram message");
                PollError::notification(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "Telegram rejected the message");
            return Err(PollError::notification(format!(
                "Telegram answered with HTTP {status}"
            )));
        }

        debug!(chat_id = %self.chat_id, text, "notification delivered");
        Ok(())
    }
}

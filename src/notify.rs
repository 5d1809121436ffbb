//! Notification delivery and message formats.

use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::config::TelegramConfig;
use crate::result::DocumentCandidate;
use crate::{Error, Result};

/// Sent when the season page lists no documents at all.
pub const EMPTY_LISTING_MESSAGE: &str = "No PDF documents available on the season page.";

/// Capability to deliver a UTF-8 text message.
pub trait Notifier {
    /// Deliver `text`. A rejected or undeliverable message is an error.
    fn send(&self, text: &str) -> Result<()>;
}

/// Sends messages through the Telegram Bot API `sendMessage` method.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    client: Client,
    endpoint: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &TelegramConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Notify(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/bot{}/sendMessage",
                config.api_base.trim_end_matches('/'),
                config.bot_token
            ),
            chat_id: config.chat_id.clone(),
        })
    }
}

impl Notifier for TelegramNotifier {
    // The endpoint embeds the bot token, keep it out of spans.
    #[instrument(skip_all, fields(chat_id = %self.chat_id), level = "debug")]
    fn send(&self, text: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("chat_id", self.chat_id.as_str()), ("text", text)])
            .send()
            .map_err(|e| Error::Notify(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::Notify(format!("Telegram returned {status}: {body}")));
        }

        debug!("message delivered");
        Ok(())
    }
}

/// Message announcing a newly observed document.
#[must_use]
pub fn document_message(document: &DocumentCandidate) -> String {
    format!(
        "New FIA document\nEvent: {}\n{}\n{}",
        document.event_name, document.title, document.url
    )
}

/// Best-effort report of a failed run.
#[must_use]
pub fn failure_message(error: &Error) -> String {
    format!("❌ Error: {error}")
}

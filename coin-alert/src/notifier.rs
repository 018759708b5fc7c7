use crate::config::TelegramConfig;
use crate::message::PROBE_MESSAGE;
use crate::types::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Sink for formatted alert messages
#[async_trait]
pub trait Notifier: Send + Sync {
    fn notifier_name(&self) -> String;

    /// Deliver one message. Only transport failures are errors.
    async fn send(&self, text: &str) -> Result<()>;

    /// Fixed message used to check that the destination is reachable
    async fn send_probe(&self) -> Result<()> {
        self.send(PROBE_MESSAGE).await
    }
}

/// Posts to the Telegram Bot API `sendMessage` method
pub struct TelegramNotifier {
    http: Client,
    cfg: TelegramConfig,
}

impl TelegramNotifier {
    pub fn new(cfg: TelegramConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_seconds))
            .build()?;
        Ok(Self { http, cfg })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.cfg.base_url.trim_end_matches('/'),
            self.cfg.token
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn notifier_name(&self) -> String {
        format!("Telegram (chat {})", self.cfg.chat_id)
    }

    async fn send(&self, text: &str) -> Result<()> {
        let form = [("chat_id", self.cfg.chat_id.as_str()), ("text", text)];
        let response = self.http.post(self.endpoint()).form(&form).send().await?;

        // Fire-and-forget: the status is reported, never acted on
        let status = response.status();
        if status.is_success() {
            debug!("Telegram accepted message ({} chars)", text.chars().count());
        } else {
            warn!("Telegram answered HTTP {} for sendMessage", status.as_u16());
        }

        info!("Sent message via {}", self.notifier_name());
        Ok(())
    }
}

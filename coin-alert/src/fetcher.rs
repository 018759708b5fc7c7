use crate::types::{FetchConfig, Result};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()?;

        Ok(Self { client, config })
    }

    /// Downloads the feed body. Transport errors and non-2xx statuses are
    /// returned to the caller as-is; nothing is retried.
    pub async fn fetch_feed(&self) -> Result<String> {
        let start_time = Instant::now();
        let url = &self.config.url;

        debug!("Fetching feed: {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let status = response.status();
        let content = response.text().await?;

        info!(
            "Fetched feed: {} ({} bytes, HTTP {}, {}ms)",
            url,
            content.len(),
            status.as_u16(),
            start_time.elapsed().as_millis()
        );

        Ok(content)
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }
}

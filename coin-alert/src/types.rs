pub use interfaces::defs::{Analysis, Coin, FeedEntry};
pub use interfaces::state::SentStore;

/// Feed pulled from the remote endpoint
pub const DEFAULT_FEED_URL: &str = "https://www.coindesk.com/arc/outboundfeeds/rss/";

/// Where sent links are kept between runs
pub const DEFAULT_STATE_FILE: &str = "sent.json";

/// Only the head of the feed is considered on each run
pub const MAX_ENTRIES: usize = 7;

/// Minimum importance that produces an alert
pub const IMPORTANCE_THRESHOLD: i64 = 4;

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub url: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            user_agent: "Coin-Alert/1.0".to_string(),
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug)]
pub struct ParsedFeed {
    pub title: Option<String>,
    pub entries: Vec<FeedEntry>,
}

/// Why a classifier response could not be turned into an [`Analysis`].
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("response is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("response is missing required fields: {0}")]
    Schema(#[source] serde_json::Error),

    #[error("model returned no text")]
    EmptyResponse,

    #[error("response holds no analysis")]
    NoAnalysis,
}

impl AnalysisError {
    /// Unusable output that costs only the current entry. Schema errors are
    /// not skippable and end the run.
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            AnalysisError::Parse(_) | AnalysisError::EmptyResponse | AnalysisError::NoAnalysis
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parse error: {0}")]
    FeedParse(String),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("State error: {0:#}")]
    State(anyhow::Error),
}

impl From<anyhow::Error> for AlertError {
    fn from(err: anyhow::Error) -> Self {
        AlertError::State(err)
    }
}

pub type Result<T> = std::result::Result<T, AlertError>;

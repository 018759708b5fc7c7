pub mod types;
pub mod config;
pub mod fetcher;
pub mod parser;
pub mod filter;
pub mod llm_adapter;
pub mod message;
pub mod notifier;
pub mod pipeline;
pub mod telemetry;

pub use types::*;
pub use config::AppConfig;
pub use fetcher::Fetcher;
pub use parser::FeedParser;
pub use llm_adapter::{Classifier, GeminiClassifier};
pub use notifier::{Notifier, TelegramNotifier};
pub use pipeline::{AlertPipeline, RunReport};

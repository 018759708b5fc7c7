#![allow(dead_code)]

use async_trait::async_trait;
use coin_alert::llm_adapter::{parse_analysis, AnalysisReply};
use coin_alert::types::{FeedEntry, Result};
use coin_alert::{Classifier, Notifier};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub fn entry(link: &str, title: &str, summary: &str) -> FeedEntry {
    FeedEntry {
        link: link.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
    }
}

pub fn analysis_json(coin: &str, importance: i64) -> String {
    format!(
        r#"{{"coin": "{}", "importance": {}, "reason": "test reason", "summary_korean": "테스트 요약"}}"#,
        coin, importance
    )
}

/// Answers with canned raw model output keyed by entry title, and remembers
/// which titles it was asked about.
#[derive(Clone, Default)]
pub struct ScriptedClassifier {
    responses: HashMap<String, String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, title: &str, raw: impl Into<String>) -> Self {
        self.responses.insert(title.to_string(), raw.into());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Classifier for ScriptedClassifier {
    fn adapter_name(&self) -> String {
        "Scripted classifier".to_string()
    }

    async fn classify(&self, text: &str) -> Result<AnalysisReply> {
        let title = text.lines().next().unwrap_or("").to_string();
        self.calls.lock().unwrap().push(title.clone());
        let raw = self
            .responses
            .get(&title)
            .cloned()
            .unwrap_or_else(|| "not json at all".to_string());
        Ok(parse_analysis(&raw)?)
    }
}

/// Collects messages instead of sending them
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub sent: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn notifier_name(&self) -> String {
        "Recording notifier".to_string()
    }

    async fn send(&self, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
<title>Crypto Wire</title>
<link>https://news.example.com/</link>
<description>Test feed</description>
<item>
<title>Bitcoin ETF approved by SEC</title>
<link>https://news.example.com/btc-etf</link>
<description>Spot bitcoin funds start trading today.</description>
</item>
<item>
<title>Gardening tips for spring</title>
<link>https://news.example.com/garden</link>
<description>Plant tomatoes early.</description>
</item>
<item>
<title>Dogecoin community meetup</title>
<link>https://news.example.com/doge-meetup</link>
<description>Fans gather in Austin.</description>
</item>
</channel>
</rss>"#;

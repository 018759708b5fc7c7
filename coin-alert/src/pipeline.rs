use crate::config::AppConfig;
use crate::fetcher::Fetcher;
use crate::filter::{contains_primary_keyword, matched_keywords};
use crate::llm_adapter::{Classifier, GeminiClassifier};
use crate::message::{format_alert, should_notify};
use crate::notifier::{Notifier, TelegramNotifier};
use crate::parser::FeedParser;
use crate::types::{AlertError, FeedEntry, Result, SentStore, MAX_ENTRIES};
use std::path::Path;
use tracing::{debug, info, warn};

/// What happened to each entry considered during one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub considered: usize,
    pub already_sent: usize,
    pub no_keyword: usize,
    pub unusable_analysis: usize,
    pub irrelevant: usize,
    pub below_threshold: usize,
    pub notified: usize,
    pub notified_links: Vec<String>,
}

/// Sequences filter, classifier and notifier over the head of the feed
pub struct AlertPipeline {
    classifier: Box<dyn Classifier>,
    notifier: Box<dyn Notifier>,
}

impl AlertPipeline {
    pub fn new(classifier: Box<dyn Classifier>, notifier: Box<dyn Notifier>) -> Self {
        info!(
            "Alert pipeline using {} -> {}",
            classifier.adapter_name(),
            notifier.notifier_name()
        );
        Self {
            classifier,
            notifier,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let classifier = GeminiClassifier::new(config.gemini.clone())?;
        let notifier = TelegramNotifier::new(config.telegram.clone())?;
        Ok(Self::new(Box::new(classifier), Box::new(notifier)))
    }

    /// Walks at most [`MAX_ENTRIES`] entries in feed order. A link is recorded
    /// in `store` only after its alert has been sent. The store is not saved
    /// here.
    pub async fn process(&self, entries: &[FeedEntry], store: &mut SentStore) -> Result<RunReport> {
        let mut report = RunReport::default();

        for entry in entries.iter().take(MAX_ENTRIES) {
            report.considered += 1;

            if store.contains(&entry.link) {
                debug!("Already sent: {}", entry.link);
                report.already_sent += 1;
                continue;
            }

            let combined_text = entry.combined_text();

            if !contains_primary_keyword(&combined_text) {
                debug!("No primary keyword: {}", entry.link);
                report.no_keyword += 1;
                continue;
            }
            debug!(
                "Keywords {:?} matched, classifying: {}",
                matched_keywords(&combined_text),
                entry.link
            );

            let reply = match self.classifier.classify(&combined_text).await {
                Ok(reply) => reply,
                Err(AlertError::Analysis(e)) if e.is_skippable() => {
                    warn!("Unusable analysis for {}: {}", entry.link, e);
                    report.unusable_analysis += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            // Fields are decoded in the order they are needed
            let coin = reply.coin()?;
            if coin.is_none() {
                debug!("Classified as NONE: {}", entry.link);
                report.irrelevant += 1;
                continue;
            }

            let importance = reply.importance()?;
            if !should_notify(&coin, importance) {
                debug!(
                    "Importance {} below threshold for {} ({})",
                    importance, entry.link, coin
                );
                report.below_threshold += 1;
                continue;
            }

            let analysis = reply.into_analysis()?;
            let message = format_alert(&analysis, &entry.link);
            self.notifier.send(&message).await?;
            info!(
                "Alert sent for {} ({}, importance {})",
                entry.link, analysis.coin, analysis.importance
            );

            store.record(entry.link.clone());
            report.notified += 1;
            report.notified_links.push(entry.link.clone());
        }

        Ok(report)
    }

    /// One full run: fetch, load state, process, save state once.
    /// Any error returns before the save, leaving the previous file intact.
    pub async fn run(&self, fetcher: &Fetcher, state_path: &Path) -> Result<RunReport> {
        let content = fetcher.fetch_feed().await?;
        let feed = FeedParser::parse_feed(&content, MAX_ENTRIES)?;
        info!(
            "Feed {} has {} entries",
            feed.title.as_deref().unwrap_or(fetcher.url()),
            feed.entries.len()
        );

        let mut store = SentStore::load(state_path)?;
        let report = self.process(&feed.entries, &mut store).await?;
        store.save()?;

        info!(
            "Run finished: considered={} already_sent={} no_keyword={} unusable={} irrelevant={} below_threshold={} notified={}",
            report.considered,
            report.already_sent,
            report.no_keyword,
            report.unusable_analysis,
            report.irrelevant,
            report.below_threshold,
            report.notified
        );

        Ok(report)
    }

    pub async fn send_probe(&self) -> Result<()> {
        self.notifier.send_probe().await
    }
}

/// Builds every component from `config` and performs one run.
pub async fn run(config: &AppConfig) -> Result<RunReport> {
    let fetcher = Fetcher::new(config.feed.clone())?;
    let pipeline = AlertPipeline::from_config(config)?;
    pipeline.run(&fetcher, &config.state_path).await
}

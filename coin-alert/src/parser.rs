use crate::types::{AlertError, FeedEntry, ParsedFeed, Result};
use feed_rs::parser;
use tracing::{debug, info};

pub struct FeedParser;

impl FeedParser {
    /// Parses the first `limit` items of RSS or Atom content into entries,
    /// preserving feed order. Items dropped for lacking a link still count
    /// toward the limit.
    pub fn parse_feed(content: &str, limit: usize) -> Result<ParsedFeed> {
        debug!("Parsing feed content ({} bytes)", content.len());

        let feed = parser::parse(content.as_bytes())
            .map_err(|e| AlertError::FeedParse(format!("Failed to parse feed: {}", e)))?;

        let title = feed.title.map(|t| t.content);
        let entries: Vec<FeedEntry> = feed
            .entries
            .into_iter()
            .take(limit)
            .filter_map(Self::parse_entry)
            .collect();

        info!("Parsed feed with {} entries", entries.len());

        Ok(ParsedFeed { title, entries })
    }

    fn parse_entry(entry: feed_rs::model::Entry) -> Option<FeedEntry> {
        // Without a link there is nothing to dedupe on or point the reader at
        let link = match entry.links.first() {
            Some(link) => link.href.clone(),
            None => {
                debug!("Dropping entry without a link: {}", entry.id);
                return None;
            }
        };

        let title = entry.title.map(|t| t.content).unwrap_or_default();

        let summary = entry
            .summary
            .map(|s| s.content)
            .or_else(|| entry.content.and_then(|c| c.body))
            .unwrap_or_default();

        Some(FeedEntry {
            link,
            title,
            summary,
        })
    }
}

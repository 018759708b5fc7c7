use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;

/// Links that already produced a notification, persisted as a JSON array of
/// strings. Read once at the start of a run, written once at the end.
#[derive(Debug, Clone)]
pub struct SentStore {
    path: PathBuf,
    links: Vec<String>,
}

impl SentStore {
    /// Reads the backing file if it exists; a missing file is an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let links = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("reading sent links from {}", path.display()))?;
            serde_json::from_str::<Vec<String>>(&raw)
                .with_context(|| format!("decoding sent links in {}", path.display()))?
        } else {
            Vec::new()
        };
        Ok(Self { path, links })
    }

    /// Overwrites the backing file with the in-memory list.
    pub fn save(&self) -> Result<()> {
        let encoded = serde_json::to_string(&self.links)?;
        fs::write(&self.path, encoded)
            .with_context(|| format!("writing sent links to {}", self.path.display()))?;
        Ok(())
    }

    pub fn contains(&self, link: &str) -> bool {
        self.links.iter().any(|sent| sent == link)
    }

    pub fn record(&mut self, link: impl Into<String>) {
        self.links.push(link.into());
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// A single item taken from the syndication feed. The link doubles as the
/// item's identity across runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub link: String,
    pub title: String,
    pub summary: String,
}

impl FeedEntry {
    /// Text handed to both the keyword filter and the classifier.
    pub fn combined_text(&self) -> String {
        format!("{}\n{}", self.title, self.summary)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Coin {
    Btc,
    Doge,
    Both,
    None,
    // The model is free to answer with anything; keep what it said.
    Other(String),
}

impl Coin {
    pub fn as_str(&self) -> &str {
        match self {
            Coin::Btc => "BTC",
            Coin::Doge => "DOGE",
            Coin::Both => "BOTH",
            Coin::None => "NONE",
            Coin::Other(raw) => raw,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Coin::None)
    }
}

impl From<&str> for Coin {
    fn from(raw: &str) -> Self {
        match raw {
            "BTC" => Coin::Btc,
            "DOGE" => Coin::Doge,
            "BOTH" => Coin::Both,
            "NONE" => Coin::None,
            other => Coin::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Coin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Coin::from(raw.as_str()))
    }
}

impl Serialize for Coin {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Classifier verdict for one entry. Every field is required; a response
/// missing any of them does not deserialize.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub coin: Coin,
    pub importance: i64,
    pub reason: String,
    pub summary_korean: String,
}

// Object style note:
// The pipeline runs once per process and exits, so nothing here carries state
// between runs except the sent links kept by `state::SentStore`.

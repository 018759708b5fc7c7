use crate::config::GeminiConfig;
use crate::types::{Analysis, AnalysisError, Coin, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Trait for models that judge whether a news item matters to BTC/DOGE holders
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Get the name of this classifier
    fn adapter_name(&self) -> String;

    /// Classify combined entry text.
    ///
    /// Unusable model output comes back as `AlertError::Analysis`; callers
    /// decide from [`AnalysisError::is_skippable`] whether to move on.
    async fn classify(&self, text: &str) -> Result<AnalysisReply>;
}

pub fn build_prompt(text: &str) -> String {
    format!(
        r#"
You are a professional crypto analyst.

Analyze ONLY for Bitcoin (BTC) or Dogecoin (DOGE).

Return strictly in JSON format:

{{
  "coin": "BTC or DOGE or BOTH or NONE",
  "importance": 1-5,
  "reason": "short reason",
  "summary_korean": "translated summary in Korean"
}}

Rules:
- Importance 5 = market moving event (ETF approval, SEC action, Elon Musk impact, 5%+ price move)
- Importance 4 = strong investor relevance
- Importance 3 = moderate relevance
- Importance <=2 = ignore

News:
{text}
"#
    )
}

/// Removes markdown fences the model likes to wrap JSON in.
pub fn strip_code_fences(raw: &str) -> String {
    raw.trim().replace("```json", "").replace("```", "")
}

/// Decodes the reply as JSON without checking its shape. Fields are only
/// looked at through the [`AnalysisReply`] accessors.
pub fn parse_analysis(raw: &str) -> std::result::Result<AnalysisReply, AnalysisError> {
    let cleaned = strip_code_fences(raw);
    let value: Value = serde_json::from_str(cleaned.trim()).map_err(AnalysisError::Parse)?;
    if is_blank(&value) {
        return Err(AnalysisError::NoAnalysis);
    }
    Ok(AnalysisReply { value })
}

// null, false, zero and empty strings/arrays/objects carry no verdict
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// A classifier reply whose fields are decoded on first use, so a missing
/// `summary_korean` only matters once an alert is actually being written.
#[derive(Debug, Clone)]
pub struct AnalysisReply {
    value: Value,
}

impl AnalysisReply {
    fn field<T: DeserializeOwned>(&self, key: &'static str) -> std::result::Result<T, AnalysisError> {
        let object = self.value.as_object().ok_or_else(|| {
            AnalysisError::Schema(serde_json::Error::custom("analysis is not a JSON object"))
        })?;
        let field = object
            .get(key)
            .ok_or_else(|| AnalysisError::Schema(serde_json::Error::missing_field(key)))?;
        serde_json::from_value(field.clone()).map_err(AnalysisError::Schema)
    }

    pub fn coin(&self) -> std::result::Result<Coin, AnalysisError> {
        self.field("coin")
    }

    pub fn importance(&self) -> std::result::Result<i64, AnalysisError> {
        self.field("importance")
    }

    /// Full analysis; `reason` and `summary_korean` are required from here on.
    pub fn into_analysis(self) -> std::result::Result<Analysis, AnalysisError> {
        Ok(Analysis {
            coin: self.coin()?,
            importance: self.importance()?,
            reason: self.field("reason")?,
            summary_korean: self.field("summary_korean")?,
        })
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Classifier backed by the Gemini `generateContent` endpoint
pub struct GeminiClassifier {
    http: Client,
    cfg: GeminiConfig,
}

impl GeminiClassifier {
    pub fn new(cfg: GeminiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_seconds))
            .build()?;
        Ok(Self { http, cfg })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.cfg.base_url.trim_end_matches('/'),
            self.cfg.model
        )
    }

    /// Sends the prompt and returns the raw response text, if any.
    pub async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.cfg.api_key.as_str())])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let decoded: GenerateContentResponse = response.json().await?;
        Ok(decoded.text())
    }
}

#[async_trait]
impl Classifier for GeminiClassifier {
    fn adapter_name(&self) -> String {
        format!("Gemini ({})", self.cfg.model)
    }

    async fn classify(&self, text: &str) -> Result<AnalysisReply> {
        let prompt = build_prompt(text);
        let raw = self
            .generate(&prompt)
            .await?
            .ok_or(AnalysisError::EmptyResponse)?;

        debug!("Gemini raw response ({} bytes)", raw.len());

        Ok(parse_analysis(&raw)?)
    }
}

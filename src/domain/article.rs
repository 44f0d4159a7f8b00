use serde::{Deserialize, Deserializer, Serialize};

use super::sentiment::{SentimentLabel, SentimentScore};

/// Shown wherever a source name is missing.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// One analysed news article as delivered by the sentiment API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "string_or_null")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub url: String,
    #[serde(default)]
    pub source: Option<String>,
    /// Raw timestamp string, parsed only when displayed.
    #[serde(default)]
    pub published_at: Option<String>,
    pub sentiment: SentimentScore,
}

impl Article {
    pub fn new(title: impl Into<String>, url: impl Into<String>, sentiment: SentimentScore) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            source: None,
            published_at: None,
            sentiment,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_published_at(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = Some(published_at.into());
        self
    }

    /// Source name, falling back to "Unknown" when absent or blank.
    pub fn source_or_unknown(&self) -> &str {
        self.source
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(UNKNOWN_SOURCE)
    }
}

/// The full payload of `GET /api/sentiment/{symbol}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub symbol: String,
    pub overall_sentiment: SentimentLabel,
    pub overall_score: f64,
    pub total_articles: usize,
    #[serde(default)]
    pub articles: Vec<Article>,
    /// Server-side generation time, when the backend provides one.
    #[serde(default)]
    pub timestamp: Option<String>,
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

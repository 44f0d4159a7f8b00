use async_trait::async_trait;

use crate::data::source::SentimentSource;
use crate::domain::AnalysisResult;
use crate::error::DashboardError;

const DEMO_RESULT_JSON: &str = include_str!("demo_result.json");

/// Serves a bundled analysis, re-labelled with whatever symbol was asked for.
/// Lets the dashboard run without a backend.
pub struct DemoSentimentSource {
    template: AnalysisResult,
}

impl DemoSentimentSource {
    pub fn new() -> Result<Self, DashboardError> {
        let template = serde_json::from_str(DEMO_RESULT_JSON)
            .map_err(|e| DashboardError::Fetch(format!("Failed to decode bundled demo data: {}", e)))?;
        Ok(Self { template })
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl SentimentSource for DemoSentimentSource {
    fn signature(&self) -> &'static str {
        "Bundled Demo Data"
    }

    async fn fetch_analysis(&self, symbol: &str) -> Result<AnalysisResult, DashboardError> {
        let mut result = self.template.clone();
        result.symbol = symbol.to_string();
        result.total_articles = result.articles.len();
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SentimentLabel;

    #[tokio::test]
    async fn demo_result_is_relabelled() {
        let source = DemoSentimentSource::new().unwrap();
        let result = source.fetch_analysis("MSFT").await.unwrap();
        assert_eq!(result.symbol, "MSFT");
        assert_eq!(result.total_articles, result.articles.len());
        assert_eq!(result.overall_sentiment, SentimentLabel::Positive);
    }

    #[tokio::test]
    async fn demo_result_covers_every_label_and_missing_fields() {
        let source = DemoSentimentSource::new().unwrap();
        let result = source.fetch_analysis("DEMO").await.unwrap();
        for label in SentimentLabel::CHARTED {
            assert!(result.articles.iter().any(|a| a.sentiment.label == label));
        }
        assert!(result.articles.iter().any(|a| a.source.is_none()));
        assert!(result.articles.iter().any(|a| a.published_at.is_none()));
    }
}

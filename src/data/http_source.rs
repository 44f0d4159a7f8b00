use async_trait::async_trait;
use reqwest::Client;

use crate::data::source::{SentimentSource, decode_response, endpoint_url};
use crate::domain::AnalysisResult;
use crate::error::DashboardError;

/// Talks to the real backend over HTTP.
pub struct HttpSentimentSource {
    base_url: String,
    client: Client,
}

impl HttpSentimentSource {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, DashboardError> {
        let base_url = base_url.into();
        // Validate early so a bad --api-base shows up at start-up, not on first click.
        endpoint_url(&base_url, "PING")?;

        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| DashboardError::Fetch(e.to_string()))?;

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = timeout_secs; // the browser owns request timeouts
            Client::new()
        };

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl SentimentSource for HttpSentimentSource {
    fn signature(&self) -> &'static str {
        "Sentiment API"
    }

    async fn fetch_analysis(&self, symbol: &str) -> Result<AnalysisResult, DashboardError> {
        let url = endpoint_url(&self.base_url, symbol)?;
        log::info!("Fetching sentiment for {} from {}", symbol, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DashboardError::Fetch(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::Fetch(e.to_string()))?;

        decode_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unusable_base_url_up_front() {
        assert!(HttpSentimentSource::new("mailto:someone@example.com", 5).is_err());
        assert!(HttpSentimentSource::new("::::", 5).is_err());
    }

    #[test]
    fn keeps_base_url() {
        let source = HttpSentimentSource::new("http://127.0.0.1:5001", 5).unwrap();
        assert_eq!(source.base_url(), "http://127.0.0.1:5001");
        assert_eq!(source.signature(), "Sentiment API");
    }
}

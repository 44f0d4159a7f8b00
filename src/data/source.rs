use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use crate::config::API;
use crate::domain::AnalysisResult;
use crate::error::{DashboardError, GENERIC_API_ERROR};

/// Anything that can produce an analysis for a (normalised) symbol.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait SentimentSource: Send + Sync {
    async fn fetch_analysis(&self, symbol: &str) -> Result<AnalysisResult, DashboardError>;

    /// A unique identifier for this implementation (for logs).
    fn signature(&self) -> &'static str;
}

/// Body of a non-success response.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// `{base}/api/sentiment/{symbol}`, with the symbol percent-encoded as a single segment.
pub fn endpoint_url(base_url: &str, symbol: &str) -> Result<Url, DashboardError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| DashboardError::Fetch(format!("Invalid API base URL '{}': {}", base_url, e)))?;
    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            DashboardError::Fetch(format!("API base URL '{}' cannot take a path", base_url))
        })?;
        segments.pop_if_empty();
        segments.extend(API.sentiment_path);
        segments.push(symbol);
    }
    Ok(url)
}

/// Turn a status code and raw body into a result.
///
/// Success bodies that don't decode are fetch errors. Failure bodies surface
/// their `error` field verbatim, or the generic message when there is none
/// (including bodies that aren't JSON at all, e.g. proxy error pages).
pub fn decode_response(status: u16, body: &str) -> Result<AnalysisResult, DashboardError> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<AnalysisResult>(body)
            .map_err(|e| DashboardError::Fetch(format!("Invalid response from server: {}", e)));
    }

    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| GENERIC_API_ERROR.to_string());

    log::warn!("Sentiment API returned HTTP {}: {}", status, message);
    Err(DashboardError::Api(message))
}

//! Sentiment API configuration constants.

/// Defaults for talking to the sentiment backend
pub struct ApiConfig {
    /// Where the backend listens when nothing else is configured (Flask dev port)
    pub default_base_url: &'static str,
    /// Path prefix; the symbol is appended as the final segment
    pub sentiment_path: &'static [&'static str],
    /// Environment variable that overrides the base URL
    pub base_url_env: &'static str,
    pub timeout_secs: u64,
}

pub const API: ApiConfig = ApiConfig {
    default_base_url: "http://127.0.0.1:5001",
    sentiment_path: &["api", "sentiment"],
    base_url_env: "SENTIMENT_API_BASE",
    timeout_secs: 60,
};

#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod models;
pub mod ui;
pub mod utils;

use std::sync::Arc;

// Re-export commonly used types
pub use data::{DemoSentimentSource, HttpSentimentSource, SentimentSource};
pub use domain::{AnalysisResult, Article, SentimentLabel, SentimentScore};
pub use error::{DashboardError, RenderError};
pub use models::{ProjectedPoint, ResultProjector};
pub use ui::{ChartMode, DashboardSettings, SentimentDashboardApp};

// CLI argument parsing
use clap::Parser;

use crate::config::API;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the sentiment API
    #[arg(long, env = API.base_url_env, default_value = API.default_base_url)]
    pub api_base: String,

    /// Symbol to analyze on start-up
    #[arg(long)]
    pub symbol: Option<String>,

    /// Initial chart view
    #[arg(long, value_enum, default_value_t = ChartMode::Scatter)]
    pub chart_mode: ChartMode,

    /// Serve bundled sample data instead of calling the API
    #[arg(long, default_value_t = false)]
    pub demo: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = API.timeout_secs)]
    pub timeout_secs: u64,
}

impl Cli {
    pub fn settings(&self) -> DashboardSettings {
        DashboardSettings {
            initial_symbol: self.symbol.clone(),
            chart_mode: self.chart_mode,
        }
    }
}

/// Pick where analyses come from.
pub fn create_source(
    api_base: &str,
    demo: bool,
    timeout_secs: u64,
) -> Result<Arc<dyn SentimentSource>, DashboardError> {
    if demo {
        return Ok(Arc::new(DemoSentimentSource::new()?));
    }
    Ok(Arc::new(HttpSentimentSource::new(api_base, timeout_secs)?))
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    settings: DashboardSettings,
    source: Arc<dyn SentimentSource>,
) -> Result<Box<dyn eframe::App>, DashboardError> {
    log::info!("Using {}", source.signature());
    let app = SentimentDashboardApp::new(cc, settings, source)?;
    Ok(Box::new(app))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["sentiment-dashboard", "--api-base", "http://localhost:5001"])
            .unwrap();
        assert_eq!(cli.chart_mode, ChartMode::Scatter);
        assert!(!cli.demo);
        assert_eq!(cli.timeout_secs, 60);
        assert!(cli.settings().initial_symbol.is_none());
    }

    #[test]
    fn cli_flags() {
        let cli = Cli::try_parse_from([
            "sentiment-dashboard",
            "--api-base",
            "http://localhost:5001",
            "--symbol",
            "aapl",
            "--chart-mode",
            "distribution",
            "--demo",
        ])
        .unwrap();
        assert_eq!(cli.chart_mode, ChartMode::Distribution);
        assert!(cli.demo);
        assert_eq!(cli.settings().initial_symbol.as_deref(), Some("aapl"));
    }

    #[test]
    fn bad_base_url_is_rejected_up_front() {
        assert!(create_source("not a url", false, 5).is_err());
        assert!(create_source("not a url", true, 5).is_ok());
        assert_eq!(
            create_source("http://127.0.0.1:5001", false, 5).unwrap().signature(),
            "Sentiment API"
        );
    }
}

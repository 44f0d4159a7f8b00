use poll_promise::Promise;
use std::sync::Arc;
use std::time::Duration;
use web_time::Instant;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::SentimentSource;
use crate::domain::{AnalysisResult, normalize_symbol};
use crate::error::DashboardError;
use crate::ui::app::SentimentDashboardApp;
use crate::ui::app_state::Phase;

/// What a background fetch hands back to the UI thread.
pub struct FetchOutcome {
    pub token: u64,
    pub symbol: String,
    pub result: Result<AnalysisResult, DashboardError>,
    elapsed: Duration,
}

impl FetchOutcome {
    pub fn new(
        token: u64,
        symbol: impl Into<String>,
        result: Result<AnalysisResult, DashboardError>,
        elapsed: Duration,
    ) -> Self {
        Self {
            token,
            symbol: symbol.into(),
            result,
            elapsed,
        }
    }

    pub fn elapsed_time(&self) -> Duration {
        self.elapsed
    }
}

/// Hands out monotonically increasing request tokens. Only the newest token's
/// response is ever applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        token != 0 && token == self.latest
    }
}

pub(super) struct PendingRequest {
    pub(super) token: u64,
    pub(super) promise: Promise<FetchOutcome>,
}

impl SentimentDashboardApp {
    /// Validate the input and kick off a fetch. An empty symbol fails straight
    /// away without touching the network.
    pub fn start_analysis(&mut self) {
        let symbol = match normalize_symbol(&self.symbol_input) {
            Ok(symbol) => symbol,
            Err(err) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("Rejected submission: {}", err);
                }
                // A rejected submission still replaces whatever was in flight
                if self.pending.is_some() {
                    let token = self.tracker.issue();
                    self.abandon_pending(token);
                }
                self.phase = Phase::Failed(err);
                return;
            }
        };

        let token = self.tracker.issue();
        self.abandon_pending(token);

        log::info!(
            "Analyzing {} via {} (request #{})",
            symbol,
            self.source.signature(),
            token
        );

        let promise = spawn_fetch(Arc::clone(&self.source), token, symbol.clone());
        self.pending = Some(PendingRequest { token, promise });
        self.phase = Phase::Loading { symbol, token };
    }

    /// Drop the in-flight fetch, if any. Its result can no longer reach us.
    #[cfg_attr(not(debug_assertions), allow(unused_variables))]
    fn abandon_pending(&mut self, superseded_by: u64) {
        if let Some(previous) = self.pending.take() {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_request_tokens {
                log::info!("Request #{} superseded by #{}", previous.token, superseded_by);
            }
            drop(previous);
        }
    }

    /// Check on the in-flight fetch. Returns true while one is still running.
    pub fn poll_analysis(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };

        match pending.promise.try_take() {
            Ok(outcome) => {
                self.apply_outcome(outcome);
                false
            }
            Err(promise) => {
                self.pending = Some(PendingRequest {
                    token: pending.token,
                    promise,
                });
                true
            }
        }
    }

    /// Apply a finished fetch, unless a newer submission has replaced it.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if !self.tracker.is_current(outcome.token) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_request_tokens {
                log::info!(
                    "Discarding stale response #{} for {} (latest is #{})",
                    outcome.token,
                    outcome.symbol,
                    self.tracker.latest()
                );
            }
            return;
        }

        let elapsed = outcome.elapsed_time();
        match outcome.result {
            Ok(result) => {
                log::info!(
                    "✅ {} analyzed in {:.2}s ({} articles)",
                    result.symbol,
                    elapsed.as_secs_f32(),
                    result.articles.len()
                );

                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_payloads {
                    log::info!("Payload: {:#?}", result);
                }

                self.view
                    .display(result, &mut self.projector, self.chart_mode);
                self.phase = Phase::Ready;
            }
            Err(err) => {
                log::error!(
                    "❌ Analysis of {} failed after {:.2}s: {}",
                    outcome.symbol,
                    elapsed.as_secs_f32(),
                    err
                );
                self.phase = Phase::Failed(err);
            }
        }
    }

    pub fn is_analyzing(&self) -> bool {
        self.pending.is_some()
    }
}

async fn run_fetch(source: Arc<dyn SentimentSource>, token: u64, symbol: String) -> FetchOutcome {
    let started = Instant::now();
    let result = source.fetch_analysis(&symbol).await;
    FetchOutcome::new(token, symbol, result, started.elapsed())
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_fetch(
    source: Arc<dyn SentimentSource>,
    token: u64,
    symbol: String,
) -> Promise<FetchOutcome> {
    Promise::spawn_thread("sentiment_fetch", move || {
        match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime.block_on(run_fetch(source, token, symbol)),
            Err(e) => FetchOutcome::new(
                token,
                symbol,
                Err(DashboardError::Fetch(format!("Failed to start runtime: {}", e))),
                Duration::ZERO,
            ),
        }
    })
}

#[cfg(target_arch = "wasm32")]
fn spawn_fetch(
    source: Arc<dyn SentimentSource>,
    token: u64,
    symbol: String,
) -> Promise<FetchOutcome> {
    Promise::spawn_local(run_fetch(source, token, symbol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DemoSentimentSource;
    use crate::ui::app::DashboardSettings;
    use async_trait::async_trait;

    struct FailingSource;

    #[async_trait]
    impl SentimentSource for FailingSource {
        fn signature(&self) -> &'static str {
            "Failing"
        }

        async fn fetch_analysis(&self, _symbol: &str) -> Result<AnalysisResult, DashboardError> {
            Err(DashboardError::Api("No news found".into()))
        }
    }

    fn demo_app() -> SentimentDashboardApp {
        let source = DemoSentimentSource::new().unwrap();
        SentimentDashboardApp::with_source(DashboardSettings::default(), Arc::new(source)).unwrap()
    }

    fn wait_for(app: &mut SentimentDashboardApp) {
        let deadline = std::time::Instant::now() + Duration::from_secs(10);
        while app.poll_analysis() {
            assert!(std::time::Instant::now() < deadline, "fetch never finished");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn tokens_increase_and_only_latest_is_current() {
        let mut tracker = RequestTracker::default();
        assert!(!tracker.is_current(0));
        let first = tracker.issue();
        let second = tracker.issue();
        assert!(second > first);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn empty_symbol_fails_without_request() {
        let mut app = demo_app();
        app.symbol_input = "   ".into();
        app.start_analysis();
        assert!(!app.is_analyzing());
        assert_eq!(app.tracker.latest(), 0);
        assert_eq!(
            app.phase,
            Phase::Failed(DashboardError::Input("Please enter a stock symbol".into()))
        );
    }

    #[test]
    fn demo_fetch_reaches_ready() {
        let mut app = demo_app();
        app.symbol_input = " msft ".into();
        app.start_analysis();
        assert!(app.phase.is_loading());
        assert!(app.phase.regions().loading);

        wait_for(&mut app);
        assert_eq!(app.phase, Phase::Ready);
        let analysis = app.view.analysis().unwrap();
        assert_eq!(analysis.result.symbol, "MSFT");
        assert_eq!(analysis.points.len(), analysis.result.articles.len());
    }

    #[test]
    fn api_error_lands_in_error_region() {
        let mut app =
            SentimentDashboardApp::with_source(DashboardSettings::default(), Arc::new(FailingSource))
                .unwrap();
        app.symbol_input = "ZZZZ".into();
        app.start_analysis();
        wait_for(&mut app);
        assert_eq!(app.phase.regions().error.as_deref(), Some("No news found"));
        assert!(app.view.analysis().is_none());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut app = demo_app();
        let stale = app.tracker.issue();
        let latest = app.tracker.issue();
        app.phase = Phase::Loading {
            symbol: "AAPL".into(),
            token: latest,
        };

        app.apply_outcome(FetchOutcome::new(
            stale,
            "TSLA",
            Err(DashboardError::Fetch("late".into())),
            Duration::ZERO,
        ));
        assert!(app.phase.is_loading());
    }

    #[test]
    fn empty_submission_replaces_pending_request() {
        let mut app = demo_app();
        app.symbol_input = "AAPL".into();
        app.start_analysis();
        app.symbol_input = "  ".into();
        app.start_analysis();

        let input_error = Phase::Failed(DashboardError::Input("Please enter a stock symbol".into()));
        assert_eq!(app.phase, input_error);
        assert!(!app.is_analyzing());
        assert!(!app.phase.regions().loading);
        assert_eq!(app.tracker.latest(), 2);

        wait_for(&mut app);
        std::thread::sleep(Duration::from_millis(50));
        assert!(!app.poll_analysis());
        assert_eq!(app.phase, input_error);
        assert!(app.view.analysis().is_none());
    }

    #[test]
    fn late_outcome_after_rejected_submission_is_stale() {
        let mut app = demo_app();
        app.symbol_input = "AAPL".into();
        app.start_analysis();
        let first = app.tracker.latest();
        app.symbol_input = String::new();
        app.start_analysis();

        app.apply_outcome(FetchOutcome::new(
            first,
            "AAPL",
            Err(DashboardError::Fetch("late".into())),
            Duration::ZERO,
        ));
        assert!(matches!(app.phase, Phase::Failed(DashboardError::Input(_))));
    }

    #[test]
    fn resubmitting_supersedes_pending_request() {
        let mut app = demo_app();
        app.symbol_input = "AAPL".into();
        app.start_analysis();
        app.symbol_input = "NVDA".into();
        app.start_analysis();
        assert_eq!(app.tracker.latest(), 2);

        wait_for(&mut app);
        assert_eq!(app.view.analysis().unwrap().result.symbol, "NVDA");
        assert_eq!(app.view.chart().surface().live_instances(), 1);
    }
}

use eframe::{Frame, egui};
use rand::rngs::StdRng;
use std::sync::Arc;
use web_time::Instant;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::SentimentSource;
use crate::error::DashboardError;
use crate::models::{RandomJitter, ResultProjector};
use crate::ui::app_async::{PendingRequest, RequestTracker};
use crate::ui::app_state::{DashboardView, Phase};
use crate::ui::surface::SurfaceRegistry;
use crate::ui::ui_plot_view::ChartMode;
use crate::ui::utils::setup_custom_visuals;

/// Start-up choices coming from the command line (or the page, on wasm).
#[derive(Debug, Clone, Default)]
pub struct DashboardSettings {
    /// Analyzed as soon as the app opens.
    pub initial_symbol: Option<String>,
    pub chart_mode: ChartMode,
}

pub struct SentimentDashboardApp {
    // UI state
    pub(super) symbol_input: String,
    pub(super) chart_mode: ChartMode,
    pub(super) focus_pending: bool,
    pub(super) copied_at: Option<Instant>,

    // Pipeline
    pub(super) source: Arc<dyn SentimentSource>,
    pub(super) projector: ResultProjector<RandomJitter<StdRng>>,
    pub(super) view: DashboardView,
    pub(super) phase: Phase,

    // In-flight fetch
    pub(super) pending: Option<PendingRequest>,
    pub(super) tracker: RequestTracker,
}

impl SentimentDashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: DashboardSettings,
        source: Arc<dyn SentimentSource>,
    ) -> Result<Self, DashboardError> {
        setup_custom_visuals(&cc.egui_ctx);
        Self::with_source(settings, source)
    }

    /// Build the app without a window. Surfaces are bound here, so a broken
    /// layout fails before the first frame.
    pub fn with_source(
        settings: DashboardSettings,
        source: Arc<dyn SentimentSource>,
    ) -> Result<Self, DashboardError> {
        let view = DashboardView::bind(&SurfaceRegistry::dashboard())?;

        let mut app = Self {
            symbol_input: settings.initial_symbol.clone().unwrap_or_default(),
            chart_mode: settings.chart_mode,
            focus_pending: true,
            copied_at: None,
            source,
            projector: ResultProjector::new(RandomJitter::from_entropy()),
            view,
            phase: Phase::Idle,
            pending: None,
            tracker: RequestTracker::default(),
        };

        if settings.initial_symbol.is_some() {
            app.start_analysis();
        }
        Ok(app)
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub(super) fn set_chart_mode(&mut self, mode: ChartMode) {
        if self.chart_mode == mode {
            return;
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Chart mode: {} -> {}", self.chart_mode, mode);
        }

        self.chart_mode = mode;
        self.view.switch_chart_mode(mode);
    }
}

impl eframe::App for SentimentDashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Abandon any fetch still running
        self.pending = None;
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if self.poll_analysis() {
            ctx.request_repaint();
        }

        self.render_input_panel(ctx);
        if matches!(self.phase, Phase::Ready) {
            self.render_article_panel(ctx);
        }
        self.render_central_panel(ctx);
    }
}

use crate::domain::AnalysisResult;
use crate::error::DashboardError;
use crate::models::{Jitter, ProjectedPoint, ResultProjector};
use crate::ui::article_list::ArticleListRenderer;
use crate::ui::config::UI_CONFIG;
use crate::ui::surface::{ListSurface, SurfaceRegistry};
use crate::ui::ui_plot_view::{ChartMode, ChartRenderer};

/// Where the dashboard is in the submit/fetch/display cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        symbol: String,
        token: u64,
    },
    Ready,
    Failed(DashboardError),
}

/// Which of the three regions are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions {
    pub loading: bool,
    pub results: bool,
    pub error: Option<String>,
}

impl Phase {
    pub fn regions(&self) -> Regions {
        match self {
            Phase::Idle => Regions {
                loading: false,
                results: false,
                error: None,
            },
            Phase::Loading { .. } => Regions {
                loading: true,
                results: false,
                error: None,
            },
            Phase::Ready => Regions {
                loading: false,
                results: true,
                error: None,
            },
            Phase::Failed(err) => Regions {
                loading: false,
                results: false,
                error: Some(err.to_string()),
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading { .. })
    }
}

/// The result currently on screen and the points it was drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub result: AnalysisResult,
    pub points: Vec<ProjectedPoint>,
}

/// Renderers bound to their surfaces, plus what they are showing.
pub struct DashboardView {
    chart: ChartRenderer,
    list: ListSurface,
    list_renderer: ArticleListRenderer,
    analysis: Option<AnalysisView>,
}

impl DashboardView {
    /// Resolve both surfaces up front. A missing one is a fatal render error.
    pub fn bind(registry: &SurfaceRegistry) -> Result<Self, DashboardError> {
        let chart = ChartRenderer::new(registry.chart_surface(UI_CONFIG.surfaces.chart)?);
        let list = registry.list_surface(UI_CONFIG.surfaces.articles)?;
        Ok(Self {
            chart,
            list,
            list_renderer: ArticleListRenderer,
            analysis: None,
        })
    }

    /// Project once, then feed the same points to both the chart and the list.
    pub fn display<J: Jitter>(
        &mut self,
        result: AnalysisResult,
        projector: &mut ResultProjector<J>,
        mode: ChartMode,
    ) {
        let points = projector.project(&result.articles);
        self.chart.render(mode, &points);
        self.list_renderer
            .render(&mut self.list, &result.articles, Some(&points));
        self.analysis = Some(AnalysisView { result, points });
    }

    /// Redraw the chart in another mode from the points already projected.
    pub fn switch_chart_mode(&mut self, mode: ChartMode) {
        if let Some(analysis) = &self.analysis {
            self.chart.render(mode, &analysis.points);
        }
    }

    pub fn analysis(&self) -> Option<&AnalysisView> {
        self.analysis.as_ref()
    }

    pub fn chart(&self) -> &ChartRenderer {
        &self.chart
    }

    pub fn list(&self) -> &ListSurface {
        &self.list
    }
}

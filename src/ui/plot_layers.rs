use eframe::egui::Stroke;
use egui_plot::{HLine, MarkerShape, PlotPoints, PlotUi, Points, Polygon};

use crate::config::CHART_CONFIG;
use crate::models::ProjectedPoint;
use crate::ui::config::UI_TEXT;
use crate::ui::ui_plot_view::{ChartData, ScatterData};
use crate::utils::html_to_color32;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub data: &'a ChartData,
}

impl<'a> LayerContext<'a> {
    fn scatter(&self) -> Option<&'a ScatterData> {
        match self.data {
            ChartData::Scatter(scatter) => Some(scatter),
            ChartData::Distribution(_) => None,
        }
    }
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. ZERO LINE
// ============================================================================
pub struct ZeroLineLayer;

impl PlotLayer for ZeroLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.scatter().is_none() {
            return;
        }
        plot_ui.hline(
            HLine::new(UI_TEXT.zero_line, 0.0)
                .color(CHART_CONFIG.zero_line_color)
                .width(CHART_CONFIG.zero_line_width),
        );
    }
}

// ============================================================================
// 2. ARTICLE POINTS (one series per label)
// ============================================================================
pub struct ScatterSeriesLayer;

impl PlotLayer for ScatterSeriesLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(scatter) = ctx.scatter() else {
            return;
        };

        for series in &scatter.series {
            // Empty series still register so the legend always lists all three
            let points: Vec<[f64; 2]> = series.points.iter().map(ProjectedPoint::xy).collect();
            plot_ui.points(
                Points::new(&series.name, PlotPoints::new(points))
                    .color(html_to_color32(series.label.hex_color()))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(CHART_CONFIG.point_radius),
            );
        }
    }
}

// ============================================================================
// 3. HOVER HIGHLIGHT
// ============================================================================
pub struct HoverHighlightLayer;

impl PlotLayer for HoverHighlightLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(scatter) = ctx.scatter() else {
            return;
        };
        let Some(pointer) = plot_ui.pointer_coordinate() else {
            return;
        };

        // Manual hit test in screen space
        let pointer_pos = plot_ui.screen_from_plot(pointer);
        let reach = CHART_CONFIG.point_hover_radius * 1.5;
        let hovered = scatter
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(move |p| (s, p)))
            .map(|(s, p)| {
                let pos = plot_ui.screen_from_plot(egui_plot::PlotPoint::new(p.x(), p.y_value));
                (s, p, pos.distance(pointer_pos))
            })
            .filter(|(_, _, d)| *d <= reach)
            .min_by(|a, b| a.2.total_cmp(&b.2));

        if let Some((series, point, _)) = hovered {
            let color = html_to_color32(series.label.hex_color());
            plot_ui.points(
                Points::new(&series.name, PlotPoints::new(vec![point.xy()]))
                    .color(color)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(CHART_CONFIG.point_hover_radius),
            );
        }
    }
}

// ============================================================================
// 4. PIE (distribution mode)
// ============================================================================
pub struct PieLayer;

impl PlotLayer for PieLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let ChartData::Distribution(distribution) = ctx.data else {
            return;
        };

        for wedge in &distribution.wedges {
            let name = wedge.label.to_string();
            let color = html_to_color32(wedge.label.hex_color());
            for chunk in &wedge.chunks {
                // Same name across chunks groups them under one legend entry
                plot_ui.polygon(
                    Polygon::new(&name, PlotPoints::new(chunk.clone()))
                        .fill_color(color)
                        .stroke(Stroke::NONE),
                );
            }
        }
    }
}

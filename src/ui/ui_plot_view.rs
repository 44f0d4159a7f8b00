use eframe::egui::{self, RichText};
use egui_plot::{AxisHints, Corner, GridInput, GridMark, HPlacement, Legend, Plot, PlotPoint};
use strum_macros::{Display, EnumIter};

use crate::config::CHART_CONFIG;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::SentimentLabel;
use crate::models::{DistributionSlice, ProjectedPoint, label_distribution};
use crate::ui::config::UI_TEXT;
use crate::ui::plot_layers::{
    HoverHighlightLayer, LayerContext, PieLayer, PlotLayer, ScatterSeriesLayer, ZeroLineLayer,
};
use crate::ui::styles::UiStyleExt;
use crate::ui::surface::{ChartSurface, SurfaceLease};
use crate::utils::html_to_color32;

/// How the projected articles are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, clap::ValueEnum)]
pub enum ChartMode {
    /// One point per article, signed confidence on y.
    #[default]
    Scatter,
    /// Share of each label as a pie.
    Distribution,
}

/// Band name for a y value on the scatter axis.
pub fn band_label(value: f64) -> &'static str {
    let strong = CHART_CONFIG.strong_band;
    let mild = CHART_CONFIG.mild_band;
    if value >= strong {
        UI_TEXT.band_strong_positive
    } else if value >= mild {
        UI_TEXT.band_positive
    } else if value >= -mild {
        UI_TEXT.band_neutral
    } else if value >= -strong {
        UI_TEXT.band_negative
    } else {
        UI_TEXT.band_strong_negative
    }
}

/// First `max_chars` characters of a title, with an ellipsis when something was cut.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    let mut chars = title.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// Hover text for one scatter point.
pub fn scatter_tooltip(point: &ProjectedPoint) -> String {
    format!(
        "Article {}\n{}: {}% confidence\nTitle: {}",
        point.index,
        point.label,
        (point.confidence * 100.0).round() as i64,
        truncate_title(&point.title, CHART_CONFIG.tooltip_title_chars)
    )
}

/// Legend name of the series a label is drawn in.
pub fn series_name(label: SentimentLabel) -> String {
    match label {
        SentimentLabel::Positive => "Positive Articles".to_string(),
        SentimentLabel::Negative => "Negative Articles".to_string(),
        SentimentLabel::Neutral => "Neutral Articles".to_string(),
        SentimentLabel::Unknown => "Unclassified Articles".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub label: SentimentLabel,
    pub name: String,
    pub points: Vec<ProjectedPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterData {
    /// Always POSITIVE, NEGATIVE, NEUTRAL (possibly empty).
    pub series: Vec<ScatterSeries>,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ScatterData {
    pub fn from_points(points: &[ProjectedPoint]) -> Self {
        let series = SentimentLabel::CHARTED
            .iter()
            .map(|&label| ScatterSeries {
                label,
                name: series_name(label),
                points: points.iter().filter(|p| p.label == label).cloned().collect(),
            })
            .collect();

        Self {
            series,
            x_min: 0.0,
            x_max: points.len() as f64 + 1.0,
            y_min: CHART_CONFIG.y_min,
            y_max: CHART_CONFIG.y_max,
        }
    }

    pub fn series_for(&self, label: SentimentLabel) -> Option<&ScatterSeries> {
        self.series.iter().find(|s| s.label == label)
    }

    /// The charted point drawn at `value`, if any.
    pub fn point_at(&self, value: &PlotPoint) -> Option<&ProjectedPoint> {
        let index = value.x.round();
        if index < 1.0 {
            return None;
        }
        self.series
            .iter()
            .flat_map(|s| s.points.iter())
            .find(|p| p.index as f64 == index && (p.y_value - value.y).abs() < 0.05)
    }
}

/// One label's share of the pie, split into convex chunks.
#[derive(Debug, Clone, PartialEq)]
pub struct PieWedge {
    pub label: SentimentLabel,
    /// Clockwise degrees from 12 o'clock.
    pub start_deg: f64,
    pub end_deg: f64,
    pub chunks: Vec<Vec<[f64; 2]>>,
}

impl PieWedge {
    fn contains_angle(&self, deg: f64) -> bool {
        deg >= self.start_deg && deg < self.end_deg
    }
}

fn arc_point(radius: f64, clockwise_deg: f64) -> [f64; 2] {
    let radians = (90.0 - clockwise_deg).to_radians();
    [radius * radians.cos(), radius * radians.sin()]
}

/// Lay the slices out clockwise from the top. Empty slices get no wedge.
pub fn pie_wedges(slices: &[DistributionSlice]) -> Vec<PieWedge> {
    let radius = CHART_CONFIG.pie_radius;
    let mut wedges = Vec::new();
    let mut cursor = 0.0_f64;

    for slice in slices.iter().filter(|s| s.count > 0) {
        let sweep = slice.fraction * 360.0;
        let start = cursor;
        let end = start + sweep;
        cursor = end;

        let chunk_count = (sweep / CHART_CONFIG.pie_max_chunk_degrees).ceil().max(1.0) as usize;
        let chunk_sweep = sweep / chunk_count as f64;
        let steps = ((chunk_sweep * CHART_CONFIG.pie_points_per_degree).ceil() as usize).max(2);

        let chunks = (0..chunk_count)
            .map(|c| {
                let chunk_start = start + chunk_sweep * c as f64;
                let mut polygon = Vec::with_capacity(steps + 2);
                polygon.push([0.0, 0.0]);
                for s in 0..=steps {
                    let deg = chunk_start + chunk_sweep * (s as f64 / steps as f64);
                    polygon.push(arc_point(radius, deg));
                }
                polygon
            })
            .collect();

        wedges.push(PieWedge {
            label: slice.label,
            start_deg: start,
            end_deg: end,
            chunks,
        });
    }
    wedges
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionData {
    pub slices: Vec<DistributionSlice>,
    pub wedges: Vec<PieWedge>,
}

impl DistributionData {
    pub fn from_points(points: &[ProjectedPoint]) -> Self {
        let slices = label_distribution(points);
        let wedges = pie_wedges(&slices);
        Self { slices, wedges }
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    /// The slice under a pie coordinate, if the coordinate is on the pie.
    pub fn slice_at(&self, value: &PlotPoint) -> Option<&DistributionSlice> {
        // Arc vertices sit exactly on the radius
        if value.x.hypot(value.y) > CHART_CONFIG.pie_radius + 1e-6 {
            return None;
        }
        let deg = (90.0 - value.y.atan2(value.x).to_degrees()).rem_euclid(360.0);
        let wedge = self.wedges.iter().find(|w| w.contains_angle(deg))?;
        self.slices.iter().find(|s| s.label == wedge.label)
    }
}

pub fn slice_tooltip(slice: &DistributionSlice) -> String {
    format!("{}: {} articles ({:.1}%)", slice.label, slice.count, slice.percent())
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    Scatter(ScatterData),
    Distribution(DistributionData),
}

impl ChartData {
    pub fn build(mode: ChartMode, points: &[ProjectedPoint]) -> Self {
        match mode {
            ChartMode::Scatter => ChartData::Scatter(ScatterData::from_points(points)),
            ChartMode::Distribution => {
                ChartData::Distribution(DistributionData::from_points(points))
            }
        }
    }
}

/// A live chart bound to a surface. Dropping it releases the surface.
#[derive(Debug)]
pub struct SentimentChart {
    lease: SurfaceLease,
    plot_id: String,
    mode: ChartMode,
    data: ChartData,
}

impl SentimentChart {
    fn create(surface: &ChartSurface, mode: ChartMode, points: &[ProjectedPoint]) -> Self {
        let lease = surface.acquire();
        // A fresh plot id per instance so egui keeps no bounds/hover state from the previous chart.
        let plot_id = format!("{}#{}", surface.id(), lease.generation());
        Self {
            lease,
            plot_id,
            mode,
            data: ChartData::build(mode, points),
        }
    }

    pub fn generation(&self) -> u64 {
        self.lease.generation()
    }

    pub fn mode(&self) -> ChartMode {
        self.mode
    }

    pub fn data(&self) -> &ChartData {
        &self.data
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        match &self.data {
            ChartData::Scatter(scatter) => self.show_scatter(ui, scatter),
            ChartData::Distribution(distribution) => self.show_distribution(ui, distribution),
        }
    }

    fn show_scatter(&self, ui: &mut egui::Ui, scatter: &ScatterData) {
        ui.label_subheader(UI_TEXT.chart_title);

        let tooltip_data = scatter.clone();
        Plot::new(&self.plot_id)
            .view_aspect(CHART_CONFIG.plot_aspect_ratio)
            .legend(Legend::default().position(Corner::LeftTop))
            .custom_x_axes(vec![create_x_axis()])
            .custom_y_axes(vec![create_y_axis()])
            .x_grid_spacer(unit_grid_spacer)
            .y_grid_spacer(band_grid_spacer)
            .label_formatter(move |_name, value| {
                tooltip_data
                    .point_at(value)
                    .map(scatter_tooltip)
                    .unwrap_or_default()
            })
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(scatter.x_min..=scatter.x_max);
                plot_ui.set_plot_bounds_y(scatter.y_min..=scatter.y_max);

                let ctx = LayerContext { data: &self.data };

                // Back to front
                let layers: Vec<Box<dyn PlotLayer>> = vec![
                    Box::new(ZeroLineLayer),
                    Box::new(ScatterSeriesLayer),
                    Box::new(HoverHighlightLayer),
                ];
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }

    fn show_distribution(&self, ui: &mut egui::Ui, distribution: &DistributionData) {
        ui.label_subheader(UI_TEXT.distribution_title);

        if distribution.total() == 0 {
            ui.label_subdued(UI_TEXT.no_articles);
            return;
        }

        let tooltip_data = distribution.clone();
        let extent = CHART_CONFIG.pie_radius * 1.15;
        Plot::new(&self.plot_id)
            .view_aspect(CHART_CONFIG.plot_aspect_ratio)
            .data_aspect(1.0)
            .legend(Legend::default().position(Corner::LeftTop))
            .show_axes(false)
            .show_grid(false)
            .label_formatter(move |_name, value| {
                tooltip_data
                    .slice_at(value)
                    .map(slice_tooltip)
                    .unwrap_or_default()
            })
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_y(-extent..=extent);
                PieLayer.render(plot_ui, &LayerContext { data: &self.data });
            });

        ui.horizontal_wrapped(|ui| {
            for slice in &distribution.slices {
                ui.label(
                    RichText::new(slice_tooltip(slice))
                        .small()
                        .color(html_to_color32(slice.label.hex_color())),
                );
            }
        });
    }
}

/// Owns the chart bound to one surface. At most one instance is alive at a time.
pub struct ChartRenderer {
    surface: ChartSurface,
    current: Option<SentimentChart>,
}

impl ChartRenderer {
    pub fn new(surface: ChartSurface) -> Self {
        Self {
            surface,
            current: None,
        }
    }

    pub fn surface(&self) -> &ChartSurface {
        &self.surface
    }

    pub fn current(&self) -> Option<&SentimentChart> {
        self.current.as_ref()
    }

    /// Destroy whatever is on the surface, then create the new chart.
    pub fn render(&mut self, mode: ChartMode, points: &[ProjectedPoint]) -> &SentimentChart {
        self.release();
        let chart = SentimentChart::create(&self.surface, mode, points);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_chart_lifecycle {
            log::info!(
                "Created {} chart #{} on '{}' ({} points)",
                mode,
                chart.generation(),
                self.surface.id(),
                points.len()
            );
        }

        self.current.insert(chart)
    }

    /// Destroy the current chart, if any.
    pub fn release(&mut self) {
        if let Some(chart) = self.current.take() {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_chart_lifecycle {
                log::info!("Destroying chart #{} on '{}'", chart.generation(), self.surface.id());
            }
            drop(chart);
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        if let Some(chart) = &self.current {
            chart.show(ui);
        }
    }
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(|grid_mark, _range| format!("{:.0}", grid_mark.value))
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis)
        .formatter(|grid_mark, _range| band_label(grid_mark.value).to_string())
        .placement(HPlacement::Left)
}

/// One mark per whole article number.
fn unit_grid_spacer(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let start = min.ceil().max(0.0) as i64;
    let end = max.floor() as i64;
    (start..=end)
        .map(|i| GridMark {
            value: i as f64,
            step_size: 1.0,
        })
        .collect()
}

/// One mark in the middle of each band, so every band is named once.
fn band_grid_spacer(_input: GridInput) -> Vec<GridMark> {
    let strong = CHART_CONFIG.strong_band;
    let mild = CHART_CONFIG.mild_band;
    let top = CHART_CONFIG.y_max;
    let strong_mid = (strong + top) / 2.0;
    let mild_mid = (mild + strong) / 2.0;

    [-strong_mid, -mild_mid, 0.0, mild_mid, strong_mid]
        .into_iter()
        .map(|value| GridMark {
            value,
            step_size: 0.5,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::surface::SurfaceRegistry;

    fn point(index: usize, label: SentimentLabel, y: f64, title: &str) -> ProjectedPoint {
        ProjectedPoint {
            index,
            y_value: y,
            label,
            confidence: y.abs(),
            title: title.to_string(),
        }
    }

    fn renderer() -> ChartRenderer {
        ChartRenderer::new(SurfaceRegistry::dashboard().chart_surface("sentimentChart").unwrap())
    }

    #[test]
    fn chart_modes_for_picker_and_flag() {
        use clap::ValueEnum;
        use strum::IntoEnumIterator;

        let names: Vec<_> = ChartMode::iter().map(|m| m.to_string()).collect();
        assert_eq!(names, vec!["Scatter", "Distribution"]);
        assert_eq!(ChartMode::default(), ChartMode::Scatter);
        assert_eq!(ChartMode::from_str("distribution", true), Ok(ChartMode::Distribution));
        assert!(ChartMode::from_str("pie", true).is_err());
    }

    #[test]
    fn band_boundaries_are_inclusive_upwards() {
        assert_eq!(band_label(-1.0), "Strong Negative");
        assert_eq!(band_label(-0.71), "Strong Negative");
        assert_eq!(band_label(-0.7), "Negative");
        assert_eq!(band_label(-0.31), "Negative");
        assert_eq!(band_label(-0.3), "Neutral");
        assert_eq!(band_label(0.0), "Neutral");
        assert_eq!(band_label(0.29), "Neutral");
        assert_eq!(band_label(0.3), "Positive");
        assert_eq!(band_label(0.69), "Positive");
        assert_eq!(band_label(0.7), "Strong Positive");
        assert_eq!(band_label(1.0), "Strong Positive");
    }

    #[test]
    fn titles_are_cut_at_fifty_characters() {
        let long = "x".repeat(60);
        assert_eq!(truncate_title(&long, 50), format!("{}...", "x".repeat(50)));
        assert_eq!(truncate_title("short", 50), "short");
        assert_eq!(truncate_title(&"é".repeat(51), 50), format!("{}...", "é".repeat(50)));
    }

    #[test]
    fn tooltip_lines() {
        let p = point(3, SentimentLabel::Negative, -0.666, "Regulator opens inquiry");
        assert_eq!(
            scatter_tooltip(&p),
            "Article 3\nNEGATIVE: 67% confidence\nTitle: Regulator opens inquiry"
        );
    }

    #[test]
    fn scatter_groups_points_by_label() {
        let points = vec![
            point(1, SentimentLabel::Positive, 0.9, "A"),
            point(2, SentimentLabel::Negative, -0.6, "B"),
            point(3, SentimentLabel::Neutral, 0.04, "C"),
            point(4, SentimentLabel::Unknown, 0.0, "D"),
        ];
        let data = ScatterData::from_points(&points);
        assert_eq!(data.series.len(), 3);
        assert_eq!(data.x_max, 5.0);
        assert_eq!((data.y_min, data.y_max), (-1.0, 1.0));

        let positive = data.series_for(SentimentLabel::Positive).unwrap();
        assert_eq!(positive.name, "Positive Articles");
        assert_eq!(positive.points.len(), 1);
        assert!(data.series_for(SentimentLabel::Unknown).is_none());
        let charted: usize = data.series.iter().map(|s| s.points.len()).sum();
        assert_eq!(charted, 3);
    }

    #[test]
    fn point_lookup_for_tooltips() {
        let data = ScatterData::from_points(&[
            point(1, SentimentLabel::Positive, 0.9, "A"),
            point(2, SentimentLabel::Negative, -0.6, "B"),
        ]);
        let hit = data.point_at(&PlotPoint::new(2.0, -0.6)).unwrap();
        assert_eq!(hit.title, "B");
        assert!(data.point_at(&PlotPoint::new(2.0, 0.6)).is_none());
        assert!(data.point_at(&PlotPoint::new(0.2, 0.9)).is_none());
    }

    #[test]
    fn pie_covers_full_circle_in_convex_chunks() {
        let points = vec![
            point(1, SentimentLabel::Positive, 0.9, "A"),
            point(2, SentimentLabel::Positive, 0.8, "B"),
            point(3, SentimentLabel::Positive, 0.7, "C"),
            point(4, SentimentLabel::Negative, -0.6, "D"),
        ];
        let data = DistributionData::from_points(&points);
        assert_eq!(data.total(), 4);
        // Neutral has no articles, so no wedge
        assert_eq!(data.wedges.len(), 2);

        let positive = &data.wedges[0];
        assert_eq!(positive.label, SentimentLabel::Positive);
        assert!((positive.end_deg - 270.0).abs() < 1e-9);
        assert_eq!(positive.chunks.len(), 3);
        assert!((data.wedges[1].end_deg - 360.0).abs() < 1e-9);
        for chunk in data.wedges.iter().flat_map(|w| &w.chunks) {
            assert_eq!(chunk[0], [0.0, 0.0]);
            assert!(chunk.len() >= 4);
        }
    }

    #[test]
    fn single_label_pie_is_four_quarters() {
        let data = DistributionData::from_points(&[point(1, SentimentLabel::Neutral, 0.0, "A")]);
        assert_eq!(data.wedges.len(), 1);
        assert_eq!(data.wedges[0].chunks.len(), 4);
    }

    #[test]
    fn slice_hit_testing() {
        let points = vec![
            point(1, SentimentLabel::Positive, 0.9, "A"),
            point(2, SentimentLabel::Negative, -0.6, "B"),
        ];
        let data = DistributionData::from_points(&points);
        // Positive runs clockwise from 12 to 6 o'clock: the right half.
        assert_eq!(data.slice_at(&PlotPoint::new(0.5, 0.1)).unwrap().label, SentimentLabel::Positive);
        assert_eq!(data.slice_at(&PlotPoint::new(-0.5, 0.1)).unwrap().label, SentimentLabel::Negative);
        assert!(data.slice_at(&PlotPoint::new(2.0, 0.0)).is_none());
        assert_eq!(
            slice_tooltip(&data.slices[0]),
            "POSITIVE: 1 articles (50.0%)"
        );
    }

    #[test]
    fn render_replaces_previous_chart() {
        let mut renderer = renderer();
        let points = vec![point(1, SentimentLabel::Positive, 0.9, "A")];

        assert_eq!(renderer.surface().live_instances(), 0);
        let first = renderer.render(ChartMode::Scatter, &points).generation();
        assert_eq!(renderer.surface().live_instances(), 1);

        for _ in 0..5 {
            renderer.render(ChartMode::Scatter, &points);
            assert_eq!(renderer.surface().live_instances(), 1);
        }
        let last = renderer.current().unwrap().generation();
        assert_eq!(last, first + 5);
        assert_eq!(renderer.surface().generations(), 6);
    }

    #[test]
    fn switching_mode_rebuilds_on_the_same_surface() {
        let mut renderer = renderer();
        let points = vec![point(1, SentimentLabel::Negative, -0.4, "A")];
        renderer.render(ChartMode::Scatter, &points);
        let chart = renderer.render(ChartMode::Distribution, &points);
        assert_eq!(chart.mode(), ChartMode::Distribution);
        assert!(matches!(chart.data(), ChartData::Distribution(_)));
        assert_eq!(renderer.surface().live_instances(), 1);
    }

    #[test]
    fn release_clears_the_surface() {
        let mut renderer = renderer();
        renderer.render(ChartMode::Scatter, &[]);
        renderer.release();
        assert!(renderer.current().is_none());
        assert_eq!(renderer.surface().live_instances(), 0);
        renderer.release();
        assert_eq!(renderer.surface().live_instances(), 0);
    }

    #[test]
    fn grid_marks() {
        let marks = band_grid_spacer(GridInput {
            bounds: (-1.0, 1.0),
            base_step_size: 0.1,
        });
        let labels: Vec<_> = marks.iter().map(|m| band_label(m.value)).collect();
        assert_eq!(
            labels,
            vec!["Strong Negative", "Negative", "Neutral", "Positive", "Strong Positive"]
        );

        let marks = unit_grid_spacer(GridInput {
            bounds: (0.0, 3.0),
            base_step_size: 1.0,
        });
        let values: Vec<_> = marks.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0]);
    }
}

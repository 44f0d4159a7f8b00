//! Chart visualization configuration

use eframe::egui::Color32;

pub struct ChartConfig {
    // Label colors, as HTML hex so the same values serve egui and the HTML list
    pub positive_color: &'static str,
    pub negative_color: &'static str,
    pub neutral_color: &'static str,
    pub unknown_color: &'static str,
    /// Half-width of the uniform band NEUTRAL articles are scattered into around zero
    pub neutral_jitter: f64,
    /// Fixed y range of the scatter view
    pub y_min: f64,
    pub y_max: f64,
    /// Band thresholds: |v| >= strong is "Strong ..", |v| >= mild is plain Positive/Negative
    pub strong_band: f64,
    pub mild_band: f64,
    pub point_radius: f32,
    pub point_hover_radius: f32,
    pub zero_line_color: Color32,
    pub zero_line_width: f32,
    /// Characters of the title shown in the tooltip before the ellipsis
    pub tooltip_title_chars: usize,
    /// Pie segments are split into chunks no wider than this, so each polygon stays convex
    pub pie_max_chunk_degrees: f64,
    /// Arc resolution of the pie (points per degree)
    pub pie_points_per_degree: f64,
    pub pie_radius: f64,
    pub plot_aspect_ratio: f32,
}

pub const CHART_CONFIG: ChartConfig = ChartConfig {
    positive_color: "#28a745", // Green
    negative_color: "#dc3545", // Red
    neutral_color: "#ffc107",  // Amber
    unknown_color: "#6c757d",  // Gray
    neutral_jitter: 0.1,
    y_min: -1.0,
    y_max: 1.0,
    strong_band: 0.7,
    mild_band: 0.3,
    point_radius: 6.0,
    point_hover_radius: 8.0,
    zero_line_color: Color32::from_rgb(235, 235, 235),
    zero_line_width: 2.0,
    tooltip_title_chars: 50,
    pie_max_chunk_degrees: 90.0,
    pie_points_per_degree: 0.5,
    pie_radius: 1.0,
    plot_aspect_ratio: 2.0,
};

use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub error_fill: Color32,
    pub error_text: Color32,
    pub card_fill: Color32,
}

/// Ids of the drawing surfaces the view binds to at start-up.
#[derive(Clone, Copy, Default)]
pub struct SurfaceIds {
    pub chart: &'static str,
    pub articles: &'static str,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub surfaces: SurfaceIds,
    pub symbol_input_width: f32,
    pub article_panel_default_width: f32,
    pub article_panel_min_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(30, 32, 38),
        side_panel: Color32::from_rgb(25, 25, 25),
        error_fill: Color32::from_rgb(80, 20, 24),
        error_text: Color32::from_rgb(255, 120, 120),
        card_fill: Color32::from_rgb(40, 42, 50),
    },
    surfaces: SurfaceIds {
        chart: "sentimentChart",
        articles: "articlesList",
    },
    symbol_input_width: 160.0,
    article_panel_default_width: 420.0,
    article_panel_min_width: 260.0,
};

/// Every user-visible string in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub symbol_hint: &'static str,
    pub analyze_button: &'static str,
    pub analyzing_button: &'static str,
    pub loading: &'static str,
    pub error_prefix: &'static str,
    pub error_empty_symbol: &'static str,
    pub idle_hint: &'static str,
    pub chart_mode_label: &'static str,
    pub summary_heading: &'static str,
    pub summary_symbol: &'static str,
    pub summary_overall: &'static str,
    pub summary_score: &'static str,
    pub summary_total: &'static str,
    pub summary_generated: &'static str,
    pub chart_title: &'static str,
    pub distribution_title: &'static str,
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
    pub zero_line: &'static str,
    pub band_strong_positive: &'static str,
    pub band_positive: &'static str,
    pub band_neutral: &'static str,
    pub band_negative: &'static str,
    pub band_strong_negative: &'static str,
    pub articles_heading: &'static str,
    pub no_articles: &'static str,
    pub source_label: &'static str,
    pub published_label: &'static str,
    pub chart_position_label: &'static str,
    pub copy_html_button: &'static str,
    pub copy_html_done: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Stock Sentiment Dashboard",
    symbol_hint: "e.g. AAPL",
    analyze_button: "📊 Analyze Sentiment",
    analyzing_button: "Analyzing...",
    loading: "Fetching and analyzing news...",
    error_prefix: "Error:",
    error_empty_symbol: "Please enter a stock symbol",
    idle_hint: "Enter a stock symbol and press Enter to analyze recent news sentiment.",
    chart_mode_label: "Chart",
    summary_heading: "Overall Sentiment",
    summary_symbol: "Symbol",
    summary_overall: "Sentiment",
    summary_score: "Score",
    summary_total: "Articles",
    summary_generated: "Generated",
    chart_title: "Individual Article Sentiment Analysis",
    distribution_title: "Sentiment Distribution",
    plot_x_axis: "Article Number",
    plot_y_axis: "Sentiment Score (Confidence × Direction)",
    zero_line: "Neutral Line",
    band_strong_positive: "Strong Positive",
    band_positive: "Positive",
    band_neutral: "Neutral",
    band_negative: "Negative",
    band_strong_negative: "Strong Negative",
    articles_heading: "Articles",
    no_articles: "No articles found.",
    source_label: "Source:",
    published_label: "Published:",
    chart_position_label: "Chart Position:",
    copy_html_button: "Copy as HTML",
    copy_html_done: "Article list copied to clipboard",
};

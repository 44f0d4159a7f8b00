// User interface components
pub mod app;
mod app_async;
pub mod app_state;
pub mod article_list;
pub mod config;
pub mod html;
pub mod plot_layers;
pub mod styles;
pub mod surface;
mod ui_render;
pub mod ui_plot_view;
pub mod utils;

// Re-export main app
pub use app::{DashboardSettings, SentimentDashboardApp};
pub use app_async::{FetchOutcome, RequestTracker};
pub use article_list::{ArticleEntry, ArticleListItem, ArticleListRenderer};
pub use config::{UI_CONFIG, UI_TEXT};
pub use html::{article_list_html, escape_html};
pub use surface::{ChartSurface, ListSurface, SurfaceRegistry};
pub use ui_plot_view::{ChartMode, ChartRenderer, SentimentChart};

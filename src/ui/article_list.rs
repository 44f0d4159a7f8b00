use eframe::egui::{Frame, Hyperlink, RichText, Ui};

use crate::domain::{Article, SentimentLabel};
use crate::models::ProjectedPoint;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::html::safe_href;
use crate::ui::styles::UiStyleExt;
use crate::ui::surface::ListSurface;
use crate::utils::{format_published, html_to_color32};

/// Everything shown for one article, already resolved to display strings.
/// Text is kept raw here; escaping happens when markup is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleEntry {
    /// 1-based, matches the chart's x.
    pub position: usize,
    pub title: String,
    pub url: String,
    pub label: SentimentLabel,
    pub confidence_pct: i64,
    pub source: String,
    pub published: String,
    /// The y the chart used for this article, when the projection was supplied.
    pub y_value: Option<f64>,
}

impl ArticleEntry {
    pub fn badge_text(&self) -> String {
        format!("{} ({}%)", self.label, self.confidence_pct)
    }

    pub fn position_text(&self) -> Option<String> {
        self.y_value
            .map(|y| format!("Article #{}, Y-value: {:.3}", self.position, y))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArticleListItem {
    Article(ArticleEntry),
    /// Stands in for the whole list when there is nothing to show.
    Placeholder(String),
}

impl ArticleListItem {
    pub fn as_article(&self) -> Option<&ArticleEntry> {
        match self {
            ArticleListItem::Article(entry) => Some(entry),
            ArticleListItem::Placeholder(_) => None,
        }
    }
}

/// Fills the article container, one entry per article in input order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArticleListRenderer;

impl ArticleListRenderer {
    /// Replaces the container's contents. `points`, when given, must be the
    /// projection of `articles` so list and chart agree on every y.
    pub fn render(
        &self,
        surface: &mut ListSurface,
        articles: &[Article],
        points: Option<&[ProjectedPoint]>,
    ) {
        surface.clear();

        if articles.is_empty() {
            surface.push(ArticleListItem::Placeholder(UI_TEXT.no_articles.to_string()));
            return;
        }

        for (i, article) in articles.iter().enumerate() {
            let point = points.and_then(|p| p.get(i));
            surface.push(ArticleListItem::Article(Self::entry(i + 1, article, point)));
        }
    }

    fn entry(position: usize, article: &Article, point: Option<&ProjectedPoint>) -> ArticleEntry {
        ArticleEntry {
            position: point.map(|p| p.index).unwrap_or(position),
            title: article.title.clone(),
            url: article.url.clone(),
            label: article.sentiment.label,
            confidence_pct: article.sentiment.confidence_pct(),
            source: article.source_or_unknown().to_string(),
            published: format_published(article.published_at.as_deref()),
            y_value: point.map(|p| p.y_value),
        }
    }
}

/// Draw the container's entries with egui.
pub fn show_article_list(ui: &mut Ui, surface: &ListSurface) {
    for item in surface.items() {
        match item {
            ArticleListItem::Placeholder(text) => {
                ui.label_subdued(text.as_str());
            }
            ArticleListItem::Article(entry) => {
                show_article_entry(ui, entry);
                ui.add_space(6.0);
            }
        }
    }
}

fn show_article_entry(ui: &mut Ui, entry: &ArticleEntry) {
    Frame::group(ui.style())
        .fill(UI_CONFIG.colors.card_fill)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            let title = RichText::new(&entry.title).strong();
            let href = safe_href(&entry.url);
            if href == "#" {
                ui.label(title);
            } else {
                ui.add(Hyperlink::from_label_and_url(title, href).open_in_new_tab(true));
            }

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!(" {} ", entry.badge_text()))
                        .small()
                        .strong()
                        .color(eframe::egui::Color32::BLACK)
                        .background_color(html_to_color32(entry.label.hex_color())),
                );
            });

            ui.metric(UI_TEXT.source_label, &entry.source, UI_CONFIG.colors.label);
            ui.metric(UI_TEXT.published_label, &entry.published, UI_CONFIG.colors.label);
            if let Some(position) = entry.position_text() {
                ui.metric(UI_TEXT.chart_position_label, &position, UI_CONFIG.colors.label);
            }
        });
}

//! HTML output for the article list.

use crate::ui::article_list::{ArticleEntry, ArticleListItem};
use crate::ui::config::UI_TEXT;

/// Escape text for use inside HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Only http(s) links are clickable; anything else (javascript:, data:, empty) becomes `#`.
pub fn safe_href(url: &str) -> &str {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed
    } else {
        "#"
    }
}

/// The whole list as an HTML fragment.
pub fn article_list_html(items: &[ArticleListItem]) -> String {
    let mut html = String::new();
    for item in items {
        match item {
            ArticleListItem::Placeholder(text) => html.push_str(&format!(
                "<p class=\"text-muted\">{}</p>\n",
                escape_html(text)
            )),
            ArticleListItem::Article(entry) => html.push_str(&article_entry_html(entry)),
        }
    }
    html
}

fn article_entry_html(entry: &ArticleEntry) -> String {
    let position = entry
        .position_text()
        .map(|position| {
            format!(
                "  <p class=\"article-plot\"><strong>{}</strong> {}</p>\n",
                UI_TEXT.chart_position_label,
                escape_html(&position)
            )
        })
        .unwrap_or_default();

    format!(
        concat!(
            "<div class=\"article-item\">\n",
            "  <div class=\"article-header\">\n",
            "    <h5><a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{title}</a></h5>\n",
            "    <span class=\"sentiment-badge {class}\" style=\"background-color: {color}\">{badge}</span>\n",
            "  </div>\n",
            "  <p class=\"article-source\"><strong>{source_label}</strong> {source}</p>\n",
            "  <p class=\"article-date\"><strong>{date_label}</strong> {published}</p>\n",
            "{position}",
            "</div>\n",
        ),
        href = escape_html(safe_href(&entry.url)),
        title = escape_html(&entry.title),
        class = entry.label.css_class(),
        color = entry.label.hex_color(),
        badge = escape_html(&entry.badge_text()),
        source_label = UI_TEXT.source_label,
        source = escape_html(&entry.source),
        date_label = UI_TEXT.published_label,
        published = escape_html(&entry.published),
        position = position,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SentimentLabel;

    fn entry(title: &str, url: &str, source: &str) -> ArticleEntry {
        ArticleEntry {
            position: 1,
            title: title.to_string(),
            url: url.to_string(),
            label: SentimentLabel::Positive,
            confidence_pct: 90,
            source: source.to_string(),
            published: "Unknown".to_string(),
            y_value: Some(0.9),
        }
    }

    #[test]
    fn escapes_the_minimum_set_exactly() {
        assert_eq!(escape_html("<b>&'\""), "&lt;b&gt;&amp;&#039;&quot;");
    }

    #[test]
    fn escaping_leaves_plain_text_alone() {
        assert_eq!(escape_html("Apple beats estimates"), "Apple beats estimates");
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("café ✓"), "café ✓");
    }

    #[test]
    fn escaping_twice_escapes_the_ampersands_again() {
        assert_eq!(escape_html(&escape_html("&")), "&amp;amp;");
    }

    #[test]
    fn only_http_links_survive() {
        assert_eq!(safe_href("https://example.com/a"), "https://example.com/a");
        assert_eq!(safe_href(" HTTP://EXAMPLE.COM "), "HTTP://EXAMPLE.COM");
        assert_eq!(safe_href("javascript:alert(1)"), "#");
        assert_eq!(safe_href(""), "#");
    }

    #[test]
    fn entry_markup_escapes_remote_text() {
        let html = article_list_html(&[ArticleListItem::Article(entry(
            "<script>alert('x')</script>",
            "https://example.com/?a=1&b=\"2\"",
            "Tech <Review>",
        ))]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
        assert!(html.contains(r#"href="https://example.com/?a=1&amp;b=&quot;2&quot;""#));
        assert!(html.contains("Tech &lt;Review&gt;"));
        assert!(html.contains(r#"target="_blank" rel="noopener noreferrer""#));
        assert!(html.contains("POSITIVE (90%)"));
        assert!(html.contains("Article #1, Y-value: 0.900"));
    }

    #[test]
    fn entry_markup_layout() {
        let html = article_list_html(&[ArticleListItem::Article(entry(
            "Apple beats estimates",
            "https://example.com/a",
            "Reuters",
        ))]);
        let lines: Vec<_> = html.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], r#"<div class="article-item">"#);
        assert_eq!(lines[1], r#"  <div class="article-header">"#);
        assert!(lines[2].starts_with(r#"    <h5><a href="https://example.com/a""#));
        assert!(lines[3].starts_with(r#"    <span class="sentiment-badge "#));
        assert_eq!(lines[4], "  </div>");
        assert!(lines[5].starts_with(r#"  <p class="article-source"><strong>"#));
        assert!(lines[5].ends_with(" Reuters</p>"));
        assert!(lines[6].ends_with(" Unknown</p>"));
        assert!(lines[7].starts_with(r#"  <p class="article-plot">"#));
        assert_eq!(lines[8], "</div>");
        assert!(html.ends_with("</div>\n"));
    }

    #[test]
    fn unplotted_entry_has_no_position_line() {
        let mut unplotted = entry("Title", "https://example.com", "Wire");
        unplotted.y_value = None;
        let html = article_list_html(&[ArticleListItem::Article(unplotted)]);
        assert!(!html.contains("article-plot"));
        assert_eq!(html.lines().count(), 8);
        assert!(html.ends_with("</p>\n</div>\n"));
    }

    #[test]
    fn placeholder_markup() {
        let html = article_list_html(&[ArticleListItem::Placeholder("No articles found.".into())]);
        assert_eq!(html.trim(), r#"<p class="text-muted">No articles found.</p>"#);
    }
}

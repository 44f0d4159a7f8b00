use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::CHART_CONFIG;

/// Sentiment class attached to an article (or to the whole analysis).
///
/// The backend only ever emits the first three. Anything else lands in
/// `Unknown`, which projects to zero and belongs to no chart series.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, Default,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    #[default]
    Neutral,
    #[serde(other)]
    Unknown,
}

impl SentimentLabel {
    /// The three categories that get their own series / slice, in display order.
    pub const CHARTED: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    pub fn is_charted(&self) -> bool {
        !matches!(self, SentimentLabel::Unknown)
    }

    /// HTML hex color used for badges, series and slices.
    pub fn hex_color(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => CHART_CONFIG.positive_color,
            SentimentLabel::Negative => CHART_CONFIG.negative_color,
            SentimentLabel::Neutral => CHART_CONFIG.neutral_color,
            SentimentLabel::Unknown => CHART_CONFIG.unknown_color,
        }
    }

    /// CSS class used by the HTML article list (`sentiment-positive` etc.).
    pub fn css_class(&self) -> String {
        format!("sentiment-{}", self.to_string().to_lowercase())
    }
}

/// Label plus the model's confidence in it. Confidence is nominally in [0, 1]
/// but is passed through unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SentimentScore {
    pub label: SentimentLabel,
    pub confidence: f64,
}

impl SentimentScore {
    pub fn new(label: SentimentLabel, confidence: f64) -> Self {
        Self { label, confidence }
    }

    /// Confidence as a whole percentage, rounded half away from zero.
    pub fn confidence_pct(&self) -> i64 {
        (self.confidence * 100.0).round() as i64
    }
}

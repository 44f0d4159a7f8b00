use crate::domain::{Article, SentimentLabel};
use crate::models::jitter::Jitter;

/// One article placed on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedPoint {
    /// 1-based position in the result's article list (the chart's x).
    pub index: usize,
    /// Signed confidence, nominally in [-1, 1] (the chart's y).
    pub y_value: f64,
    pub label: SentimentLabel,
    pub confidence: f64,
    pub title: String,
}

impl ProjectedPoint {
    pub fn x(&self) -> f64 {
        self.index as f64
    }

    pub fn xy(&self) -> [f64; 2] {
        [self.x(), self.y_value]
    }
}

/// Maps analysed articles to plottable points.
///
/// Deterministic for every label except NEUTRAL, which draws from the injected
/// jitter source.
pub struct ResultProjector<J: Jitter> {
    jitter: J,
}

impl<J: Jitter> ResultProjector<J> {
    pub fn new(jitter: J) -> Self {
        Self { jitter }
    }

    /// Vertical position for a label/confidence pair.
    pub fn y_value(&mut self, label: SentimentLabel, confidence: f64) -> f64 {
        match label {
            SentimentLabel::Positive => confidence,
            SentimentLabel::Negative => -confidence,
            SentimentLabel::Neutral => self.jitter.sample(),
            SentimentLabel::Unknown => 0.0,
        }
    }

    pub fn project_one(&mut self, position: usize, article: &Article) -> ProjectedPoint {
        let sentiment = article.sentiment;
        ProjectedPoint {
            index: position,
            y_value: self.y_value(sentiment.label, sentiment.confidence),
            label: sentiment.label,
            confidence: sentiment.confidence,
            title: article.title.clone(),
        }
    }

    /// Same length, same order; `index` is the 1-based position.
    pub fn project(&mut self, articles: &[Article]) -> Vec<ProjectedPoint> {
        articles
            .iter()
            .enumerate()
            .map(|(i, article)| self.project_one(i + 1, article))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SentimentScore;
    use crate::models::jitter::RandomJitter;

    fn article(label: SentimentLabel, confidence: f64) -> Article {
        Article::new("t", "https://example.com", SentimentScore::new(label, confidence))
    }

    #[test]
    fn directional_labels_are_signed_confidence() {
        let mut projector = ResultProjector::new(RandomJitter::seeded(3));
        for step in 0..=100 {
            let c = step as f64 / 100.0;
            assert_eq!(projector.y_value(SentimentLabel::Positive, c), c);
            assert_eq!(projector.y_value(SentimentLabel::Negative, c), -c);
        }
    }

    #[test]
    fn neutral_stays_in_jitter_band() {
        let mut projector = ResultProjector::new(RandomJitter::seeded(11));
        for step in 0..2_000 {
            let c = (step % 101) as f64 / 100.0;
            let y = projector.y_value(SentimentLabel::Neutral, c);
            assert!((-0.1..=0.1).contains(&y), "neutral y {y} escaped band");
        }
    }

    #[test]
    fn unknown_labels_sit_on_zero() {
        let mut projector = ResultProjector::new(|| 0.09);
        assert_eq!(projector.y_value(SentimentLabel::Unknown, 0.8), 0.0);
    }

    #[test]
    fn out_of_range_confidence_passes_through() {
        let mut projector = ResultProjector::new(|| 0.0);
        assert_eq!(projector.y_value(SentimentLabel::Positive, 1.5), 1.5);
        assert_eq!(projector.y_value(SentimentLabel::Negative, -0.2), 0.2);
    }

    #[test]
    fn projection_preserves_length_and_order() {
        let articles = vec![
            article(SentimentLabel::Positive, 0.9),
            article(SentimentLabel::Neutral, 0.5),
            article(SentimentLabel::Negative, 0.6),
            article(SentimentLabel::Positive, 0.3),
        ];
        let mut projector = ResultProjector::new(|| 0.02);
        let points = projector.project(&articles);

        assert_eq!(points.len(), articles.len());
        for (i, (point, article)) in points.iter().zip(&articles).enumerate() {
            assert_eq!(point.index, i + 1);
            assert_eq!(point.label, article.sentiment.label);
            assert_eq!(point.confidence, article.sentiment.confidence);
        }
        assert_eq!(points[1].y_value, 0.02);
        assert_eq!(points[2].xy(), [3.0, -0.6]);
    }

    #[test]
    fn empty_input_projects_to_nothing() {
        let mut projector = ResultProjector::new(|| 0.0);
        assert!(projector.project(&[]).is_empty());
    }
}

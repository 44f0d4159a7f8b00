use itertools::Itertools;

use crate::domain::SentimentLabel;
use crate::models::projection::ProjectedPoint;

/// Share of one label in a result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionSlice {
    pub label: SentimentLabel,
    pub count: usize,
    /// Fraction of all charted articles, 0.0 when there are none.
    pub fraction: f64,
}

impl DistributionSlice {
    pub fn percent(&self) -> f64 {
        self.fraction * 100.0
    }
}

/// Counts per charted label, always POSITIVE, NEGATIVE, NEUTRAL in that order
/// (zero-count labels included so colors and legend stay stable).
pub fn label_distribution(points: &[ProjectedPoint]) -> Vec<DistributionSlice> {
    let counts = points
        .iter()
        .map(|p| p.label)
        .filter(SentimentLabel::is_charted)
        .counts();
    let total: usize = counts.values().sum();

    SentimentLabel::CHARTED
        .iter()
        .map(|&label| {
            let count = counts.get(&label).copied().unwrap_or(0);
            let fraction = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            };
            DistributionSlice {
                label,
                count,
                fraction,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(index: usize, label: SentimentLabel) -> ProjectedPoint {
        ProjectedPoint {
            index,
            y_value: 0.0,
            label,
            confidence: 0.5,
            title: String::new(),
        }
    }

    #[test]
    fn counts_and_fractions_per_label() {
        let points = vec![
            point(1, SentimentLabel::Positive),
            point(2, SentimentLabel::Positive),
            point(3, SentimentLabel::Negative),
            point(4, SentimentLabel::Neutral),
            point(5, SentimentLabel::Unknown),
        ];
        let slices = label_distribution(&points);
        let labels: Vec<_> = slices.iter().map(|s| s.label).collect();
        assert_eq!(labels, SentimentLabel::CHARTED.to_vec());
        assert_eq!(slices[0].count, 2);
        assert!((slices[0].fraction - 0.5).abs() < 1e-12);
        assert!((slices[1].percent() - 25.0).abs() < 1e-9);
        assert_eq!(slices[2].count, 1);
    }

    #[test]
    fn empty_input_has_zero_slices() {
        let slices = label_distribution(&[]);
        assert_eq!(slices.len(), 3);
        assert!(slices.iter().all(|s| s.count == 0 && s.fraction == 0.0));
    }
}

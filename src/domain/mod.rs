// Wire-level domain types shared by the data layer, the projector and the renderers.
pub mod article;
pub mod sentiment;
pub mod symbol;

pub use article::{AnalysisResult, Article, UNKNOWN_SOURCE};
pub use sentiment::{SentimentLabel, SentimentScore};
pub use symbol::normalize_symbol;

//! Error taxonomy for the dashboard.
//!
//! Everything the user can trigger ends up in the single error region of the
//! view, so every variant carries the exact message that should be shown.

use thiserror::Error;

/// Message shown when the API fails without telling us why.
pub const GENERIC_API_ERROR: &str = "Failed to analyze sentiment";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// Missing or empty symbol. Raised before any request is made.
    #[error("{0}")]
    Input(String),

    /// Transport or decoding failure, surfaced as the raw message.
    #[error("{0}")]
    Fetch(String),

    /// Non-success HTTP status. Holds the body's `error` field or the generic fallback.
    #[error("{0}")]
    Api(String),

    /// A drawing surface could not be resolved. Not user recoverable.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("no surface registered with id '{0}'")]
    MissingSurface(String),

    #[error("surface '{id}' is a {found} surface, expected a {expected} surface")]
    WrongSurfaceKind {
        id: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl DashboardError {
    /// Render errors are configuration bugs; everything else is shown to the user and retried by hand.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DashboardError::Render(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_errors_display_verbatim() {
        let err = DashboardError::Api("No news found for this symbol".to_string());
        assert_eq!(err.to_string(), "No news found for this symbol");
        assert!(!err.is_fatal());
    }

    #[test]
    fn render_errors_are_fatal() {
        let err: DashboardError = RenderError::MissingSurface("sentimentChart".into()).into();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("sentimentChart"));
    }
}

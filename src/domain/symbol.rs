use crate::error::DashboardError;
use crate::ui::config::UI_TEXT;

/// Trim and upper-case what the user typed. An empty result is an input error
/// and no request should be made for it.
pub fn normalize_symbol(raw: &str) -> Result<String, DashboardError> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(DashboardError::Input(UI_TEXT.error_empty_symbol.to_string()));
    }
    Ok(symbol)
}

pub mod color;
pub mod time_utils;

pub use color::html_to_color32;
pub use time_utils::{TimeUtils, display_locale, format_published, format_published_in, parse_timestamp};

use chrono::{DateTime, Local, Locale, NaiveDate, NaiveDateTime, TimeZone};
use std::sync::OnceLock;

/// Shown when a publish time is missing or cannot be parsed.
pub const UNKNOWN_DATE: &str = "Unknown";

pub struct TimeUtils;

impl TimeUtils {
    /// Locale date + hour:minute, the resolution shown next to each article.
    pub const DISPLAY_FORMAT: &str = "%x %H:%M";

    /// Naive layouts accepted when the timestamp carries no offset (read as local time).
    const NAIVE_DATETIME_FORMATS: [&str; 3] =
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
    const NAIVE_DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Parse an API timestamp into local time.
/// RFC 3339 first, then offset-less datetimes and bare dates as local time.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }

    let naive = TimeUtils::NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, TimeUtils::NAIVE_DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    Local.from_local_datetime(&naive).earliest()
}

/// Turn a system locale tag (`de_DE.UTF-8`, `en-GB`, `fr_FR@euro`) into a chrono locale.
pub fn locale_from_tag(tag: &str) -> Option<Locale> {
    let name = tag
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .replace('-', "_");
    if name.is_empty() {
        return None;
    }
    Locale::try_from(name.as_str()).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn detect_locale() -> Option<Locale> {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|tag| locale_from_tag(&tag))
}

#[cfg(target_arch = "wasm32")]
fn detect_locale() -> Option<Locale> {
    let language = web_sys::window()?.navigator().language()?;
    locale_from_tag(&language)
}

/// The user's locale, read once. POSIX when nothing usable is configured.
pub fn display_locale() -> Locale {
    static LOCALE: OnceLock<Locale> = OnceLock::new();
    *LOCALE.get_or_init(|| detect_locale().unwrap_or(Locale::POSIX))
}

/// Display form of an article's publish time in the user's locale.
/// "Unknown" when missing or unparsable.
pub fn format_published(raw: Option<&str>) -> String {
    format_published_in(raw, display_locale())
}

pub fn format_published_in(raw: Option<&str>, locale: Locale) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| {
            dt.format_localized(TimeUtils::DISPLAY_FORMAT, locale)
                .to_string()
        })
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

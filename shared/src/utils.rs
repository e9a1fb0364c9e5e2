//! # Shared Utility Functions
//!
//! Helpers for the keyword strings and timestamps the backend exchanges.
//!
//! ## Keywords
//!
//! The backend accepts keyword lists as one comma-separated string:
//! - [`join_keywords`] - Build that string from individual keywords
//! - [`split_keywords`] - Break it back apart
//!
//! ## Timestamps
//!
//! Timestamps arrive either as ISO-8601 without offset (`2024-05-01T10:00:00.123456`)
//! or as RFC 2822 (`Wed, 01 May 2024 10:00:00 GMT`):
//! - [`parse_timestamp`] - Parse either form
//! - [`format_timestamp`] - Render for display, falling back to the raw text
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{join_keywords, split_keywords};
//!
//! let joined = join_keywords(["热门", "干货"]);
//! assert_eq!(joined, "热门,干货");
//! assert_eq!(split_keywords(&joined), vec!["热门", "干货"]);
//! ```

use chrono::{DateTime, NaiveDateTime};

/// Join keywords with `,`, trimming each and dropping empty entries.
pub fn join_keywords<I, S>(keywords: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|k| k.as_ref().trim().to_string())
        .filter(|k| !k.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Split a comma-separated keyword string. Accepts the full-width comma too.
pub fn split_keywords(keywords: &str) -> Vec<String> {
    keywords
        .split([',', '，'])
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a backend timestamp.
///
/// Returns `None` for anything that is neither ISO-8601 (with or without
/// fractional seconds or offset) nor RFC 2822.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Format a backend timestamp as `YYYY-MM-DD HH:MM`, or return it unchanged
/// when it cannot be parsed.
pub fn format_timestamp(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Shorten text to at most `max_chars` characters, adding `...` when cut.
///
/// Counts characters, not bytes, so CJK titles are never split mid-codepoint.
///
/// ```rust
/// use shared::utils::truncate_text;
///
/// assert_eq!(truncate_text("short", 10), "short");
/// assert_eq!(truncate_text("💡 关于效率的秘密", 6), "💡 关...");
/// ```
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_keywords() {
        assert_eq!(join_keywords(["a", " b ", "", "c"]), "a,b,c");
        assert_eq!(join_keywords(Vec::<String>::new()), "");
    }

    #[test]
    fn test_split_keywords() {
        assert_eq!(split_keywords("热门, 爆款，干货,"), vec!["热门", "爆款", "干货"]);
        assert!(split_keywords("").is_empty());
    }

    #[test]
    fn test_parse_timestamp_forms() {
        let iso = parse_timestamp("2024-05-01T10:30:00.123456").unwrap();
        assert_eq!(iso.format("%Y-%m-%d %H:%M").to_string(), "2024-05-01 10:30");

        let rfc2822 = parse_timestamp("Wed, 01 May 2024 10:30:00 GMT").unwrap();
        assert_eq!(rfc2822, parse_timestamp("2024-05-01T10:30:00").unwrap());

        let rfc3339 = parse_timestamp("2024-05-01T12:30:00+02:00").unwrap();
        assert_eq!(rfc3339.format("%H:%M").to_string(), "10:30");

        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_format_timestamp_fallback() {
        assert_eq!(format_timestamp("2024-05-01T10:30:00"), "2024-05-01 10:30");
        assert_eq!(format_timestamp("n/a"), "n/a");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("abcdef", 6), "abcdef");
        assert_eq!(truncate_text("abcdefgh", 6), "abc...");
    }
}

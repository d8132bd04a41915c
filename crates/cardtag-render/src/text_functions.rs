//! `{{DATE(..)}}` and `{{TIME(..)}}` placeholders in card text.
//!
//! ```rust
//! use cardtag_render::text_functions::expand;
//!
//! let text = expand("Due {{DATE(2017-02-14T06:08:39Z, SHORT)}} at {{TIME(2017-02-14T06:08:39Z)}}");
//! assert_eq!(text, "Due Tue, Feb 14, 2017 at 6:08 AM");
//! ```
//!
//! Formats are rendered in the timestamp's own UTC offset. A placeholder whose
//! timestamp does not parse as RFC 3339 is left as written.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\{\{\s*(DATE|TIME)\(\s*([^,)\s]+)\s*(?:,\s*(COMPACT|SHORT|LONG)\s*)?\)\s*\}\}")
        .expect("Failed to compile text function regex")
});

/// Expands every text function in `text`.
pub fn expand(text: &str) -> Cow<'_, str> {
    if !text.contains("{{") {
        return Cow::Borrowed(text);
    }
    FUNCTION.replace_all(text, |caps: &Captures<'_>| {
        let whole = caps[0].to_string();
        let Ok(timestamp) = DateTime::parse_from_rfc3339(&caps[2]) else {
            return whole;
        };

        if caps[1].eq_ignore_ascii_case("TIME") {
            // TIME takes no format argument
            if caps.get(3).is_some() {
                return whole;
            }
            return timestamp.format("%-I:%M %p").to_string();
        }

        let style = caps.get(3).map(|m| m.as_str()).unwrap_or("COMPACT");
        format_date(&timestamp, style)
    })
}

fn format_date(timestamp: &DateTime<FixedOffset>, style: &str) -> String {
    let pattern = if style.eq_ignore_ascii_case("LONG") {
        "%A, %B %-d, %Y"
    } else if style.eq_ignore_ascii_case("SHORT") {
        "%a, %b %-d, %Y"
    } else {
        "%-m/%-d/%Y"
    };
    timestamp.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAMP: &str = "2017-02-14T06:08:39Z";

    #[test]
    fn test_date_styles() {
        assert_eq!(expand(&format!("{{{{DATE({STAMP})}}}}")), "2/14/2017");
        assert_eq!(expand(&format!("{{{{DATE({STAMP}, COMPACT)}}}}")), "2/14/2017");
        assert_eq!(expand(&format!("{{{{DATE({STAMP}, SHORT)}}}}")), "Tue, Feb 14, 2017");
        assert_eq!(expand(&format!("{{{{DATE({STAMP}, LONG)}}}}")), "Tuesday, February 14, 2017");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(expand(&format!("{{{{date({STAMP}, long)}}}}")), "Tuesday, February 14, 2017");
    }

    #[test]
    fn test_time() {
        assert_eq!(expand(&format!("{{{{TIME({STAMP})}}}}")), "6:08 AM");
        assert_eq!(expand("{{TIME(2017-02-14T18:30:00-08:00)}}"), "6:30 PM");
    }

    #[test]
    fn test_offset_is_preserved() {
        assert_eq!(expand("{{DATE(2017-02-14T23:30:00-08:00)}}"), "2/14/2017");
    }

    #[test]
    fn test_invalid_placeholders_are_untouched() {
        assert_eq!(expand("{{DATE(yesterday)}}"), "{{DATE(yesterday)}}");
        assert_eq!(expand(&format!("{{{{TIME({STAMP}, LONG)}}}}")), format!("{{{{TIME({STAMP}, LONG)}}}}"));
        assert_eq!(expand("{{NOW()}}"), "{{NOW()}}");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(expand("nothing here"), Cow::Borrowed(_)));
    }
}

//! Timestamp formatting for search-engine time factors.
//!
//! Two representations are produced for every instant:
//!
//! | Format  | Example                     | Used by                      |
//! |---------|-----------------------------|------------------------------|
//! | plain   | `2024-06-15T14:30:45`       | Baidu, Bytedance, Open Graph |
//! | rfc3339 | `2024-06-15T14:30:45+08:00` | schema.org `BlogPosting`     |
//!
//! Both are rendered in the configured [`RenderZone`]. A missing instant
//! formats to an empty string.

use chrono::{DateTime, FixedOffset, Local, SecondsFormat, Utc};

/// `yyyy-MM-dd'T'HH:mm:ss`, no offset.
const PLAIN_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Time zone used when formatting instants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderZone {
    /// System local time zone (default).
    #[default]
    Local,
    /// Fixed UTC offset, e.g. `+08:00`.
    Fixed(FixedOffset),
}

impl RenderZone {
    /// Parse `local`, `utc`/`Z`, or an offset like `+08:00`, `-0530`, `+8`.
    ///
    /// Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("local") {
            return Some(Self::Local);
        }
        if s == "Z" || s.eq_ignore_ascii_case("utc") {
            return FixedOffset::east_opt(0).map(Self::Fixed);
        }
        parse_offset(s).map(Self::Fixed)
    }

    /// Convert an instant into this zone.
    fn localize(self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Self::Local => instant.with_timezone(&Local).fixed_offset(),
            Self::Fixed(offset) => instant.with_timezone(&offset),
        }
    }
}

/// Both string forms of one optional instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedDate {
    /// Without UTC offset.
    pub plain: String,
    /// RFC 3339 with offset (`Z` when the offset is zero).
    pub rfc3339: String,
}

impl FormattedDate {
    pub fn new(instant: Option<DateTime<Utc>>, zone: RenderZone) -> Self {
        Self {
            plain: format_plain(instant, zone),
            rfc3339: format_rfc3339(instant, zone),
        }
    }
}

/// Format as `yyyy-MM-ddTHH:mm:ss`, or `""` when absent.
pub fn format_plain(instant: Option<DateTime<Utc>>, zone: RenderZone) -> String {
    instant
        .map(|i| zone.localize(i).format(PLAIN_FORMAT).to_string())
        .unwrap_or_default()
}

/// Format as RFC 3339 with offset, or `""` when absent.
pub fn format_rfc3339(instant: Option<DateTime<Utc>>, zone: RenderZone) -> String {
    instant
        .map(|i| zone.localize(i).to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default()
}

/// Parse `+HH:MM`, `+HHMM` or `+HH` into a fixed offset.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    // Offsets are ASCII digits; byte-length checks below rely on it
    if !rest.is_ascii() {
        return None;
    }

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => rest.split_at(2),
        None => (rest, "0"),
    };

    if hours.is_empty() || hours.len() > 2 || minutes.len() > 2 {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 18 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone, Utc};

use crate::error;

/// Milliseconds since the Unix epoch, negative before it.
pub fn timestamp_millis<Tz: TimeZone>(dt: &DateTime<Tz>) -> i64 {
    dt.timestamp_millis()
}

/// The instant `millis` milliseconds after the Unix epoch.
///
/// `None` when the result would fall outside the representable date range.
pub fn from_timestamp_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Render in RFC 3339 form, normalized to UTC, with millisecond precision
/// and a trailing `Z`, like `2020-01-01T12:30:00.000Z`.
pub fn to_iso_string<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 date-time, keeping its offset.
pub fn parse_iso(s: &str) -> error::Result<DateTime<FixedOffset>> {
    Ok(DateTime::parse_from_rfc3339(s)?)
}

/// Like [`parse_iso`], with failure as `None` for callers that do not
/// care why the input was rejected.
pub fn parse_iso_option(s: &str) -> Option<DateTime<FixedOffset>> {
    parse_iso(s).ok()
}

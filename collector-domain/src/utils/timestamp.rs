// Epoch-millis <-> RFC3339 conversions.
// Naive timestamps are always read as UTC, never as the host zone.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("unrecognized timestamp '{0}'")]
    Unrecognized(String),
    #[error("millis value {0} is outside the representable calendar range")]
    OutOfRange(i64),
}

/// Current wall-clock time as milliseconds since the Unix epoch.
pub fn current_time_millis() -> i64 {
    Utc::now().timestamp_millis()
}

// Offset-bearing formats not covered by the strict RFC3339 parser,
// mainly colon-less offsets like +0000. %z accepts both forms.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse RFC3339/ISO8601 text into epoch millis.
///
/// Accepts `+00:00` and `+0000` offsets, the `Z` designator, and fractional
/// seconds of any precision. Text with no offset at all is interpreted as
/// UTC, never the host zone.
pub fn parse_timestamp_to_millis(text: &str) -> Result<i64, TimestampError> {
    let trimmed = text.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.timestamp_millis());
    }

    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(trimmed, format) {
            return Ok(parsed.timestamp_millis());
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed.and_utc().timestamp_millis());
        }
    }

    Err(TimestampError::Unrecognized(trimmed.to_string()))
}

/// Convert epoch millis to a UTC calendar timestamp.
///
/// Values outside chrono's representable calendar range are an explicit
/// error rather than a clamp or a fallback to "now".
pub fn millis_to_utc(millis: i64) -> Result<DateTime<Utc>, TimestampError> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or(TimestampError::OutOfRange(millis))
}

/// RFC3339 text with millisecond precision and the `Z` designator.
/// Round-trips through `parse_timestamp_to_millis` losslessly.
pub fn format_rfc3339_millis(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

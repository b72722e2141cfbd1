use crate::errors::{Error, Result};
use crate::model::DateRange;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// Default lookback window when no start date is supplied
const DEFAULT_WINDOW_HOURS: i64 = 24;

/// Resolves optional user-supplied start/end strings into a concrete range.
///
/// Absent end defaults to now; absent start defaults to 24 hours before the
/// end. Ordering of user-supplied values is the caller's responsibility.
pub fn resolve(start: Option<&str>, end: Option<&str>) -> Result<DateRange> {
    let to = match end {
        Some(raw) => parse_instant(raw)?,
        None => Utc::now(),
    };
    let from = match start {
        Some(raw) => parse_instant(raw)?,
        None => to - Duration::hours(DEFAULT_WINDOW_HOURS),
    };

    Ok(DateRange { from, to })
}

/// Parses RFC 3339, falling back to the `datetime-local` shapes
/// (`2025-01-01T00:00` / `2025-01-01T00:00:00`) interpreted as UTC.
fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(naive.and_utc());
        }
    }
    Err(Error::Validation(format!("unrecognized date/time: {raw}")))
}

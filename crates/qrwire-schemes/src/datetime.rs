//! Wall-clock event time parsing and UTC normalization.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};

/// Input format for calendar start/end fields.
pub const EVENT_TIME_FORMAT: &str = "%Y%m%d %H%M";

const UTC_STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Parse a wall-clock `YYYYMMDD HHMM` in the given timezone, normalized
/// to UTC.
///
/// An ambiguous wall-clock time (DST fold) resolves to the earliest
/// instant; a nonexistent one (DST gap) yields `None`, as does any text
/// that fails the format.
pub fn parse_event_time_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw.trim(), EVENT_TIME_FORMAT).ok()?;
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        // Timezone backends disagree on the pair's order (the tzfile
        // path reports the later instant first), so pick the earliest
        // by comparing instants, not by position.
        LocalResult::Ambiguous(a, b) => Some(a.min(b).with_timezone(&Utc)),
        LocalResult::None => None,
    }
}

/// Render an instant as an iCalendar UTC timestamp (`Z` suffix).
pub fn format_utc_stamp(dt: &DateTime<Utc>) -> String {
    dt.format(UTC_STAMP_FORMAT).to_string()
}

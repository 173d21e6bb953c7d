//! iCalendar VEVENT blocks.

use chrono::{Local, TimeZone};

use crate::datetime::{format_utc_stamp, parse_event_time_in};
use crate::error::{Error, Result};
use crate::escape::ical_text;
use qrwire_types::{FieldKind, FieldSpec, FieldValues};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", true, FieldKind::Text),
    FieldSpec::new("location", "Location", false, FieldKind::Text),
    FieldSpec::new("url", "URL", false, FieldKind::Text),
    FieldSpec::new("description", "Description", false, FieldKind::Text),
    FieldSpec::new("start", "Start Date", true, FieldKind::Date),
    FieldSpec::new("end", "End Date", true, FieldKind::Date),
];

/// Renders the VEVENT block, reading start/end as wall-clock times in
/// the process-local timezone.
pub fn format(values: &FieldValues) -> Result<String> {
    format_in(values, &Local)
}

/// Timezone-injected variant of [`format`].
///
/// SUMMARY, LOCATION and DESCRIPTION are TEXT values and get escaped;
/// `URL;VALUE=URI` is a URI value and passes through unchanged.
pub fn format_in<Tz: TimeZone>(values: &FieldValues, tz: &Tz) -> Result<String> {
    let start = utc_stamp_in(values, "start", tz)?;
    let end = utc_stamp_in(values, "end", tz)?;

    let lines = [
        "BEGIN:VEVENT".to_string(),
        format!("SUMMARY:{}", ical_text(values.raw("title"))),
        format!("LOCATION:{}", ical_text(values.raw("location"))),
        format!("URL;VALUE=URI:{}", values.raw("url")),
        format!("DESCRIPTION:{}", ical_text(values.raw("description"))),
        format!("DTSTART:{start}"),
        format!("DTEND:{end}"),
        "END:VEVENT".to_string(),
    ];
    Ok(lines.join("\n"))
}

fn utc_stamp_in<Tz: TimeZone>(
    values: &FieldValues,
    field: &'static str,
    tz: &Tz,
) -> Result<String> {
    let raw = values.trimmed(field);
    let parsed = parse_event_time_in(raw, tz).ok_or_else(|| Error::MalformedDate {
        field,
        value: raw.to_string(),
    })?;
    Ok(format_utc_stamp(&parsed))
}

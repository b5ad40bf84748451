//! Display formatting helpers for record fields.
//!
//! Every helper is total: absent or unparseable input yields the `"N/A"`
//! placeholder instead of an error. Timestamps arrive from the backend as raw
//! strings and are only parsed here, at the display boundary.

use time::{
    Date, OffsetDateTime, PrimitiveDateTime, Time,
    format_description::{FormatItem, well_known::Rfc3339},
    macros::format_description,
};

/// Placeholder shown for absent or unparseable values.
pub const PLACEHOLDER: &str = "N/A";

const DATE_FORMAT: &[FormatItem<'_>] =
    format_description!("[day padding:none] [month repr:short] [year]");
const DATE_TIME_FORMAT: &[FormatItem<'_>] =
    format_description!("[day padding:none] [month repr:short] [year] [hour]:[minute]");
const WIRE_DATE: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");
const WIRE_DATE_TIME: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Format a raw timestamp as a short calendar date, or `"N/A"`.
pub fn format_date(value: Option<&str>) -> String {
    value
        .and_then(parse_timestamp)
        .and_then(|stamp| stamp.format(DATE_FORMAT).ok())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Format a raw timestamp as a calendar date with time of day, or `"N/A"`.
pub fn format_date_time(value: Option<&str>) -> String {
    value
        .and_then(parse_timestamp)
        .and_then(|stamp| stamp.format(DATE_TIME_FORMAT).ok())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Return trimmed text, or `"N/A"` when absent or blank.
pub fn text_or_na(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Render an optional integer, or `"N/A"`.
pub fn int_or_na(value: Option<i64>) -> String {
    value
        .map(|n| n.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Render an optional amount, dropping the fraction when it is whole.
pub fn amount_or_na(value: Option<f64>) -> String {
    match value {
        Some(amount) if amount.fract() == 0.0 => format!("{amount:.0}"),
        Some(amount) => format!("{amount:.2}"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Accept RFC 3339 stamps plus the bare date/date-time shapes the backend
/// has been seen to emit.
fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(PrimitiveDateTime::new(parsed.date(), parsed.time()));
    }
    if let Ok(parsed) = PrimitiveDateTime::parse(raw, WIRE_DATE_TIME) {
        return Some(parsed);
    }
    if let Ok(date) = Date::parse(raw, WIRE_DATE) {
        return Some(PrimitiveDateTime::new(date, Time::MIDNIGHT));
    }
    None
}

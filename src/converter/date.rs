use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

/// `MM/DD/YYYY HH:MM:SS` in UTC.
pub const OUTPUT_DATE_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const NAIVE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Rewrites an export timestamp into the import format.
///
/// Offsets are folded into UTC and sub-second precision is dropped. Values
/// that are not recognisable timestamps are passed through untouched.
pub fn format_timestamp(raw: &str) -> String {
    match parse_utc(raw) {
        Some(instant) => instant.format(OUTPUT_DATE_FORMAT).to_string(),
        None => {
            warn!("Unparseable timestamp [{raw}] copied through unchanged");
            raw.to_string()
        }
    }
}

/// Naive values (no offset) are taken to already be UTC.
pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, NAIVE_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

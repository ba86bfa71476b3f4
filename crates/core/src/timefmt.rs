// crates/core/src/timefmt.rs
//! Display formatting for the RFC 3339 timestamps the remote service reports.

use chrono::{DateTime, FixedOffset};

/// Parse a service timestamp. Accepts RFC 3339 with `Z` or a numeric offset.
fn parse(ts: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(ts).ok()
}

/// Short date-and-time display form (`YYYY-MM-DD HH:MM:SS`).
///
/// Missing or unparseable input renders as an empty string; the panel shows
/// a blank cell rather than failing the whole listing.
pub fn format_timestamp(ts: Option<&str>) -> String {
    ts.and_then(parse)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Elapsed processing time between creation and completion as `HH:MM:SS`.
///
/// `None` when either endpoint is missing or unparseable, or when the
/// completion timestamp precedes creation (clock skew on the service side).
pub fn processing_time(created: Option<&str>, completed: Option<&str>) -> Option<String> {
    let created = created.and_then(parse)?;
    let completed = completed.and_then(parse)?;

    let total_seconds = (completed - created).num_seconds();
    if total_seconds < 0 {
        return None;
    }

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    Some(format!("{hours:02}:{minutes:02}:{seconds:02}"))
}

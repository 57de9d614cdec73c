//! Pure timestamp and counter formatting shared by the list screens.
//!
//! The backend emits RFC 3339 timestamps; everything here degrades to a
//! placeholder string rather than failing a render when a payload carries a
//! malformed or missing date.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Timelike};

use crate::net::types::TimelineEntry;

/// Format an upload timestamp as e.g. `"Mar 5, 2025 at 02:31 PM"`.
pub fn format_timestamp(iso: Option<&str>) -> String {
    let Some(iso) = iso else {
        return "Unknown".to_owned();
    };
    match DateTime::parse_from_rfc3339(iso) {
        Ok(ts) => ts.format("%b %-d, %Y at %I:%M %p").to_string(),
        Err(_) => "Invalid date".to_owned(),
    }
}

/// Format a timestamp as a short date, e.g. `"3/5/2025"`.
pub fn format_short_date(iso: Option<&str>) -> String {
    let Some(iso) = iso else {
        return "Unknown".to_owned();
    };
    match DateTime::parse_from_rfc3339(iso) {
        Ok(ts) => ts.format("%-m/%-d/%Y").to_string(),
        Err(_) => "Invalid date".to_owned(),
    }
}

/// Label a view counter, e.g. `"1 view"`, `"42 views"`.
pub fn views_label(count: i64) -> String {
    if count == 1 {
        "1 view".to_owned()
    } else {
        format!("{count} views")
    }
}

/// Bucket a like event into its hour of day, e.g. `"14:00"`.
fn hour_bucket(iso: &str) -> Option<String> {
    let ts = DateTime::parse_from_rfc3339(iso).ok()?;
    Some(format!("{:02}:00", ts.hour()))
}

/// Count like events per hour of day, sorted by hour. Entries with
/// unparseable timestamps are skipped.
pub fn aggregate_likes_by_hour(entries: &[TimelineEntry]) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    for entry in entries {
        let Some(bucket) = hour_bucket(&entry.time) else {
            continue;
        };
        match counts.iter_mut().find(|(hour, _)| *hour == bucket) {
            Some((_, count)) => *count += 1,
            None => counts.push((bucket, 1)),
        }
    }
    counts.sort();
    counts
}

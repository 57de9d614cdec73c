use super::*;

#[test]
fn format_timestamp_renders_date_and_time() {
    let out = format_timestamp(Some("2025-03-05T14:31:00.000Z"));
    assert_eq!(out, "Mar 5, 2025 at 02:31 PM");
}

#[test]
fn format_timestamp_missing_value_is_unknown() {
    assert_eq!(format_timestamp(None), "Unknown");
}

#[test]
fn format_timestamp_garbage_is_invalid() {
    assert_eq!(format_timestamp(Some("yesterday")), "Invalid date");
}

#[test]
fn format_short_date_is_compact() {
    assert_eq!(format_short_date(Some("2025-03-05T14:31:00Z")), "3/5/2025");
    assert_eq!(format_short_date(None), "Unknown");
}

#[test]
fn views_label_handles_singular() {
    assert_eq!(views_label(0), "0 views");
    assert_eq!(views_label(1), "1 view");
    assert_eq!(views_label(42), "42 views");
}

#[test]
fn aggregate_groups_by_hour_and_sorts() {
    let entries = vec![
        TimelineEntry { time: "2025-03-05T14:31:00Z".to_owned() },
        TimelineEntry { time: "2025-03-05T09:05:00Z".to_owned() },
        TimelineEntry { time: "2025-03-06T14:59:00Z".to_owned() },
    ];
    let buckets = aggregate_likes_by_hour(&entries);
    assert_eq!(
        buckets,
        vec![("09:00".to_owned(), 1), ("14:00".to_owned(), 2)]
    );
}

#[test]
fn aggregate_skips_unparseable_entries() {
    let entries = vec![
        TimelineEntry { time: "not a date".to_owned() },
        TimelineEntry { time: "2025-03-05T08:00:00Z".to_owned() },
    ];
    assert_eq!(aggregate_likes_by_hour(&entries).len(), 1);
}

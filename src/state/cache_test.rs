use super::*;

fn video(id: &str, title: &str) -> Video {
    Video {
        id: id.to_owned(),
        title: title.to_owned(),
        ..Video::default()
    }
}

#[test]
fn cache_starts_empty() {
    let cache = VideoCache::default();
    assert!(cache.is_empty());
    assert_eq!(cache.get("v1"), None);
}

#[test]
fn insert_then_get_returns_copy() {
    let mut cache = VideoCache::default();
    cache.insert(video("v1", "Intro"));
    assert_eq!(cache.get("v1").map(|v| v.title), Some("Intro".to_owned()));
}

#[test]
fn newer_insert_replaces_stale_copy() {
    let mut cache = VideoCache::default();
    cache.insert(video("v1", "Old title"));
    cache.insert(video("v1", "New title"));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("v1").map(|v| v.title), Some("New title".to_owned()));
}

#[test]
fn insert_all_feeds_a_whole_list() {
    let mut cache = VideoCache::default();
    cache.insert_all(vec![video("v1", "One"), video("v2", "Two")]);
    assert_eq!(cache.len(), 2);
    assert!(cache.get("v2").is_some());
}

#[test]
fn remove_drops_the_entry() {
    let mut cache = VideoCache::default();
    cache.insert(video("v1", "One"));
    cache.remove("v1");
    assert!(cache.is_empty());
}

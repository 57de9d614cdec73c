//! Shared video cache keyed by entity id.
//!
//! DESIGN
//! ======
//! Screens that fetch video lists feed their results in here, and screens
//! that show a single video seed from it before their own fetch resolves, so
//! two views never display divergent copies of the same entity. Entries are
//! replaced wholesale on every insert; the freshest server payload wins.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;

use crate::net::types::Video;

/// In-memory video store shared via context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VideoCache {
    entries: HashMap<String, Video>,
}

impl VideoCache {
    /// Insert or replace one video.
    pub fn insert(&mut self, video: Video) {
        self.entries.insert(video.id.clone(), video);
    }

    /// Insert or replace a batch, e.g. a whole feed response.
    pub fn insert_all<I>(&mut self, videos: I)
    where
        I: IntoIterator<Item = Video>,
    {
        for video in videos {
            self.insert(video);
        }
    }

    /// Clone out the cached copy for `video_id`, if any.
    pub fn get(&self, video_id: &str) -> Option<Video> {
        self.entries.get(video_id).cloned()
    }

    /// Drop a deleted video everywhere at once.
    pub fn remove(&mut self, video_id: &str) {
        self.entries.remove(video_id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

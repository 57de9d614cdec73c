//! Wire DTOs for the backend's REST payloads.
//!
//! DESIGN
//! ======
//! The backend speaks Mongo-style documents: `_id` identifiers, camelCase
//! field names, and a `{ data, message }` envelope around every response.
//! These types mirror that shape exactly; defaults absorb fields the backend
//! omits on partially-populated documents (list endpoints frequently skip
//! counts and nested owners).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Standard response envelope wrapped around every backend payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The operation's payload.
    pub data: T,
    /// Human-readable outcome, e.g. `"Video liked successfully"`.
    #[serde(default)]
    pub message: String,
}

/// An account as embedded in videos, comments, tweets, and subscriptions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

/// Payload of a successful `POST /users/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

/// A channel page as returned by `GET /users/channel/:userName`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub subscribers_count: i64,
    #[serde(default)]
    pub channels_subscribed_to_count: i64,
}

/// A video document. List endpoints may omit the file URL and counts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub video_file: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// View counter; the backend names this field in the singular.
    #[serde(default)]
    pub view: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub owner: Option<User>,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub is_liked_by_current_user: bool,
}

/// A comment on a video.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub owner: Option<User>,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub is_liked_by_current_user: bool,
}

/// A tweet-like post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub owner: Option<User>,
    #[serde(default)]
    pub liked_by_me: bool,
    #[serde(default)]
    pub likes_count: i64,
}

/// Payload of `POST /likes/toggle/t/:id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetLikeOutcome {
    pub tweet_id: String,
    pub liked: bool,
    #[serde(default)]
    pub total_likes: i64,
}

/// A playlist with its (possibly empty) populated video list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub videos: Vec<Video>,
}

impl Playlist {
    /// Whether `video_id` is already a member of this playlist.
    pub fn contains_video(&self, video_id: &str) -> bool {
        self.videos.iter().any(|v| v.id == video_id)
    }
}

/// One row of `GET /subscriptions/c/:userId` — a channel the user follows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub channel: User,
}

/// Payload of `GET /subscriptions/status/:channelId`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatus {
    #[serde(default)]
    pub is_subscribed: bool,
}

/// Aggregate channel counters for the insights page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    #[serde(default)]
    pub total_videos: i64,
    #[serde(default)]
    pub total_subscribers: i64,
    #[serde(default)]
    pub total_video_likes: i64,
    #[serde(default)]
    pub total_tweet_likes: i64,
    #[serde(default)]
    pub total_views: i64,
}

/// One like event on the insights timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// ISO 8601 timestamp of the like.
    pub time: String,
}

/// Payload of `GET /search?q=`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub videos: Vec<Video>,
}

//! Like and subscription endpoints.
//!
//! DESIGN
//! ======
//! The toggle endpoints report their outcome in the envelope `message`
//! ("liked" / "unliked", "subscribed" / "unsubscribed") rather than a typed
//! flag, so the outcome parsers below are the single place that interprets
//! those strings. The negative form must be checked first: "unliked"
//! contains "liked".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_social_test.rs"]
mod api_social_test;

use crate::net::error::ApiError;
use crate::net::types::{Subscription, SubscriptionStatus, TweetLikeOutcome, Video};

#[cfg(any(test, feature = "csr"))]
fn video_like_endpoint(video_id: &str) -> String {
    format!("/likes/toggle/v/{video_id}")
}

#[cfg(any(test, feature = "csr"))]
fn tweet_like_endpoint(tweet_id: &str) -> String {
    format!("/likes/toggle/t/{tweet_id}")
}

#[cfg(any(test, feature = "csr"))]
fn channel_endpoint(channel_id: &str) -> String {
    format!("/subscriptions/c/{channel_id}")
}

#[cfg(any(test, feature = "csr"))]
fn status_endpoint(channel_id: &str) -> String {
    format!("/subscriptions/status/{channel_id}")
}

fn outcome(message: &str, negative: &str, positive: &str) -> Option<bool> {
    let message = message.to_lowercase();
    if message.contains(negative) {
        Some(false)
    } else if message.contains(positive) {
        Some(true)
    } else {
        None
    }
}

/// Interpret a video-like toggle message: `Some(true)` means now liked.
pub fn like_outcome(message: &str) -> Option<bool> {
    outcome(message, "unliked", "liked")
}

/// Interpret a subscription toggle message: `Some(true)` means now
/// subscribed.
pub fn subscription_outcome(message: &str) -> Option<bool> {
    outcome(message, "unsubscribed", "subscribed")
}

/// Toggle the current user's like on a video; returns the server message.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn toggle_video_like(video_id: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::post_empty::<serde_json::Value>(&video_like_endpoint(video_id))
            .await
            .map(|envelope| envelope.message)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = video_id;
        Err(ApiError::unavailable())
    }
}

/// Toggle the current user's like on a tweet; returns the typed outcome.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn toggle_tweet_like(tweet_id: &str) -> Result<TweetLikeOutcome, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::post_empty(&tweet_like_endpoint(tweet_id))
            .await
            .map(|envelope| envelope.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = tweet_id;
        Err(ApiError::unavailable())
    }
}

/// Fetch every video the current user has liked via `GET /likes/videos`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn liked_videos() -> Result<Vec<Video>, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data("/likes/videos").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch the channels a user follows via `GET /subscriptions/c/:userId`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn subscriptions(user_id: &str) -> Result<Vec<Subscription>, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data(&channel_endpoint(user_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user_id;
        Err(ApiError::unavailable())
    }
}

/// Ask whether the current user follows a channel.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn subscription_status(channel_id: &str) -> Result<SubscriptionStatus, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data(&status_endpoint(channel_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = channel_id;
        Err(ApiError::unavailable())
    }
}

/// Follow or unfollow a channel; returns the server message.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn toggle_subscription(channel_id: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::post_empty::<serde_json::Value>(&channel_endpoint(channel_id))
            .await
            .map(|envelope| envelope.message)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = channel_id;
        Err(ApiError::unavailable())
    }
}

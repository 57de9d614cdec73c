//! Tweet-style post endpoints.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_tweets_test.rs"]
mod api_tweets_test;

use crate::net::error::ApiError;
use crate::net::types::Tweet;

#[cfg(any(test, feature = "csr"))]
fn tweet_endpoint(tweet_id: &str) -> String {
    format!("/tweets/{tweet_id}")
}

/// Fetch the global post feed via `GET /tweets/all`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_all() -> Result<Vec<Tweet>, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data("/tweets/all").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Publish a post via `POST /tweets`; returns the stored post.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn create(content: &str) -> Result<Tweet, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "content": content });
        super::post_json("/tweets", &payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = content;
        Err(ApiError::unavailable())
    }
}

/// Edit a post via `PATCH /tweets/:id`; returns the updated post.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn update(tweet_id: &str, content: &str) -> Result<Tweet, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "content": content });
        super::patch_json(&tweet_endpoint(tweet_id), &payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (tweet_id, content);
        Err(ApiError::unavailable())
    }
}

/// Delete a post via `DELETE /tweets/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn delete(tweet_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        super::delete_data::<serde_json::Value>(&tweet_endpoint(tweet_id))
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = tweet_id;
        Err(ApiError::unavailable())
    }
}

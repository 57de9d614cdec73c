//! Comment endpoints for the watch page.
//!
//! Listing is addressed by video, mutation by comment (`/comments/c/:id`).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_comments_test.rs"]
mod api_comments_test;

use crate::net::error::ApiError;
use crate::net::types::Comment;

#[cfg(any(test, feature = "csr"))]
fn list_endpoint(video_id: &str) -> String {
    format!("/comments/{video_id}?page=1&limit=20")
}

#[cfg(any(test, feature = "csr"))]
fn video_endpoint(video_id: &str) -> String {
    format!("/comments/{video_id}")
}

#[cfg(any(test, feature = "csr"))]
fn comment_endpoint(comment_id: &str) -> String {
    format!("/comments/c/{comment_id}")
}

/// Fetch the first page of comments for a video.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch(video_id: &str) -> Result<Vec<Comment>, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data(&list_endpoint(video_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = video_id;
        Err(ApiError::unavailable())
    }
}

/// Post a comment via `POST /comments/:videoId`; returns the stored comment.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn add(video_id: &str, content: &str) -> Result<Comment, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "content": content });
        super::post_json(&video_endpoint(video_id), &payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (video_id, content);
        Err(ApiError::unavailable())
    }
}

/// Edit a comment via `PATCH /comments/c/:id`; returns the updated comment.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn update(comment_id: &str, content: &str) -> Result<Comment, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "content": content });
        super::patch_json(&comment_endpoint(comment_id), &payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (comment_id, content);
        Err(ApiError::unavailable())
    }
}

/// Delete a comment via `DELETE /comments/c/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn delete(comment_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        super::delete_data::<serde_json::Value>(&comment_endpoint(comment_id))
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = comment_id;
        Err(ApiError::unavailable())
    }
}

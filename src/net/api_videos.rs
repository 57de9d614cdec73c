//! Video CRUD and feed endpoints.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_videos_test.rs"]
mod api_videos_test;

use crate::net::error::ApiError;
use crate::net::types::Video;

#[cfg(any(test, feature = "csr"))]
fn video_endpoint(video_id: &str) -> String {
    format!("/videos/{video_id}")
}

#[cfg(any(test, feature = "csr"))]
fn owner_query(user_id: &str) -> String {
    format!("/videos?userId={user_id}&sortBy=createdAt&sortType=desc")
}

/// Fetch the public feed via `GET /videos/public`. Works unauthenticated.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_public() -> Result<Vec<Video>, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data("/videos/public").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch the full authenticated feed via `GET /videos` (watch-page up-next).
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_all() -> Result<Vec<Video>, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data("/videos").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch one channel's uploads, newest first.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_by_owner(user_id: &str) -> Result<Vec<Video>, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data(&owner_query(user_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user_id;
        Err(ApiError::unavailable())
    }
}

/// Fetch a single video with its like state via `GET /videos/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_video(video_id: &str) -> Result<Video, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data(&video_endpoint(video_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = video_id;
        Err(ApiError::unavailable())
    }
}

/// Publish a video via multipart `POST /videos`.
///
/// The form carries `title`, `description`, the `videoFile`, and a
/// `thumbnail` image.
///
/// # Errors
///
/// Returns an [`ApiError`] if the upload fails.
#[cfg(feature = "csr")]
pub async fn upload(form: &web_sys::FormData) -> Result<Video, ApiError> {
    super::post_form("/videos/", form).await
}

/// Update title/description/thumbnail via multipart `PATCH /videos/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the update fails.
#[cfg(feature = "csr")]
pub async fn update(video_id: &str, form: &web_sys::FormData) -> Result<Video, ApiError> {
    super::patch_form(&video_endpoint(video_id), form).await
}

/// Delete a video via `DELETE /videos/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the deletion fails.
pub async fn delete(video_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        super::delete_data::<serde_json::Value>(&video_endpoint(video_id))
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = video_id;
        Err(ApiError::unavailable())
    }
}

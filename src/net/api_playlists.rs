//! Playlist endpoints.
//!
//! Membership changes go through dedicated `add`/`remove` routes rather than
//! a playlist PATCH, mirroring the backend's route table.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_playlists_test.rs"]
mod api_playlists_test;

use crate::net::error::ApiError;
use crate::net::types::Playlist;

#[cfg(any(test, feature = "csr"))]
fn playlist_endpoint(playlist_id: &str) -> String {
    format!("/playlist/{playlist_id}")
}

#[cfg(any(test, feature = "csr"))]
fn user_endpoint(user_id: &str) -> String {
    format!("/playlist/user/{user_id}")
}

#[cfg(any(test, feature = "csr"))]
fn add_endpoint(video_id: &str, playlist_id: &str) -> String {
    format!("/playlist/add/{video_id}/{playlist_id}")
}

#[cfg(any(test, feature = "csr"))]
fn remove_endpoint(video_id: &str, playlist_id: &str) -> String {
    format!("/playlist/remove/{video_id}/{playlist_id}")
}

/// Create a playlist via `POST /playlist`; returns the stored playlist.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn create(name: &str, description: &str) -> Result<Playlist, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "name": name, "description": description });
        super::post_json("/playlist/", &payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (name, description);
        Err(ApiError::unavailable())
    }
}

/// Fetch every playlist a user owns via `GET /playlist/user/:userId`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn for_user(user_id: &str) -> Result<Vec<Playlist>, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data(&user_endpoint(user_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user_id;
        Err(ApiError::unavailable())
    }
}

/// Fetch one playlist with its populated videos via `GET /playlist/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch(playlist_id: &str) -> Result<Playlist, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data(&playlist_endpoint(playlist_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = playlist_id;
        Err(ApiError::unavailable())
    }
}

/// Rename/redescribe a playlist via `PATCH /playlist/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn update(playlist_id: &str, name: &str, description: &str) -> Result<Playlist, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "name": name, "description": description });
        super::patch_json(&playlist_endpoint(playlist_id), &payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (playlist_id, name, description);
        Err(ApiError::unavailable())
    }
}

/// Delete a playlist via `DELETE /playlist/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn delete(playlist_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        super::delete_data::<serde_json::Value>(&playlist_endpoint(playlist_id))
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = playlist_id;
        Err(ApiError::unavailable())
    }
}

/// Add a video to a playlist via `PATCH /playlist/add/:videoId/:playlistId`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn add_video(video_id: &str, playlist_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        super::patch_empty::<serde_json::Value>(&add_endpoint(video_id, playlist_id))
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (video_id, playlist_id);
        Err(ApiError::unavailable())
    }
}

/// Remove a video via `PATCH /playlist/remove/:videoId/:playlistId`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn remove_video(video_id: &str, playlist_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        super::patch_empty::<serde_json::Value>(&remove_endpoint(video_id, playlist_id))
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (video_id, playlist_id);
        Err(ApiError::unavailable())
    }
}

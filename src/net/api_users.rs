//! Account and profile endpoints.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_users_test.rs"]
mod api_users_test;

use crate::net::error::ApiError;
use crate::net::types::{AuthPayload, ChannelProfile, User, Video};

#[cfg(any(test, feature = "csr"))]
fn channel_endpoint(user_name: &str) -> String {
    format!("/users/channel/{user_name}")
}

#[cfg(any(test, feature = "csr"))]
fn watch_endpoint(video_id: &str) -> String {
    format!("/users/watch/{video_id}")
}

/// Exchange credentials for a session via `POST /users/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, rejected credentials, or a
/// malformed response. Callers surface a single uniform message regardless.
pub async fn login(email: &str, password: &str) -> Result<AuthPayload, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        super::post_json("/users/login", &payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ApiError::unavailable())
    }
}

/// Create an account via multipart `POST /users/register`.
///
/// The form carries `fullName`, `userName`, `email`, `password` and the
/// `avatar`/`coverImage` files.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request or registration fails.
#[cfg(feature = "csr")]
pub async fn register(form: &web_sys::FormData) -> Result<User, ApiError> {
    super::post_form("/users/register", form).await
}

/// Fetch the authenticated account via `GET /users/current-user`.
///
/// # Errors
///
/// Returns an [`ApiError`] on failure; `Auth` when the token has expired.
pub async fn current_user() -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data("/users/current-user").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Update name and email via `PATCH /users/update-account`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn update_account(full_name: &str, email: &str) -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "fullName": full_name, "email": email });
        super::patch_json("/users/update-account", &payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (full_name, email);
        Err(ApiError::unavailable())
    }
}

/// Change the account password via `POST /users/change-password`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the old password is wrong.
pub async fn change_password(old_password: &str, new_password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({
            "oldPassword": old_password,
            "newPassword": new_password,
        });
        super::post_json::<serde_json::Value, _>("/users/change-password", &payload)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (old_password, new_password);
        Err(ApiError::unavailable())
    }
}

/// Replace the avatar image via multipart `PATCH /users/avatar`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the upload fails.
#[cfg(feature = "csr")]
pub async fn update_avatar(form: &web_sys::FormData) -> Result<User, ApiError> {
    super::patch_form("/users/avatar", form).await
}

/// Replace the cover image via multipart `PATCH /users/coverImage`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the upload fails.
#[cfg(feature = "csr")]
pub async fn update_cover(form: &web_sys::FormData) -> Result<User, ApiError> {
    super::patch_form("/users/coverImage", form).await
}

/// Fetch a channel page (profile + counters) by username.
///
/// # Errors
///
/// Returns an [`ApiError`]; `Server(404)` when the channel does not exist.
pub async fn channel(user_name: &str) -> Result<ChannelProfile, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data(&channel_endpoint(user_name)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user_name;
        Err(ApiError::unavailable())
    }
}

/// Fetch the watch history via `GET /users/watchHistory`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn watch_history() -> Result<Vec<Video>, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data("/users/watchHistory").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Record a view in the watch history via `POST /users/watch/:videoId`.
/// Best-effort from the watch page; failures are logged, not surfaced.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn record_watch(video_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        super::post_empty::<serde_json::Value>(&watch_endpoint(video_id))
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = video_id;
        Err(ApiError::unavailable())
    }
}

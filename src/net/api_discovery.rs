//! Search and channel-insights endpoints.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_discovery_test.rs"]
mod api_discovery_test;

use crate::net::error::ApiError;
use crate::net::types::{ChannelStats, SearchResults, TimelineEntry, Video};

#[cfg(any(test, feature = "csr"))]
fn search_endpoint(encoded_query: &str) -> String {
    format!("/search?q={encoded_query}")
}

#[cfg(feature = "csr")]
fn encode_query(query: &str) -> String {
    String::from(js_sys::encode_uri_component(query))
}

/// Search users and videos via `GET /search?q=`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn search(query: &str) -> Result<SearchResults, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data(&search_endpoint(&encode_query(query))).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = query;
        Err(ApiError::unavailable())
    }
}

/// Fetch the channel's aggregate counters via `GET /dashboard/stats`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn channel_stats() -> Result<ChannelStats, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data("/dashboard/stats").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch the channel's own uploads with counters via `GET /dashboard/videos`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn channel_videos() -> Result<Vec<Video>, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data("/dashboard/videos").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Fetch the like-event timeline via `GET /dashboard/timeline`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn like_timeline() -> Result<Vec<TimelineEntry>, ApiError> {
    #[cfg(feature = "csr")]
    {
        super::get_data("/dashboard/timeline").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::unavailable())
    }
}

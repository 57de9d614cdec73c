//! REST request plumbing shared by every endpoint module.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, with the bearer token
//! from the session store attached to every request. Without the feature the
//! endpoint functions are stubs returning a network error, so unit tests and
//! non-browser builds compile cleanly.
//!
//! ERROR HANDLING
//! ==============
//! Every response is mapped onto [`ApiError`] before a view sees it: transport
//! failures become `Network`, 401 becomes `Auth`, other non-2xx statuses
//! become `Server(status)`, and body decode failures become `Parse`. Views
//! never inspect raw HTTP responses.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[path = "api_comments.rs"]
pub mod comments;
#[path = "api_discovery.rs"]
pub mod discovery;
#[path = "api_playlists.rs"]
pub mod playlists;
#[path = "api_social.rs"]
pub mod social;
#[path = "api_tweets.rs"]
pub mod tweets;
#[path = "api_users.rs"]
pub mod users;
#[path = "api_videos.rs"]
pub mod videos;

#[cfg(feature = "csr")]
use gloo_net::http::{Request, RequestBuilder};
#[cfg(feature = "csr")]
use serde::Serialize;
#[cfg(feature = "csr")]
use serde::de::DeserializeOwned;

#[cfg(feature = "csr")]
use super::error::ApiError;
#[cfg(feature = "csr")]
use super::types::Envelope;

/// All endpoints live under one versioned base path; the dev server or a
/// reverse proxy maps it to the backend host.
#[cfg(any(test, feature = "csr"))]
const API_BASE: &str = "/api/v1";

#[cfg(any(test, feature = "csr"))]
fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Attach the stored access token, if any. Unauthenticated endpoints simply
/// go out without the header.
#[cfg(feature = "csr")]
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match crate::state::session::stored_access_token() {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

#[cfg(feature = "csr")]
async fn dispatch<T: DeserializeOwned>(
    request: Result<Request, gloo_net::Error>,
) -> Result<Envelope<T>, ApiError> {
    let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if let Some(err) = ApiError::from_status(response.status()) {
        return Err(err);
    }
    response
        .json::<Envelope<T>>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(feature = "csr")]
pub(super) async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    Ok(dispatch(authorize(Request::get(&url(path))).build())
        .await?
        .data)
}

#[cfg(feature = "csr")]
pub(super) async fn delete_data<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    Ok(dispatch(authorize(Request::delete(&url(path))).build())
        .await?
        .data)
}

#[cfg(feature = "csr")]
pub(super) async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<Envelope<T>, ApiError> {
    dispatch(authorize(Request::post(&url(path))).build()).await
}

#[cfg(feature = "csr")]
pub(super) async fn patch_empty<T: DeserializeOwned>(path: &str) -> Result<Envelope<T>, ApiError> {
    dispatch(authorize(Request::patch(&url(path))).build()).await
}

#[cfg(feature = "csr")]
pub(super) async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    Ok(dispatch(authorize(Request::post(&url(path))).json(body))
        .await?
        .data)
}

#[cfg(feature = "csr")]
pub(super) async fn patch_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    Ok(dispatch(authorize(Request::patch(&url(path))).json(body))
        .await?
        .data)
}

#[cfg(feature = "csr")]
pub(super) async fn post_form<T: DeserializeOwned>(
    path: &str,
    form: &web_sys::FormData,
) -> Result<T, ApiError> {
    Ok(dispatch(authorize(Request::post(&url(path))).body(form.clone()))
        .await?
        .data)
}

#[cfg(feature = "csr")]
pub(super) async fn patch_form<T: DeserializeOwned>(
    path: &str,
    form: &web_sys::FormData,
) -> Result<T, ApiError> {
    Ok(dispatch(authorize(Request::patch(&url(path))).body(form.clone()))
        .await?
        .data)
}

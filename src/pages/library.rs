//! Personal library screens: watch history and liked videos.
//!
//! Both are plain fetch-on-mount grids over authenticated endpoints; an auth
//! failure renders the login hint inline rather than redirecting, since the
//! lists are reachable from the navbar at any time.

use leptos::prelude::*;

use crate::components::video_card::VideoCard;
use crate::net::error::ApiError;
use crate::net::types::Video;
use crate::state::cache::VideoCache;

fn video_grid(list: Vec<Video>, empty_message: &'static str) -> AnyView {
    if list.is_empty() {
        view! { <p class="page-status">{empty_message}</p> }.into_any()
    } else {
        view! {
            <div class="video-grid">
                {list
                    .into_iter()
                    .map(|video| view! { <VideoCard video=video/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    }
}

fn fetch_error_view(err: &ApiError, login_hint: &'static str) -> AnyView {
    let message = if err.is_auth() {
        login_hint
    } else {
        "Failed to load videos."
    };
    view! { <p class="page-status page-status--error">{message}</p> }.into_any()
}

/// Watch history, newest first.
#[component]
pub fn HistoryPage() -> impl IntoView {
    let cache = expect_context::<RwSignal<VideoCache>>();
    let history = LocalResource::new(|| crate::net::api::users::watch_history());

    Effect::new(move || {
        if let Some(Ok(list)) = history.get() {
            cache.update(|c| c.insert_all(list));
        }
    });

    view! {
        <div class="feed-page">
            <h1>"Watch History"</h1>
            <Suspense fallback=move || {
                view! { <p class="page-status">"Loading watch history..."</p> }
            }>
                {move || {
                    history
                        .get()
                        .map(|result| match result {
                            Ok(list) => video_grid(list, "No watch history available."),
                            Err(err) => {
                                fetch_error_view(&err, "Please log in to view watch history.")
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Every video the user has liked.
#[component]
pub fn LikedVideosPage() -> impl IntoView {
    let cache = expect_context::<RwSignal<VideoCache>>();
    let liked = LocalResource::new(|| crate::net::api::social::liked_videos());

    Effect::new(move || {
        if let Some(Ok(list)) = liked.get() {
            cache.update(|c| c.insert_all(list));
        }
    });

    view! {
        <div class="feed-page">
            <h1>"Liked Videos"</h1>
            <Suspense fallback=move || {
                view! { <p class="page-status">"Loading liked videos..."</p> }
            }>
                {move || {
                    liked
                        .get()
                        .map(|result| match result {
                            Ok(list) => video_grid(list, "You haven't liked any videos yet."),
                            Err(err) => {
                                fetch_error_view(&err, "Please log in to view liked videos.")
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

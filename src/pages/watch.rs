//! Watch page: playback, likes, comments, subscription, and the up-next rail.
//!
//! Everything the screen needs loads in parallel on mount; the subscription
//! check alone waits for the video, since it needs the owner's id. The view
//! is also recorded to watch history, best effort.

#![allow(clippy::too_many_lines)]

#[cfg(test)]
#[path = "watch_test.rs"]
mod watch_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::comment_thread::CommentThread;
use crate::net::types::Comment;
use crate::state::cache::VideoCache;
use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use crate::util::auth::expire_on_auth_error;
use crate::util::format;

/// Adjust a like counter for a toggle outcome; never goes negative.
#[cfg(any(test, feature = "csr"))]
fn adjusted_like_count(count: i64, liked: bool) -> i64 {
    if liked { count + 1 } else { (count - 1).max(0) }
}

#[component]
pub fn WatchPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cache = expect_context::<RwSignal<VideoCache>>();
    let params = use_params_map();
    let video_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let video = RwSignal::new(None::<crate::net::types::Video>);
    let load_error = RwSignal::new(String::new());
    let like_count = RwSignal::new(0_i64);
    let is_liked = RwSignal::new(false);
    let comments = RwSignal::new(Vec::<Comment>::new());
    let is_subscribed = RwSignal::new(false);
    let sub_check_done = RwSignal::new(false);
    let subscribing = RwSignal::new(false);

    // Load video + comments for the current route param.
    Effect::new(move || {
        let id = video_id.get();
        if id.is_empty() {
            return;
        }
        // Show the cached copy immediately while the fetch is in flight.
        if let Some(cached) = cache.with_untracked(|c| c.get(&id)) {
            like_count.set(cached.like_count);
            is_liked.set(cached.is_liked_by_current_user);
            video.set(Some(cached));
        }

        #[cfg(feature = "csr")]
        {
            let fetch_id = id.clone();
            leptos::task::spawn_local(async move {
                let (video_res, comments_res) = futures::join!(
                    crate::net::api::videos::fetch_video(&fetch_id),
                    crate::net::api::comments::fetch(&fetch_id),
                );
                match video_res {
                    Ok(fetched) => {
                        cache.update(|c| c.insert(fetched.clone()));
                        like_count.set(fetched.like_count);
                        is_liked.set(fetched.is_liked_by_current_user);
                        let owner_id = fetched.owner.as_ref().map(|o| o.id.clone());
                        video.set(Some(fetched));
                        load_error.set(String::new());
                        // Subscription state needs the owner id.
                        if let Some(owner_id) = owner_id {
                            match crate::net::api::social::subscription_status(&owner_id).await {
                                Ok(status) => is_subscribed.set(status.is_subscribed),
                                Err(err) => log::warn!("subscription check failed: {err}"),
                            }
                        }
                        sub_check_done.set(true);
                    }
                    Err(err) => {
                        log::warn!("failed to load video: {err}");
                        if expire_on_auth_error(session, &err) {
                            load_error
                                .set("You must be logged in to view this video.".to_owned());
                        } else {
                            load_error.set("Failed to load video.".to_owned());
                        }
                    }
                }
                match comments_res {
                    Ok(list) => comments.set(list),
                    Err(err) => log::warn!("failed to fetch comments: {err}"),
                }
            });

            // Record the view in watch history, best effort.
            let history_id = id;
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::net::api::users::record_watch(&history_id).await {
                    log::warn!("failed to record watch history: {err}");
                }
            });
        }
    });

    let up_next = LocalResource::new(|| crate::net::api::videos::fetch_all());
    Effect::new(move || {
        if let Some(Ok(list)) = up_next.get() {
            cache.update(|c| c.insert_all(list));
        }
    });

    let on_like = move |_| {
        #[cfg(feature = "csr")]
        {
            let id = video_id.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::social::toggle_video_like(&id).await {
                    Ok(message) => {
                        if let Some(liked) = crate::net::api::social::like_outcome(&message) {
                            is_liked.set(liked);
                            like_count.update(|count| *count = adjusted_like_count(*count, liked));
                        }
                    }
                    Err(err) => {
                        log::warn!("like toggle failed: {err}");
                        let _ = expire_on_auth_error(session, &err);
                    }
                }
            });
        }
    };

    let on_subscribe = move |_| {
        if subscribing.get() {
            return;
        }
        let Some(owner_id) = video.with_untracked(|v| {
            v.as_ref()
                .and_then(|v| v.owner.as_ref().map(|o| o.id.clone()))
        }) else {
            return;
        };
        subscribing.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::social::toggle_subscription(&owner_id).await {
                Ok(message) => match crate::net::api::social::subscription_outcome(&message) {
                    Some(true) => {
                        is_subscribed.set(true);
                        crate::util::notify::alert("Subscribed successfully");
                    }
                    Some(false) => {
                        is_subscribed.set(false);
                        crate::util::notify::alert("Unsubscribed successfully");
                    }
                    None => {}
                },
                Err(err) => {
                    log::warn!("subscription toggle failed: {err}");
                    if !expire_on_auth_error(session, &err) {
                        crate::util::notify::alert("Something went wrong");
                    }
                }
            }
            subscribing.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = owner_id;
            subscribing.set(false);
        }
    };

    view! {
        <div class="watch-page">
            <div class="watch-page__main">
                {move || {
                    let err = load_error.get();
                    if !err.is_empty() {
                        return view! { <p class="page-status page-status--error">{err}</p> }
                            .into_any();
                    }
                    let Some(v) = video.get() else {
                        return view! { <p class="page-status">"Loading..."</p> }.into_any();
                    };
                    let owner = v.owner.clone().unwrap_or_default();
                    let is_own = session.get().user.is_some_and(|u| u.id == owner.id);
                    let channel_href = format!("/channel/{}", owner.user_name);
                    let playlist_href = format!("/add-to-playlist/{}", v.id);
                    view! {
                        <div class="watch-page__player">
                            <video
                                src=v.video_file.clone().unwrap_or_default()
                                controls=true
                                autoplay=true
                            ></video>
                        </div>

                        <h1 class="watch-page__title">
                            {v.title.clone()}
                            <span class="watch-page__views">
                                {format::views_label(v.view)}
                            </span>
                        </h1>

                        <div class="watch-page__description">
                            <span>{v.description.clone()}</span>
                            <div class="watch-page__actions">
                                <A href=playlist_href attr:class="btn btn--small btn--primary">
                                    "+ Add to Playlist"
                                </A>
                                <button
                                    class=move || {
                                        if is_liked.get() {
                                            "btn btn--small btn--liked"
                                        } else {
                                            "btn btn--small"
                                        }
                                    }
                                    title=move || if is_liked.get() { "Unlike" } else { "Like" }
                                    on:click=on_like
                                >
                                    {move || {
                                        format!(
                                            "{} {}",
                                            if is_liked.get() { "♥" } else { "♡" },
                                            like_count.get(),
                                        )
                                    }}
                                </button>
                            </div>
                        </div>

                        <div class="watch-page__channel">
                            <A href=channel_href attr:class="watch-page__channel-link">
                                <img
                                    class="watch-page__channel-avatar"
                                    src=owner
                                        .avatar
                                        .clone()
                                        .unwrap_or_else(|| "/default-avatar.png".to_owned())
                                    alt="Channel avatar"
                                />
                                <div>
                                    <h2>{owner.full_name.clone()}</h2>
                                    <p class="watch-page__channel-email">{owner.email.clone()}</p>
                                </div>
                            </A>
                            <Show when=move || sub_check_done.get() && !is_own>
                                <button
                                    class=move || {
                                        if is_subscribed.get() {
                                            "btn btn--subscribed"
                                        } else {
                                            "btn btn--danger"
                                        }
                                    }
                                    disabled=move || subscribing.get()
                                    on:click=on_subscribe
                                >
                                    {move || {
                                        if subscribing.get() {
                                            "Processing..."
                                        } else if is_subscribed.get() {
                                            "Unsubscribe"
                                        } else {
                                            "Subscribe"
                                        }
                                    }}
                                </button>
                            </Show>
                        </div>

                        <CommentThread video_id=video_id comments=comments/>
                    }
                        .into_any()
                }}
            </div>

            <div class="watch-page__sidebar">
                <h3 class="watch-page__sidebar-title">"Up Next"</h3>
                <Suspense fallback=move || {
                    view! { <p class="page-status">"Loading suggestions..."</p> }
                }>
                    {move || {
                        up_next
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    view! {
                                        <div class="up-next">
                                            {list
                                                .into_iter()
                                                .filter(|v| v.id != video_id.get())
                                                .map(|v| {
                                                    let watch_href = format!("/watch/{}", v.id);
                                                    let playlist_href = format!(
                                                        "/add-to-playlist/{}",
                                                        v.id,
                                                    );
                                                    let owner_name = v
                                                        .owner
                                                        .as_ref()
                                                        .map_or_else(
                                                            || "Unknown".to_owned(),
                                                            |o| o.full_name.clone(),
                                                        );
                                                    let description = if v.description.is_empty() {
                                                        "No description".to_owned()
                                                    } else {
                                                        v.description.clone()
                                                    };
                                                    view! {
                                                        <div class="up-next__item">
                                                            <A href=watch_href.clone()>
                                                                <img
                                                                    class="up-next__thumb"
                                                                    src=v
                                                                        .thumbnail
                                                                        .clone()
                                                                        .unwrap_or_else(|| {
                                                                            "/placeholder-thumb.png".to_owned()
                                                                        })
                                                                    alt="Related video"
                                                                />
                                                            </A>
                                                            <div class="up-next__meta">
                                                                <A href=watch_href>
                                                                    <p class="up-next__title">{v.title.clone()}</p>
                                                                </A>
                                                                <p class="up-next__owner">{owner_name}</p>
                                                                <p class="up-next__description">{description}</p>
                                                                <A
                                                                    href=playlist_href
                                                                    attr:class="up-next__playlist-link"
                                                                >
                                                                    "+ Add to Playlist"
                                                                </A>
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(_) => {
                                    view! {
                                        <p class="page-status">"Failed to load suggestions."</p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}

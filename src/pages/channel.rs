//! Another user's channel page: profile header, uploads, subscribe toggle.

#![allow(clippy::too_many_lines)]

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::types::{ChannelProfile, Video};
use crate::state::cache::VideoCache;
use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use crate::util::auth::expire_on_auth_error;

#[component]
pub fn ChannelPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cache = expect_context::<RwSignal<VideoCache>>();
    let params = use_params_map();
    let user_name = Memo::new(move |_| params.with(|p| p.get("username").unwrap_or_default()));

    let profile = RwSignal::new(None::<ChannelProfile>);
    let videos = RwSignal::new(Vec::<Video>::new());
    let load_error = RwSignal::new(String::new());
    let is_subscribed = RwSignal::new(false);
    let subscribing = RwSignal::new(false);

    // Profile first; uploads and subscription state need the channel id.
    Effect::new(move || {
        let name = user_name.get();
        if name.is_empty() {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let fetched = match crate::net::api::users::channel(&name).await {
                Ok(p) => p,
                Err(err) => {
                    log::warn!("channel fetch failed: {err}");
                    if !expire_on_auth_error(session, &err) {
                        load_error.set("Failed to load profile".to_owned());
                    }
                    return;
                }
            };
            let channel_id = fetched.id.clone();
            profile.set(Some(fetched));

            let (videos_res, status_res) = futures::join!(
                crate::net::api::videos::fetch_by_owner(&channel_id),
                crate::net::api::social::subscription_status(&channel_id),
            );
            match videos_res {
                Ok(list) => {
                    cache.update(|c| c.insert_all(list.clone()));
                    videos.set(list);
                }
                Err(err) => log::warn!("failed to fetch channel videos: {err}"),
            }
            match status_res {
                Ok(status) => is_subscribed.set(status.is_subscribed),
                Err(err) => log::warn!("subscription check failed: {err}"),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name, cache);
        }
    });

    let on_subscribe = move |_| {
        if subscribing.get() {
            return;
        }
        let Some(channel_id) = profile.with_untracked(|p| p.as_ref().map(|p| p.id.clone()))
        else {
            return;
        };
        subscribing.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::social::toggle_subscription(&channel_id).await {
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
                        crate::util::notify::alert("Something went wrong. Please try again.");
                    }
                }
            }
            subscribing.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = channel_id;
            subscribing.set(false);
        }
    };

    view! {
        <div class="profile-page">
            <Show when=move || !load_error.get().is_empty()>
                <p class="page-status page-status--error">{move || load_error.get()}</p>
            </Show>

            <Show when=move || load_error.get().is_empty() && profile.get().is_none()>
                <p class="page-status">"Loading profile..."</p>
            </Show>

            {move || {
                profile
                    .get()
                    .map(|p| {
                        let cover = p
                            .cover_image
                            .clone()
                            .unwrap_or_else(|| "/placeholder-cover.png".to_owned());
                        let avatar = p
                            .avatar
                            .clone()
                            .unwrap_or_else(|| "/default-avatar.png".to_owned());
                        let is_own =
                            session.get().user.is_some_and(|u| u.id == p.id);
                        view! {
                            <div
                                class="profile-page__cover"
                                style=format!("background-image: url({cover})")
                            ></div>
                            <div class="profile-page__header">
                                <img class="profile-page__avatar" src=avatar alt="Avatar"/>
                                <div class="profile-page__identity">
                                    <h1>{p.full_name.clone()}</h1>
                                    <p class="profile-page__email">{p.email.clone()}</p>
                                    <p class="profile-page__counts">
                                        {format!(
                                            "{} Subscribers · {} Subscribed",
                                            p.subscribers_count,
                                            p.channels_subscribed_to_count,
                                        )}
                                    </p>
                                </div>
                                <Show when=move || !is_own>
                                    <button
                                        class=move || {
                                            if is_subscribed.get() {
                                                "btn btn--subscribed"
                                            } else {
                                                "btn btn--primary"
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
                        }
                    })
            }}

            <Show when=move || profile.get().is_some()>
                <div class="profile-page__content">
                    <h2>"Videos"</h2>
                    <Show
                        when=move || !videos.get().is_empty()
                        fallback=|| view! { <p class="page-status">"No videos uploaded yet."</p> }
                    >
                        <div class="video-grid">
                            {move || {
                                videos
                                    .get()
                                    .into_iter()
                                    .map(|video| {
                                        let watch_href = format!("/watch/{}", video.id);
                                        let title = video.title.clone();
                                        let title_alt = video.title.clone();
                                        view! {
                                            <div class="video-card">
                                                <A href=watch_href>
                                                    <img
                                                        class="video-card__thumb"
                                                        src=video
                                                            .thumbnail
                                                            .clone()
                                                            .unwrap_or_else(|| {
                                                                "/placeholder-thumb.png".to_owned()
                                                            })
                                                        alt=title_alt
                                                    />
                                                </A>
                                                <div class="video-card__body">
                                                    <h3 class="video-card__title">{title.clone()}</h3>
                                                    <p class="video-card__description">
                                                        {video.description.clone()}
                                                    </p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

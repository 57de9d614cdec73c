//! Own-channel profile with Videos / Following / Playlists tabs.
//!
//! Everything loads in parallel once the session user is known; each tab
//! renders from its own list signal, and playlist deletion edits the held
//! list without a re-fetch.

#![allow(clippy::too_many_lines)]

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::{ChannelProfile, Playlist, Subscription, Video};
use crate::state::cache::VideoCache;
use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use crate::util::auth::expire_on_auth_error;
use crate::util::auth::install_unauth_redirect;
use crate::util::notify;

/// Content sections of the profile page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ProfileTab {
    #[default]
    Videos,
    Following,
    Playlists,
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cache = expect_context::<RwSignal<VideoCache>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let profile = RwSignal::new(None::<ChannelProfile>);
    let videos = RwSignal::new(Vec::<Video>::new());
    let following = RwSignal::new(Vec::<Subscription>::new());
    let playlists = RwSignal::new(Vec::<Playlist>::new());
    let load_error = RwSignal::new(String::new());
    let active_tab = RwSignal::new(ProfileTab::default());

    Effect::new(move || {
        let Some(user) = session.get().user else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let user_name = user.user_name.clone();
            let user_id = user.id.clone();
            leptos::task::spawn_local(async move {
                let (profile_res, videos_res, following_res, playlists_res) = futures::join!(
                    crate::net::api::users::channel(&user_name),
                    crate::net::api::videos::fetch_by_owner(&user_id),
                    crate::net::api::social::subscriptions(&user_id),
                    crate::net::api::playlists::for_user(&user_id),
                );
                match profile_res {
                    Ok(p) => profile.set(Some(p)),
                    Err(err) => {
                        log::warn!("profile fetch failed: {err}");
                        if !expire_on_auth_error(session, &err) {
                            load_error.set("Failed to load profile.".to_owned());
                        }
                    }
                }
                match videos_res {
                    Ok(list) => {
                        cache.update(|c| c.insert_all(list.clone()));
                        videos.set(list);
                    }
                    Err(err) => log::warn!("failed to fetch videos: {err}"),
                }
                match following_res {
                    Ok(list) => following.set(list),
                    Err(err) => log::warn!("failed to fetch subscriptions: {err}"),
                }
                match playlists_res {
                    Ok(list) => playlists.set(list),
                    Err(err) => log::warn!("failed to fetch playlists: {err}"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user, cache);
        }
    });

    let on_delete_playlist = Callback::new(move |playlist_id: String| {
        if !notify::confirm("Are you sure you want to delete this playlist?") {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::playlists::delete(&playlist_id).await {
                Ok(()) => {
                    playlists.update(|list| list.retain(|p| p.id != playlist_id));
                }
                Err(err) => {
                    log::warn!("failed to delete playlist: {err}");
                    if !expire_on_auth_error(session, &err) {
                        notify::alert("Could not delete playlist.");
                    }
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = playlist_id;
        }
    });

    view! {
        <div class="profile-page">
            <Show when=move || !load_error.get().is_empty()>
                <p class="page-status page-status--error">{move || load_error.get()}</p>
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
                                <A href="/edit" attr:class="btn btn--primary">
                                    "Edit"
                                </A>
                            </div>
                        }
                    })
            }}

            <div class="profile-page__tabs">
                <button
                    class=move || tab_class(active_tab.get(), ProfileTab::Videos)
                    on:click=move |_| active_tab.set(ProfileTab::Videos)
                >
                    "Videos"
                </button>
                <button
                    class=move || tab_class(active_tab.get(), ProfileTab::Following)
                    on:click=move |_| active_tab.set(ProfileTab::Following)
                >
                    "Following"
                </button>
                <button
                    class=move || tab_class(active_tab.get(), ProfileTab::Playlists)
                    on:click=move |_| active_tab.set(ProfileTab::Playlists)
                >
                    "Playlists"
                </button>
            </div>

            <div class="profile-page__content">
                <Show when=move || active_tab.get() == ProfileTab::Videos>
                    <div class="profile-page__toolbar">
                        <A href="/upload" attr:class="btn btn--primary">
                            "Upload Video"
                        </A>
                    </div>
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
                                        let edit_href = format!("/edit-video/{}", video.id);
                                        let delete_href = format!("/delete-video/{}", video.id);
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
                                                    <div class="video-card__manage">
                                                        <A href=edit_href attr:class="btn btn--small btn--primary">
                                                            "Update"
                                                        </A>
                                                        <A href=delete_href attr:class="btn btn--small btn--danger">
                                                            "Delete"
                                                        </A>
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>

                <Show when=move || active_tab.get() == ProfileTab::Following>
                    <h2>"Channels You Follow"</h2>
                    <Show
                        when=move || !following.get().is_empty()
                        fallback=|| {
                            view! {
                                <p class="page-status">"You haven't followed any channels yet."</p>
                            }
                        }
                    >
                        <div class="channel-grid">
                            {move || {
                                following
                                    .get()
                                    .into_iter()
                                    .map(|sub| {
                                        let href = format!("/channel/{}", sub.channel.user_name);
                                        view! {
                                            <A href=href attr:class="channel-row">
                                                <img
                                                    class="channel-row__avatar"
                                                    src=sub
                                                        .channel
                                                        .avatar
                                                        .clone()
                                                        .unwrap_or_else(|| "/default-avatar.png".to_owned())
                                                    alt="Avatar"
                                                />
                                                <div>
                                                    <p class="channel-row__name">
                                                        {sub.channel.full_name.clone()}
                                                    </p>
                                                    <p class="channel-row__email">
                                                        {sub.channel.email.clone()}
                                                    </p>
                                                </div>
                                            </A>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>

                <Show when=move || active_tab.get() == ProfileTab::Playlists>
                    <div class="profile-page__toolbar">
                        <A href="/create-playlist" attr:class="btn btn--primary">
                            "Create Playlist"
                        </A>
                    </div>
                    <Show
                        when=move || !playlists.get().is_empty()
                        fallback=|| view! { <p class="page-status">"No playlists created yet."</p> }
                    >
                        <div class="playlist-grid">
                            {move || {
                                playlists
                                    .get()
                                    .into_iter()
                                    .map(|playlist| {
                                        let view_href = format!("/playlist/{}", playlist.id);
                                        let edit_href = format!("/edit-playlist/{}", playlist.id);
                                        let delete_id = playlist.id.clone();
                                        view! {
                                            <div class="playlist-card">
                                                <A href=view_href>
                                                    <h3 class="playlist-card__name">
                                                        {playlist.name.clone()}
                                                    </h3>
                                                </A>
                                                <p class="playlist-card__description">
                                                    {playlist.description.clone()}
                                                </p>
                                                <Show
                                                    when={
                                                        let empty = playlist.videos.is_empty();
                                                        move || !empty
                                                    }
                                                    fallback=|| {
                                                        view! {
                                                            <p class="playlist-card__empty">
                                                                "No videos in this playlist"
                                                            </p>
                                                        }
                                                    }
                                                >
                                                    <div class="playlist-card__previews">
                                                        {playlist
                                                            .videos
                                                            .clone()
                                                            .into_iter()
                                                            .map(|video| {
                                                                let href = format!("/watch/{}", video.id);
                                                                let title = video.title.clone();
                                                                let thumbnail = video
                                                                    .thumbnail
                                                                    .clone()
                                                                    .unwrap_or_else(|| {
                                                                        "/placeholder-thumb.png".to_owned()
                                                                    });
                                                                view! {
                                                                    <A href=href attr:class="playlist-card__preview">
                                                                        <img
                                                                            src=thumbnail
                                                                            alt=title.clone()
                                                                        />
                                                                        <span>{title.clone()}</span>
                                                                    </A>
                                                                }
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </div>
                                                </Show>
                                                <div class="playlist-card__manage">
                                                    <A href=edit_href attr:class="btn btn--small btn--primary">
                                                        "Edit"
                                                    </A>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| {
                                                            on_delete_playlist.run(delete_id.clone())
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}

fn tab_class(active: ProfileTab, tab: ProfileTab) -> &'static str {
    if active == tab {
        "profile-page__tab profile-page__tab--active"
    } else {
        "profile-page__tab"
    }
}

//! Playlist screens: create, view, edit, and add-a-video.

#![allow(clippy::too_many_lines)]

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::Playlist;
use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use crate::util::auth::expire_on_auth_error;
use crate::util::notify;

/// Standalone create-playlist form with inline success/error messages.
#[component]
pub fn CreatePlaylistPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        message.set(String::new());
        error.set(String::new());
        if !session.get_untracked().is_authenticated() {
            error.set("You must be logged in to create a playlist.".to_owned());
            return;
        }
        #[cfg(feature = "csr")]
        {
            let name_value = name.get_untracked().trim().to_owned();
            let description_value = description.get_untracked().trim().to_owned();
            leptos::task::spawn_local(async move {
                match crate::net::api::playlists::create(&name_value, &description_value).await {
                    Ok(_) => {
                        message.set("Playlist created".to_owned());
                        name.set(String::new());
                        description.set(String::new());
                    }
                    Err(err) => {
                        log::warn!("failed to create playlist: {err}");
                        if !expire_on_auth_error(session, &err) {
                            error.set("Failed to create playlist.".to_owned());
                        }
                    }
                }
            });
        }
    };

    view! {
        <div class="form-page">
            <form class="form-card" on:submit=on_submit>
                <h2>"Create Playlist"</h2>

                <Show when=move || !error.get().is_empty()>
                    <p class="page-status page-status--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !message.get().is_empty()>
                    <p class="page-status page-status--success">{move || message.get()}</p>
                </Show>

                <label class="form-card__label">
                    "Playlist Name"
                    <input
                        class="form-card__input"
                        type="text"
                        required=true
                        placeholder="e.g. My Chill Vibes"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-card__label">
                    "Description"
                    <textarea
                        class="form-card__input"
                        rows="4"
                        required=true
                        placeholder="What is this playlist about?"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <button class="btn btn--primary" type="submit">
                    "Create Playlist"
                </button>
            </form>
        </div>
    }
}

/// One playlist with its videos; removal asks for confirmation first.
#[component]
pub fn PlaylistPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let playlist_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let playlist = RwSignal::new(None::<Playlist>);
    let load_error = RwSignal::new(String::new());
    let removing = RwSignal::new(false);
    let pending_removal = RwSignal::new(None::<String>);

    Effect::new(move || {
        let id = playlist_id.get();
        if id.is_empty() {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::playlists::fetch(&id).await {
                Ok(p) => playlist.set(Some(p)),
                Err(err) => {
                    log::warn!("failed to fetch playlist: {err}");
                    if !expire_on_auth_error(session, &err) {
                        load_error.set("Unable to fetch playlist".to_owned());
                    }
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, session);
        }
    });

    let on_confirm_removal = Callback::new(move |()| {
        let Some(video_id) = pending_removal.get_untracked() else {
            return;
        };
        removing.set(true);
        #[cfg(feature = "csr")]
        {
            let id = playlist_id.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::playlists::remove_video(&video_id, &id).await {
                    Ok(()) => {
                        playlist.update(|p| {
                            if let Some(p) = p {
                                p.videos.retain(|v| v.id != video_id);
                            }
                        });
                        notify::alert("Video removed successfully.");
                    }
                    Err(err) => {
                        log::warn!("failed to remove video: {err}");
                        if !expire_on_auth_error(session, &err) {
                            notify::alert("Failed to remove video.");
                        }
                    }
                }
                removing.set(false);
                pending_removal.set(None);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = video_id;
            removing.set(false);
            pending_removal.set(None);
        }
    });

    let on_cancel_removal = Callback::new(move |()| pending_removal.set(None));

    view! {
        <div class="playlist-page">
            <Show when=move || !load_error.get().is_empty()>
                <p class="page-status page-status--error">{move || load_error.get()}</p>
            </Show>

            <Show when=move || load_error.get().is_empty() && playlist.get().is_none()>
                <p class="page-status">"Loading playlist..."</p>
            </Show>

            {move || {
                playlist
                    .get()
                    .map(|p| {
                        view! {
                            <h1>{p.name.clone()}</h1>
                            <p class="playlist-page__description">{p.description.clone()}</p>

                            <Show
                                when={
                                    let empty = p.videos.is_empty();
                                    move || !empty
                                }
                                fallback=|| {
                                    view! {
                                        <p class="page-status">"No videos in this playlist."</p>
                                    }
                                }
                            >
                                <div class="video-grid">
                                    {p
                                        .videos
                                        .clone()
                                        .into_iter()
                                        .map(|video| {
                                            let watch_href = format!("/watch/{}", video.id);
                                            let removal_id = video.id.clone();
                                            let title = video.title.clone();
                                            let title_alt = video.title.clone();
                                            let description = video.description.clone();
                                            let thumbnail = video
                                                .thumbnail
                                                .clone()
                                                .unwrap_or_else(|| {
                                                    "/placeholder-thumb.png".to_owned()
                                                });
                                            view! {
                                                <div class="video-card">
                                                    <A href=watch_href>
                                                        <img
                                                            class="video-card__thumb"
                                                            src=thumbnail
                                                            alt=title_alt
                                                        />
                                                    </A>
                                                    <div class="video-card__body">
                                                        <h3 class="video-card__title">{title.clone()}</h3>
                                                        <p class="video-card__description">
                                                            {description}
                                                        </p>
                                                        <button
                                                            class="btn btn--small btn--danger"
                                                            disabled=move || removing.get()
                                                            on:click=move |_| {
                                                                pending_removal.set(Some(removal_id.clone()))
                                                            }
                                                        >
                                                            {move || {
                                                                if removing.get() { "Removing..." } else { "Remove" }
                                                            }}
                                                        </button>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </Show>
                        }
                    })
            }}

            <Show when=move || pending_removal.get().is_some()>
                <ConfirmDialog
                    title="Remove Video"
                    message=String::from(
                        "Are you sure you want to remove this video from the playlist?",
                    )
                    confirm_label="Yes, Remove"
                    on_confirm=on_confirm_removal
                    on_cancel=on_cancel_removal
                />
            </Show>
        </div>
    }
}

/// Edit a playlist's name and description.
#[component]
pub fn EditPlaylistPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let playlist_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let load_error = RwSignal::new(String::new());
    let loaded = RwSignal::new(false);
    let navigate = use_navigate();

    Effect::new(move || {
        let id = playlist_id.get();
        if id.is_empty() {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::playlists::fetch(&id).await {
                Ok(p) => {
                    name.set(p.name);
                    description.set(p.description);
                    loaded.set(true);
                }
                Err(err) => {
                    log::warn!("failed to fetch playlist: {err}");
                    if !expire_on_auth_error(session, &err) {
                        load_error.set("Failed to load playlist".to_owned());
                    }
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, session);
            loaded.set(true);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_owned();
        let description_value = description.get().trim().to_owned();
        if name_value.is_empty() || description_value.is_empty() {
            notify::alert("Both name and description are required.");
            return;
        }
        #[cfg(feature = "csr")]
        {
            let id = playlist_id.get_untracked();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::playlists::update(&id, &name_value, &description_value)
                    .await
                {
                    Ok(_) => {
                        notify::alert("Playlist updated successfully!");
                        navigate("/profile", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("failed to update playlist: {err}");
                        if !expire_on_auth_error(session, &err) {
                            notify::alert("Failed to update playlist.");
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&navigate, name_value, description_value);
        }
    };

    view! {
        <div class="form-page">
            <Show when=move || !load_error.get().is_empty()>
                <p class="page-status page-status--error">{move || load_error.get()}</p>
            </Show>

            <Show when=move || load_error.get().is_empty() && !loaded.get()>
                <p class="page-status">"Loading..."</p>
            </Show>

            <Show when=move || loaded.get()>
                <form class="form-card" on:submit=on_submit.clone()>
                    <h2>"Edit Playlist"</h2>

                    <label class="form-card__label">
                        "Playlist Name"
                        <input
                            class="form-card__input"
                            type="text"
                            placeholder="Enter playlist name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="form-card__label">
                        "Description"
                        <textarea
                            class="form-card__input"
                            rows="4"
                            placeholder="Enter description"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="form-card__actions">
                        <A href="/profile" attr:class="btn">
                            "Cancel"
                        </A>
                        <button class="btn btn--primary" type="submit">
                            "Update Playlist"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

/// Pick (or create) a playlist for a video from anywhere in the app.
#[component]
pub fn AddToPlaylistPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let video_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let playlists = RwSignal::new(Vec::<Playlist>::new());
    let loading = RwSignal::new(true);
    let new_name = RwSignal::new(String::new());
    let new_description = RwSignal::new(String::new());

    Effect::new(move || {
        let Some(user) = session.get().user else {
            loading.set(false);
            return;
        };
        #[cfg(feature = "csr")]
        {
            let user_id = user.id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::playlists::for_user(&user_id).await {
                    Ok(list) => playlists.set(list),
                    Err(err) => log::warn!("failed to fetch playlists: {err}"),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = user;
            loading.set(false);
        }
    });

    let on_add = Callback::new(move |playlist_id: String| {
        #[cfg(feature = "csr")]
        {
            let id = video_id.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::playlists::add_video(&id, &playlist_id).await {
                    Ok(()) => {
                        notify::alert("Video added to playlist!");
                        // Return to wherever the user came from.
                        if let Some(window) = web_sys::window() {
                            if let Ok(history) = window.history() {
                                let _ = history.back();
                            }
                        }
                    }
                    Err(err) => {
                        log::warn!("failed to add video: {err}");
                        if !expire_on_auth_error(session, &err) {
                            notify::alert("Failed to add video to playlist.");
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = playlist_id;
        }
    });

    let on_create = move |_| {
        let name_value = new_name.get().trim().to_owned();
        let description_value = new_description.get().trim().to_owned();
        if name_value.is_empty() || description_value.is_empty() {
            notify::alert("Please fill in both name and description.");
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::playlists::create(&name_value, &description_value).await {
                Ok(created) => {
                    playlists.update(|list| list.push(created));
                    new_name.set(String::new());
                    new_description.set(String::new());
                    notify::alert("Playlist created!");
                }
                Err(err) => {
                    log::warn!("failed to create playlist: {err}");
                    if !expire_on_auth_error(session, &err) {
                        notify::alert("Failed to create playlist.");
                    }
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name_value, description_value);
        }
    };

    view! {
        <div class="add-to-playlist-page">
            <h1>"Add to Playlist"</h1>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page-status">"Loading playlists..."</p> }
            >
                <div class="add-to-playlist-page__list">
                    {move || {
                        let current_video = video_id.get();
                        let list = playlists.get();
                        if list.is_empty() {
                            return view! { <p class="page-status">"No playlists found."</p> }
                                .into_any();
                        }
                        let rows = list
                            .into_iter()
                            .map(|playlist| {
                                let already_added = playlist.contains_video(&current_video);
                                let add_id = playlist.id.clone();
                                view! {
                                    <div class="playlist-row">
                                        <div>
                                            <h2 class="playlist-row__name">{playlist.name.clone()}</h2>
                                            <p class="playlist-row__description">
                                                {playlist.description.clone()}
                                            </p>
                                        </div>
                                        <Show
                                            when=move || !already_added
                                            fallback=|| {
                                                view! {
                                                    <span class="playlist-row__added">"Already added"</span>
                                                }
                                            }
                                        >
                                            <button
                                                class="btn btn--small btn--primary"
                                                on:click={
                                                    let add_id = add_id.clone();
                                                    move |_| on_add.run(add_id.clone())
                                                }
                                            >
                                                "+ Add"
                                            </button>
                                        </Show>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>();
                        view! { <div class="playlist-rows">{rows}</div> }.into_any()
                    }}
                </div>
            </Show>

            <div class="add-to-playlist-page__create">
                <h2>"Create New Playlist"</h2>
                <input
                    class="form-card__input"
                    type="text"
                    placeholder="Playlist Name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <textarea
                    class="form-card__input"
                    placeholder="Playlist Description"
                    prop:value=move || new_description.get()
                    on:input=move |ev| new_description.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" on:click=on_create>
                    "+ Create Playlist"
                </button>
            </div>
        </div>
    }
}

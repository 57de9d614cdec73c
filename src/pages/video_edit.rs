//! Video management pages: edit metadata and confirm deletion.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::state::cache::VideoCache;
#[cfg(feature = "csr")]
use crate::util::notify;

/// Edit title, description, and optionally the thumbnail of an owned video.
#[component]
pub fn EditVideoPage() -> impl IntoView {
    let cache = expect_context::<RwSignal<VideoCache>>();
    let params = use_params_map();
    let video_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let current_thumbnail = RwSignal::new(None::<String>);
    let load_error = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let thumbnail_ref = NodeRef::<leptos::html::Input>::new();
    let navigate = use_navigate();

    Effect::new(move || {
        let id = video_id.get();
        if id.is_empty() {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::videos::fetch_video(&id).await {
                Ok(video) => {
                    title.set(video.title);
                    description.set(video.description);
                    current_thumbnail.set(video.thumbnail);
                }
                Err(err) => {
                    log::warn!("failed to fetch video: {err}");
                    load_error.set("Failed to fetch video details".to_owned());
                }
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            let _ = form.append_with_str("title", title.get().trim());
            let _ = form.append_with_str("description", description.get().trim());
            if let Some(file) = thumbnail_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            {
                let _ = form.append_with_blob("thumbnail", &file);
            }

            saving.set(true);
            let id = video_id.get_untracked();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::videos::update(&id, &form).await {
                    Ok(updated) => {
                        cache.update(|c| c.insert(updated));
                        navigate("/profile", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("failed to update video: {err}");
                        notify::alert("Failed to update video");
                        saving.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&navigate, cache);
        }
    };

    view! {
        <div class="form-page">
            <form class="form-card" on:submit=on_submit>
                <h2>"Update Video"</h2>

                <Show when=move || !load_error.get().is_empty()>
                    <p class="page-status page-status--error">{move || load_error.get()}</p>
                </Show>

                <label class="form-card__label">
                    "Title"
                    <input
                        class="form-card__input"
                        type="text"
                        required=true
                        placeholder="Enter new title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-card__label">
                    "Description"
                    <textarea
                        class="form-card__input"
                        rows="4"
                        required=true
                        placeholder="Update the video description..."
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="form-card__label">
                    "New Thumbnail (optional)"
                    <input
                        class="form-card__file"
                        type="file"
                        accept="image/*"
                        node_ref=thumbnail_ref
                    />
                </label>

                <Show when=move || current_thumbnail.get().is_some()>
                    <div class="form-card__preview">
                        <p>"Current thumbnail:"</p>
                        <img
                            src=move || current_thumbnail.get().unwrap_or_default()
                            alt="Current thumbnail"
                        />
                    </div>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Update" }}
                </button>
            </form>
        </div>
    }
}

/// Dedicated confirmation screen before deleting an owned video.
#[component]
pub fn DeleteVideoPage() -> impl IntoView {
    let cache = expect_context::<RwSignal<VideoCache>>();
    let params = use_params_map();
    let video_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let video_title = RwSignal::new(None::<String>);
    let load_error = RwSignal::new(String::new());
    let navigate = use_navigate();

    Effect::new(move || {
        let id = video_id.get();
        if id.is_empty() {
            return;
        }
        // Prefer the cached copy; fall back to a fetch for direct links.
        if let Some(cached) = cache.with_untracked(|c| c.get(&id)) {
            video_title.set(Some(cached.title));
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::videos::fetch_video(&id).await {
                Ok(video) => video_title.set(Some(video.title)),
                Err(err) => {
                    log::warn!("failed to fetch video: {err}");
                    load_error.set("Failed to fetch video details".to_owned());
                }
            }
        });
    });

    let on_delete = move |_| {
        #[cfg(feature = "csr")]
        {
            let id = video_id.get_untracked();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::videos::delete(&id).await {
                    Ok(()) => {
                        cache.update(|c| c.remove(&id));
                        navigate("/profile", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("failed to delete video: {err}");
                        load_error.set("Failed to delete video".to_owned());
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&navigate, cache);
        }
    };

    view! {
        <div class="form-page">
            <div class="form-card">
                <h1>"Delete Video"</h1>

                <Show when=move || !load_error.get().is_empty()>
                    <p class="page-status page-status--error">{move || load_error.get()}</p>
                </Show>

                {move || {
                    video_title
                        .get()
                        .map(|title| {
                            view! {
                                <p class="form-card__message">
                                    "Are you sure you want to delete \"" {title} "\"?"
                                </p>
                            }
                        })
                }}

                <div class="form-card__actions">
                    <button class="btn btn--danger" on:click=on_delete>
                        "Yes, Delete"
                    </button>
                    <A href="/profile" attr:class="btn">
                        "Cancel"
                    </A>
                </div>
            </div>
        </div>
    }
}

//! Reusable card component for video list items.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Video;
use crate::util::format;

/// A clickable card for feed/list screens: thumbnail, title, owner, and view
/// metadata. With `with_menu` a small overflow menu offers "Add to Playlist".
#[component]
pub fn VideoCard(video: Video, #[prop(default = false)] with_menu: bool) -> impl IntoView {
    let watch_href = format!("/watch/{}", video.id);
    let playlist_href = format!("/add-to-playlist/{}", video.id);
    let thumbnail = video
        .thumbnail
        .clone()
        .unwrap_or_else(|| "/placeholder-thumb.png".to_owned());
    let owner_name = video
        .owner
        .as_ref()
        .map_or_else(|| "Unknown Creator".to_owned(), |o| o.full_name.clone());
    let owner_avatar = video
        .owner
        .as_ref()
        .and_then(|o| o.avatar.clone())
        .unwrap_or_else(|| "/default-avatar.png".to_owned());
    let title = video.title.clone();
    let title_alt = video.title.clone();
    let views = format::views_label(video.view);
    let uploaded = format::format_timestamp(video.created_at.as_deref());
    let menu_open = RwSignal::new(false);

    // The menu is a static prop, so it is built once rather than reactively.
    let menu = with_menu.then(|| {
        view! {
            <div class="video-card__menu">
                <button
                    class="video-card__menu-button"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        menu_open.update(|open| *open = !*open);
                    }
                >
                    "⋯"
                </button>
                <Show when=move || menu_open.get()>
                    <div class="video-card__menu-popup">
                        <A href=playlist_href.clone() attr:class="video-card__menu-item">
                            "+ Add to Playlist"
                        </A>
                    </div>
                </Show>
            </div>
        }
    });

    view! {
        <div class="video-card">
            <A href=watch_href.clone() attr:class="video-card__thumb-link">
                <img class="video-card__thumb" src=thumbnail alt=title_alt/>
            </A>

            <div class="video-card__body">
                {menu}

                <A href=watch_href.clone() attr:class="video-card__title-link">
                    <h3 class="video-card__title">{title.clone()}</h3>
                </A>

                <div class="video-card__owner">
                    <img class="video-card__owner-avatar" src=owner_avatar alt="avatar"/>
                    <span class="video-card__owner-name">{owner_name}</span>
                </div>

                <div class="video-card__meta">
                    <span>{views}</span>
                    <span>{uploaded}</span>
                </div>
            </div>
        </div>
    }
}

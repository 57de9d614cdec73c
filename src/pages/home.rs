//! Home page: the public video feed.
//!
//! This screen works without a session — it is the only one backed by an
//! unauthenticated endpoint. Fetched videos seed the shared cache so the
//! watch page can render instantly from a consistent copy.

use leptos::prelude::*;

use crate::components::video_card::VideoCard;
use crate::state::cache::VideoCache;

/// Public feed with a brief branded splash before first paint.
#[component]
pub fn HomePage() -> impl IntoView {
    let cache = expect_context::<RwSignal<VideoCache>>();
    let show_splash = RwSignal::new(true);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(1200).await;
        show_splash.set(false);
    });
    #[cfg(not(feature = "csr"))]
    show_splash.set(false);

    let feed = LocalResource::new(|| crate::net::api::videos::fetch_public());

    Effect::new(move || {
        if let Some(Ok(list)) = feed.get() {
            cache.update(|c| c.insert_all(list));
        }
    });

    view! {
        <Show when=move || show_splash.get()>
            <div class="splash">
                <span class="splash__logo">"VidStream"</span>
            </div>
        </Show>

        <Show when=move || !show_splash.get()>
            <div class="feed-page">
                <h1>"Videos"</h1>
                <Suspense fallback=move || {
                    view! { <p class="page-status">"Loading videos..."</p> }
                }>
                    {move || {
                        feed.get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! { <p class="page-status">"No videos available."</p> }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <div class="video-grid">
                                            {list
                                                .into_iter()
                                                .map(|video| {
                                                    view! { <VideoCard video=video with_menu=true/> }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(_) => {
                                    view! {
                                        <p class="page-status page-status--error">
                                            "Failed to load videos."
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </Show>
    }
}

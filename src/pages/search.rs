//! Search results: matching channels and videos for a `?q=` query.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::components::video_card::VideoCard;

#[component]
pub fn SearchPage() -> impl IntoView {
    let query_map = use_query_map();
    let query = Memo::new(move |_| query_map.with(|q| q.get("q").unwrap_or_default()));

    let results = LocalResource::new(move || {
        let q = query.get();
        async move {
            if q.is_empty() {
                return Ok(crate::net::types::SearchResults::default());
            }
            crate::net::api::discovery::search(&q).await
        }
    });

    view! {
        <div class="search-page">
            <h1>{move || format!("Search Results for \"{}\"", query.get())}</h1>

            <Suspense fallback=move || view! { <p class="page-status">"Searching..."</p> }>
                {move || {
                    results
                        .get()
                        .map(|result| match result {
                            Ok(found) => {
                                let users = found.users;
                                let videos = found.videos;
                                let users_empty = users.is_empty();
                                let videos_empty = videos.is_empty();
                                view! {
                                    <section class="search-page__section">
                                        <h2>"Users"</h2>
                                        <Show
                                            when=move || !users_empty
                                            fallback=|| {
                                                view! { <p class="page-status">"No users found."</p> }
                                            }
                                        >
                                            <ul class="search-page__users">
                                                {users
                                                    .clone()
                                                    .into_iter()
                                                    .map(|user| {
                                                        let href = format!("/channel/{}", user.user_name);
                                                        let full_name = user.full_name.clone();
                                                        let avatar = user
                                                            .avatar
                                                            .clone()
                                                            .unwrap_or_else(|| {
                                                                "/default-avatar.png".to_owned()
                                                            });
                                                        view! {
                                                            <li>
                                                                <A href=href attr:class="channel-row">
                                                                    <img
                                                                        class="channel-row__avatar"
                                                                        src=avatar
                                                                        alt=full_name.clone()
                                                                    />
                                                                    <span>{full_name.clone()}</span>
                                                                </A>
                                                            </li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        </Show>
                                    </section>

                                    <section class="search-page__section">
                                        <h2>"Videos"</h2>
                                        <Show
                                            when=move || !videos_empty
                                            fallback=|| {
                                                view! { <p class="page-status">"No videos found."</p> }
                                            }
                                        >
                                            <div class="video-grid">
                                                {videos
                                                    .clone()
                                                    .into_iter()
                                                    .map(|video| view! { <VideoCard video=video/> })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        </Show>
                                    </section>
                                }
                                    .into_any()
                            }
                            Err(_) => {
                                view! {
                                    <p class="page-status page-status--error">
                                        "Failed to load search results."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

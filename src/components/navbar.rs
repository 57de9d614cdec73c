//! Top navigation bar: brand, section links, search, session controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};

const NAV_LINKS: [(&str, &str); 6] = [
    ("Home", "/"),
    ("Playlists", "/profile"),
    ("History", "/history"),
    ("Liked Videos", "/like"),
    ("Posts", "/tweet"),
    ("Insights", "/dashboard"),
];

/// Persistent shell rendered above every route.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_search_keydown = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() != "Enter" {
                return;
            }
            let trimmed = query.get().trim().to_owned();
            if trimmed.is_empty() {
                return;
            }
            #[cfg(feature = "csr")]
            {
                let encoded = String::from(js_sys::encode_uri_component(&trimmed));
                navigate(&format!("/search?q={encoded}"), NavigateOptions::default());
                query.set(String::new());
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&navigate, trimmed);
            }
        }
    };

    let on_logout = move |_| {
        session::logout(session);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">
                "VidStream"
            </A>

            <div class="navbar__links">
                {NAV_LINKS
                    .into_iter()
                    .map(|(label, href)| {
                        view! {
                            <A href=href attr:class="navbar__link">
                                {label}
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="navbar__session">
                <input
                    class="navbar__search"
                    type="text"
                    placeholder="Search..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                    on:keydown=on_search_keydown
                />

                <Show
                    when=move || session.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <A href="/signup" attr:class="btn btn--primary">
                                "Signup"
                            </A>
                        }
                    }
                >
                    <button class="btn btn--danger" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                    <A href="/profile" attr:class="navbar__avatar-link">
                        <img
                            class="navbar__avatar"
                            src=move || {
                                session
                                    .get()
                                    .user
                                    .and_then(|u| u.avatar)
                                    .unwrap_or_else(|| "/default-avatar.png".to_owned())
                            }
                            alt="User avatar"
                        />
                    </A>
                </Show>
            </div>
        </nav>
    }
}

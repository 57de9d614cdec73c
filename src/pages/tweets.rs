//! Post feed: tweet-style updates with create, edit, delete, and likes.

#![allow(clippy::too_many_lines)]

#[cfg(test)]
#[path = "tweets_test.rs"]
mod tweets_test;

use leptos::prelude::*;

use crate::net::types::Tweet;
#[cfg(any(test, feature = "csr"))]
use crate::net::types::TweetLikeOutcome;
use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use crate::util::auth::expire_on_auth_error;
use crate::util::format;
#[cfg(feature = "csr")]
use crate::util::notify;

#[cfg(any(test, feature = "csr"))]
fn prepend_tweet(list: &mut Vec<Tweet>, tweet: Tweet) {
    list.insert(0, tweet);
}

#[cfg(any(test, feature = "csr"))]
fn apply_tweet_update(list: &mut [Tweet], tweet_id: &str, content: &str) {
    if let Some(tweet) = list.iter_mut().find(|t| t.id == tweet_id) {
        tweet.content = content.to_owned();
    }
}

#[cfg(any(test, feature = "csr"))]
fn remove_tweet(list: &mut Vec<Tweet>, tweet_id: &str) {
    list.retain(|t| t.id != tweet_id);
}

#[cfg(any(test, feature = "csr"))]
fn apply_like_outcome(list: &mut [Tweet], outcome: &TweetLikeOutcome) {
    if let Some(tweet) = list.iter_mut().find(|t| t.id == outcome.tweet_id) {
        tweet.liked_by_me = outcome.liked;
        tweet.likes_count = outcome.total_likes;
    }
}

#[component]
pub fn TweetsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let tweets = RwSignal::new(Vec::<Tweet>::new());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(String::new());
    let draft = RwSignal::new(String::new());
    let posting = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);
    let edited_content = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::tweets::fetch_all().await {
            Ok(list) => tweets.set(list),
            Err(err) => {
                log::warn!("failed to fetch posts: {err}");
                if expire_on_auth_error(session, &err) {
                    load_error.set("Please log in to view posts.".to_owned());
                } else {
                    load_error.set("Failed to load posts.".to_owned());
                }
            }
        }
        loading.set(false);
    });
    #[cfg(not(feature = "csr"))]
    loading.set(false);

    let on_post = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let content = draft.get().trim().to_owned();
        if content.is_empty() || posting.get() {
            return;
        }
        posting.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::tweets::create(&content).await {
                Ok(tweet) => {
                    tweets.update(|list| prepend_tweet(list, tweet));
                    draft.set(String::new());
                }
                Err(err) => {
                    log::warn!("failed to post: {err}");
                    if !expire_on_auth_error(session, &err) {
                        notify::alert("Failed to post");
                    }
                }
            }
            posting.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = content;
            posting.set(false);
        }
    };

    let on_save_edit = Callback::new(move |tweet_id: String| {
        let content = edited_content.get().trim().to_owned();
        if content.is_empty() {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::tweets::update(&tweet_id, &content).await {
                Ok(updated) => {
                    tweets.update(|list| apply_tweet_update(list, &tweet_id, &updated.content));
                    editing_id.set(None);
                    edited_content.set(String::new());
                }
                Err(err) => {
                    log::warn!("failed to update post: {err}");
                    if !expire_on_auth_error(session, &err) {
                        notify::alert("Update failed");
                    }
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (tweet_id, content);
        }
    });

    let on_delete = Callback::new(move |tweet_id: String| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::tweets::delete(&tweet_id).await {
                Ok(()) => tweets.update(|list| remove_tweet(list, &tweet_id)),
                Err(err) => {
                    log::warn!("failed to delete post: {err}");
                    if !expire_on_auth_error(session, &err) {
                        notify::alert("Delete failed");
                    }
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = tweet_id;
        }
    });

    let on_toggle_like = Callback::new(move |tweet_id: String| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::social::toggle_tweet_like(&tweet_id).await {
                Ok(outcome) => tweets.update(|list| apply_like_outcome(list, &outcome)),
                Err(err) => {
                    log::warn!("failed to toggle like: {err}");
                    let _ = expire_on_auth_error(session, &err);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = tweet_id;
        }
    });

    let current_user_id = Signal::derive(move || session.get().user.map(|u| u.id));

    view! {
        <div class="tweets-page">
            <form class="tweets-page__composer" on:submit=on_post>
                <textarea
                    class="tweets-page__input"
                    rows="3"
                    placeholder="What is happening?!"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || posting.get()
                >
                    {move || if posting.get() { "Posting..." } else { "Post" }}
                </button>
            </form>

            <Show when=move || loading.get()>
                <p class="page-status">"Loading posts..."</p>
            </Show>
            <Show when=move || !load_error.get().is_empty()>
                <p class="page-status page-status--error">{move || load_error.get()}</p>
            </Show>

            <Show when=move || {
                !loading.get() && load_error.get().is_empty() && tweets.get().is_empty()
            }>
                <p class="page-status">"No posts yet."</p>
            </Show>

            {move || {
                tweets
                    .get()
                    .into_iter()
                    .map(|tweet| {
                        let tweet_id = tweet.id.clone();
                        let is_editing =
                            move || editing_id.get().as_deref() == Some(tweet_id.as_str());
                        let is_own = tweet.owner.as_ref().map(|o| o.id.clone())
                            == current_user_id.get();
                        let author = tweet
                            .owner
                            .as_ref()
                            .map_or_else(|| "Unknown".to_owned(), |o| o.full_name.clone());
                        let author_email = tweet
                            .owner
                            .as_ref()
                            .map(|o| o.email.clone())
                            .unwrap_or_default();
                        let avatar = tweet
                            .owner
                            .as_ref()
                            .and_then(|o| o.avatar.clone())
                            .unwrap_or_else(|| "/default-avatar.png".to_owned());
                        let posted = format::format_timestamp(tweet.created_at.as_deref());
                        let like_label = if tweet.liked_by_me {
                            format!("Unlike ({})", tweet.likes_count)
                        } else {
                            format!("Like ({})", tweet.likes_count)
                        };
                        let like_id = tweet.id.clone();
                        let save_id = tweet.id.clone();
                        let edit_id = tweet.id.clone();
                        let edit_seed = tweet.content.clone();
                        let delete_id = tweet.id.clone();

                        view! {
                            <div class="tweet-card">
                                <div class="tweet-card__header">
                                    <img class="tweet-card__avatar" src=avatar alt="avatar"/>
                                    <div>
                                        <p class="tweet-card__author">
                                            {author} " · " {posted}
                                        </p>
                                        <p class="tweet-card__email">{author_email}</p>
                                    </div>
                                </div>

                                <Show
                                    when=is_editing.clone()
                                    fallback={
                                        let content = tweet.content.clone();
                                        move || {
                                            view! {
                                                <p class="tweet-card__content">{content.clone()}</p>
                                            }
                                        }
                                    }
                                >
                                    <textarea
                                        class="tweet-card__edit-input"
                                        rows="3"
                                        prop:value=move || edited_content.get()
                                        on:input=move |ev| {
                                            edited_content.set(event_target_value(&ev));
                                        }
                                    ></textarea>
                                    <div class="tweet-card__actions">
                                        <button
                                            class="btn btn--small btn--primary"
                                            on:click={
                                                let save_id = save_id.clone();
                                                move |_| on_save_edit.run(save_id.clone())
                                            }
                                        >
                                            "Save"
                                        </button>
                                        <button
                                            class="btn btn--small"
                                            on:click=move |_| editing_id.set(None)
                                        >
                                            "Cancel"
                                        </button>
                                    </div>
                                </Show>

                                <Show when={
                                    let is_editing = is_editing.clone();
                                    move || !is_editing()
                                }>
                                    <div class="tweet-card__actions">
                                        <button
                                            class="btn btn--small"
                                            on:click={
                                                let like_id = like_id.clone();
                                                move |_| on_toggle_like.run(like_id.clone())
                                            }
                                        >
                                            {like_label.clone()}
                                        </button>
                                        {
                                            let edit_id = edit_id.clone();
                                            let edit_seed = edit_seed.clone();
                                            let delete_id = delete_id.clone();
                                            view! {
                                                <Show when=move || is_own>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click={
                                                            let edit_id = edit_id.clone();
                                                            let edit_seed = edit_seed.clone();
                                                            move |_| {
                                                                editing_id.set(Some(edit_id.clone()));
                                                                edited_content.set(edit_seed.clone());
                                                            }
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click={
                                                            let delete_id = delete_id.clone();
                                                            move |_| on_delete.run(delete_id.clone())
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </Show>
                                            }
                                        }
                                    </div>
                                </Show>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

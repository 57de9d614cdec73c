//! Comment list + composer for the watch page.
//!
//! The page owns the comment list signal (it loads alongside the video);
//! this component owns the composer and per-comment edit/delete flows, and
//! applies each confirmed mutation to the held list without re-fetching.

#![allow(clippy::too_many_lines)]

#[cfg(test)]
#[path = "comment_thread_test.rs"]
mod comment_thread_test;

use leptos::prelude::*;

use crate::net::types::Comment;
use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use crate::util::auth::expire_on_auth_error;
use crate::util::{format, notify};

#[cfg(any(test, feature = "csr"))]
fn prepend_comment(list: &mut Vec<Comment>, comment: Comment) {
    list.insert(0, comment);
}

#[cfg(any(test, feature = "csr"))]
fn apply_comment_update(list: &mut [Comment], comment_id: &str, content: &str) {
    if let Some(comment) = list.iter_mut().find(|c| c.id == comment_id) {
        comment.content = content.to_owned();
    }
}

#[cfg(any(test, feature = "csr"))]
fn remove_comment(list: &mut Vec<Comment>, comment_id: &str) {
    list.retain(|c| c.id != comment_id);
}

/// Composer plus comment list with owner-only edit and delete controls.
#[component]
pub fn CommentThread(
    #[prop(into)] video_id: Signal<String>,
    comments: RwSignal<Vec<Comment>>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let draft = RwSignal::new(String::new());
    let posting = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);
    let edited_content = RwSignal::new(String::new());

    let current_user_id =
        Signal::derive(move || session.get().user.map(|u| u.id));

    let on_post = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let content = draft.get().trim().to_owned();
        if content.is_empty() || posting.get() {
            return;
        }
        posting.set(true);
        #[cfg(feature = "csr")]
        {
            let id = video_id.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::comments::add(&id, &content).await {
                    Ok(comment) => {
                        comments.update(|list| prepend_comment(list, comment));
                        draft.set(String::new());
                    }
                    Err(err) => {
                        log::warn!("failed to post comment: {err}");
                        if !expire_on_auth_error(session, &err) {
                            notify::alert("Failed to post comment");
                        }
                    }
                }
                posting.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (content, video_id);
            posting.set(false);
        }
    };

    let on_save_edit = Callback::new(move |comment_id: String| {
        let content = edited_content.get().trim().to_owned();
        if content.is_empty() {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::comments::update(&comment_id, &content).await {
                Ok(updated) => {
                    comments.update(|list| {
                        apply_comment_update(list, &comment_id, &updated.content);
                    });
                    editing_id.set(None);
                    edited_content.set(String::new());
                }
                Err(err) => {
                    log::warn!("failed to update comment: {err}");
                    if !expire_on_auth_error(session, &err) {
                        notify::alert("Failed to update comment");
                    }
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (comment_id, content);
        }
    });

    let on_delete = Callback::new(move |comment_id: String| {
        if !notify::confirm("Are you sure you want to delete this comment?") {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::comments::delete(&comment_id).await {
                Ok(()) => comments.update(|list| remove_comment(list, &comment_id)),
                Err(err) => {
                    log::warn!("failed to delete comment: {err}");
                    if !expire_on_auth_error(session, &err) {
                        notify::alert("Failed to delete comment");
                    }
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = comment_id;
        }
    });

    view! {
        <div class="comment-thread">
            <form class="comment-thread__composer" on:submit=on_post>
                <label class="comment-thread__label" for="comment">
                    "Add a comment"
                </label>
                <textarea
                    id="comment"
                    class="comment-thread__input"
                    rows="3"
                    placeholder="Write your thoughts..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    disabled=move || posting.get()
                ></textarea>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || posting.get() || draft.get().trim().is_empty()
                >
                    {move || if posting.get() { "Posting..." } else { "Post Comment" }}
                </button>
            </form>

            <div class="comment-thread__list">
                {move || {
                    comments
                        .get()
                        .into_iter()
                        .map(|comment| {
                            let comment_id = comment.id.clone();
                            let edit_id = comment.id.clone();
                            let edit_seed = comment.content.clone();
                            let delete_id = comment.id.clone();
                            let is_editing =
                                move || editing_id.get().as_deref() == Some(comment_id.as_str());
                            let is_own = comment.owner.as_ref().map(|o| o.id.clone())
                                == current_user_id.get();
                            let author = comment
                                .owner
                                .as_ref()
                                .map_or_else(|| "Anonymous".to_owned(), |o| o.full_name.clone());
                            let avatar = comment
                                .owner
                                .as_ref()
                                .and_then(|o| o.avatar.clone())
                                .unwrap_or_else(|| "/default-avatar.png".to_owned());
                            let posted = format::format_timestamp(comment.created_at.as_deref());
                            let save_id = comment.id.clone();

                            view! {
                                <div class="comment">
                                    <img class="comment__avatar" src=avatar alt="User avatar"/>
                                    <div class="comment__body">
                                        <p class="comment__author">{author}</p>
                                        <Show
                                            when=is_editing.clone()
                                            fallback={
                                                let content = comment.content.clone();
                                                let posted = posted.clone();
                                                move || {
                                                    view! {
                                                        <p class="comment__content">{content.clone()}</p>
                                                        <p class="comment__meta">{posted.clone()}</p>
                                                    }
                                                }
                                            }
                                        >
                                            <textarea
                                                class="comment__edit-input"
                                                rows="2"
                                                prop:value=move || edited_content.get()
                                                on:input=move |ev| {
                                                    edited_content.set(event_target_value(&ev));
                                                }
                                            ></textarea>
                                            <div class="comment__actions">
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
                                            move || is_own && !is_editing()
                                        }>
                                            <div class="comment__actions">
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
                                            </div>
                                        </Show>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

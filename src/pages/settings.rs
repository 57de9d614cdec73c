//! Account settings: hub page plus the three editing screens.
//!
//! Successful identity edits are written back through the session store so
//! the persisted record and the navbar stay in sync with the server.

#![allow(clippy::too_many_lines)]

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use crate::util::auth::expire_on_auth_error;
use crate::util::auth::install_unauth_redirect;
use crate::util::notify;

/// Hub linking to the account, photo, and password screens.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    view! {
        <div class="settings-page">
            <h2>"Edit Profile"</h2>

            <div class="settings-card">
                <h3>"Account Details"</h3>
                <p>"Update your full name and email address."</p>
                <A href="/edit/account" attr:class="btn btn--primary">
                    "Change"
                </A>
            </div>

            <div class="settings-card">
                <h3>"Upload Photo"</h3>
                <p>"Change your avatar and cover image."</p>
                <A href="/edit/photo" attr:class="btn btn--primary">
                    "Change"
                </A>
            </div>

            <div class="settings-card">
                <h3>"Password"</h3>
                <p>"Update your account password."</p>
                <A href="/edit/password" attr:class="btn btn--primary">
                    "Change"
                </A>
            </div>
        </div>
    }
}

/// Edit full name and email, seeded from `GET /users/current-user`.
#[component]
pub fn AccountPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::users::current_user().await {
            Ok(user) => {
                full_name.set(user.full_name);
                email.set(user.email);
            }
            Err(err) => {
                log::warn!("failed to fetch current user: {err}");
                let _ = expire_on_auth_error(session, &err);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        saving.set(true);
        #[cfg(feature = "csr")]
        {
            let name_value = full_name.get_untracked().trim().to_owned();
            let email_value = email.get_untracked().trim().to_owned();
            leptos::task::spawn_local(async move {
                match crate::net::api::users::update_account(&name_value, &email_value).await {
                    Ok(updated) => {
                        crate::state::session::update_user(session, updated);
                        notify::alert("Profile updated!");
                    }
                    Err(err) => {
                        log::warn!("account update failed: {err}");
                        if !expire_on_auth_error(session, &err) {
                            notify::alert("Update failed");
                        }
                    }
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        saving.set(false);
    };

    view! {
        <div class="form-page">
            <form class="form-card" on:submit=on_submit>
                <h2>"Update Account Information"</h2>

                <label class="form-card__label">
                    "Full Name"
                    <input
                        class="form-card__input"
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-card__label">
                    "Email"
                    <input
                        class="form-card__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                </button>
            </form>
        </div>
    }
}

/// Change the account password.
#[component]
pub fn PasswordPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        if new_password.get() != confirm.get() {
            notify::alert("Passwords don't match");
            return;
        }
        submitting.set(true);
        #[cfg(feature = "csr")]
        {
            let old_value = old_password.get_untracked();
            let new_value = new_password.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::users::change_password(&old_value, &new_value).await {
                    Ok(()) => {
                        notify::alert("Password changed!");
                        old_password.set(String::new());
                        new_password.set(String::new());
                        confirm.set(String::new());
                    }
                    Err(err) => {
                        log::warn!("password change failed: {err}");
                        if !expire_on_auth_error(session, &err) {
                            notify::alert("Password change failed");
                        }
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        submitting.set(false);
    };

    view! {
        <div class="form-page">
            <form class="form-card" on:submit=on_submit>
                <h2>"Change Password"</h2>

                <label class="form-card__label">
                    "Current Password"
                    <input
                        class="form-card__input"
                        type="password"
                        required=true
                        prop:value=move || old_password.get()
                        on:input=move |ev| old_password.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-card__label">
                    "New Password"
                    <input
                        class="form-card__input"
                        type="password"
                        required=true
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-card__label">
                    "Confirm New Password"
                    <input
                        class="form-card__input"
                        type="password"
                        required=true
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>

                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Updating..." } else { "Change Password" }}
                </button>
            </form>
        </div>
    }
}

/// Upload a new avatar and/or cover image, each through its own call.
#[component]
pub fn PhotosPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let uploading_avatar = RwSignal::new(false);
    let uploading_cover = RwSignal::new(false);
    let avatar_ref = NodeRef::<leptos::html::Input>::new();
    let cover_ref = NodeRef::<leptos::html::Input>::new();

    let on_upload_avatar = move |_| {
        if uploading_avatar.get() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let Some(file) = avatar_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                notify::alert("Please select an avatar image.");
                return;
            };
            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            let _ = form.append_with_blob("avatar", &file);
            uploading_avatar.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::users::update_avatar(&form).await {
                    Ok(updated) => {
                        crate::state::session::update_user(session, updated);
                        notify::alert("Avatar uploaded successfully!");
                    }
                    Err(err) => {
                        log::warn!("avatar upload failed: {err}");
                        if !expire_on_auth_error(session, &err) {
                            notify::alert("Avatar upload failed.");
                        }
                    }
                }
                uploading_avatar.set(false);
            });
        }
    };

    let on_upload_cover = move |_| {
        if uploading_cover.get() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let Some(file) = cover_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                notify::alert("Please select a cover image.");
                return;
            };
            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            let _ = form.append_with_blob("coverImage", &file);
            uploading_cover.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::users::update_cover(&form).await {
                    Ok(updated) => {
                        crate::state::session::update_user(session, updated);
                        notify::alert("Cover image uploaded successfully!");
                    }
                    Err(err) => {
                        log::warn!("cover upload failed: {err}");
                        if !expire_on_auth_error(session, &err) {
                            notify::alert("Cover image upload failed.");
                        }
                    }
                }
                uploading_cover.set(false);
            });
        }
    };

    view! {
        <div class="form-page">
            <div class="form-card">
                <h2>"Upload Avatar and Cover Photo"</h2>

                <label class="form-card__label">
                    "Avatar Image"
                    <input
                        class="form-card__file"
                        type="file"
                        accept="image/*"
                        node_ref=avatar_ref
                    />
                </label>
                <button
                    class="btn btn--primary"
                    disabled=move || uploading_avatar.get()
                    on:click=on_upload_avatar
                >
                    {move || {
                        if uploading_avatar.get() { "Uploading Avatar..." } else { "Upload Avatar" }
                    }}
                </button>

                <label class="form-card__label">
                    "Cover Image"
                    <input
                        class="form-card__file"
                        type="file"
                        accept="image/*"
                        node_ref=cover_ref
                    />
                </label>
                <button
                    class="btn btn--primary"
                    disabled=move || uploading_cover.get()
                    on:click=on_upload_cover
                >
                    {move || {
                        if uploading_cover.get() { "Uploading Cover..." } else { "Upload Cover" }
                    }}
                </button>
            </div>
        </div>
    }
}

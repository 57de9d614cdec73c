//! Signup page: multipart registration with avatar and cover uploads.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::util::notify;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let full_name = RwSignal::new(String::new());
    let user_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let avatar_ref = NodeRef::<leptos::html::Input>::new();
    let cover_ref = NodeRef::<leptos::html::Input>::new();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        if password.get() != confirm.get() {
            notify::alert("Passwords do not match");
            return;
        }
        submitting.set(true);

        #[cfg(feature = "csr")]
        {
            let Ok(form) = web_sys::FormData::new() else {
                submitting.set(false);
                return;
            };
            let _ = form.append_with_str("fullName", full_name.get().trim());
            let _ = form.append_with_str("userName", user_name.get().trim());
            let _ = form.append_with_str("email", email.get().trim());
            let _ = form.append_with_str("password", &password.get());
            if let Some(file) = avatar_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            {
                let _ = form.append_with_blob("avatar", &file);
            }
            if let Some(file) = cover_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            {
                let _ = form.append_with_blob("coverImage", &file);
            }

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::users::register(&form).await {
                    Ok(_) => {
                        notify::alert("Signup successful!");
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("signup failed: {err}");
                        notify::alert("Signup failed. Please try again.");
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &navigate;
            submitting.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h2>"Create an Account"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Full Name"
                        <input
                            class="auth-form__input"
                            type="text"
                            required=true
                            placeholder="John Doe"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-form__label">
                        "Username"
                        <input
                            class="auth-form__input"
                            type="text"
                            required=true
                            placeholder="johndoe123"
                            prop:value=move || user_name.get()
                            on:input=move |ev| user_name.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-form__label">
                        "Email Address"
                        <input
                            class="auth-form__input"
                            type="email"
                            required=true
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-form__label">
                        "Confirm Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            required=true
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-form__label">
                        "Avatar Image"
                        <input
                            class="auth-form__file"
                            type="file"
                            accept="image/*"
                            node_ref=avatar_ref
                        />
                    </label>

                    <label class="auth-form__label">
                        "Cover Image"
                        <input
                            class="auth-form__file"
                            type="file"
                            accept="image/*"
                            node_ref=cover_ref
                        />
                    </label>

                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || submitting.get()
                    >
                        "Sign Up"
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/login">"Log in"</A>
                </p>
            </div>
        </div>
    }
}

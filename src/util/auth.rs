//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior,
//! and every screen reacts to an expired token the same way: clear the
//! session, then send the user to `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::error::ApiError;
use crate::state::session::{self, SessionState};

/// Redirect to `/login` whenever no user is present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if session.get().user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Clear the session when a request failed with an auth error.
///
/// Returns `true` when the error was an auth failure and the session was
/// cleared; the caller then navigates to `/login` (the redirect guard on the
/// page handles it for guarded routes).
pub fn expire_on_auth_error(session: RwSignal<SessionState>, err: &ApiError) -> bool {
    if err.is_auth() {
        session::logout(session);
        true
    } else {
        false
    }
}

//! Session store: the process-wide holder of authentication state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route guard, the navbar, and the API layer read this store. The
//! lifecycle is two states, Anonymous and Authenticated; a failed login never
//! transitions state, and there is no intermediate "logging in" state.
//!
//! Identity and both tokens persist as ONE record under a single
//! localStorage key, written and cleared through a single path, so the token
//! and the user identity cannot desynchronize. No refresh flow exists: an
//! expired access token surfaces as an `Auth` error on the next request.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::{AuthPayload, User};
use crate::util::storage;

/// The single localStorage slot for the whole session record.
const SESSION_KEY: &str = "vidstream.session";

/// Reactive session state provided via context from the app root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// `None` is Anonymous; `Some` is Authenticated.
    pub user: Option<User>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Transition Anonymous → Authenticated.
    pub fn apply_login(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Transition back to Anonymous.
    pub fn apply_logout(&mut self) {
        self.user = None;
    }
}

/// The persisted session record: identity and both tokens together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

impl PersistedSession {
    /// A record missing either token cannot authenticate requests and must
    /// restore as Anonymous rather than a partial authenticated state.
    pub fn is_complete(&self) -> bool {
        !self.access_token.is_empty() && !self.refresh_token.is_empty()
    }
}

/// Resolve a loaded record to the identity it restores, if any.
fn restored_user(record: Option<PersistedSession>) -> Option<User> {
    record.filter(PersistedSession::is_complete).map(|r| r.user)
}

/// Build the initial session state from persisted storage. An incomplete
/// record is discarded so the next start is unambiguously Anonymous.
pub fn restore() -> SessionState {
    let record = storage::load_json::<PersistedSession>(SESSION_KEY);
    let had_record = record.is_some();
    match restored_user(record) {
        Some(user) => SessionState { user: Some(user) },
        None => {
            if had_record {
                storage::remove(SESSION_KEY);
            }
            SessionState::default()
        }
    }
}

/// Enter the Authenticated state and persist the whole record atomically.
/// Views reading the session signal re-render with the new identity.
pub fn login(session: RwSignal<SessionState>, auth: AuthPayload) {
    let record = PersistedSession {
        user: auth.user.clone(),
        access_token: auth.access_token,
        refresh_token: auth.refresh_token,
    };
    storage::save_json(SESSION_KEY, &record);
    session.update(|state| state.apply_login(auth.user));
}

/// Return to Anonymous and remove the persisted record. Purely local: no
/// server-side token invalidation call is issued.
pub fn logout(session: RwSignal<SessionState>) {
    storage::remove(SESSION_KEY);
    session.update(SessionState::apply_logout);
}

/// Replace the stored identity after a profile update, keeping both tokens.
/// Does nothing in the Anonymous state.
pub fn update_user(session: RwSignal<SessionState>, user: User) {
    if let Some(mut record) = storage::load_json::<PersistedSession>(SESSION_KEY) {
        record.user = user.clone();
        storage::save_json(SESSION_KEY, &record);
    }
    session.update(|state| {
        if state.user.is_some() {
            state.user = Some(user);
        }
    });
}

/// Access-token read path, used exclusively by the API layer.
pub fn stored_access_token() -> Option<String> {
    storage::load_json::<PersistedSession>(SESSION_KEY)
        .filter(PersistedSession::is_complete)
        .map(|record| record.access_token)
}

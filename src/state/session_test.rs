use super::*;

fn alice() -> User {
    User {
        id: "u1".to_owned(),
        user_name: "alice".to_owned(),
        full_name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        ..User::default()
    }
}

fn complete_record() -> PersistedSession {
    PersistedSession {
        user: alice(),
        access_token: "aaa".to_owned(),
        refresh_token: "rrr".to_owned(),
    }
}

// =============================================================
// State machine: Anonymous ⇄ Authenticated
// =============================================================

#[test]
fn default_state_is_anonymous() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn login_sets_current_user() {
    let mut state = SessionState::default();
    state.apply_login(alice());
    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().map(|u| u.full_name.as_str()), Some("Alice"));
}

#[test]
fn logout_clears_current_user() {
    let mut state = SessionState::default();
    state.apply_login(alice());
    state.apply_logout();
    assert!(state.user.is_none());
}

#[test]
fn login_then_logout_returns_to_anonymous() {
    let mut state = SessionState::default();
    state.apply_login(alice());
    state.apply_logout();
    assert_eq!(state, SessionState::default());
}

#[test]
fn repeated_login_replaces_identity() {
    let mut state = SessionState::default();
    state.apply_login(alice());
    let bob = User {
        id: "u2".to_owned(),
        full_name: "Bob".to_owned(),
        ..User::default()
    };
    state.apply_login(bob);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u2"));
}

// =============================================================
// Persisted record validation
// =============================================================

#[test]
fn complete_record_restores_identity() {
    assert_eq!(
        restored_user(Some(complete_record())).map(|u| u.id),
        Some("u1".to_owned())
    );
}

#[test]
fn absent_record_restores_anonymous() {
    assert_eq!(restored_user(None), None);
}

#[test]
fn record_without_access_token_restores_anonymous() {
    let mut record = complete_record();
    record.access_token.clear();
    assert!(!record.is_complete());
    assert_eq!(restored_user(Some(record)), None);
}

#[test]
fn record_without_refresh_token_restores_anonymous() {
    let mut record = complete_record();
    record.refresh_token.clear();
    assert_eq!(restored_user(Some(record)), None);
}

// =============================================================
// Record wire format
// =============================================================

#[test]
fn persisted_record_round_trips_through_json() {
    let record = complete_record();
    let raw = serde_json::to_string(&record).unwrap();
    let back: PersistedSession = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, record);
}

#[test]
fn persisted_record_uses_camel_case_token_keys() {
    let raw = serde_json::to_string(&complete_record()).unwrap();
    assert!(raw.contains("\"accessToken\":\"aaa\""));
    assert!(raw.contains("\"refreshToken\":\"rrr\""));
}

use super::*;

fn alice_record() -> UserRecord {
    UserRecord {
        id: 7,
        username: "alice".to_owned(),
        name: "Alice".to_owned(),
        email: "a@x.com".to_owned(),
        company: "Acme".to_owned(),
        role: "admin".to_owned(),
    }
}

fn alice_session() -> Session {
    Session::from_record(alice_record(), "2024-01-15T09:00:00Z".to_owned())
}

// =============================================================
// Session construction
// =============================================================

#[test]
fn from_record_copies_identity_fields() {
    let session = alice_session();
    assert_eq!(session.id, 7);
    assert_eq!(session.username, "alice");
    assert_eq!(session.name, "Alice");
    assert_eq!(session.email, "a@x.com");
    assert_eq!(session.company, "Acme");
    assert_eq!(session.role, "admin");
    assert_eq!(session.last_login, "2024-01-15T09:00:00Z");
}

#[test]
fn session_persists_with_camel_case_keys() {
    let value = serde_json::to_value(alice_session()).unwrap();
    assert_eq!(value["lastLogin"], "2024-01-15T09:00:00Z");
    assert!(value.get("last_login").is_none());
}

#[test]
fn session_round_trips_through_persisted_form() {
    let session = alice_session();
    let raw = serde_json::to_string(&session).unwrap();
    let back: Session = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, session);
}

#[test]
fn corrupt_persisted_session_is_a_decode_error() {
    assert!(serde_json::from_str::<Session>("not json").is_err());
    assert!(serde_json::from_str::<Session>(r#"{"bogus": true}"#).is_err());
}

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn default_state_is_logged_out() {
    let state = SessionState::default();
    assert!(state.session.is_none());
    assert!(state.error.is_empty());
}

#[test]
fn restored_state_carries_the_session() {
    let state = SessionState::restored(Some(alice_session()));
    assert_eq!(state.session.as_ref().map(|s| s.id), Some(7));
    assert!(state.error.is_empty());
}

#[test]
fn login_success_installs_session_and_clears_error() {
    let mut state = SessionState::default();
    state.apply_login_rejected();
    state.apply_login_success(alice_session());
    assert_eq!(state.session.as_ref().map(|s| s.id), Some(7));
    assert!(state.error.is_empty());
}

#[test]
fn login_rejection_sets_message_and_keeps_prior_session() {
    let mut state = SessionState::restored(Some(alice_session()));
    state.apply_login_rejected();
    assert_eq!(state.error, ERR_INVALID_CREDENTIALS);
    assert_eq!(state.session.as_ref().map(|s| s.id), Some(7));
}

#[test]
fn login_failure_sets_message_and_keeps_prior_session() {
    let mut state = SessionState::restored(Some(alice_session()));
    state.apply_login_failed();
    assert_eq!(state.error, ERR_LOGIN_FAILED);
    assert_eq!(state.session.as_ref().map(|s| s.id), Some(7));
}

#[test]
fn clear_is_idempotent() {
    let mut state = SessionState::restored(Some(alice_session()));
    state.clear();
    assert!(state.session.is_none());
    state.clear();
    assert!(state.session.is_none());
}

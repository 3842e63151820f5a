//! Session store for the authenticated console user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware pages read this store to coordinate
//! login redirects and identity-dependent rendering. The session is
//! persisted write-through under [`SESSION_STORAGE_KEY`]: the stored
//! copy and the in-memory copy are identical at all times, and a
//! corrupt stored copy restores as logged-out rather than failing
//! startup.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::api;
use crate::net::config::ApiConfig;
use crate::net::types::UserRecord;
use crate::util::persistence;

/// localStorage key holding the persisted session copy.
pub const SESSION_STORAGE_KEY: &str = "user";

/// User-facing message for a credential rejection.
pub const ERR_INVALID_CREDENTIALS: &str = "Invalid username or password";
/// User-facing message for a transport or backend failure during login.
pub const ERR_LOGIN_FAILED: &str = "An error occurred during login";

/// An authenticated user session.
///
/// Exists exactly between a successful login and the next logout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Immutable user identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Company the user belongs to.
    pub company: String,
    /// Console role.
    pub role: String,
    /// ISO-8601 timestamp fixed when the session was created, never
    /// updated afterwards.
    pub last_login: String,
}

impl Session {
    /// Build a session from the first matching backend record.
    pub fn from_record(record: UserRecord, last_login: String) -> Self {
        Self {
            id: record.id,
            username: record.username,
            name: record.name,
            email: record.email,
            company: record.company,
            role: record.role,
            last_login,
        }
    }
}

/// Session store state: the current session plus the last login error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub error: String,
}

impl SessionState {
    /// State restored from a previously persisted session, if any.
    pub fn restored(session: Option<Session>) -> Self {
        Self {
            session,
            error: String::new(),
        }
    }

    /// Install a freshly created session and clear any stale error.
    pub fn apply_login_success(&mut self, session: Session) {
        self.session = Some(session);
        self.error.clear();
    }

    /// Record a credential rejection; an existing session is untouched.
    pub fn apply_login_rejected(&mut self) {
        self.error = ERR_INVALID_CREDENTIALS.to_owned();
    }

    /// Record a transport/backend failure; an existing session is untouched.
    pub fn apply_login_failed(&mut self) {
        self.error = ERR_LOGIN_FAILED.to_owned();
    }

    /// Drop the session. Idempotent.
    pub fn clear(&mut self) {
        self.session = None;
    }
}

/// Rebuild session state from localStorage at startup.
///
/// Absence or corrupt data falls back to logged-out.
pub fn restore() -> SessionState {
    SessionState::restored(persistence::load_json(SESSION_STORAGE_KEY))
}

/// Attempt to authenticate `username`/`password` against the backend.
///
/// On a match the session built from the first record is installed and
/// persisted, and the call returns `true`. A rejection or failure sets
/// the store error, leaves any prior session untouched, and returns
/// `false`. No retry is performed.
pub async fn login(
    state: RwSignal<SessionState>,
    config: &ApiConfig,
    username: &str,
    password: &str,
) -> bool {
    match api::fetch_users(&config.base_url, username, password).await {
        Ok(records) => match records.into_iter().next() {
            Some(record) => {
                let session = Session::from_record(record, now_iso());
                persistence::save_json(SESSION_STORAGE_KEY, &session);
                state.update(|s| s.apply_login_success(session));
                true
            }
            None => {
                state.update(SessionState::apply_login_rejected);
                false
            }
        },
        Err(err) => {
            log::warn!("login request failed: {err}");
            state.update(SessionState::apply_login_failed);
            false
        }
    }
}

/// Clear the active session and its persisted copy.
///
/// Safe to call when already logged out.
pub fn logout(state: RwSignal<SessionState>) {
    state.update(SessionState::clear);
    persistence::remove(SESSION_STORAGE_KEY);
}

/// Wall-clock timestamp recorded as `last_login`.
fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

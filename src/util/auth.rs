//! Shared auth guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every gated route component applies identical redirect behavior by
//! reading the session store synchronously at navigation time and
//! asking the route table where the navigation belongs.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::routes::guard_redirect;
use crate::state::session::SessionState;

/// Enforce the route-table guard for the current location.
///
/// Redirects to `/login` whenever no session is active, and resolves
/// the bare gated parent path to its default child.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    let navigate = navigate.clone();
    Effect::new(move || {
        let has_session = session.get().session.is_some();
        let path = location.pathname.get();
        if let Some(target) = guard_redirect(&path, has_session) {
            if target != path {
                navigate(target, NavigateOptions::default());
            }
        }
    });
}

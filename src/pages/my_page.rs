//! My-page shell: the gated parent screen for all functional modules.
//!
//! Owns the unauthenticated redirect, the on-entry workspace fetch, the
//! workspace selector, and the sidebar navigation. Module content
//! renders through the router outlet.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;

use crate::net::config::ApiConfig;
use crate::routes::{LOGIN_PATH, MODULE_ROUTES};
use crate::state::session::SessionState;
use crate::state::workspace::WorkspaceState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn MyPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let workspace = expect_context::<RwSignal<WorkspaceState>>();
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate.clone());

    // Load the workspace list once a session user is known.
    Effect::new(move || {
        if let Some(user_id) = session.get().session.as_ref().map(|s| s.id) {
            #[cfg(feature = "hydrate")]
            {
                let config = config.clone();
                leptos::task::spawn_local(async move {
                    crate::state::workspace::fetch_workspaces(workspace, &config, user_id).await;
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&config, user_id);
            }
        }
    });

    let on_select_workspace = move |ev: leptos::ev::Event| {
        let Ok(id) = event_target_value(&ev).parse::<i64>() else {
            return;
        };
        let selected = workspace.with(|s| s.workspaces.iter().find(|w| w.id == id).cloned());
        if let Some(w) = selected {
            crate::state::workspace::set_current_workspace(workspace, w);
        }
    };

    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            crate::state::session::logout(session);
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    };

    view! {
        <div class="my-page">
            <header class="my-page__header">
                <h1>"Beacon Console"</h1>
                <select
                    class="my-page__workspace-select"
                    prop:value=move || {
                        workspace.get().current.map(|w| w.id.to_string()).unwrap_or_default()
                    }
                    on:change=on_select_workspace
                >
                    {move || {
                        workspace
                            .get()
                            .workspaces
                            .into_iter()
                            .map(|w| {
                                view! { <option value=w.id.to_string()>{w.name}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <span class="my-page__user">
                    {move || session.get().session.map(|s| s.name).unwrap_or_default()}
                </span>
                <button class="my-page__logout" on:click=on_logout>
                    "Log Out"
                </button>
            </header>

            <div class="my-page__body">
                <nav class="my-page__nav">
                    {MODULE_ROUTES
                        .iter()
                        .map(|route| {
                            view! {
                                <A href=route.full_path()>
                                    {route.label}
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <main class="my-page__content">
                    <Show when=move || workspace.get().loading>
                        <p class="my-page__loading">"Loading workspaces..."</p>
                    </Show>
                    <Show when=move || !workspace.get().error.is_empty()>
                        <p class="my-page__error">{move || workspace.get().error}</p>
                    </Show>
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}

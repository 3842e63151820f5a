//! Module views rendered inside the my-page shell.
//!
//! The application-list and personal-settings modules read live store
//! data; the remaining modules are headed sections whose internals live
//! behind their own backend surfaces.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::workspace::WorkspaceState;

#[component]
fn ModuleSection(title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <section class="module">
            <h2>{title}</h2>
            <p class="module__blurb">{blurb}</p>
        </section>
    }
}

/// Application list for the current workspace, with capacity counters.
#[component]
pub fn AppsModule() -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();

    view! {
        <section class="module module--apps">
            <h2>"Applications"</h2>
            {move || {
                workspace
                    .get()
                    .current
                    .map_or_else(
                        || view! { <p class="module__empty">"No workspace selected."</p> }.into_any(),
                        |w| {
                            view! {
                                <div class="module__workspace">
                                    <h3>{w.name}</h3>
                                    <span class="module__workspace-key">{w.key}</span>
                                    <dl class="module__stats">
                                        <dt>"Max applications"</dt>
                                        <dd>{w.max_apps}</dd>
                                        <dt>"Assigned"</dt>
                                        <dd>{w.assigned_count}</dd>
                                        <dt>"Unassigned"</dt>
                                        <dd>{w.unassigned_count}</dd>
                                    </dl>
                                </div>
                            }
                                .into_any()
                        },
                    )
            }}
        </section>
    }
}

#[component]
pub fn TablesModule() -> impl IntoView {
    view! { <ModuleSection title="Tables" blurb="Browse and manage workspace data tables."/> }
}

#[component]
pub fn EndpointsModule() -> impl IntoView {
    view! { <ModuleSection title="Endpoints" blurb="Inspect the REST endpoints exposed by this workspace."/> }
}

#[component]
pub fn MessageBlockerModule() -> impl IntoView {
    view! { <ModuleSection title="Message Blocker" blurb="Configure blocked message patterns."/> }
}

#[component]
pub fn ApiKeysModule() -> impl IntoView {
    view! { <ModuleSection title="API Keys" blurb="Issue and revoke workspace API keys."/> }
}

#[component]
pub fn FileManagementModule() -> impl IntoView {
    view! { <ModuleSection title="File Management" blurb="Manage files stored in this workspace."/> }
}

#[component]
pub fn MigrationModule() -> impl IntoView {
    view! { <ModuleSection title="Migration" blurb="Move data between workspaces and environments."/> }
}

/// Personal settings backed by the session store.
#[component]
pub fn PersonalSettingsModule() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <section class="module module--personal-settings">
            <h2>"Personal Settings"</h2>
            {move || {
                session
                    .get()
                    .session
                    .map(|s| {
                        view! {
                            <dl class="module__details">
                                <dt>"Name"</dt>
                                <dd>{s.name}</dd>
                                <dt>"Email"</dt>
                                <dd>{s.email}</dd>
                                <dt>"Company"</dt>
                                <dd>{s.company}</dd>
                                <dt>"Role"</dt>
                                <dd>{s.role}</dd>
                                <dt>"Last login"</dt>
                                <dd>{s.last_login}</dd>
                            </dl>
                        }
                    })
            }}
        </section>
    }
}

#[component]
pub fn ResourceManagementModule() -> impl IntoView {
    view! { <ModuleSection title="Resource Management" blurb="Review quotas and resource usage."/> }
}

#[component]
pub fn AdminSettingsModule() -> impl IntoView {
    view! { <ModuleSection title="Admin Settings" blurb="Console-wide administrative configuration."/> }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::net::config::ApiConfig;
use crate::pages::login::LoginPage;
use crate::pages::modules::{
    AdminSettingsModule, ApiKeysModule, AppsModule, EndpointsModule, FileManagementModule,
    MessageBlockerModule, MigrationModule, PersonalSettingsModule, ResourceManagementModule,
    TablesModule,
};
use crate::pages::my_page::MyPage;
use crate::routes::{DEFAULT_MODULE_PATH, LOGIN_PATH};
use crate::state::session;
use crate::state::workspace::WorkspaceState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and workspace stores plus the backend
/// configuration, and materializes the route table. The my-page
/// subtree is gated: its shell installs the unauthenticated redirect.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(session::restore());
    let workspace = RwSignal::new(WorkspaceState::default());

    provide_context(session);
    provide_context(workspace);
    provide_context(ApiConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/beacon-console.css"/>
        <Title text="Beacon Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=LOGIN_PATH/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("mypage") view=MyPage>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Redirect path=DEFAULT_MODULE_PATH/> }
                    />
                    <Route path=StaticSegment("app") view=AppsModule/>
                    <Route path=StaticSegment("table") view=TablesModule/>
                    <Route path=StaticSegment("endpoint") view=EndpointsModule/>
                    <Route path=StaticSegment("messageblocker") view=MessageBlockerModule/>
                    <Route path=StaticSegment("apikey") view=ApiKeysModule/>
                    <Route path=StaticSegment("filemanagement") view=FileManagementModule/>
                    <Route path=StaticSegment("migration") view=MigrationModule/>
                    <Route path=StaticSegment("personal-settings") view=PersonalSettingsModule/>
                    <Route path=StaticSegment("resource-management") view=ResourceManagementModule/>
                    <Route path=StaticSegment("admin-settings") view=AdminSettingsModule/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

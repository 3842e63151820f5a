//! Declarative route table and navigation-guard decisions.
//!
//! DESIGN
//! ======
//! The table is plain data so the sidebar, the router wiring in `app`,
//! and the guard can all derive from one source. Guard decisions are
//! pure functions over `(path, has_session)` and carry no browser state.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Identifier for a functional module under the my-page shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleId {
    Apps,
    Tables,
    Endpoints,
    MessageBlocker,
    ApiKeys,
    FileManagement,
    Migration,
    PersonalSettings,
    ResourceManagement,
    AdminSettings,
}

/// One gated child route under [`MY_PAGE_PATH`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleRoute {
    /// Sub-path under the my-page parent (no leading slash).
    pub path: &'static str,
    /// Module rendered at this route.
    pub module: ModuleId,
    /// Sidebar label.
    pub label: &'static str,
}

/// Unauthenticated entry point.
pub const LOGIN_PATH: &str = "/login";
/// Gated parent for all functional modules.
pub const MY_PAGE_PATH: &str = "/mypage";
/// Where the empty my-page child path redirects.
pub const DEFAULT_MODULE_PATH: &str = "/mypage/app";

/// The fixed set of functional modules, in sidebar order.
pub const MODULE_ROUTES: [ModuleRoute; 10] = [
    ModuleRoute { path: "app", module: ModuleId::Apps, label: "Applications" },
    ModuleRoute { path: "table", module: ModuleId::Tables, label: "Tables" },
    ModuleRoute { path: "endpoint", module: ModuleId::Endpoints, label: "Endpoints" },
    ModuleRoute { path: "messageblocker", module: ModuleId::MessageBlocker, label: "Message Blocker" },
    ModuleRoute { path: "apikey", module: ModuleId::ApiKeys, label: "API Keys" },
    ModuleRoute { path: "filemanagement", module: ModuleId::FileManagement, label: "File Management" },
    ModuleRoute { path: "migration", module: ModuleId::Migration, label: "Migration" },
    ModuleRoute { path: "personal-settings", module: ModuleId::PersonalSettings, label: "Personal Settings" },
    ModuleRoute { path: "resource-management", module: ModuleId::ResourceManagement, label: "Resource Management" },
    ModuleRoute { path: "admin-settings", module: ModuleId::AdminSettings, label: "Admin Settings" },
];

impl ModuleRoute {
    /// Absolute path for this module route.
    pub fn full_path(self) -> String {
        format!("{MY_PAGE_PATH}/{}", self.path)
    }
}

/// Whether `path` lies inside the subtree that requires a session.
pub fn is_gated(path: &str) -> bool {
    path == MY_PAGE_PATH || path.starts_with("/mypage/")
}

/// Where a navigation to `path` must be redirected, if anywhere.
///
/// Root always lands on the login entry point; any gated path without a
/// session lands there too. The bare my-page path resolves to its
/// default child.
pub fn guard_redirect(path: &str, has_session: bool) -> Option<&'static str> {
    if path == "/" {
        return Some(LOGIN_PATH);
    }
    if is_gated(path) && !has_session {
        return Some(LOGIN_PATH);
    }
    if path == MY_PAGE_PATH {
        return Some(DEFAULT_MODULE_PATH);
    }
    None
}

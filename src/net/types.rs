//! Wire DTOs for the console REST backend.
//!
//! DESIGN
//! ======
//! Response shapes are parsed into these types at the boundary instead of
//! being trusted implicitly; a row that does not decode surfaces as a
//! typed error rather than a half-populated record.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A row of the backend `/users` collection.
///
/// The password column participates only in the backend-side query
/// filter and is never deserialized here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique user identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Company the user belongs to.
    pub company: String,
    /// Console role (e.g. `"admin"`).
    pub role: String,
}

/// A workspace row as returned by `/workspaces`.
///
/// Capacity counters are backend-trusted data; no local invariant ties
/// `assigned_count + unassigned_count` to `max_apps`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    /// Unique workspace identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Owning user identifier.
    pub user_id: i64,
    /// Short workspace key.
    pub key: String,
    /// Workspace category (`"type"` on the wire).
    #[serde(rename = "type")]
    pub kind: String,
    /// Creation timestamp as reported by the backend.
    pub created_at: String,
    /// User who created the workspace.
    pub created_by: String,
    /// Maximum number of applications the workspace may hold.
    pub max_apps: i64,
    /// Applications currently assigned.
    pub assigned_count: i64,
    /// Applications not yet assigned.
    pub unassigned_count: i64,
    /// Whether the workspace itself is assigned.
    pub assigned: bool,
}

//! Backend endpoint configuration.

/// Backend origin used when nothing else is configured; matches the
/// development REST server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Where the console finds its REST backend.
///
/// Provided via context at `App` construction so stores and pages share
/// one value instead of reading ambient globals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

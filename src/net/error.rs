//! Typed failure classification for the REST boundary.
//!
//! ERROR HANDLING
//! ==============
//! Stores map these to user-facing message strings; the typed detail is
//! only logged. Nothing here is fatal to the client.

use thiserror::Error;

/// Failure modes of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network failure, or a
    /// build without browser HTTP).
    #[error("request failed: {0}")]
    Request(String),
    /// The backend answered with a non-success HTTP status.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The response body did not decode into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

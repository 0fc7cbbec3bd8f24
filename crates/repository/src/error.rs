//! Error types for the repository crate.

use post_model::PostDataError;
use thiserror::Error;

/// Errors that can occur when loading posts
///
/// None of these are retried here; the caller may call `fetch_posts` again.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Server answered with a non-success status
    #[error("HTTP error! Status: {status}")]
    Fetch { status: u16 },

    /// Body did not have the `{ "posts": Post[] }` shape
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] PostDataError),

    /// Request never produced a response (connection refused, timeout, ...)
    #[error("Request to posts endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Base URL and posts path do not form a valid URL
    #[error("Invalid posts endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

impl RepositoryError {
    /// HTTP status carried by a `Fetch` error
    pub fn status(&self) -> Option<u16> {
        match self {
            RepositoryError::Fetch { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, RepositoryError::MalformedResponse(_))
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RepositoryError>;

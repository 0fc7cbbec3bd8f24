//! Error types for the post-model crate.
//!
//! Everything here describes a response body that does not have the shape
//! `{ "posts": Post[] }`. Callers surface all of these as a malformed response.

use thiserror::Error;

/// Reasons a posts payload was rejected
///
/// Rust concept: `#[derive(Error)]` from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum PostDataError {
    /// Body was not valid JSON at all
    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Top-level value was something other than an object
    #[error("Expected a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },

    /// Required field absent from the body
    #[error("Missing field: {field}")]
    MissingField { field: String },

    /// Field present but of the wrong JSON type
    #[error("Field {field} has the wrong type: expected {expected}, found {found}")]
    WrongType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// One element of `posts` did not match the Post shape
    #[error("Invalid post at index {index}: {reason}")]
    InvalidPost { index: usize, reason: String },

    /// Two posts in the same response share an id
    #[error("Duplicate post id {id} at index {index}")]
    DuplicatePostId { id: String, index: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PostDataError>;

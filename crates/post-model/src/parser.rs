//! Parser for the `/api/posts` response body.
//!
//! Expected shape:
//!
//! ```text
//! { "posts": [ { "id": ..., "title": ..., "publishDate": ..., "author": {...},
//!               "summary": ..., "categories": [ { "id": ..., "name": ... } ] } ] }
//! ```
//!
//! The body is validated before it is trusted: a missing or non-array `posts`
//! field, or any element that is not a well-formed Post, rejects the whole
//! payload. Extra fields are ignored.

use crate::error::{PostDataError, Result};
use crate::types::{Post, PostCollection};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Name of the top-level field carrying the posts array
pub const POSTS_FIELD: &str = "posts";

/// Parse a raw response body into a PostCollection.
pub fn parse_posts_response(body: &str) -> Result<PostCollection> {
    let value: Value = serde_json::from_str(body)?;
    parse_posts_value(value)
}

/// Parse an already-decoded JSON value into a PostCollection.
///
/// ## Algorithm
/// 1. Require an object with a `posts` array
/// 2. Deserialize each element on its own so errors carry the element index
/// 3. Reject duplicate post ids
pub fn parse_posts_value(value: Value) -> Result<PostCollection> {
    let mut object = match value {
        Value::Object(map) => map,
        other => {
            return Err(PostDataError::NotAnObject {
                found: json_type_name(&other),
            });
        }
    };

    let posts = match object.remove(POSTS_FIELD) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(PostDataError::WrongType {
                field: POSTS_FIELD.to_string(),
                expected: "array",
                found: json_type_name(&other),
            });
        }
        None => {
            return Err(PostDataError::MissingField {
                field: POSTS_FIELD.to_string(),
            });
        }
    };

    let mut collection = Vec::with_capacity(posts.len());
    let mut seen_ids = HashSet::with_capacity(posts.len());

    for (index, item) in posts.into_iter().enumerate() {
        let post: Post = serde_json::from_value(item).map_err(|e| PostDataError::InvalidPost {
            index,
            reason: e.to_string(),
        })?;

        if !seen_ids.insert(post.id.clone()) {
            return Err(PostDataError::DuplicatePostId { id: post.id, index });
        }
        collection.push(post);
    }

    debug!("Parsed {} posts from response", collection.len());
    Ok(collection)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

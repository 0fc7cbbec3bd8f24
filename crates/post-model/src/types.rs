//! Core domain types for the posts feed.
//!
//! This module defines the records delivered by the `/api/posts` endpoint.
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (PostId, PostCollection)
//! - Structs with public fields
//! - serde attributes to map camelCase JSON onto snake_case fields
//! - `Option<T>` for values that may not be derivable (publish dates)

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier of a post, assigned upstream
pub type PostId = String;

/// Ordered sequence of posts exactly as returned by one fetch.
///
/// Order is preserved as received; nothing in the workspace sorts it.
pub type PostCollection = Vec<Post>;

// =============================================================================
// Author / Category
// =============================================================================

/// Author of a post, embedded by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    /// The feed names this field `avatar`; `avatarUrl` is accepted too.
    #[serde(rename = "avatar", alias = "avatarUrl")]
    pub avatar_url: String,
}

/// A named tag attached to posts.
///
/// `id` comes from the upstream source and is NOT unique per logical category:
/// two records with different ids and the same `name` are the same category.
/// `name` is the identity used for deduplication and filtering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// =============================================================================
// Post
// =============================================================================

/// A single published article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// Raw publish date as sent by the server (ISO-8601 or similar)
    pub publish_date: String,
    pub author: Author,
    pub summary: String,
    /// May be empty
    pub categories: Vec<Category>,
}

impl Post {
    /// Parse `publish_date` into a calendar date.
    ///
    /// Accepts RFC 3339 timestamps (`2020-04-19T15:24:43Z`), naive timestamps
    /// without offset, and bare dates (`2020-04-19`). Returns `None` for
    /// anything else; callers fall back to the raw string.
    pub fn published_on(&self) -> Option<NaiveDate> {
        let raw = self.publish_date.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.date());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Names of this post's categories, in post order
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}

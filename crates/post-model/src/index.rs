//! PostIndex: id lookups over a loaded PostCollection.
//!
//! The detail view needs "give me post X" while the list view needs the
//! collection in received order. PostIndex keeps both:
//! - the collection itself, untouched
//! - a HashMap from post id to position in that collection

use crate::types::{Post, PostCollection};
use std::collections::HashMap;

/// Owns one fetched PostCollection and an id → position index into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostIndex {
    posts: PostCollection,
    by_id: HashMap<String, usize>,
}

impl PostIndex {
    /// Build the index. If ids repeat, lookups resolve to the first post
    /// carrying that id.
    pub fn new(posts: PostCollection) -> Self {
        let mut by_id = HashMap::with_capacity(posts.len());
        for (position, post) in posts.iter().enumerate() {
            by_id.entry(post.id.clone()).or_insert(position);
        }
        Self { posts, by_id }
    }

    /// Find a post by id
    pub fn find_post(&self, id: &str) -> Option<&Post> {
        self.by_id.get(id).map(|&position| &self.posts[position])
    }

    /// All posts in received order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Give the collection back, dropping the index
    pub fn into_posts(self) -> PostCollection {
        self.posts
    }
}

impl From<PostCollection> for PostIndex {
    fn from(posts: PostCollection) -> Self {
        Self::new(posts)
    }
}

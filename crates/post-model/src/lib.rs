//! # Post Model Crate
//!
//! Shared data model for the posts feed.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Author, Category, Post, PostCollection)
//! - **parser**: Validate and parse the `{ "posts": [...] }` response body
//! - **index**: PostIndex for id lookups over a loaded collection
//! - **error**: Error types for rejected payloads
//!
//! ## Example Usage
//!
//! ```ignore
//! use post_model::{parse_posts_response, PostIndex};
//!
//! let posts = parse_posts_response(&body)?;
//! let index = PostIndex::new(posts);
//!
//! if let Some(post) = index.find_post("p1") {
//!     println!("{} by {}", post.title, post.author.name);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{PostDataError, Result};
pub use index::PostIndex;
pub use parser::{parse_posts_response, parse_posts_value};
pub use types::{
    // Type aliases
    PostId,
    PostCollection,
    // Core types
    Author,
    Category,
    Post,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, title: &str) -> Post {
        Post {
            id: id.to_string(),
            title: title.to_string(),
            publish_date: "2021-06-01".to_string(),
            author: Author {
                name: "Ada".to_string(),
                avatar_url: "a.png".to_string(),
            },
            summary: String::new(),
            categories: vec![Category::new("c1", "Tech")],
        }
    }

    #[test]
    fn test_empty_index() {
        let index = PostIndex::default();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.find_post("anything").is_none());
    }

    #[test]
    fn test_find_post_by_id() {
        let index = PostIndex::new(vec![post("p1", "First"), post("p2", "Second")]);

        let found = index.find_post("p2").unwrap();
        assert_eq!(found.title, "Second");
        assert!(index.find_post("p3").is_none());
    }

    #[test]
    fn test_index_keeps_received_order() {
        let index = PostIndex::from(vec![post("b", "B"), post("a", "A"), post("c", "C")]);

        let ids: Vec<&str> = index.posts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(index.into_posts().len(), 3);
    }

    #[test]
    fn test_repeated_id_resolves_to_first() {
        let index = PostIndex::new(vec![post("p1", "First"), post("p1", "Shadow")]);
        assert_eq!(index.find_post("p1").unwrap().title, "First");
    }
}

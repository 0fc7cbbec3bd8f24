//! Core trait for filtering a post collection.
//!
//! The view re-evaluates its filter against the whole collection on every
//! render; this trait is that seam.

use post_model::Post;

/// A predicate over posts.
///
/// ## Design Note
/// - `Send + Sync` so a filter can live inside shared state
/// - `apply` borrows the collection and returns references in collection
///   order, so filtering never clones or reorders posts
pub trait PostFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `post` passes this filter
    fn matches(&self, post: &Post) -> bool;

    /// Keep the posts that match, preserving order.
    fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        let visible: Vec<&Post> = posts.iter().filter(|post| self.matches(post)).collect();
        tracing::debug!(
            "Filter applied: {} (input count: {}, output count: {})",
            self.name(),
            posts.len(),
            visible.len()
        );
        visible
    }
}

//! The PostSource trait: anything that can produce a fresh PostCollection.

use crate::error::Result;
use post_model::{Post, PostCollection};
use std::future::Future;

/// Source of posts for a browsing session.
///
/// Every call performs a complete load; implementations must not cache.
pub trait PostSource: Send + Sync {
    /// Load the full collection, in the order the source delivers it.
    fn fetch_posts(&self) -> impl Future<Output = Result<PostCollection>> + Send;

    /// Load the full collection and pick out the post with `id`.
    fn fetch_post(&self, id: &str) -> impl Future<Output = Result<Option<Post>>> + Send {
        async move {
            let posts = self.fetch_posts().await?;
            Ok(posts.into_iter().find(|post| post.id == id))
        }
    }
}

//! # Articles Session
//!
//! Owns the one mutable reference to the articles view state and the source
//! it loads from:
//! 1. `load` fetches posts and, on success, swaps in the next state
//! 2. `toggle` / `clear` apply selection events
//! 3. readers borrow the current `ArticlesState`
//!
//! A failed load leaves the current state untouched. Dropping an unfinished
//! `load` future means its result is never applied. When loads are issued one
//! after another, whichever resolves last determines the state.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use post_model::Post;
use repository::PostSource;

use crate::state::{ArticlesState, SessionEvent};

/// A browsing session over one post source.
pub struct ArticlesSession<S> {
    source: S,
    state: ArticlesState,
}

impl<S: PostSource> ArticlesSession<S> {
    /// New session with an empty state; nothing is fetched until `load`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ArticlesState::new(),
        }
    }

    /// Fetch the posts and replace the state with them.
    ///
    /// The selection is reset as part of the same replacement.
    pub async fn load(&mut self) -> Result<&ArticlesState> {
        let start = Instant::now();

        let posts = match self.source.fetch_posts().await {
            Ok(posts) => posts,
            Err(e) => {
                warn!("Loading posts failed, keeping previous state: {}", e);
                return Err(e).context("Failed to load posts");
            }
        };

        self.dispatch(SessionEvent::PostsLoaded(posts));
        info!(
            "Session loaded {} posts with {} categories in {:.2?}",
            self.state.posts().len(),
            self.state.categories().len(),
            start.elapsed()
        );
        Ok(&self.state)
    }

    /// Fetch the posts again and return the one with `id`, without touching
    /// the session state.
    pub async fn load_post(&self, id: &str) -> Result<Option<Post>> {
        self.source
            .fetch_post(id)
            .await
            .with_context(|| format!("Failed to load post {id}"))
    }

    /// Set one category's selected flag.
    pub fn toggle(&mut self, name: impl Into<String>, checked: bool) -> &ArticlesState {
        self.dispatch(SessionEvent::CategoryToggled {
            name: name.into(),
            checked,
        })
    }

    /// Deselect every category.
    pub fn clear(&mut self) -> &ArticlesState {
        self.dispatch(SessionEvent::SelectionCleared)
    }

    /// Apply an event, swapping the state value wholesale.
    pub fn dispatch(&mut self, event: SessionEvent) -> &ArticlesState {
        let current = std::mem::take(&mut self.state);
        self.state = current.apply(event);
        &self.state
    }

    pub fn state(&self) -> &ArticlesState {
        &self.state
    }

    pub fn visible_posts(&self) -> Vec<&Post> {
        self.state.visible_posts()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

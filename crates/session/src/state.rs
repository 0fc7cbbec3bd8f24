//! # Articles State
//!
//! The complete state of the articles view as one immutable value:
//! the loaded posts, the categories derived from them and the current
//! filter selection. Every change goes through `ArticlesState::apply`, a pure
//! `(state, event) -> state` function.
//!
//! Replacing the posts recomputes the categories and resets the selection in
//! that same step, so the selection's keys always match the categories of the
//! posts it is shown next to.

use filters::{CategorySet, FilterMode, FilterSelection, PostFilter, extract_categories};
use post_model::{Post, PostCollection, PostIndex};

/// Something that happened to the articles view
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A fetch succeeded; replaces the collection wholesale
    PostsLoaded(PostCollection),
    /// A category checkbox changed
    CategoryToggled { name: String, checked: bool },
    /// The "clear selection" action
    SelectionCleared,
}

/// Posts, their categories and the filter selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticlesState {
    posts: PostIndex,
    categories: CategorySet,
    selection: FilterSelection,
}

impl ArticlesState {
    /// Empty state: no posts, no categories, nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the next state.
    pub fn apply(self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::PostsLoaded(posts) => {
                let categories = extract_categories(&posts);
                let selection = FilterSelection::initialize(&categories);
                tracing::debug!(
                    "Loaded {} posts, {} categories; selection reset",
                    posts.len(),
                    categories.len()
                );
                Self {
                    posts: PostIndex::new(posts),
                    categories,
                    selection,
                }
            }
            SessionEvent::CategoryToggled { name, checked } => Self {
                selection: self.selection.toggle(&name, checked),
                ..self
            },
            SessionEvent::SelectionCleared => Self {
                selection: self.selection.clear(),
                ..self
            },
        }
    }

    /// Posts passing the current selection, in received order
    pub fn visible_posts(&self) -> Vec<&Post> {
        self.selection.apply(self.posts.posts())
    }

    /// All loaded posts, in received order
    pub fn posts(&self) -> &[Post] {
        self.posts.posts()
    }

    pub fn find_post(&self, id: &str) -> Option<&Post> {
        self.posts.find_post(id)
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn mode(&self) -> FilterMode {
        self.selection.mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use post_model::{Author, Category};

    fn post(id: &str, categories: &[(&str, &str)]) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Post {id}"),
            publish_date: "2020-01-01".to_string(),
            author: Author {
                name: "Ada".to_string(),
                avatar_url: "a.png".to_string(),
            },
            summary: String::new(),
            categories: categories
                .iter()
                .map(|(cid, name)| Category::new(*cid, *name))
                .collect(),
        }
    }

    fn tech_and_life() -> PostCollection {
        vec![
            post("post-1", &[("1", "Tech")]),
            post("post-2", &[("2", "Life"), ("3", "Tech")]),
        ]
    }

    fn toggled(name: &str, checked: bool) -> SessionEvent {
        SessionEvent::CategoryToggled {
            name: name.to_string(),
            checked,
        }
    }

    fn visible_ids(state: &ArticlesState) -> Vec<&str> {
        state.visible_posts().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_state() {
        let state = ArticlesState::new();

        assert!(state.posts().is_empty());
        assert!(state.categories().is_empty());
        assert!(state.selection().is_empty());
        assert_eq!(state.mode(), FilterMode::Unfiltered);
        assert!(state.visible_posts().is_empty());
    }

    #[test]
    fn test_posts_loaded_derives_categories_and_selection() {
        let state = ArticlesState::new().apply(SessionEvent::PostsLoaded(tech_and_life()));

        let names: Vec<&str> = state.categories().names().collect();
        assert_eq!(names, vec!["Tech", "Life"]);
        assert_eq!(state.selection().len(), 2);
        assert!(state.selection().iter().all(|(_, selected)| !selected));
        assert_eq!(visible_ids(&state), vec!["post-1", "post-2"]);
    }

    #[test]
    fn test_toggle_then_clear() {
        let state = ArticlesState::new()
            .apply(SessionEvent::PostsLoaded(tech_and_life()))
            .apply(toggled("Life", true));

        assert_eq!(state.mode(), FilterMode::Filtered);
        assert_eq!(visible_ids(&state), vec!["post-2"]);

        let state = state.apply(SessionEvent::SelectionCleared);
        assert_eq!(state.mode(), FilterMode::Unfiltered);
        assert_eq!(visible_ids(&state), vec!["post-1", "post-2"]);
    }

    #[test]
    fn test_reload_resets_selection_even_when_identical() {
        let state = ArticlesState::new()
            .apply(SessionEvent::PostsLoaded(tech_and_life()))
            .apply(toggled("Tech", true));
        assert!(state.selection().is_active());

        let state = state.apply(SessionEvent::PostsLoaded(tech_and_life()));
        assert!(!state.selection().is_active());
        assert_eq!(state.selection().len(), 2);
    }

    #[test]
    fn test_reload_drops_stale_keys() {
        let state = ArticlesState::new()
            .apply(SessionEvent::PostsLoaded(tech_and_life()))
            .apply(toggled("Travel", true))
            .apply(SessionEvent::PostsLoaded(vec![post("post-3", &[("9", "Food")])]));

        let keys: Vec<&str> = state.selection().iter().map(|(name, _)| name).collect();
        assert_eq!(keys, vec!["Food"]);
        assert!(state.find_post("post-1").is_none());
        assert!(state.find_post("post-3").is_some());
    }

    #[test]
    fn test_toggle_keeps_posts_and_categories() {
        let loaded = ArticlesState::new().apply(SessionEvent::PostsLoaded(tech_and_life()));
        let toggled_state = loaded.clone().apply(toggled("Tech", true));

        assert_eq!(toggled_state.posts(), loaded.posts());
        assert_eq!(toggled_state.categories(), loaded.categories());
    }
}

//! Category extraction.
//!
//! Derives the set of distinct categories referenced by a PostCollection.
//! Category ids are not unique per logical category upstream, so identity
//! is the category `name`.

use post_model::{Category, Post};
use std::collections::HashSet;

/// Name-deduplicated, first-seen-ordered categories of a PostCollection.
///
/// No two elements share a `name`. Each element carries the `id` of the first
/// record with that name encountered while scanning posts in order, then
/// categories within each post in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    categories: Vec<Category>,
}

impl CategorySet {
    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    /// Category names in set order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    pub fn as_slice(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<'a> IntoIterator for &'a CategorySet {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}

/// Extract the deduplicated categories of `posts`.
///
/// ## Algorithm
/// 1. Flatten every post's categories, preserving post order then in-post order
/// 2. Track names already emitted in a HashSet
/// 3. Keep a record only the first time its name is seen (first-seen-wins)
///
/// Pure: the input is only borrowed. Posts without categories contribute
/// nothing; an empty collection yields an empty set.
pub fn extract_categories(posts: &[Post]) -> CategorySet {
    let mut seen: HashSet<&str> = HashSet::new();

    let mut categories: Vec<Category> = Vec::new();

    for category in posts.iter().flat_map(|post| post.categories.iter()) {
        if seen.insert(category.name.as_str()) {
            categories.push(category.clone());
        }
    }

    tracing::debug!(
        "Extracted {} distinct categories from {} posts",
        categories.len(),
        posts.len()
    );

    CategorySet { categories }
}

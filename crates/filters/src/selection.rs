//! Multi-select category filter state.
//!
//! A FilterSelection maps category name → "selected". Every transition takes
//! the selection by value and returns the next one, so the owner swaps the
//! whole value and never mutates it in place.
//!
//! Modes:
//! - **Unfiltered**: no entry is `true`, every post is visible
//! - **Filtered**: at least one entry is `true`, a post is visible when any of
//!   its category names is selected (OR semantics)

use crate::categories::CategorySet;
use crate::traits::PostFilter;
use post_model::Post;
use std::collections::BTreeMap;

/// The two modes of the filter state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    Unfiltered,
    Filtered,
}

/// Category name → selected flag.
///
/// After `initialize`, the key set equals the names of the CategorySet it was
/// built from, all `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    entries: BTreeMap<String, bool>,
}

impl FilterSelection {
    /// One `false` entry per category name.
    ///
    /// Always a reset: any previous selection is discarded, even when the new
    /// CategorySet is structurally identical to the old one.
    pub fn initialize(categories: &CategorySet) -> Self {
        let entries = categories
            .names()
            .map(|name| (name.to_string(), false))
            .collect();
        Self { entries }
    }

    /// Set the entry for `name` to `checked`, leaving every other entry as is.
    ///
    /// A `name` that is not already a key is inserted rather than rejected;
    /// the selection then carries a key outside the current CategorySet.
    pub fn toggle(mut self, name: &str, checked: bool) -> Self {
        self.entries.insert(name.to_string(), checked);
        self
    }

    /// Set every entry to `false`, keeping the key set.
    pub fn clear(mut self) -> Self {
        self.entries.values_mut().for_each(|selected| *selected = false);
        self
    }

    /// The filter predicate.
    ///
    /// ## Algorithm
    /// 1. No selected entry → every post matches
    /// 2. Otherwise the post matches iff one of its category names maps to
    ///    `true`; names missing from the selection count as unselected
    pub fn matches(&self, post: &Post) -> bool {
        if !self.is_active() {
            return true;
        }
        post.category_names().any(|name| self.is_selected(name))
    }

    /// True when at least one entry is selected
    pub fn is_active(&self) -> bool {
        self.entries.values().any(|&selected| selected)
    }

    pub fn mode(&self) -> FilterMode {
        if self.is_active() {
            FilterMode::Filtered
        } else {
            FilterMode::Unfiltered
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.entries.get(name).copied().unwrap_or(false)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Selected names, in name order
    pub fn selected_names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(name, _)| name.as_str())
    }

    /// All (name, selected) entries, in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(name, &selected)| (name.as_str(), selected))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PostFilter for FilterSelection {
    fn name(&self) -> &str {
        "CategorySelection"
    }

    fn matches(&self, post: &Post) -> bool {
        FilterSelection::matches(self, post)
    }
}

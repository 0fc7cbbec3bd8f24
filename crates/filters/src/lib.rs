//! Category extraction and the multi-select category filter.
//!
//! This crate provides:
//! - `extract_categories` to derive the name-deduplicated CategorySet
//! - `FilterSelection` with its pure transitions and the `matches` predicate
//! - the `PostFilter` trait used to filter a collection for display
//!
//! ## Example Usage
//! ```ignore
//! use filters::{extract_categories, FilterSelection, PostFilter};
//!
//! let categories = extract_categories(&posts);
//! let selection = FilterSelection::initialize(&categories)
//!     .toggle("Life", true);
//!
//! let visible = selection.apply(&posts);
//! ```

pub mod traits;
pub mod categories;
pub mod selection;

// Re-export main types
pub use traits::PostFilter;
pub use categories::{CategorySet, extract_categories};
pub use selection::{FilterMode, FilterSelection};

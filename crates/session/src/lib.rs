//! Session crate for the articles view.
//!
//! This crate ties the repository, category extraction and the filter
//! selection together into the state a front-end renders from.

pub mod state;
pub mod session;

pub use session::ArticlesSession;
pub use state::{ArticlesState, SessionEvent};

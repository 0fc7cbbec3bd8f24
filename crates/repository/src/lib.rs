//! # Repository Crate
//!
//! Loads the post collection from the blog's HTTP API.
//!
//! ## Components
//!
//! - **source**: the `PostSource` trait the session is generic over
//! - **client**: `HttpPostRepository`, the reqwest-backed implementation
//! - **config**: `RepositoryConfig` (base URL, path, timeout)
//! - **error**: `RepositoryError` (`Fetch`, `MalformedResponse`, `Transport`)
//!
//! ## Example Usage
//!
//! ```ignore
//! use repository::{HttpPostRepository, PostSource, RepositoryConfig};
//!
//! let repository = HttpPostRepository::new(&RepositoryConfig::default())?;
//! let posts = repository.fetch_posts().await?;
//! ```

pub mod error;
pub mod config;
pub mod source;
pub mod client;

pub use client::HttpPostRepository;
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, POSTS_PATH, RepositoryConfig};
pub use error::{RepositoryError, Result};
pub use source::PostSource;

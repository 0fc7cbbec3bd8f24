//! Repository configuration.

use crate::error::{RepositoryError, Result};
use reqwest::Url;
use std::time::Duration;

/// Default server the CLI talks to
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Fixed path of the posts endpoint
pub const POSTS_PATH: &str = "/api/posts";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how to fetch posts.
///
/// ```ignore
/// let config = RepositoryConfig::default()
///     .with_base_url("http://blog.internal:8080")
///     .with_timeout(Duration::from_secs(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    pub base_url: String,
    pub posts_path: String,
    pub timeout: Duration,
}

impl RepositoryConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_posts_path(mut self, posts_path: impl Into<String>) -> Self {
        self.posts_path = posts_path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve `posts_path` against `base_url`.
    pub fn endpoint(&self) -> Result<Url> {
        let invalid = |reason: String| RepositoryError::InvalidEndpoint {
            url: format!("{}{}", self.base_url, self.posts_path),
            reason,
        };

        let base = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        base.join(&self.posts_path).map_err(|e| invalid(e.to_string()))
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            posts_path: POSTS_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

//! HTTP repository for the posts endpoint.
//!
//! Issues `GET /api/posts`, checks the status, validates the body and hands
//! back the PostCollection. One request per call, no retries, no caching.

use crate::config::RepositoryConfig;
use crate::error::{RepositoryError, Result};
use crate::source::PostSource;
use post_model::{PostCollection, parse_posts_response};
use reqwest::{Client, Url};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Fetches posts over HTTP.
///
/// Cloning is cheap: the underlying reqwest client is reference counted.
#[derive(Debug, Clone)]
pub struct HttpPostRepository {
    client: Client,
    endpoint: Url,
}

impl HttpPostRepository {
    /// Build a repository from its configuration.
    ///
    /// Fails if the endpoint URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &RepositoryConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;
        let client = Client::builder().timeout(config.timeout).build()?;

        debug!("Posts repository configured for {}", endpoint);
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl PostSource for HttpPostRepository {
    async fn fetch_posts(&self) -> Result<PostCollection> {
        let start = Instant::now();
        debug!("GET {}", self.endpoint);

        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Posts endpoint {} answered {}", self.endpoint, status);
            return Err(RepositoryError::Fetch {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let posts = parse_posts_response(&body).inspect_err(|e| {
            warn!("Rejected posts response from {}: {}", self.endpoint, e);
        })?;

        info!(
            "Fetched {} posts from {} in {:.2?}",
            posts.len(),
            self.endpoint,
            start.elapsed()
        );
        Ok(posts)
    }
}

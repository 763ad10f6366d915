// Platform search — the ingestion boundary.
//
// Each platform implements SearchSource. The pipeline treats a source as a
// black box: a query plus a date range in, a list of posts out, or an error
// that is downgraded to "empty result + recorded message" upstream.

pub mod reddit;
pub mod twitter;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::post::{Platform, Post};

/// Trait for searching one platform. Implementations must be async because
/// every provider is an HTTP API.
#[async_trait]
pub trait SearchSource: Send + Sync {
    /// Which platform this source searches.
    fn platform(&self) -> Platform;

    /// Search for posts matching `query` created within `[start, end]`,
    /// returning at most `limit` posts.
    async fn search(
        &self,
        query: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Post>>;
}

// Reddit search — OAuth2 client-credentials flow plus paginated search.
//
// Reads go through the official API: exchange app credentials for a bearer
// token at www.reddit.com, then page through /search on oauth.reddit.com
// with the `after` cursor. Results outside the requested date range are
// filtered out client-side (the API only offers coarse time windows).

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use super::SearchSource;
use crate::config::Config;
use crate::post::{Platform, Post};

/// Default endpoint for the OAuth token exchange.
pub const DEFAULT_OAUTH_URL: &str = "https://www.reddit.com";

/// Default endpoint for authenticated API calls.
pub const DEFAULT_API_URL: &str = "https://oauth.reddit.com";

/// Fixed delay between paginated calls. Simple backpressure, not adaptive.
const PAGE_DELAY: Duration = Duration::from_secs(1);

/// Reddit search client using the official API.
pub struct RedditSearch {
    client: reqwest::Client,
    client_id: String,
    client_secret: String,
    user_agent: String,
    oauth_url: String,
    api_url: String,
}

impl RedditSearch {
    /// Build a client from configuration. Credential presence is checked
    /// lazily in `search` so a misconfigured platform degrades instead of
    /// aborting the whole run.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.reddit_user_agent.clone())
            .timeout(Duration::from_secs(15))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            client_id: config.reddit_client_id.clone(),
            client_secret: config.reddit_client_secret.clone(),
            user_agent: config.reddit_user_agent.clone(),
            oauth_url: config.reddit_oauth_url.trim_end_matches('/').to_string(),
            api_url: config.reddit_api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Exchange app credentials for a bearer token (client_credentials grant).
    async fn access_token(&self) -> Result<String> {
        let url = format!("{}/api/v1/access_token", self.oauth_url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .header("User-Agent", &self.user_agent)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .context("Reddit token request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Reddit token endpoint returned {status}: {body}");
        }

        let token: TokenResponse = response
            .json()
            .await
            .context("Failed to parse Reddit token response")?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl SearchSource for RedditSearch {
    fn platform(&self) -> Platform {
        Platform::Reddit
    }

    async fn search(
        &self,
        query: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Post>> {
        if self.client_id.is_empty() || self.client_secret.is_empty() {
            anyhow::bail!(
                "REDDIT_CLIENT_ID / REDDIT_CLIENT_SECRET not set. Add them to your .env file."
            );
        }

        let token = self.access_token().await?;
        let url = format!("{}/search", self.api_url);

        let start_ts = start.timestamp();
        let end_ts = end.timestamp();

        let mut posts: Vec<Post> = Vec::new();
        let mut after: Option<String> = None;

        while posts.len() < limit {
            let page_size = (limit - posts.len()).min(100).to_string();
            let mut params: Vec<(&str, &str)> = vec![
                ("q", query),
                ("sort", "relevance"),
                ("t", "month"),
                ("limit", &page_size),
            ];
            if let Some(ref cursor) = after {
                params.push(("after", cursor));
            }

            let response = self
                .client
                .get(&url)
                .bearer_auth(&token)
                .header("User-Agent", &self.user_agent)
                .query(&params)
                .send()
                .await
                .context("Reddit search request failed")?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                anyhow::bail!("Reddit search returned {status}: {body}");
            }

            let listing: Listing = response
                .json()
                .await
                .context("Failed to parse Reddit search response")?;

            if listing.data.children.is_empty() {
                break;
            }

            for child in &listing.data.children {
                let d = &child.data;
                let created = d.created_utc as i64;
                // The API's time window is coarse; enforce the exact range here.
                if created < start_ts || created > end_ts {
                    continue;
                }
                posts.push(Post {
                    id: d.id.clone(),
                    platform: Platform::Reddit,
                    title: Some(d.title.clone()),
                    text: d.selftext.clone(),
                    author: d.author.clone(),
                    subreddit: Some(d.subreddit.clone()),
                    url: Some(format!("https://reddit.com{}", d.permalink)),
                    created_at: Utc
                        .timestamp_opt(created, 0)
                        .single()
                        .map(|t| t.to_rfc3339()),
                    score: d.score,
                    num_comments: d.num_comments,
                    likes: 0,
                    retweets: 0,
                    replies: 0,
                    engagement_score: None,
                });
                if posts.len() >= limit {
                    break;
                }
            }

            debug!(
                page_posts = listing.data.children.len(),
                total_collected = posts.len(),
                "Fetched Reddit search page"
            );

            after = listing.data.after;
            if after.is_none() || posts.len() >= limit {
                break;
            }

            tokio::time::sleep(PAGE_DELAY).await;
        }

        info!(count = posts.len(), query = query, "Collected Reddit posts");
        Ok(posts)
    }
}

// -- Serde types for the OAuth and listing responses --

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Deserialize)]
struct ListingData {
    children: Vec<ListingChild>,
    after: Option<String>,
}

#[derive(Deserialize)]
struct ListingChild {
    data: SubmissionData,
}

#[derive(Deserialize)]
struct SubmissionData {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    selftext: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    subreddit: String,
    #[serde(default)]
    permalink: String,
    #[serde(default)]
    score: i64,
    #[serde(default)]
    num_comments: i64,
    #[serde(default)]
    created_utc: f64,
}

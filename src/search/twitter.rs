// Twitter/X search — recent search on the v2 API.
//
// Pages through /2/tweets/search/recent with the pagination token, expanding
// author IDs to usernames so posts carry a readable author and permalink.
// Retweets are excluded at the query level; only English posts are requested.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};

use super::SearchSource;
use crate::config::Config;
use crate::post::{Platform, Post};

/// Default base for the Twitter v2 API.
pub const DEFAULT_API_URL: &str = "https://api.twitter.com";

/// Fixed delay between paginated calls. Simple backpressure, not adaptive.
const PAGE_DELAY: Duration = Duration::from_secs(1);

/// Twitter search client using the official v2 recent-search endpoint.
pub struct TwitterSearch {
    client: reqwest::Client,
    bearer_token: String,
    api_url: String,
}

impl TwitterSearch {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("grapevine/0.1 (social-research)")
            .timeout(Duration::from_secs(15))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            bearer_token: config.twitter_bearer_token.clone(),
            api_url: config.twitter_api_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl SearchSource for TwitterSearch {
    fn platform(&self) -> Platform {
        Platform::Twitter
    }

    async fn search(
        &self,
        query: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Post>> {
        if self.bearer_token.is_empty() {
            anyhow::bail!("TWITTER_BEARER_TOKEN not set. Add it to your .env file.");
        }

        let url = format!("{}/2/tweets/search/recent", self.api_url);
        let full_query = format!("{query} -is:retweet lang:en");
        let start_time = start.format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let end_time = end.format("%Y-%m-%dT%H:%M:%SZ").to_string();

        let mut posts: Vec<Post> = Vec::new();
        let mut next_token: Option<String> = None;

        while posts.len() < limit {
            let page_size = limit.min(100).to_string();
            let mut params: Vec<(&str, &str)> = vec![
                ("query", &full_query),
                ("start_time", &start_time),
                ("end_time", &end_time),
                ("max_results", &page_size),
                ("tweet.fields", "created_at,public_metrics,author_id"),
                ("expansions", "author_id"),
                ("user.fields", "username,name"),
            ];
            if let Some(ref token) = next_token {
                params.push(("pagination_token", token));
            }

            let response = self
                .client
                .get(&url)
                .bearer_auth(&self.bearer_token)
                .query(&params)
                .send()
                .await
                .context("Twitter search request failed")?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                anyhow::bail!("Twitter search returned {status}: {body}");
            }

            let page: SearchResponse = response
                .json()
                .await
                .context("Failed to parse Twitter search response")?;

            let users: HashMap<&str, &User> = page
                .includes
                .users
                .iter()
                .map(|u| (u.id.as_str(), u))
                .collect();

            if page.data.is_empty() {
                break;
            }

            for tweet in &page.data {
                let username = tweet
                    .author_id
                    .as_deref()
                    .and_then(|id| users.get(id))
                    .map(|u| u.username.clone())
                    .unwrap_or_default();

                posts.push(Post {
                    id: tweet.id.clone(),
                    platform: Platform::Twitter,
                    title: None,
                    text: tweet.text.clone(),
                    author: username.clone(),
                    subreddit: None,
                    url: Some(format!(
                        "https://twitter.com/{}/status/{}",
                        username, tweet.id
                    )),
                    created_at: tweet.created_at.clone(),
                    score: 0,
                    num_comments: 0,
                    likes: tweet.public_metrics.like_count,
                    retweets: tweet.public_metrics.retweet_count,
                    replies: tweet.public_metrics.reply_count,
                    engagement_score: None,
                });
                if posts.len() >= limit {
                    break;
                }
            }

            debug!(
                page_posts = page.data.len(),
                total_collected = posts.len(),
                "Fetched Twitter search page"
            );

            next_token = page.meta.next_token;
            if next_token.is_none() || posts.len() >= limit {
                break;
            }

            tokio::time::sleep(PAGE_DELAY).await;
        }

        info!(count = posts.len(), query = query, "Collected Twitter posts");
        Ok(posts)
    }
}

// -- Serde types for the v2 recent-search response --

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Tweet>,
    #[serde(default)]
    includes: Includes,
    #[serde(default)]
    meta: Meta,
}

#[derive(Deserialize)]
struct Tweet {
    id: String,
    text: String,
    author_id: Option<String>,
    created_at: Option<String>,
    #[serde(default)]
    public_metrics: PublicMetrics,
}

#[derive(Deserialize, Default)]
struct PublicMetrics {
    #[serde(default)]
    like_count: i64,
    #[serde(default)]
    retweet_count: i64,
    #[serde(default)]
    reply_count: i64,
}

#[derive(Deserialize, Default)]
struct Includes {
    #[serde(default)]
    users: Vec<User>,
}

#[derive(Deserialize)]
struct User {
    id: String,
    username: String,
}

#[derive(Deserialize, Default)]
struct Meta {
    next_token: Option<String>,
}

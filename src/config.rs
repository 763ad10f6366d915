use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// All credentials come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy. Missing credentials
/// are not fatal at load time — each platform source validates what it
/// needs, and a failed source degrades to an empty result set.
pub struct Config {
    pub reddit_client_id: String,
    pub reddit_client_secret: String,
    pub reddit_user_agent: String,
    pub twitter_bearer_token: String,
    /// Reddit OAuth token endpoint base (override for testing).
    pub reddit_oauth_url: String,
    /// Reddit search API base (override for testing).
    pub reddit_api_url: String,
    /// Twitter v2 API base (override for testing).
    pub twitter_api_url: String,
    /// Directory where reports are written.
    pub output_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default or an empty fallback — validation happens
    /// in the `require_*` methods at the point of use.
    pub fn load() -> Result<Self> {
        Ok(Self {
            reddit_client_id: env::var("REDDIT_CLIENT_ID").unwrap_or_default(),
            reddit_client_secret: env::var("REDDIT_CLIENT_SECRET").unwrap_or_default(),
            reddit_user_agent: env::var("REDDIT_USER_AGENT")
                .unwrap_or_else(|_| "grapevine/0.1 (social-research)".to_string()),
            twitter_bearer_token: env::var("TWITTER_BEARER_TOKEN").unwrap_or_default(),
            reddit_oauth_url: env::var("REDDIT_OAUTH_URL")
                .unwrap_or_else(|_| crate::search::reddit::DEFAULT_OAUTH_URL.to_string()),
            reddit_api_url: env::var("REDDIT_API_URL")
                .unwrap_or_else(|_| crate::search::reddit::DEFAULT_API_URL.to_string()),
            twitter_api_url: env::var("TWITTER_API_URL")
                .unwrap_or_else(|_| crate::search::twitter::DEFAULT_API_URL.to_string()),
            output_dir: env::var("GRAPEVINE_OUTPUT_DIR").unwrap_or_else(|_| "output".to_string()),
        })
    }

    /// Check that Reddit API credentials are configured.
    pub fn require_reddit(&self) -> Result<()> {
        if self.reddit_client_id.is_empty() || self.reddit_client_secret.is_empty() {
            anyhow::bail!(
                "REDDIT_CLIENT_ID / REDDIT_CLIENT_SECRET not set. Add them to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }

    /// Check that the Twitter bearer token is configured.
    pub fn require_twitter(&self) -> Result<()> {
        if self.twitter_bearer_token.is_empty() {
            anyhow::bail!(
                "TWITTER_BEARER_TOKEN not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}

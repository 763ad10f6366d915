// The post record threaded through every pipeline stage.
//
// The original data model was a loose per-platform mapping; here it is one
// explicit struct with optional platform-specific fields. Stages annotate
// posts as they pass through (the engagement filter sets `engagement_score`),
// so downstream reads treat a missing score as zero.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which platform a post came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Reddit,
    Twitter,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Reddit => write!(f, "reddit"),
            Platform::Twitter => write!(f, "twitter"),
        }
    }
}

/// A single post collected from a platform search.
///
/// Reddit posts carry `title`, `subreddit`, `score`, and `num_comments`;
/// Twitter posts carry `likes`, `retweets`, and `replies`. Numeric metrics
/// default to zero when the API omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub platform: Platform,
    /// Reddit submission title. Twitter posts have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Post body — selftext for Reddit, tweet text for Twitter.
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subreddit: Option<String>,
    /// Permalink. Used as a hard dedup key when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// ISO-8601 creation timestamp, when the platform reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: i64,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub retweets: i64,
    #[serde(default)]
    pub replies: i64,
    /// Set by the engagement filter. Absent until that stage has run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_score: Option<i64>,
}

impl Post {
    /// The post's full text content: title + body for Reddit, body for Twitter.
    pub fn content(&self) -> String {
        match self.platform {
            Platform::Reddit => {
                let title = self.title.as_deref().unwrap_or("");
                format!("{} {}", title, self.text).trim().to_string()
            }
            Platform::Twitter => self.text.trim().to_string(),
        }
    }

    /// Engagement score, treating "not yet scored" as zero.
    pub fn engagement(&self) -> i64 {
        self.engagement_score.unwrap_or(0)
    }
}

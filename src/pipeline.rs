// Research pipeline: fan-out search, then the synchronous analysis chain.
//
// The two platform searches run as independent concurrent tasks and both
// complete before filtering begins — a fan-out/fan-in barrier, not a
// streaming pipeline. A failed search is downgraded to an empty result set
// plus a recorded error string; it never cancels the other platform or the
// run. Everything downstream operates on complete in-memory collections.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::{dedup, engagement, sentiment, trends};
use crate::post::{Platform, Post};
use crate::search::SearchSource;
use crate::suggest;

/// Knobs for a single research run.
#[derive(Debug, Clone)]
pub struct ResearchOptions {
    /// Days to look back from now.
    pub days: i64,
    /// Minimum engagement score to keep a post.
    pub min_engagement: i64,
    /// Maximum results fetched per platform.
    pub max_results: usize,
    /// Whether to run the sentiment stage.
    pub sentiment: bool,
}

impl Default for ResearchOptions {
    fn default() -> Self {
        Self {
            days: 30,
            min_engagement: 5,
            max_results: 50,
            sentiment: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
    pub days: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResearchStats {
    /// Unique posts after dedup.
    pub total_posts: usize,
    /// Reddit posts that survived the engagement filter.
    pub reddit_posts: usize,
    /// Twitter posts that survived the engagement filter.
    pub twitter_posts: usize,
}

/// The full in-memory result structure handed to the output layer.
#[derive(Debug, Clone, Serialize)]
pub struct ResearchReport {
    pub topic: String,
    pub date_range: DateRange,
    pub stats: ResearchStats,
    pub posts: Vec<Post>,
    pub trends: trends::TrendReport,
    pub suggestions: suggest::ContentSuggestions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<sentiment::SentimentSummary>,
    pub errors: Vec<String>,
}

/// Run one platform's search, downgrading failure to empty + error string.
async fn search_platform(
    source: &dyn SearchSource,
    topic: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    limit: usize,
) -> (Vec<Post>, Option<String>) {
    let label = match source.platform() {
        Platform::Reddit => "Reddit",
        Platform::Twitter => "Twitter",
    };

    match source.search(topic, start, end, limit).await {
        Ok(posts) => {
            info!(platform = label, count = posts.len(), "Search complete");
            (posts, None)
        }
        Err(e) => {
            warn!(platform = label, error = %e, "Search failed");
            (Vec::new(), Some(format!("{label}: {e}")))
        }
    }
}

/// Execute the full research pipeline for a topic.
///
/// Nothing in here is fatal: platform failures land in `report.errors`,
/// and degenerate inputs (empty corpus, one week of data) produce
/// well-typed empty results.
pub async fn run(
    reddit: &dyn SearchSource,
    twitter: &dyn SearchSource,
    topic: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    opts: &ResearchOptions,
) -> ResearchReport {
    // Fan-out: both searches run concurrently, both finish before filtering.
    let (reddit_result, twitter_result) = tokio::join!(
        search_platform(reddit, topic, start, end, opts.max_results),
        search_platform(twitter, topic, start, end, opts.max_results),
    );

    let mut errors = Vec::new();
    let (reddit_posts, reddit_err) = reddit_result;
    let (twitter_posts, twitter_err) = twitter_result;
    errors.extend(reddit_err);
    errors.extend(twitter_err);

    println!(
        "  Reddit: {} posts, Twitter: {} posts fetched",
        reddit_posts.len(),
        twitter_posts.len()
    );

    let filtered_reddit =
        engagement::filter_posts(reddit_posts, opts.min_engagement, Some(Platform::Reddit));
    let filtered_twitter =
        engagement::filter_posts(twitter_posts, opts.min_engagement, Some(Platform::Twitter));

    println!(
        "  After engagement filter (min {}): Reddit {}, Twitter {}",
        opts.min_engagement,
        filtered_reddit.len(),
        filtered_twitter.len()
    );

    let reddit_count = filtered_reddit.len();
    let twitter_count = filtered_twitter.len();

    let mut all_posts = filtered_reddit;
    all_posts.extend(filtered_twitter);

    let unique_posts = dedup::deduplicate(all_posts, dedup::DEDUP_THRESHOLD);
    println!("  {} unique posts after dedup", unique_posts.len());

    let trend_report = trends::analyze(&unique_posts, topic);
    println!(
        "  {} trending topics, {} themes",
        trend_report.topics.len(),
        trend_report.themes.len()
    );

    let suggestions = suggest::generate(&trend_report, topic);

    let sentiment_summary = if opts.sentiment {
        Some(sentiment::analyze(&unique_posts))
    } else {
        None
    };

    ResearchReport {
        topic: topic.to_string(),
        date_range: DateRange {
            start: start.to_rfc3339(),
            end: end.to_rfc3339(),
            days: opts.days,
        },
        stats: ResearchStats {
            total_posts: unique_posts.len(),
            reddit_posts: reddit_count,
            twitter_posts: twitter_count,
        },
        posts: unique_posts,
        trends: trend_report,
        suggestions,
        sentiment: sentiment_summary,
        errors,
    }
}

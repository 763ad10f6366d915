// End-to-end pipeline tests with mock search sources, plus report output.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use grapevine::output::markdown;
use grapevine::pipeline::{self, ResearchOptions};
use grapevine::post::{Platform, Post};
use grapevine::search::SearchSource;

/// Source that returns a fixed set of posts for any query.
struct FixedSource {
    platform: Platform,
    posts: Vec<Post>,
}

#[async_trait]
impl SearchSource for FixedSource {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn search(
        &self,
        _query: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
        _limit: usize,
    ) -> Result<Vec<Post>> {
        Ok(self.posts.clone())
    }
}

/// Source that always fails, standing in for a misconfigured platform.
struct FailingSource {
    platform: Platform,
}

#[async_trait]
impl SearchSource for FailingSource {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn search(
        &self,
        _query: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
        _limit: usize,
    ) -> Result<Vec<Post>> {
        anyhow::bail!("credentials not configured")
    }
}

fn reddit_post(id: &str, title: &str, score: i64, num_comments: i64) -> Post {
    Post {
        id: id.to_string(),
        platform: Platform::Reddit,
        title: Some(title.to_string()),
        text: String::new(),
        author: "tester".to_string(),
        subreddit: Some("rust".to_string()),
        url: Some(format!("https://reddit.com/r/rust/comments/{id}")),
        created_at: Some("2024-01-15T10:00:00+00:00".to_string()),
        score,
        num_comments,
        likes: 0,
        retweets: 0,
        replies: 0,
        engagement_score: None,
    }
}

fn twitter_post(id: &str, text: &str, likes: i64) -> Post {
    Post {
        id: id.to_string(),
        platform: Platform::Twitter,
        title: None,
        text: text.to_string(),
        author: "tester".to_string(),
        subreddit: None,
        url: Some(format!("https://twitter.com/tester/status/{id}")),
        created_at: Some("2024-01-16T10:00:00+00:00".to_string()),
        score: 0,
        num_comments: 0,
        likes,
        retweets: 0,
        replies: 0,
        engagement_score: None,
    }
}

fn fixtures() -> (FixedSource, FixedSource) {
    let reddit = FixedSource {
        platform: Platform::Reddit,
        posts: vec![
            reddit_post("r1", "Async runtime deep dive", 40, 12),
            reddit_post("r2", "Borrow checker war stories", 15, 3),
            reddit_post("r3", "low effort repost", 0, 0), // filtered out
        ],
    };
    let twitter = FixedSource {
        platform: Platform::Twitter,
        posts: vec![
            twitter_post("t1", "shipping the new async runtime today", 30),
            twitter_post("t2", "hot take on borrow semantics", 8),
        ],
    };
    (reddit, twitter)
}

fn default_range() -> (DateTime<Utc>, DateTime<Utc>) {
    let end = Utc::now();
    (end - Duration::days(30), end)
}

// ============================================================
// Full pipeline runs
// ============================================================

#[tokio::test]
async fn both_platforms_flow_into_one_report() {
    let (reddit, twitter) = fixtures();
    let (start, end) = default_range();
    let opts = ResearchOptions {
        min_engagement: 5,
        ..ResearchOptions::default()
    };

    let report = pipeline::run(&reddit, &twitter, "rust async", start, end, &opts).await;

    assert!(report.errors.is_empty());
    assert_eq!(report.stats.reddit_posts, 2); // r3 fell below the threshold
    assert_eq!(report.stats.twitter_posts, 2);
    assert_eq!(report.stats.total_posts, 4);
    assert_eq!(report.topic, "rust async");
    assert!(report.sentiment.is_none());

    // Posts come out sorted by engagement
    let scores: Vec<i64> = report.posts.iter().map(|p| p.engagement()).collect();
    let mut sorted = scores.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);
}

#[tokio::test]
async fn failed_platform_is_recorded_not_fatal() {
    let (reddit, _) = fixtures();
    let twitter = FailingSource {
        platform: Platform::Twitter,
    };
    let (start, end) = default_range();
    let opts = ResearchOptions {
        min_engagement: 5,
        ..ResearchOptions::default()
    };

    let report = pipeline::run(&reddit, &twitter, "rust", start, end, &opts).await;

    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with("Twitter:"));
    assert_eq!(report.stats.twitter_posts, 0);
    assert_eq!(report.stats.reddit_posts, 2);
    assert!(!report.posts.is_empty());
}

#[tokio::test]
async fn sentiment_stage_is_opt_in() {
    let (reddit, twitter) = fixtures();
    let (start, end) = default_range();
    let opts = ResearchOptions {
        min_engagement: 1,
        sentiment: true,
        ..ResearchOptions::default()
    };

    let report = pipeline::run(&reddit, &twitter, "rust", start, end, &opts).await;

    let summary = report.sentiment.expect("sentiment requested");
    assert_eq!(summary.total_posts, report.stats.total_posts);
}

#[tokio::test]
async fn empty_results_produce_an_empty_report() {
    let reddit = FixedSource {
        platform: Platform::Reddit,
        posts: Vec::new(),
    };
    let twitter = FixedSource {
        platform: Platform::Twitter,
        posts: Vec::new(),
    };
    let (start, end) = default_range();

    let report = pipeline::run(
        &reddit,
        &twitter,
        "obscure topic",
        start,
        end,
        &ResearchOptions::default(),
    )
    .await;

    assert_eq!(report.stats.total_posts, 0);
    assert!(report.posts.is_empty());
    assert!(report.trends.topics.is_empty());
    assert!(report.errors.is_empty());
}

// ============================================================
// Report output
// ============================================================

#[tokio::test]
async fn markdown_report_is_written_to_disk() {
    let (reddit, twitter) = fixtures();
    let (start, end) = default_range();
    let opts = ResearchOptions {
        min_engagement: 5,
        ..ResearchOptions::default()
    };
    let report = pipeline::run(&reddit, &twitter, "rust async", start, end, &opts).await;

    let dir = tempfile::tempdir().unwrap();
    let path = markdown::generate_report(&report, dir.path().to_str().unwrap()).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Social Research Report: rust async"));
    assert!(content.contains("## Top Discussions"));
    assert!(content.contains("### Reddit"));
    assert!(content.contains("### X (Twitter)"));
    assert!(path.ends_with(".md"));
}

#[tokio::test]
async fn json_report_round_trips() {
    let (reddit, twitter) = fixtures();
    let (start, end) = default_range();
    let opts = ResearchOptions {
        min_engagement: 5,
        ..ResearchOptions::default()
    };
    let report = pipeline::run(&reddit, &twitter, "rust async", start, end, &opts).await;

    let dir = tempfile::tempdir().unwrap();
    let path = markdown::generate_json_report(&report, dir.path().to_str().unwrap()).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["topic"], "rust async");
    assert_eq!(value["stats"]["total_posts"], 4);
    assert!(value["sentiment"].is_null()); // skipped when not requested
    assert!(path.ends_with(".json"));
}

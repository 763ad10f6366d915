// Engagement scoring and filtering tests.

use grapevine::analysis::engagement::{
    engagement_score, filter_by_date_range, filter_by_keywords, filter_posts, top_posts,
};
use grapevine::post::{Platform, Post};

fn reddit_post(id: &str, title: &str, score: i64, num_comments: i64) -> Post {
    Post {
        id: id.to_string(),
        platform: Platform::Reddit,
        title: Some(title.to_string()),
        text: String::new(),
        author: "tester".to_string(),
        subreddit: Some("rust".to_string()),
        url: Some(format!("https://reddit.com/r/rust/comments/{id}")),
        created_at: None,
        score,
        num_comments,
        likes: 0,
        retweets: 0,
        replies: 0,
        engagement_score: None,
    }
}

fn twitter_post(id: &str, text: &str, likes: i64, retweets: i64, replies: i64) -> Post {
    Post {
        id: id.to_string(),
        platform: Platform::Twitter,
        title: None,
        text: text.to_string(),
        author: "tester".to_string(),
        subreddit: None,
        url: Some(format!("https://twitter.com/tester/status/{id}")),
        created_at: None,
        score: 0,
        num_comments: 0,
        likes,
        retweets,
        replies,
        engagement_score: None,
    }
}

// ============================================================
// Scoring formulas
// ============================================================

#[test]
fn reddit_comments_count_double() {
    let post = reddit_post("a", "title", 10, 5);
    assert_eq!(engagement_score(&post, Platform::Reddit), 20);
}

#[test]
fn twitter_retweets_count_triple() {
    let post = twitter_post("a", "text", 5, 2, 1);
    // 5 likes + 3*2 retweets + 2*1 replies
    assert_eq!(engagement_score(&post, Platform::Twitter), 13);
}

#[test]
fn score_is_monotonic_in_each_metric() {
    let base = reddit_post("a", "t", 10, 5);
    let mut more_comments = base.clone();
    more_comments.num_comments += 1;
    assert!(
        engagement_score(&more_comments, Platform::Reddit)
            > engagement_score(&base, Platform::Reddit)
    );

    let base = twitter_post("b", "t", 5, 2, 1);
    let mut more_retweets = base.clone();
    more_retweets.retweets += 1;
    assert!(
        engagement_score(&more_retweets, Platform::Twitter)
            > engagement_score(&base, Platform::Twitter)
    );
}

// ============================================================
// Threshold filtering
// ============================================================

#[test]
fn filter_drops_below_threshold_and_sorts_descending() {
    let posts = vec![
        reddit_post("low", "low", 1, 0),   // score 1, dropped at min 5
        reddit_post("mid", "mid", 5, 2),   // score 9
        reddit_post("high", "high", 20, 10), // score 40
    ];

    let filtered = filter_posts(posts, 5, None);
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].id, "high");
    assert_eq!(filtered[1].id, "mid");
}

#[test]
fn filter_attaches_engagement_score() {
    let posts = vec![reddit_post("a", "t", 10, 5)];
    let filtered = filter_posts(posts, 0, None);
    assert_eq!(filtered[0].engagement_score, Some(20));
    assert_eq!(filtered[0].engagement(), 20);
}

#[test]
fn threshold_is_inclusive() {
    let posts = vec![reddit_post("edge", "t", 5, 0)]; // score exactly 5
    let filtered = filter_posts(posts, 5, None);
    assert_eq!(filtered.len(), 1);
}

#[test]
fn platform_override_wins_over_post_platform() {
    // A post with only twitter metrics, scored as reddit, scores zero.
    let posts = vec![twitter_post("a", "t", 100, 10, 5)];
    let filtered = filter_posts(posts, 1, Some(Platform::Reddit));
    assert!(filtered.is_empty());
}

#[test]
fn equal_scores_keep_input_order() {
    let posts = vec![
        reddit_post("first", "t", 10, 0),
        reddit_post("second", "t", 10, 0),
    ];
    let filtered = filter_posts(posts, 0, None);
    assert_eq!(filtered[0].id, "first");
    assert_eq!(filtered[1].id, "second");
}

// ============================================================
// Top-N selection
// ============================================================

#[test]
fn top_posts_takes_highest_without_mutating_input() {
    let posts = filter_posts(
        vec![
            reddit_post("a", "t", 1, 0),
            reddit_post("b", "t", 50, 0),
            reddit_post("c", "t", 10, 0),
        ],
        0,
        None,
    );

    let top = top_posts(&posts, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].id, "b");
    assert_eq!(top[1].id, "c");
    assert_eq!(posts.len(), 3);
}

// ============================================================
// Date and keyword filters
// ============================================================

#[test]
fn date_range_is_inclusive_and_drops_undated() {
    let mut before = reddit_post("before", "t", 1, 0);
    before.created_at = Some("2024-01-01T00:00:00".to_string());
    let mut inside = reddit_post("inside", "t", 1, 0);
    inside.created_at = Some("2024-02-15T12:00:00".to_string());
    let mut edge = reddit_post("edge", "t", 1, 0);
    edge.created_at = Some("2024-02-01T00:00:00".to_string());
    let undated = reddit_post("undated", "t", 1, 0);

    let posts = vec![before, inside, edge, undated];
    let kept = filter_by_date_range(&posts, "2024-02-01T00:00:00", "2024-02-28T23:59:59");

    let ids: Vec<&str> = kept.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["inside", "edge"]);
}

#[test]
fn keyword_filter_matches_case_insensitively() {
    let posts = vec![
        reddit_post("hit", "Rust Async Runtime", 1, 0),
        reddit_post("miss", "gardening tips", 1, 0),
    ];
    let keywords = vec!["async".to_string()];

    let kept = filter_by_keywords(&posts, &keywords, false);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "hit");
}

#[test]
fn keyword_filter_exclude_flips_selection() {
    let posts = vec![
        reddit_post("hit", "Rust Async Runtime", 1, 0),
        reddit_post("miss", "gardening tips", 1, 0),
    ];
    let keywords = vec!["async".to_string()];

    let kept = filter_by_keywords(&posts, &keywords, true);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "miss");
}

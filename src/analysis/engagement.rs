// Engagement scoring and threshold filtering.
//
// Each platform weighs its raw interaction counts differently: Reddit values
// discussion (comments count double), Twitter values amplification (retweets
// triple). Scores are attached to posts as they pass the filter so every
// downstream stage can sort without recomputing.

use crate::post::{Platform, Post};

/// Compute the engagement score for a post on the given platform.
///
/// Reddit: `score + 2 * num_comments`. Twitter: `likes + 3 * retweets +
/// 2 * replies`. Monotonic in every positive metric.
pub fn engagement_score(post: &Post, platform: Platform) -> i64 {
    match platform {
        Platform::Reddit => post.score + 2 * post.num_comments,
        Platform::Twitter => post.likes + 3 * post.retweets + 2 * post.replies,
    }
}

/// Filter posts by a minimum engagement threshold.
///
/// Resolves each post's platform (explicit override wins, otherwise the
/// post's own), attaches the computed score, keeps only posts at or above
/// `min_engagement`, and returns them sorted descending by score. The sort
/// is stable, so equal-score posts keep their original relative order.
pub fn filter_posts(
    posts: Vec<Post>,
    min_engagement: i64,
    platform_override: Option<Platform>,
) -> Vec<Post> {
    let mut filtered: Vec<Post> = posts
        .into_iter()
        .filter_map(|mut post| {
            let platform = platform_override.unwrap_or(post.platform);
            let score = engagement_score(&post, platform);
            if score >= min_engagement {
                post.engagement_score = Some(score);
                Some(post)
            } else {
                None
            }
        })
        .collect();

    filtered.sort_by(|a, b| b.engagement().cmp(&a.engagement()));
    filtered
}

/// The top `limit` posts by engagement score. Non-mutating; stable sort.
pub fn top_posts(posts: &[Post], limit: usize) -> Vec<Post> {
    let mut sorted: Vec<Post> = posts.to_vec();
    sorted.sort_by(|a, b| b.engagement().cmp(&a.engagement()));
    sorted.truncate(limit);
    sorted
}

/// Keep posts whose creation date falls within `[start, end]` inclusive.
///
/// ISO-8601 strings compare correctly lexicographically, so this is a plain
/// string comparison. Posts without a date are dropped.
pub fn filter_by_date_range(posts: &[Post], start: &str, end: &str) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| {
            post.created_at
                .as_deref()
                .is_some_and(|date| start <= date && date <= end)
        })
        .cloned()
        .collect()
}

/// Filter posts by keyword presence (case-insensitive substring match on the
/// full content). With `exclude` set, posts containing any keyword are
/// dropped instead of kept.
pub fn filter_by_keywords(posts: &[Post], keywords: &[String], exclude: bool) -> Vec<Post> {
    let keywords_lower: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    posts
        .iter()
        .filter(|post| {
            let content = post.content().to_lowercase();
            let has_keyword = keywords_lower.iter().any(|k| content.contains(k));
            has_keyword != exclude
        })
        .cloned()
        .collect()
}

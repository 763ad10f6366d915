// Near-duplicate removal and similar-post grouping.
//
// Cross-posted and lightly reworded content shows up on both platforms;
// dedup keeps the highest-engagement instance of each. Similarity is a
// normalized character-level ratio based on the longest common subsequence:
// 2*LCS(a,b) / (|a|+|b|), range [0,1], 1.0 for identical text.

use serde::Serialize;
use std::collections::HashSet;

use crate::post::{Platform, Post};

/// Default similarity threshold for dropping a post as a duplicate.
pub const DEDUP_THRESHOLD: f64 = 0.85;

/// Default (looser) threshold for grouping related posts.
pub const GROUP_THRESHOLD: f64 = 0.7;

/// Case-insensitive character-level similarity ratio between two texts.
///
/// `2 * LCS / (len_a + len_b)` over lowercased characters. Two empty
/// strings are identical (ratio 1.0).
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    2.0 * lcs_length(&a, &b) as f64 / (a.len() + b.len()) as f64
}

/// Longest-common-subsequence length via the classic two-row DP.
fn lcs_length(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Remove duplicate and highly similar posts.
///
/// Posts are visited in descending engagement order (stable, so ties keep
/// their input order) so that when duplicates collide the highest-engagement
/// instance survives. A post is dropped if its URL was already seen, if its
/// text is empty, or if its text is at least `threshold`-similar to any
/// previously kept post. Comparisons run against kept posts only, bounding
/// the O(n²) cost by the output size rather than the input size.
pub fn deduplicate(posts: Vec<Post>, threshold: f64) -> Vec<Post> {
    if posts.is_empty() {
        return Vec::new();
    }

    let mut sorted = posts;
    sorted.sort_by(|a, b| b.engagement().cmp(&a.engagement()));

    let mut unique: Vec<Post> = Vec::new();
    let mut seen_urls: HashSet<String> = HashSet::new();
    let mut seen_texts: Vec<String> = Vec::new();

    for post in sorted {
        if let Some(url) = post.url.as_deref() {
            if !url.is_empty() && seen_urls.contains(url) {
                continue;
            }
        }

        let text = post.content();
        if text.is_empty() {
            continue;
        }

        let is_duplicate = seen_texts
            .iter()
            .any(|seen| similarity_ratio(&text, seen) >= threshold);
        if is_duplicate {
            continue;
        }

        if let Some(url) = post.url.as_deref() {
            if !url.is_empty() {
                seen_urls.insert(url.to_string());
            }
        }
        seen_texts.push(text);
        unique.push(post);
    }

    unique
}

/// Group similar posts together.
///
/// Greedy partitioning: the first remaining post seeds a group, every
/// remaining post at least `threshold`-similar to the seed joins it, and the
/// process repeats on the leftovers. Similarity is not transitive, so group
/// membership depends on input order — this is a known approximation of
/// clustering, kept for its predictability, not true equivalence classes.
/// Groups come back sorted descending by summed engagement.
pub fn group_similar_posts(posts: Vec<Post>, threshold: f64) -> Vec<Vec<Post>> {
    if posts.is_empty() {
        return Vec::new();
    }

    let mut groups: Vec<Vec<Post>> = Vec::new();
    let mut ungrouped = posts;

    while !ungrouped.is_empty() {
        let seed = ungrouped.remove(0);
        let seed_text = seed.content();
        let mut group = vec![seed];

        let mut remaining = Vec::with_capacity(ungrouped.len());
        for post in ungrouped {
            if similarity_ratio(&seed_text, &post.content()) >= threshold {
                group.push(post);
            } else {
                remaining.push(post);
            }
        }

        groups.push(group);
        ungrouped = remaining;
    }

    groups.sort_by_key(|group| {
        let total: i64 = group.iter().map(|p| p.engagement()).sum();
        std::cmp::Reverse(total)
    });

    groups
}

/// Summed platform metrics for a merged duplicate group.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinedMetrics {
    Reddit {
        total_score: i64,
        total_comments: i64,
    },
    Twitter {
        total_likes: i64,
        total_retweets: i64,
        total_replies: i64,
    },
}

/// A duplicate group collapsed into one representative post.
#[derive(Debug, Clone, Serialize)]
pub struct MergedPost {
    /// Full copy of the highest-engagement member.
    pub post: Post,
    pub metrics: CombinedMetrics,
    /// Every non-empty URL across the group.
    pub related_urls: Vec<String>,
    pub duplicate_count: usize,
}

/// Merge a group of duplicate/similar posts into a single record.
///
/// The highest-engagement member becomes the base; platform metrics are
/// summed across the whole group. Returns `None` for an empty group.
pub fn merge_duplicate_info(group: &[Post]) -> Option<MergedPost> {
    let base = group.iter().max_by_key(|p| p.engagement())?.clone();

    let metrics = match base.platform {
        Platform::Reddit => CombinedMetrics::Reddit {
            total_score: group.iter().map(|p| p.score).sum(),
            total_comments: group.iter().map(|p| p.num_comments).sum(),
        },
        Platform::Twitter => CombinedMetrics::Twitter {
            total_likes: group.iter().map(|p| p.likes).sum(),
            total_retweets: group.iter().map(|p| p.retweets).sum(),
            total_replies: group.iter().map(|p| p.replies).sum(),
        },
    };

    let related_urls: Vec<String> = group
        .iter()
        .filter_map(|p| p.url.clone())
        .filter(|u| !u.is_empty())
        .collect();

    Some(MergedPost {
        post: base,
        metrics,
        related_urls,
        duplicate_count: group.len(),
    })
}

// Deduplication and similar-post grouping tests.

use grapevine::analysis::dedup::{
    deduplicate, group_similar_posts, merge_duplicate_info, similarity_ratio, CombinedMetrics,
    DEDUP_THRESHOLD, GROUP_THRESHOLD,
};
use grapevine::post::{Platform, Post};

fn post(id: &str, text: &str, engagement: i64) -> Post {
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
        likes: engagement,
        retweets: 0,
        replies: 0,
        engagement_score: Some(engagement),
    }
}

fn ids(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(|p| p.id.as_str()).collect()
}

// ============================================================
// Similarity ratio
// ============================================================

#[test]
fn near_identical_text_scores_above_dedup_threshold() {
    let a = "rust is a great systems programming language";
    let b = "rust is a great systems programming language!";
    assert!(similarity_ratio(a, b) >= DEDUP_THRESHOLD);
}

#[test]
fn unrelated_text_scores_below_group_threshold() {
    let a = "rust borrow checker explained";
    let b = "my favorite pasta recipes this summer";
    assert!(similarity_ratio(a, b) < GROUP_THRESHOLD);
}

// ============================================================
// Deduplication
// ============================================================

#[test]
fn exact_duplicate_keeps_highest_engagement() {
    let posts = vec![
        post("low", "the exact same tweet text", 5),
        post("high", "the exact same tweet text", 50),
    ];
    let unique = deduplicate(posts, DEDUP_THRESHOLD);
    assert_eq!(ids(&unique), vec!["high"]);
}

#[test]
fn case_only_variant_is_a_duplicate() {
    let posts = vec![
        post("upper", "Rust Performance Tips Everyone Should Know", 10),
        post("lower", "rust performance tips everyone should know", 5),
    ];
    let unique = deduplicate(posts, DEDUP_THRESHOLD);
    assert_eq!(unique.len(), 1);
    assert_eq!(unique[0].id, "upper");
}

#[test]
fn same_url_is_dropped_regardless_of_text() {
    let mut a = post("a", "completely different text here", 10);
    let mut b = post("b", "nothing at all like the other one", 5);
    a.url = Some("https://example.com/same".to_string());
    b.url = Some("https://example.com/same".to_string());

    let unique = deduplicate(vec![a, b], DEDUP_THRESHOLD);
    assert_eq!(ids(&unique), vec!["a"]);
}

#[test]
fn empty_text_posts_are_dropped() {
    let posts = vec![post("empty", "", 100), post("real", "actual content here", 5)];
    let unique = deduplicate(posts, DEDUP_THRESHOLD);
    assert_eq!(ids(&unique), vec!["real"]);
}

#[test]
fn dissimilar_posts_all_survive() {
    let posts = vec![
        post("a", "rust borrow checker deep dive", 30),
        post("b", "kubernetes cluster autoscaling guide", 20),
        post("c", "sourdough starter troubleshooting", 10),
    ];
    let unique = deduplicate(posts, DEDUP_THRESHOLD);
    assert_eq!(unique.len(), 3);
}

#[test]
fn output_is_sorted_by_engagement_descending() {
    let posts = vec![
        post("mid", "kubernetes cluster autoscaling guide", 20),
        post("high", "rust borrow checker deep dive", 30),
        post("low", "sourdough starter troubleshooting", 10),
    ];
    let unique = deduplicate(posts, DEDUP_THRESHOLD);
    assert_eq!(ids(&unique), vec!["high", "mid", "low"]);
}

#[test]
fn deduplicate_is_idempotent() {
    let posts = vec![
        post("a", "rust borrow checker deep dive", 30),
        post("b", "rust borrow checker deep dive!", 20),
        post("c", "sourdough starter troubleshooting", 10),
    ];
    let once = deduplicate(posts, DEDUP_THRESHOLD);
    let twice = deduplicate(once.clone(), DEDUP_THRESHOLD);
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn never_grows_and_empty_input_is_empty() {
    assert!(deduplicate(Vec::new(), DEDUP_THRESHOLD).is_empty());

    let posts: Vec<Post> = (0..10)
        .map(|i| post(&format!("p{i}"), &format!("unique text number {i}"), i))
        .collect();
    let unique = deduplicate(posts.clone(), DEDUP_THRESHOLD);
    assert!(unique.len() <= posts.len());
}

// ============================================================
// Grouping
// ============================================================

#[test]
fn similar_posts_land_in_one_group() {
    let posts = vec![
        post("a", "rust async runtime comparison", 10),
        post("b", "rust async runtime comparisons", 5),
        post("c", "gardening in small apartments", 3),
    ];
    let groups = group_similar_posts(posts, GROUP_THRESHOLD);
    assert_eq!(groups.len(), 2);
}

#[test]
fn groups_sorted_by_summed_engagement() {
    let posts = vec![
        post("solo", "gardening in small apartments", 12),
        post("a", "rust async runtime comparison", 10),
        post("b", "rust async runtime comparisons", 5),
    ];
    let groups = group_similar_posts(posts, GROUP_THRESHOLD);
    // The rust pair sums to 15, beating the 12-point singleton.
    assert_eq!(groups[0].len(), 2);
    assert_eq!(groups[1][0].id, "solo");
}

// ============================================================
// Merging
// ============================================================

#[test]
fn merge_sums_metrics_and_keeps_best_post() {
    let mut a = post("a", "same tweet", 30);
    a.likes = 30;
    a.retweets = 2;
    a.replies = 1;
    let mut b = post("b", "same tweet", 10);
    b.likes = 10;
    b.retweets = 1;
    b.replies = 4;

    let merged = merge_duplicate_info(&[a, b]).unwrap();
    assert_eq!(merged.post.id, "a");
    assert_eq!(merged.duplicate_count, 2);
    assert_eq!(merged.related_urls.len(), 2);
    match merged.metrics {
        CombinedMetrics::Twitter {
            total_likes,
            total_retweets,
            total_replies,
        } => {
            assert_eq!(total_likes, 40);
            assert_eq!(total_retweets, 3);
            assert_eq!(total_replies, 5);
        }
        CombinedMetrics::Reddit { .. } => panic!("expected twitter metrics"),
    }
}

#[test]
fn merge_empty_group_is_none() {
    assert!(merge_duplicate_info(&[]).is_none());
}

// Lexicon-based sentiment classification.
//
// Each post's text is lowercased and whitespace-split, then counted against
// fixed positive/negative word tables. No weighting, no context, and no
// punctuation stripping — a word glued to a comma will not match. That is
// the accepted accuracy ceiling for this stage.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use super::{round1, round2};
use crate::post::Post;

/// Fixed positive lexicon, applied verbatim.
const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "awesome", "love", "best", "perfect", "fantastic",
    "wonderful", "brilliant", "outstanding", "superb", "impressive", "helpful", "useful", "easy",
    "simple", "fast", "efficient", "reliable", "recommend", "recommended", "better", "improved",
    "improvement", "success", "successful", "win", "winning", "solved", "works", "working",
    "fixed",
];

/// Fixed negative lexicon, applied verbatim.
const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "worst", "hate", "poor", "disappointing",
    "disappointed", "frustrating", "frustrated", "annoying", "annoyed", "useless", "broken",
    "bug", "bugs", "buggy", "slow", "difficult", "hard", "complicated", "confusing", "confused",
    "problem", "problems", "issue", "issues", "error", "errors", "fail", "failed", "failure",
    "crash", "crashed", "wrong", "sucks",
];

static POSITIVE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| POSITIVE_WORDS.iter().copied().collect());
static NEGATIVE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NEGATIVE_WORDS.iter().copied().collect());

/// Per-post sentiment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Mixed => write!(f, "mixed"),
        }
    }
}

/// The result of classifying a single text.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentScore {
    pub sentiment: Sentiment,
    pub positive_score: usize,
    pub negative_score: usize,
    /// 0.0-1.0, rounded to two decimals. Fixed at 0.5 for mixed.
    pub confidence: f64,
}

/// A polar example post with its classification attached.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedPost {
    #[serde(flatten)]
    pub post: Post,
    pub sentiment_data: SentimentScore,
}

/// Aggregated sentiment over a corpus.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SentimentSummary {
    pub total_posts: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub mixed: usize,
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub neutral_pct: f64,
    pub mixed_pct: f64,
    /// First positive examples, at most 10.
    pub positive_posts: Vec<ClassifiedPost>,
    /// First negative examples, at most 10.
    pub negative_posts: Vec<ClassifiedPost>,
}

/// Classify a single text by lexicon hit counts.
///
/// Zero sentiment words means neutral with zero confidence. A class wins
/// outright when its count exceeds 1.5x the other's; anything closer is
/// mixed at a fixed 0.5 confidence. Winner confidence is its share of all
/// sentiment words, rounded to two decimals.
pub fn classify(text: &str) -> SentimentScore {
    let lower = text.to_lowercase();

    let mut positive = 0usize;
    let mut negative = 0usize;
    for word in lower.split_whitespace() {
        if POSITIVE_SET.contains(word) {
            positive += 1;
        }
        if NEGATIVE_SET.contains(word) {
            negative += 1;
        }
    }

    let total = positive + negative;
    if total == 0 {
        return SentimentScore {
            sentiment: Sentiment::Neutral,
            positive_score: 0,
            negative_score: 0,
            confidence: 0.0,
        };
    }

    let (sentiment, confidence) = if positive as f64 > negative as f64 * 1.5 {
        (Sentiment::Positive, positive as f64 / total as f64)
    } else if negative as f64 > positive as f64 * 1.5 {
        (Sentiment::Negative, negative as f64 / total as f64)
    } else {
        (Sentiment::Mixed, 0.5)
    };

    SentimentScore {
        sentiment,
        positive_score: positive,
        negative_score: negative,
        confidence: round2(confidence),
    }
}

/// Classify every post and aggregate counts, percentages, and examples.
///
/// An empty corpus yields an all-zero summary — never an error, never a
/// division by zero.
pub fn analyze(posts: &[Post]) -> SentimentSummary {
    if posts.is_empty() {
        return SentimentSummary::default();
    }

    let mut summary = SentimentSummary {
        total_posts: posts.len(),
        ..SentimentSummary::default()
    };

    for post in posts {
        let score = classify(&post.content());

        match score.sentiment {
            Sentiment::Positive => {
                summary.positive += 1;
                if summary.positive_posts.len() < 10 {
                    summary.positive_posts.push(ClassifiedPost {
                        post: post.clone(),
                        sentiment_data: score,
                    });
                }
            }
            Sentiment::Negative => {
                summary.negative += 1;
                if summary.negative_posts.len() < 10 {
                    summary.negative_posts.push(ClassifiedPost {
                        post: post.clone(),
                        sentiment_data: score,
                    });
                }
            }
            Sentiment::Neutral => summary.neutral += 1,
            Sentiment::Mixed => summary.mixed += 1,
        }
    }

    let total = posts.len() as f64;
    summary.positive_pct = round1(summary.positive as f64 / total * 100.0);
    summary.negative_pct = round1(summary.negative as f64 / total * 100.0);
    summary.neutral_pct = round1(summary.neutral as f64 / total * 100.0);
    summary.mixed_pct = round1(summary.mixed as f64 / total * 100.0);

    summary
}

// Trend extraction: keyword frequencies, multi-word themes, hashtag counts,
// and week-over-week growth/decline.
//
// Keyword extraction is deliberately naive — URLs, mentions, and hashtags are
// stripped, alphabetic runs are lowercased, and a fixed stop-word table is
// applied. No stemming, no embeddings. Frequency counts are per-corpus and
// tie-breaking follows first-encountered order.

use regex_lite::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::round1;
use crate::post::Post;

/// Common English words removed from keyword extraction.
///
/// Fixed table, applied verbatim — downstream consumers depend on these
/// exact exclusions.
const STOP_WORDS: &[&str] = &[
    "the", "is", "at", "which", "on", "and", "or", "but", "in", "with", "to", "for", "of", "as",
    "by", "an", "be", "this", "that", "from", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "can", "are", "was", "were", "been", "being",
    "not", "no", "yes", "all", "any", "some", "more", "most", "very", "just", "only", "also",
    "too", "than", "then", "now", "here", "there", "when", "where", "why", "how", "what", "who",
    "their", "them", "they", "these", "those", "such", "into", "through", "during", "before",
    "after", "above", "below", "between", "under", "again", "further", "once", "both", "each",
    "few", "other", "don", "use", "using", "used", "get", "got", "like", "know", "think", "want",
    "need", "make", "see", "look", "find", "give", "tell", "work", "call", "try", "ask", "feel",
    "become", "leave", "put",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\.\S+").expect("static pattern"));
static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").expect("static pattern"));
static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("static pattern"));
static HASHTAG_CAPTURE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\w+)").expect("static pattern"));
static MENTION_CAPTURE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(\w+)").expect("static pattern"));

/// A single trending keyword with its per-corpus frequency.
#[derive(Debug, Clone, Serialize)]
pub struct TrendingTopic {
    pub keyword: String,
    pub frequency: usize,
    /// `frequency / total_posts * 100`, capped at 100 (a keyword repeating
    /// within one post inflates frequency past the post count), rounded to
    /// one decimal.
    pub percentage: f64,
    /// First posts (at most 3) that mention the keyword.
    pub example_posts: Vec<Post>,
}

/// A frequent bigram/trigram phrase.
#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    pub theme: String,
    pub frequency: usize,
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HashtagCount {
    /// `#`-prefixed tag.
    pub hashtag: String,
    pub count: usize,
}

/// A keyword gaining ground between the first and last observed week.
#[derive(Debug, Clone, Serialize)]
pub struct RisingKeyword {
    pub keyword: String,
    /// Growth percentage, rounded to one decimal.
    pub growth: f64,
}

/// A keyword losing ground between the first and last observed week.
#[derive(Debug, Clone, Serialize)]
pub struct FallingKeyword {
    pub keyword: String,
    /// Decline percentage, rounded to one decimal.
    pub decline: f64,
}

/// Week-over-week keyword movement between the earliest and latest buckets.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemporalTrends {
    pub trending_up: Vec<RisingKeyword>,
    pub trending_down: Vec<FallingKeyword>,
    pub weeks_analyzed: usize,
}

/// The full trend report for a research run.
#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub topic: String,
    pub total_posts: usize,
    pub topics: Vec<TrendingTopic>,
    pub themes: Vec<Theme>,
    pub hashtags: Vec<HashtagCount>,
    pub temporal: TemporalTrends,
}

/// Extract keywords from text: strip URLs, mentions, and hashtags, then take
/// lowercase alphabetic runs of at least `min_length` characters that aren't
/// stop words. Occurrence order is preserved and duplicates are kept —
/// frequency matters to the counters downstream.
pub fn extract_keywords(text: &str, min_length: usize) -> Vec<String> {
    let stripped = URL_RE.replace_all(text, "");
    let stripped = MENTION_RE.replace_all(&stripped, "");
    let stripped = HASHTAG_RE.replace_all(&stripped, "");

    let word_re = Regex::new(&format!(r"\b[a-zA-Z]{{{min_length},}}\b"))
        .expect("word pattern is valid for any length");

    let lower = stripped.to_lowercase();
    word_re
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .filter(|w| !STOP_WORD_SET.contains(w.as_str()))
        .collect()
}

/// Extract hashtag names (without the `#`) from text.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG_CAPTURE_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Extract mentioned usernames (without the `@`) from text.
pub fn extract_mentions(text: &str) -> Vec<String> {
    MENTION_CAPTURE_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// A frequency counter that remembers first-insertion order so that a stable
/// descending sort breaks count ties by first encounter — the ordering the
/// rest of the report format assumes.
struct OrderedCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl OrderedCounter {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn add(&mut self, key: &str) {
        if let Some(&i) = self.index.get(key) {
            self.entries[i].1 += 1;
        } else {
            self.index.insert(key.to_string(), self.entries.len());
            self.entries.push((key.to_string(), 1));
        }
    }

    /// Entries sorted descending by count; ties keep insertion order.
    fn most_common(mut self) -> Vec<(String, usize)> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries
    }
}

/// Find the `top_n` most frequent keywords across all posts.
pub fn find_trending_topics(posts: &[Post], top_n: usize) -> Vec<TrendingTopic> {
    if posts.is_empty() {
        return Vec::new();
    }

    let mut counter = OrderedCounter::new();
    let mut examples: HashMap<String, Vec<Post>> = HashMap::new();

    for post in posts {
        let keywords = extract_keywords(&post.content(), 3);
        for keyword in &keywords {
            counter.add(keyword);
        }
        // One example slot per post, however often the keyword repeats in it.
        let unique: HashSet<&String> = keywords.iter().collect();
        for keyword in unique {
            let entry = examples.entry(keyword.clone()).or_default();
            if entry.len() < 3 {
                entry.push(post.clone());
            }
        }
    }

    let total = posts.len();
    counter
        .most_common()
        .into_iter()
        .take(top_n)
        .map(|(keyword, frequency)| TrendingTopic {
            percentage: round1((frequency as f64 / total as f64 * 100.0).min(100.0)),
            example_posts: examples.remove(&keyword).unwrap_or_default(),
            keyword,
            frequency,
        })
        .collect()
}

/// Identify common bigram/trigram themes appearing in at least `min_posts`
/// posts. Phrases are built from keywords of length >= 4 with a sliding
/// window, counted per-corpus, and capped at the 20 most frequent before
/// the minimum-count filter.
pub fn find_common_themes(posts: &[Post], min_posts: usize) -> Vec<Theme> {
    if posts.is_empty() {
        return Vec::new();
    }

    let mut counter = OrderedCounter::new();
    let mut examples: HashMap<String, Vec<Post>> = HashMap::new();

    for post in posts {
        let words = extract_keywords(&post.content(), 4);

        let mut phrases: Vec<String> = Vec::new();
        for pair in words.windows(2) {
            phrases.push(format!("{} {}", pair[0], pair[1]));
        }
        for triple in words.windows(3) {
            phrases.push(format!("{} {} {}", triple[0], triple[1], triple[2]));
        }

        for phrase in &phrases {
            counter.add(phrase);
        }
        let unique: HashSet<&String> = phrases.iter().collect();
        for phrase in unique {
            let entry = examples.entry(phrase.clone()).or_default();
            if entry.len() < 5 {
                entry.push(post.clone());
            }
        }
    }

    counter
        .most_common()
        .into_iter()
        .take(20)
        .filter(|(_, count)| *count >= min_posts)
        .map(|(theme, frequency)| Theme {
            posts: examples.remove(&theme).unwrap_or_default(),
            theme,
            frequency,
        })
        .collect()
}

/// Count hashtag usage across posts, returning the `top_n` most used.
///
/// Falls back to the title when a post's body is empty (link-only Reddit
/// submissions).
pub fn analyze_hashtags(posts: &[Post], top_n: usize) -> Vec<HashtagCount> {
    let mut counter = OrderedCounter::new();

    for post in posts {
        let text = if post.text.is_empty() {
            post.title.as_deref().unwrap_or("")
        } else {
            &post.text
        };
        for tag in extract_hashtags(text) {
            counter.add(&tag);
        }
    }

    counter
        .most_common()
        .into_iter()
        .take(top_n)
        .map(|(tag, count)| HashtagCount {
            hashtag: format!("#{tag}"),
            count,
        })
        .collect()
}

/// Bucket a post's creation date into a `YYYY-W<week>` key (Sunday-first
/// week of year). Returns `None` for missing or malformed dates — those
/// posts are skipped, never fatal.
fn week_key(date_str: &str) -> Option<String> {
    let s = date_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive().format("%Y-W%U").to_string());
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ndt.date().format("%Y-W%U").to_string());
    }
    if let Ok(nd) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(nd.format("%Y-W%U").to_string());
    }
    None
}

/// Compare keyword frequencies between the earliest and latest week buckets.
///
/// A keyword trends up when the last week's count beats 1.5x the first
/// week's and reaches at least 3; trending down is the mirror image. Fewer
/// than two distinct weeks yields empty lists. Both lists are sorted
/// descending by percentage and truncated to 10.
pub fn analyze_temporal_trends(posts: &[Post]) -> TemporalTrends {
    let mut weekly: HashMap<String, HashMap<String, usize>> = HashMap::new();

    for post in posts {
        let Some(date_str) = post.created_at.as_deref() else {
            continue;
        };
        let Some(week) = week_key(date_str) else {
            continue;
        };

        let bucket = weekly.entry(week).or_default();
        for keyword in extract_keywords(&post.content(), 3) {
            *bucket.entry(keyword).or_insert(0) += 1;
        }
    }

    let mut weeks: Vec<&String> = weekly.keys().collect();
    weeks.sort();

    if weeks.len() < 2 {
        return TemporalTrends {
            weeks_analyzed: weeks.len(),
            ..TemporalTrends::default()
        };
    }

    let first_week = &weekly[weeks[0]];
    let last_week = &weekly[*weeks.last().expect("weeks is non-empty")];

    // Alphabetical pre-sort keeps equal-percentage ordering deterministic.
    let mut all_keywords: Vec<&String> = first_week
        .keys()
        .chain(last_week.keys())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    all_keywords.sort();

    let mut trending_up = Vec::new();
    let mut trending_down = Vec::new();

    for keyword in all_keywords {
        let first = first_week.get(keyword).copied().unwrap_or(0);
        let last = last_week.get(keyword).copied().unwrap_or(0);

        if last as f64 > first as f64 * 1.5 && last >= 3 {
            trending_up.push(RisingKeyword {
                keyword: keyword.clone(),
                growth: round1((last as f64 - first as f64) / first.max(1) as f64 * 100.0),
            });
        } else if first as f64 > last as f64 * 1.5 && first >= 3 {
            trending_down.push(FallingKeyword {
                keyword: keyword.clone(),
                decline: round1((first as f64 - last as f64) / first as f64 * 100.0),
            });
        }
    }

    trending_up.sort_by(|a, b| {
        b.growth
            .partial_cmp(&a.growth)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    trending_down.sort_by(|a, b| {
        b.decline
            .partial_cmp(&a.decline)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    trending_up.truncate(10);
    trending_down.truncate(10);

    TemporalTrends {
        trending_up,
        trending_down,
        weeks_analyzed: weeks.len(),
    }
}

/// Comprehensive trend analysis over a deduplicated corpus.
pub fn analyze(posts: &[Post], topic: &str) -> TrendReport {
    TrendReport {
        topic: topic.to_string(),
        total_posts: posts.len(),
        topics: find_trending_topics(posts, 15),
        themes: find_common_themes(posts, 3),
        hashtags: analyze_hashtags(posts, 10),
        temporal: analyze_temporal_trends(posts),
    }
}

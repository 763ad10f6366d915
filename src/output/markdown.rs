// Markdown report generation.
//
// Renders the full research report to a markdown document and writes it to
// a timestamped file under the configured output directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use super::{sanitize_for_filename, truncate_chars};
use crate::pipeline::ResearchReport;
use crate::post::Platform;

/// Render the complete markdown report.
pub fn render(report: &ResearchReport) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push(format!("# Social Research Report: {}\n", report.topic));
    out.push(format!(
        "*Generated: {} to {}*\n",
        &report.date_range.start[..10.min(report.date_range.start.len())],
        &report.date_range.end[..10.min(report.date_range.end.len())],
    ));
    out.push("---\n".to_string());

    // Summary
    out.push(format!("## Research Summary: {}\n", report.topic));
    out.push("**Statistics:**".to_string());
    out.push(format!("- Total posts analyzed: {}", report.stats.total_posts));
    out.push(format!("- Reddit posts: {}", report.stats.reddit_posts));
    out.push(format!("- X/Twitter posts: {}", report.stats.twitter_posts));
    out.push(format!("- Date range: {} days\n", report.date_range.days));

    if !report.trends.topics.is_empty() {
        out.push("**Top Trending Topics:**".to_string());
        for topic in report.trends.topics.iter().take(5) {
            out.push(format!(
                "- **{}** ({}% of discussions)",
                topic.keyword, topic.percentage
            ));
        }
        out.push(String::new());
    }

    // Top discussions
    out.push("---\n".to_string());
    out.push("## Top Discussions\n".to_string());
    render_discussions(report, &mut out);

    // Trending topics
    if !report.trends.topics.is_empty() {
        out.push("---\n".to_string());
        out.push("## Trending Topics\n".to_string());
        for (i, topic) in report.trends.topics.iter().take(10).enumerate() {
            out.push(format!(
                "{}. **{}** - mentioned {} times ({}%)",
                i + 1,
                topic.keyword,
                topic.frequency,
                topic.percentage
            ));
        }
        out.push(String::new());
    }

    // Common themes
    if !report.trends.themes.is_empty() {
        out.push("---\n".to_string());
        out.push("## Common Themes\n".to_string());
        for (i, theme) in report.trends.themes.iter().take(10).enumerate() {
            out.push(format!(
                "{}. **{}** - {} mentions",
                i + 1,
                theme.theme,
                theme.frequency
            ));
        }
        out.push(String::new());
    }

    // Temporal trends
    if !report.trends.temporal.trending_up.is_empty() {
        out.push("---\n".to_string());
        out.push("## Trending Up\n".to_string());
        for item in report.trends.temporal.trending_up.iter().take(5) {
            out.push(format!("- **{}** (+{}% growth)", item.keyword, item.growth));
        }
        out.push(String::new());
    }
    if !report.trends.temporal.trending_down.is_empty() {
        out.push("## Trending Down\n".to_string());
        for item in report.trends.temporal.trending_down.iter().take(5) {
            out.push(format!("- **{}** (-{}% decline)", item.keyword, item.decline));
        }
        out.push(String::new());
    }

    // Content suggestions
    out.push("---\n".to_string());
    out.push("## Content Creation Suggestions\n".to_string());
    for (i, idea) in report.suggestions.blog_posts.iter().take(3).enumerate() {
        out.push(format!("{}. **{}**", i + 1, idea.title));
        out.push(format!("   - Angle: {}", idea.angle));
        out.push(format!("   - Why it works: {}", idea.why_it_works));
        out.push(String::new());
    }

    // Sentiment
    if let Some(sentiment) = &report.sentiment {
        out.push("---\n".to_string());
        out.push("## Sentiment Analysis\n".to_string());
        out.push(format!(
            "- **Positive**: {}% ({} posts)",
            sentiment.positive_pct, sentiment.positive
        ));
        out.push(format!(
            "- **Negative**: {}% ({} posts)",
            sentiment.negative_pct, sentiment.negative
        ));
        out.push(format!(
            "- **Neutral**: {}% ({} posts)",
            sentiment.neutral_pct, sentiment.neutral
        ));
        out.push(format!(
            "- **Mixed**: {}% ({} posts)",
            sentiment.mixed_pct, sentiment.mixed
        ));
        out.push(String::new());
    }

    // Errors
    if !report.errors.is_empty() {
        out.push("---\n".to_string());
        out.push("## Notes\n".to_string());
        for error in &report.errors {
            out.push(format!("- {error}"));
        }
        out.push(String::new());
    }

    out.join("\n")
}

fn render_discussions(report: &ResearchReport, out: &mut Vec<String>) {
    let posts: Vec<_> = report.posts.iter().take(10).collect();
    if posts.is_empty() {
        out.push("No discussions found.\n".to_string());
        return;
    }

    let reddit: Vec<_> = posts
        .iter()
        .filter(|p| p.platform == Platform::Reddit)
        .collect();
    let twitter: Vec<_> = posts
        .iter()
        .filter(|p| p.platform == Platform::Twitter)
        .collect();

    if !reddit.is_empty() {
        out.push("### Reddit\n".to_string());
        for (i, post) in reddit.iter().take(5).enumerate() {
            let title = post.title.as_deref().unwrap_or("Untitled");
            let sub = post.subreddit.as_deref().unwrap_or("unknown");
            out.push(format!("{}. **{}** (r/{})", i + 1, title, sub));
            out.push(format!(
                "   - {} upvotes | {} comments | engagement score {}",
                post.score,
                post.num_comments,
                post.engagement()
            ));
            out.push(format!(
                "   - Link: {}",
                post.url.as_deref().unwrap_or("N/A")
            ));
            out.push(String::new());
        }
    }

    if !twitter.is_empty() {
        out.push("### X (Twitter)\n".to_string());
        for (i, post) in twitter.iter().take(5).enumerate() {
            let preview = truncate_chars(&post.text, 100);
            out.push(format!("{}. **{}** (@{})", i + 1, preview, post.author));
            out.push(format!(
                "   - {} likes | {} retweets | {} replies | engagement score {}",
                post.likes,
                post.retweets,
                post.replies,
                post.engagement()
            ));
            out.push(format!(
                "   - Link: {}",
                post.url.as_deref().unwrap_or("N/A")
            ));
            out.push(String::new());
        }
    }
}

/// Write the markdown report to `<output_dir>/<timestamp>_<topic>.md`,
/// creating the directory if needed. Returns the path written.
pub fn generate_report(report: &ResearchReport, output_dir: &str) -> Result<String> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {output_dir}"))?;

    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let safe_topic = sanitize_for_filename(&report.topic);
    let path = Path::new(output_dir).join(format!("{timestamp}_{safe_topic}.md"));

    fs::write(&path, render(report))
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    Ok(path.display().to_string())
}

/// Write the JSON export next to where the markdown report would go.
pub fn generate_json_report(report: &ResearchReport, output_dir: &str) -> Result<String> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {output_dir}"))?;

    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let safe_topic = sanitize_for_filename(&report.topic);
    let path = Path::new(output_dir).join(format!("{timestamp}_{safe_topic}.json"));

    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    Ok(path.display().to_string())
}

// Colored terminal output for research summaries and suggestions.
//
// This module handles all terminal-specific formatting: colors, section
// headers, ranked lists. The markdown renderer handles the file-bound
// version of the same content.

use colored::Colorize;

use crate::pipeline::ResearchReport;
use crate::post::{Platform, Post};
use crate::suggest::ContentSuggestions;

/// Display the executive summary: stats, top topics, sentiment split.
pub fn display_summary(report: &ResearchReport) {
    println!(
        "\n{}",
        format!("=== Research Summary: {} ===", report.topic).bold()
    );
    println!();

    println!("  Total posts analyzed: {}", report.stats.total_posts);
    println!("  Reddit posts:         {}", report.stats.reddit_posts);
    println!("  X/Twitter posts:      {}", report.stats.twitter_posts);
    println!("  Date range:           {} days", report.date_range.days);

    let topics = &report.trends.topics;
    if !topics.is_empty() {
        println!("\n  {}", "Top trending topics:".bold());
        for topic in topics.iter().take(5) {
            println!(
                "    {} ({}% of discussions)",
                topic.keyword.cyan(),
                topic.percentage
            );
        }
    }

    if let Some(sentiment) = &report.sentiment {
        println!("\n  {}", "Community sentiment:".bold());
        println!("    Positive: {}%", format!("{}", sentiment.positive_pct).green());
        println!("    Negative: {}%", format!("{}", sentiment.negative_pct).red());
        println!(
            "    Neutral/Mixed: {}%",
            sentiment.neutral_pct + sentiment.mixed_pct
        );
    }

    if !report.errors.is_empty() {
        println!("\n  {}", "Notes:".yellow().bold());
        for error in &report.errors {
            println!("    {} {}", "!".yellow(), error);
        }
    }
}

/// Display the top discussions by engagement, grouped by platform.
pub fn display_top_discussions(report: &ResearchReport, limit: usize) {
    let posts: Vec<&Post> = report.posts.iter().take(limit).collect();

    if posts.is_empty() {
        println!("\nNo discussions found.");
        return;
    }

    println!("\n{}", "=== Top Discussions ===".bold());

    let reddit: Vec<&&Post> = posts
        .iter()
        .filter(|p| p.platform == Platform::Reddit)
        .collect();
    let twitter: Vec<&&Post> = posts
        .iter()
        .filter(|p| p.platform == Platform::Twitter)
        .collect();

    if !reddit.is_empty() {
        println!("\n  {}", "Reddit".bold());
        for (i, post) in reddit.iter().take(5).enumerate() {
            let title = post.title.as_deref().unwrap_or("Untitled");
            let sub = post.subreddit.as_deref().unwrap_or("unknown");
            println!("  {}. {} (r/{})", i + 1, title.bold(), sub);
            println!(
                "     {} upvotes | {} comments | engagement {}",
                post.score,
                post.num_comments,
                post.engagement()
            );
            if let Some(url) = &post.url {
                println!("     {}", url.dimmed());
            }
        }
    }

    if !twitter.is_empty() {
        println!("\n  {}", "X (Twitter)".bold());
        for (i, post) in twitter.iter().take(5).enumerate() {
            let preview = super::truncate_chars(&post.text, 100);
            println!("  {}. {} (@{})", i + 1, preview.bold(), post.author);
            println!(
                "     {} likes | {} retweets | {} replies | engagement {}",
                post.likes,
                post.retweets,
                post.replies,
                post.engagement()
            );
            if let Some(url) = &post.url {
                println!("     {}", url.dimmed());
            }
        }
    }
}

/// Display content creation suggestions.
pub fn display_suggestions(suggestions: &ContentSuggestions) {
    println!("\n{}", "=== Content Suggestions ===".bold());

    if !suggestions.blog_posts.is_empty() {
        println!("\n  {}", "Blog post ideas".bold());
        for (i, idea) in suggestions.blog_posts.iter().take(3).enumerate() {
            println!("  {}. {}", i + 1, idea.title.cyan());
            println!("     Angle: {}", idea.angle);
            println!("     Why it works: {}", idea.why_it_works.dimmed());
        }
    }

    if !suggestions.social_posts.is_empty() {
        println!("\n  {}", "Social media ideas".bold());
        for (i, idea) in suggestions.social_posts.iter().take(3).enumerate() {
            println!("  {}. {}: {}", i + 1, idea.format.cyan(), idea.hook);
            println!(
                "     Estimated engagement: {}",
                idea.estimated_engagement.dimmed()
            );
        }
    }

    if !suggestions.videos.is_empty() {
        println!("\n  {}", "Video/tutorial ideas".bold());
        for (i, idea) in suggestions.videos.iter().take(3).enumerate() {
            println!("  {}. {}", i + 1, idea.title.cyan());
            println!("     Format: {}", idea.format);
            println!("     Platform: {}", idea.target_platform.dimmed());
        }
    }
}

// Content suggestion: templated ideas derived from the trend report.
//
// No hard logic here — each generator walks the top trends and fills in a
// fixed template. Generation is deterministic (always the first template
// variant) so runs over the same corpus produce the same ideas.

use serde::Serialize;

use crate::analysis::trends::TrendReport;

#[derive(Debug, Clone, Serialize)]
pub struct BlogPostIdea {
    pub title: String,
    pub angle: String,
    pub why_it_works: String,
    pub target_audience: String,
    pub estimated_length: String,
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialPostIdea {
    pub format: String,
    pub hook: String,
    pub key_points: Vec<String>,
    pub cta: String,
    pub estimated_engagement: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoIdea {
    pub title: String,
    pub format: String,
    pub sections: Vec<String>,
    pub estimated_interest: String,
    pub target_platform: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsletterIdea {
    pub title: String,
    pub format: String,
    pub sections: Vec<String>,
    pub estimated_length: String,
    pub target_audience: String,
}

/// All content suggestions for a research run.
#[derive(Debug, Clone, Serialize)]
pub struct ContentSuggestions {
    pub blog_posts: Vec<BlogPostIdea>,
    pub social_posts: Vec<SocialPostIdea>,
    pub videos: Vec<VideoIdea>,
    pub newsletters: Vec<NewsletterIdea>,
}

/// Capitalize the first letter of each whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn blog_post_ideas(trends: &TrendReport) -> Vec<BlogPostIdea> {
    let mut ideas = Vec::new();

    for topic in trends.topics.iter().take(5) {
        let keyword = &topic.keyword;
        ideas.push(BlogPostIdea {
            title: format!("The Complete Guide to {} in 2026", title_case(keyword)),
            angle: format!(
                "Comprehensive guide based on {} community discussions",
                topic.frequency
            ),
            why_it_works: format!(
                "High interest ({}% of discussions mention this)",
                topic.percentage
            ),
            target_audience: format!("People researching or learning about {keyword}"),
            estimated_length: "2000-3000 words".to_string(),
            key_points: vec![
                format!("What is {keyword}"),
                format!("Why {keyword} matters"),
                "Common use cases".to_string(),
                "Best practices from the community".to_string(),
                "Tools and resources".to_string(),
            ],
        });
    }

    for theme in trends.themes.iter().take(3) {
        ideas.push(BlogPostIdea {
            title: format!("Understanding {}: A Deep Dive", title_case(&theme.theme)),
            angle: format!(
                "Focused analysis of a trending theme ({} mentions)",
                theme.frequency
            ),
            why_it_works: "Addresses a specific pain point or interest area".to_string(),
            target_audience: format!("People interested in {}", theme.theme),
            estimated_length: "1500-2000 words".to_string(),
            key_points: vec![
                format!("What is {}", theme.theme),
                "Why it's trending".to_string(),
                "Real-world examples".to_string(),
                "How to apply it".to_string(),
                "Future outlook".to_string(),
            ],
        });
    }

    for rising in trends.temporal.trending_up.iter().take(2) {
        let keyword = &rising.keyword;
        ideas.push(BlogPostIdea {
            title: format!(
                "Why Everyone Is Talking About {} Right Now",
                title_case(keyword)
            ),
            angle: format!(
                "Timely piece on rapidly growing topic ({}% growth)",
                rising.growth
            ),
            why_it_works: "Capitalizes on rising interest and search volume".to_string(),
            target_audience: "Early adopters and trend followers".to_string(),
            estimated_length: "1000-1500 words".to_string(),
            key_points: vec![
                format!("What sparked the interest in {keyword}"),
                "Key developments and news".to_string(),
                "What the community is saying".to_string(),
                "What to expect next".to_string(),
                "How to get started".to_string(),
            ],
        });
    }

    ideas.truncate(8);
    ideas
}

fn social_post_ideas(trends: &TrendReport, topic: &str) -> Vec<SocialPostIdea> {
    let mut ideas = Vec::new();

    for trend in trends.topics.iter().take(3) {
        let keyword = &trend.keyword;
        ideas.push(SocialPostIdea {
            format: "Twitter/X Thread".to_string(),
            hook: format!(
                "🧵 {}: What you need to know (based on 100+ community discussions)",
                title_case(keyword)
            ),
            key_points: vec![
                format!("1/ What is {keyword} and why it matters"),
                "2/ Top 3 use cases people are discussing".to_string(),
                "3/ Common mistakes to avoid".to_string(),
                "4/ Best resources and tools".to_string(),
                format!("5/ What's next for {keyword}"),
            ],
            cta: format!("What's your experience with {keyword}? Drop a comment 👇"),
            estimated_engagement: "High (trending topic)".to_string(),
        });
    }

    for theme in trends.themes.iter().take(2) {
        ideas.push(SocialPostIdea {
            format: "LinkedIn Post".to_string(),
            hook: format!("💡 Quick insight on {}", theme.theme),
            key_points: vec![
                format!(
                    "After analyzing {} discussions about {}...",
                    theme.frequency, theme.theme
                ),
                "Here's what the community agrees on:".to_string(),
                "• [Key insight 1]".to_string(),
                "• [Key insight 2]".to_string(),
                "• [Key insight 3]".to_string(),
            ],
            cta: "Agree or disagree? Let me know in the comments.".to_string(),
            estimated_engagement: "Medium-High".to_string(),
        });
    }

    if trends.topics.len() >= 2 {
        let first = title_case(&trends.topics[0].keyword);
        let second = title_case(&trends.topics[1].keyword);
        ideas.push(SocialPostIdea {
            format: "Instagram Carousel / Twitter Thread".to_string(),
            hook: format!("{first} vs {second}: Which one should you choose?"),
            key_points: vec![
                "Slide 1: The debate".to_string(),
                format!("Slide 2: {first} - Pros & Cons"),
                format!("Slide 3: {second} - Pros & Cons"),
                "Slide 4: Use cases for each".to_string(),
                "Slide 5: Community verdict".to_string(),
            ],
            cta: format!("Team {first} or Team {second}? 👇"),
            estimated_engagement: "Very High (comparison content)".to_string(),
        });
    }

    if !trends.hashtags.is_empty() {
        let top_hashtags = trends
            .hashtags
            .iter()
            .take(5)
            .map(|h| h.hashtag.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        ideas.push(SocialPostIdea {
            format: "Multi-platform Post".to_string(),
            hook: format!("🔥 Trending now in {topic}"),
            key_points: vec![
                "Quick roundup of what's hot:".to_string(),
                "• [Trend 1]".to_string(),
                "• [Trend 2]".to_string(),
                "• [Trend 3]".to_string(),
                format!("Follow these hashtags: {top_hashtags}"),
            ],
            cta: "Which trend are you most excited about?".to_string(),
            estimated_engagement: "High (timely content)".to_string(),
        });
    }

    ideas.truncate(6);
    ideas
}

fn video_ideas(trends: &TrendReport) -> Vec<VideoIdea> {
    let mut ideas = Vec::new();

    for trend in trends.topics.iter().take(3) {
        let keyword = &trend.keyword;
        ideas.push(VideoIdea {
            title: format!("Complete {} Tutorial for Beginners", title_case(keyword)),
            format: "Long-form tutorial (10-15 minutes)".to_string(),
            sections: vec![
                format!("0:00 - Introduction to {keyword}"),
                "1:00 - Why this matters".to_string(),
                "3:00 - Step-by-step walkthrough".to_string(),
                "8:00 - Common mistakes".to_string(),
                "10:00 - Pro tips from the community".to_string(),
                "12:00 - Resources and next steps".to_string(),
            ],
            estimated_interest: format!("High ({}% of discussions)", trend.percentage),
            target_platform: "YouTube, TikTok (short version)".to_string(),
        });
    }

    if trends.topics.len() >= 2 {
        let first = &trends.topics[0].keyword;
        let second = &trends.topics[1].keyword;
        ideas.push(VideoIdea {
            title: format!(
                "{} vs {}: Honest Comparison",
                title_case(first),
                title_case(second)
            ),
            format: "Comparison video (8-12 minutes)".to_string(),
            sections: vec![
                "0:00 - Introduction".to_string(),
                format!("1:00 - What is {first}"),
                format!("3:00 - What is {second}"),
                "5:00 - Side-by-side comparison".to_string(),
                "7:00 - Real-world use cases".to_string(),
                "9:00 - Which one should you choose?".to_string(),
                "11:00 - Final verdict".to_string(),
            ],
            estimated_interest: "Very High (comparison content)".to_string(),
            target_platform: "YouTube".to_string(),
        });
    }

    for theme in trends.themes.iter().take(2) {
        ideas.push(VideoIdea {
            title: format!(
                "5 Things You Should Know About {}",
                title_case(&theme.theme)
            ),
            format: "Short-form video (60-90 seconds)".to_string(),
            sections: vec![
                "Quick intro (5s)".to_string(),
                "Tip 1 (15s)".to_string(),
                "Tip 2 (15s)".to_string(),
                "Tip 3 (15s)".to_string(),
                "Tip 4 (15s)".to_string(),
                "Tip 5 (15s)".to_string(),
                "CTA (10s)".to_string(),
            ],
            estimated_interest: format!("Medium-High ({} mentions)", theme.frequency),
            target_platform: "TikTok, Instagram Reels, YouTube Shorts".to_string(),
        });
    }

    ideas.truncate(5);
    ideas
}

fn newsletter_ideas(trends: &TrendReport, topic: &str) -> Vec<NewsletterIdea> {
    let mut ideas = vec![NewsletterIdea {
        title: format!(
            "This Week in {}: Top Discussions & Trends",
            title_case(topic)
        ),
        format: "Weekly newsletter".to_string(),
        sections: vec![
            "🔥 Trending This Week".to_string(),
            "💬 Top Community Discussions".to_string(),
            "🆕 What's New".to_string(),
            "💡 Quick Tips".to_string(),
            "📚 Recommended Reading".to_string(),
            "🎯 Action Items".to_string(),
        ],
        estimated_length: "800-1000 words".to_string(),
        target_audience: format!("{topic} enthusiasts and professionals"),
    }];

    if let Some(top) = trends.topics.first() {
        let keyword = &top.keyword;
        ideas.push(NewsletterIdea {
            title: format!("Deep Dive: {}", title_case(keyword)),
            format: "Educational newsletter".to_string(),
            sections: vec![
                format!("What is {keyword}"),
                "Why it matters now".to_string(),
                "How people are using it".to_string(),
                "Common challenges".to_string(),
                "Expert tips".to_string(),
                "Resources to learn more".to_string(),
            ],
            estimated_length: "1200-1500 words".to_string(),
            target_audience: format!("People learning about {keyword}"),
        });
    }

    ideas
}

/// Generate all content suggestions from a trend report.
pub fn generate(trends: &TrendReport, topic: &str) -> ContentSuggestions {
    ContentSuggestions {
        blog_posts: blog_post_ideas(trends),
        social_posts: social_post_ideas(trends, topic),
        videos: video_ideas(trends),
        newsletters: newsletter_ideas(trends, topic),
    }
}

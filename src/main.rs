use anyhow::Result;
use chrono::{Duration, Utc};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing::info;

use grapevine::config::Config;
use grapevine::output;
use grapevine::pipeline::{self, ResearchOptions};
use grapevine::search::reddit::RedditSearch;
use grapevine::search::twitter::TwitterSearch;

/// Grapevine: research a topic across Reddit and X (Twitter).
///
/// Searches both platforms concurrently, filters by engagement, removes
/// near-duplicates, extracts trends and themes, and writes a report.
#[derive(Parser)]
#[command(name = "grapevine", version, about)]
struct Cli {
    /// Topic to research
    topic: String,

    /// Days to look back
    #[arg(long, default_value = "30")]
    days: i64,

    /// Minimum engagement threshold
    #[arg(long, default_value = "5")]
    min_engagement: i64,

    /// Maximum results per platform
    #[arg(long, default_value = "50")]
    max_results: usize,

    /// Enable sentiment analysis
    #[arg(long)]
    sentiment: bool,

    /// Export format
    #[arg(long, value_enum, default_value = "md")]
    export: ExportFormat,

    /// Output directory (overrides GRAPEVINE_OUTPUT_DIR)
    #[arg(long)]
    output_dir: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Md,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("grapevine=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let output_dir = cli.output_dir.unwrap_or_else(|| config.output_dir.clone());

    let end = Utc::now();
    let start = end - Duration::days(cli.days);

    println!("\n{}", format!("=== Social Research: {} ===", cli.topic).bold());
    println!(
        "  Time range: {} to {} ({} days)",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d"),
        cli.days
    );
    println!("  Minimum engagement: {}", cli.min_engagement);
    println!("  Max results per platform: {}\n", cli.max_results);

    let reddit = RedditSearch::new(&config)?;
    let twitter = TwitterSearch::new(&config)?;

    let opts = ResearchOptions {
        days: cli.days,
        min_engagement: cli.min_engagement,
        max_results: cli.max_results,
        sentiment: cli.sentiment,
    };

    println!("{}", "Searching both platforms...".bold());
    let report = pipeline::run(&reddit, &twitter, &cli.topic, start, end, &opts).await;

    for error in &report.errors {
        println!("  {} {}", "Warning:".yellow(), error);
    }

    let path = match cli.export {
        ExportFormat::Md => output::markdown::generate_report(&report, &output_dir)?,
        ExportFormat::Json => output::markdown::generate_json_report(&report, &output_dir)?,
    };
    info!(path = %path, "Report written");

    output::terminal::display_summary(&report);
    output::terminal::display_top_discussions(&report, 10);
    output::terminal::display_suggestions(&report.suggestions);

    println!(
        "\n{}",
        format!("Research complete. Full report saved to: {path}").bold()
    );

    Ok(())
}

// Milk Mob CLI binary
// One-shot validation runs and mob inspection without the HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use milk_mob_lib::config::AppConfig;
use milk_mob_lib::inspect::FsInspector;
use milk_mob_lib::metadata::ytdlp::YtDlpExtractor;
use milk_mob_lib::search::HttpSearchClient;
use milk_mob_lib::store::{InMemoryMobStore, MobStore};
use milk_mob_lib::taxonomy::BUILTIN_MOBS;
use milk_mob_lib::validate::{ValidationPipeline, VideoSource};

#[derive(Parser)]
#[command(name = "milkmob")]
#[command(about = "Milk Mob - campaign video validation from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a video URL or local file and print the verdict
    Validate {
        /// Video URL or path to a local file
        source: String,

        /// Hashtag string as submitted with the video
        #[arg(long, default_value = "")]
        hashtags: String,

        /// Submitter name recorded on acceptance
        #[arg(long, default_value = "you")]
        submitter: String,
    },

    /// List the mob taxonomy
    Mobs,

    /// Show the demo feed for a mob
    Feed {
        /// Mob id (mob001..mob005)
        mob_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            source,
            hashtags,
            submitter,
        } => cmd_validate(source, hashtags, submitter).await,
        Commands::Mobs => cmd_mobs(),
        Commands::Feed { mob_id } => cmd_feed(mob_id),
    }
}

fn build_pipeline(config: &AppConfig, store: Arc<InMemoryMobStore>) -> Result<ValidationPipeline> {
    let mut pipeline = ValidationPipeline::new(
        Arc::new(YtDlpExtractor::new(config.extract_timeout_secs)),
        Arc::new(FsInspector),
        store,
        config.staging_dir.clone(),
    );
    if let Some(key) = &config.search_api_key {
        let client =
            HttpSearchClient::new(&config.search_base_url, key, config.search_timeout_secs)?;
        pipeline = pipeline.with_search(Arc::new(client), &config.search_index);
    }
    Ok(pipeline)
}

async fn cmd_validate(source: String, hashtags: String, submitter: String) -> Result<()> {
    let config = AppConfig::from_env();
    let store = Arc::new(InMemoryMobStore::new());
    let pipeline = build_pipeline(&config, store)?;

    // Anything that parses as an http(s) URL is treated as one; everything
    // else is a local file path.
    let video_source = if source.starts_with("http://") || source.starts_with("https://") {
        VideoSource::Url(source.clone())
    } else {
        VideoSource::File(PathBuf::from(&source))
    };

    let outcome = pipeline.validate(video_source, &hashtags, &submitter).await?;

    println!(
        "Verdict: {} (confidence {:.0}%)",
        if outcome.result.is_valid { "VALID" } else { "INVALID" },
        outcome.result.confidence * 100.0
    );
    println!("  content score: {:.3}", outcome.result.content_score);
    println!("  hashtag score: {:.1}", outcome.result.hashtag_score);
    println!("  method:        {:?}", outcome.result.method);
    println!("  reason:        {}", outcome.result.reason);

    if let Some(video) = &outcome.video {
        println!();
        println!("Video: {} ({}s, {})", video.title, video.duration_secs, video.platform);
    }

    if let Some(assignment) = &outcome.assignment {
        println!();
        println!("Assigned mob: {} ({})", assignment.mob_name, assignment.mob_id);
        println!("  match score: {:.2}", assignment.score);
        println!("  reasons:     {}", assignment.reasons.join(", "));
    }

    Ok(())
}

fn cmd_mobs() -> Result<()> {
    println!("{:>8}  {:<16}  {:<16}  {}", "ID", "Key", "Name", "Description");
    for mob in &BUILTIN_MOBS {
        println!(
            "{:>8}  {:<16}  {:<16}  {}",
            mob.id, mob.key, mob.name, mob.description
        );
    }
    Ok(())
}

fn cmd_feed(mob_id: String) -> Result<()> {
    let store = InMemoryMobStore::with_demo_videos();
    let feed = store.feed(&mob_id)?;

    if feed.videos.is_empty() {
        println!("No videos in {}.", mob_id);
        return Ok(());
    }

    println!(
        "Mob {} ({} videos, avg confidence {}%)",
        mob_id,
        feed.videos.len(),
        feed.average_confidence_pct
    );
    println!();
    println!("{:>10}  {:>10}  {:<16}  {}", "Duration", "Confidence", "Submitter", "Title");
    for video in &feed.videos {
        println!(
            "{:>9}s  {:>9.0}%  {:<16}  {}",
            video.duration_secs,
            video.confidence * 100.0,
            video.submitter,
            video.title
        );
    }

    Ok(())
}

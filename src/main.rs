// Milk Mob server binary

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use milk_mob_lib::config::AppConfig;
use milk_mob_lib::inspect::FsInspector;
use milk_mob_lib::metadata::ytdlp::YtDlpExtractor;
use milk_mob_lib::metadata::MetadataExtractor;
use milk_mob_lib::search::HttpSearchClient;
use milk_mob_lib::server::{self, AppState};
use milk_mob_lib::store::InMemoryMobStore;
use milk_mob_lib::validate::ValidationPipeline;

#[derive(Parser)]
#[command(name = "milk-mob")]
#[command(about = "Campaign video validation and mob classification service", long_about = None)]
#[command(version)]
struct Args {
    /// Bind host (overrides MILKMOB_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides MILKMOB_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Staging directory for uploaded files (overrides MILKMOB_STAGING_DIR)
    #[arg(long)]
    staging_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = AppConfig::from_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(dir) = args.staging_dir {
        config.staging_dir = dir;
    }

    std::fs::create_dir_all(&config.staging_dir)?;

    let extractor = Arc::new(YtDlpExtractor::new(config.extract_timeout_secs));
    let extractor_available = extractor.is_available();
    if !extractor_available {
        warn!("yt-dlp not found; url submissions will fail metadata extraction");
    }

    let store = Arc::new(InMemoryMobStore::with_demo_videos());

    let mut pipeline = ValidationPipeline::new(
        extractor,
        Arc::new(FsInspector),
        store.clone(),
        config.staging_dir.clone(),
    );
    if let Some(key) = &config.search_api_key {
        let client =
            HttpSearchClient::new(&config.search_base_url, key, config.search_timeout_secs)?;
        pipeline = pipeline.with_search(Arc::new(client), &config.search_index);
        info!("content search enabled against {}", config.search_base_url);
    } else {
        info!("content search disabled; scoring from metadata heuristics");
    }

    let state = Arc::new(AppState {
        pipeline,
        store,
        extractor_available,
        staging_dir: config.staging_dir.display().to_string(),
    });

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("milk mob service listening on http://{}", addr);

    axum::serve(listener, server::router(state)).await?;

    Ok(())
}

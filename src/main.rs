use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use precisionworks::config::{Config, LogConfig};
use precisionworks::fixtures::Fixtures;
use precisionworks::server::Server;
use precisionworks::store::{Catalog, Latency};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "precisionworks", version)]
#[command(about = "Precision Works site server")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<String>,

    /// Listening address, overrides `server_addr`
    #[arg(long)]
    addr: Option<String>,

    /// Directory of fixture JSON files, overrides `fixtures_dir`
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Load and validate the fixtures, then exit
    #[arg(long)]
    check_fixtures: bool,
}

fn init_tracing(log: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    match &log.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file '{}'", path))?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
        }
        None => builder.init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(addr) = args.addr {
        config.server_addr = addr;
    }
    if let Some(dir) = args.fixtures {
        config.fixtures_dir = Some(dir);
    }

    init_tracing(&config.log)?;

    info!("Starting Precision Works site server");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let fixtures = Fixtures::load(config.fixtures_dir.as_deref()).context("failed to load fixtures")?;
    if args.check_fixtures {
        info!(
            "Fixtures valid: {} products, {} capabilities, {} certifications, {} blog posts",
            fixtures.products.len(),
            fixtures.capabilities.len(),
            fixtures.certifications.len(),
            fixtures.blogs.len()
        );
        return Ok(());
    }

    let catalog = Arc::new(Catalog::new(fixtures, Latency::from_config(&config.latency)));
    let server = Server::bind(&config.server_addr, catalog)
        .await
        .with_context(|| format!("failed to bind {}", config.server_addr))?;
    info!("Server listening on: {}", server.local_addr());

    server
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}

use clap::Parser as _;
use door_catalog::analyzer::log_summary;
use door_catalog::config::{AppConfig, load_config, load_config_or_default};
use door_catalog::parser::CatalogParser;
use door_catalog::pipeline::{run_catalog, write_outputs};
use door_catalog::scraper::ScraperImpl;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "config.json";

/// Scrape a door catalog page into JSON/CSV/XLSX exports.
#[derive(Debug, clap::Parser)]
#[command(name = "door-catalog", version)]
struct Cli {
    /// JSON config file. A missing default file means built-in settings.
    #[arg(long)]
    config: Option<String>,

    /// Catalog page to scrape.
    #[arg(long)]
    url: Option<String>,

    /// Directory for the timestamped exports.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Keep remote image URLs instead of downloading.
    #[arg(long)]
    no_images: bool,

    /// Also write the front-end data module to this path.
    #[arg(long)]
    module: Option<PathBuf>,
}

fn resolve_config(cli: &Cli) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_config_or_default(DEFAULT_CONFIG)?,
    };

    if let Some(url) = &cli.url {
        config.catalog_url = url.clone();
    }
    if let Some(dir) = &cli.out_dir {
        config.output.dir = dir.clone();
    }
    if cli.no_images {
        config.images.download = false;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // Load configuration from file, then apply CLI overrides
    let config = match resolve_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Build the HTTP client and the page parser
    let scraper = match ScraperImpl::new(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let parser = match CatalogParser::new(&config) {
        Ok(p) => p,
        Err(e) => {
            error!("Bad selector: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Fetch, parse, normalize and resolve images
    let report = match run_catalog(&config, &scraper, &parser).await {
        Ok(r) => r,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    log_summary(&report.summary);

    if report.records.is_empty() {
        error!("No catalog records found");
        return ExitCode::FAILURE;
    }

    // Write exports and the optional data module
    match write_outputs(&report, &config, cli.module.as_deref(), &chrono::Local::now()) {
        Ok(paths) => {
            info!("Done: {} files written", paths.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

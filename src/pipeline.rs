// One catalog run: fetch -> parse -> normalize -> images -> summary -> export
use crate::analyzer::{CatalogSummary, summarize};
use crate::config::AppConfig;
use crate::exporter::{export_all, js_module};
use crate::images::resolve_images;
use crate::model::{AppError, CatalogRecord};
use crate::normalizer::normalize_all;
use crate::parser::Parser;
use crate::scraper::{RetryPolicy, Scraper, fetch_page_with_retry};
use crate::utils::timestamp_suffix;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;
use url::Url;

/// Everything a run produced, in page order.
#[derive(Debug)]
pub struct RunReport {
    pub records: Vec<CatalogRecord>,
    pub candidates: usize,
    pub skipped: usize,
    pub duplicates: usize,
    pub summary: CatalogSummary,
}

pub async fn run_catalog(
    config: &AppConfig,
    scraper: &dyn Scraper,
    parser: &dyn Parser,
) -> Result<RunReport, AppError> {
    let base = Url::parse(&config.catalog_url).map_err(|_| AppError::BadUrl(config.catalog_url.clone()))?;

    info!("Fetching {}", base);
    let html = fetch_page_with_retry(scraper, base.as_str(), &RetryPolicy::from_config(config)).await?;

    let candidates = parser.parse(&html)?;
    info!("Candidates found: {}", candidates.len());

    let normalized = normalize_all(&candidates, &base, config);
    info!(
        "Records: {} (skipped {}, duplicates {})",
        normalized.records.len(),
        normalized.skipped,
        normalized.duplicates
    );

    let (records, outcomes): (Vec<_>, Vec<_>) = resolve_images(normalized.records, scraper, &config.images)
        .await
        .into_iter()
        .unzip();
    let summary = summarize(&records, &outcomes);

    Ok(RunReport {
        records,
        candidates: candidates.len(),
        skipped: normalized.skipped,
        duplicates: normalized.duplicates,
        summary,
    })
}

/// Writes the timestamped exports and, when `module_path` is set, the JS module.
pub fn write_outputs(
    report: &RunReport,
    config: &AppConfig,
    module_path: Option<&Path>,
    now: &DateTime<Local>,
) -> Result<Vec<PathBuf>, AppError> {
    let mut written = export_all(&report.records, &config.output, &timestamp_suffix(now))?;

    if let Some(path) = module_path {
        let generated_at = now.format("%Y-%m-%d %H:%M:%S").to_string();
        js_module::write_module(&report.records, &config.module, &generated_at, path)?;
        info!("Saved {}", path.display());
        written.push(path.to_path_buf());
    }

    Ok(written)
}

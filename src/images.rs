// Image resolution: download, remote passthrough or placeholder
use crate::config::ImageConfig;
use crate::model::{CatalogRecord, DraftRecord, ImageError, ImageOutcome};
use crate::scraper::Scraper;
use futures::stream::{self, StreamExt};
use std::path::Path;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

const FALLBACK_FIRST: u32 = 5855;
const FALLBACK_COUNT: u32 = 7;

/// Placeholder asset for `id`. Same id, same path.
pub fn fallback_image_path(fallback_base: &str, id: u32) -> String {
    format!(
        "{}/IMG_{}.jpeg",
        fallback_base.trim_end_matches('/'),
        FALLBACK_FIRST + id % FALLBACK_COUNT
    )
}

pub fn local_file_name(id: u32, source_url: &str) -> String {
    format!("door_{:04}.{}", id, image_extension(source_url))
}

fn image_extension(source_url: &str) -> &'static str {
    let path = source_url
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    if path.ends_with(".png") {
        "png"
    } else if path.ends_with(".webp") {
        "webp"
    } else {
        "jpg"
    }
}

async fn download_image(scraper: &dyn Scraper, url: &str, target: &Path) -> Result<(), ImageError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ImageError::BadUrl(url.to_string()));
    }
    let bytes = scraper.fetch_bytes(url).await?;
    tokio::fs::write(target, &bytes).await?;
    Ok(())
}

async fn resolve_one(
    draft: DraftRecord,
    scraper: &dyn Scraper,
    cfg: &ImageConfig,
    download: bool,
) -> (CatalogRecord, ImageOutcome) {
    let fallback = fallback_image_path(&cfg.fallback_base, draft.id);

    let Some(source) = draft.image_url.clone() else {
        return (draft.finish(fallback), ImageOutcome::Fallback);
    };

    if !download {
        return (draft.finish(source), ImageOutcome::Remote);
    }

    let file_name = local_file_name(draft.id, &source);
    let target = cfg.dir.join(&file_name);
    let result = download_image(scraper, &source, &target).await;
    if cfg.delay_ms > 0 {
        sleep(Duration::from_millis(cfg.delay_ms)).await;
    }

    match result {
        Ok(()) => {
            info!("Saved {} -> {}", source, target.display());
            let public = format!("{}/{}", cfg.public_prefix.trim_end_matches('/'), file_name);
            (draft.finish(public), ImageOutcome::Downloaded)
        }
        Err(e) => {
            warn!("Image for #{} failed ({}), using {}", draft.id, e, fallback);
            (draft.finish(fallback), ImageOutcome::Fallback)
        }
    }
}

/// Turns drafts into final records, keeping input order regardless of
/// `cfg.concurrency`.
pub async fn resolve_images(
    drafts: Vec<DraftRecord>,
    scraper: &dyn Scraper,
    cfg: &ImageConfig,
) -> Vec<(CatalogRecord, ImageOutcome)> {
    let mut download = cfg.download;
    if download {
        if let Err(e) = tokio::fs::create_dir_all(&cfg.dir).await {
            warn!("Cannot create image dir {}: {}", cfg.dir.display(), e);
            download = false;
        }
    }

    stream::iter(drafts)
        .map(|draft| resolve_one(draft, scraper, cfg, download))
        .buffered(cfg.concurrency.max(1))
        .collect()
        .await
}

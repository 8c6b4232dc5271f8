use crate::model::{CatalogRecord, Category, ImageOutcome};
use tracing::info;

/// End-of-run figures for a finished catalog pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    pub total: usize,
    pub with_price: usize,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub avg_price: Option<u32>,
    /// Non-empty categories, most populated first.
    pub by_category: Vec<(Category, usize)>,
    pub images_downloaded: usize,
    pub images_fallback: usize,
}

pub fn summarize(records: &[CatalogRecord], outcomes: &[ImageOutcome]) -> CatalogSummary {
    let prices: Vec<u64> = records.iter().filter_map(|r| r.price).map(u64::from).collect();
    let avg_price = if prices.is_empty() {
        None
    } else {
        Some((prices.iter().sum::<u64>() / prices.len() as u64) as u32)
    };

    let mut by_category: Vec<(Category, usize)> = Category::ALL
        .iter()
        .map(|c| (*c, records.iter().filter(|r| r.category == *c).count()))
        .filter(|(_, n)| *n > 0)
        .collect();
    // stable: ties keep table order
    by_category.sort_by(|a, b| b.1.cmp(&a.1));

    CatalogSummary {
        total: records.len(),
        with_price: prices.len(),
        min_price: records.iter().filter_map(|r| r.price).min(),
        max_price: records.iter().filter_map(|r| r.price).max(),
        avg_price,
        by_category,
        images_downloaded: outcomes.iter().filter(|o| **o == ImageOutcome::Downloaded).count(),
        images_fallback: outcomes.iter().filter(|o| **o == ImageOutcome::Fallback).count(),
    }
}

pub fn log_summary(summary: &CatalogSummary) {
    info!("Records: {}", summary.total);
    if let (Some(min), Some(max), Some(avg)) = (summary.min_price, summary.max_price, summary.avg_price) {
        info!(
            "Prices ({} priced): min {} ₽, max {} ₽, avg {} ₽",
            summary.with_price, min, max, avg
        );
    }
    for (category, count) in &summary.by_category {
        info!("  {}: {}", category.label(), count);
    }
    info!(
        "Images: {} downloaded, {} fallback",
        summary.images_downloaded, summary.images_fallback
    );
}

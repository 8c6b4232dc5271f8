use crate::config::{AppConfig, CategoryRule};
use crate::model::{Category, DraftRecord, RawCandidate};
use crate::utils::{collapse_whitespace, resolve_url, truncate_chars};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

// Digits with optional inner whitespace, then a ruble token.
static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d[\d\s]*)\s*(?:руб|₽)").expect("price regex is valid"));

/// Output of one normalization pass.
#[derive(Debug, Default)]
pub struct Normalized {
    pub records: Vec<DraftRecord>,
    pub skipped: usize,
    pub duplicates: usize,
}

pub fn normalize_all(candidates: &[RawCandidate], base: &Url, config: &AppConfig) -> Normalized {
    let mut out = Normalized::default();
    let mut seen = HashSet::new();

    for candidate in candidates {
        let text = collapse_whitespace(&candidate.text);
        let name = truncate_chars(&text, config.name_max_chars);
        if name.is_empty() {
            out.skipped += 1;
            continue;
        }

        if !seen.insert(name.to_lowercase()) {
            debug!("Duplicate skipped: {}", name);
            out.duplicates += 1;
            continue;
        }

        let id = out.records.len() as u32 + 1;
        let price = extract_price(&text).or(config.default_price);
        let category = categorize(&name, &config.categories);

        out.records.push(DraftRecord {
            id,
            name,
            price,
            category,
            image_url: candidate
                .image_src
                .as_deref()
                .and_then(|src| resolve_url(base, src)),
            url: candidate.href.as_deref().and_then(|href| resolve_url(base, href)),
        });
    }

    out
}

/// Pulls the first ruble amount out of `text`. Whitespace inside the digit run
/// is a thousands separator.
pub fn extract_price(text: &str) -> Option<u32> {
    let caps = PRICE_RE.captures(text)?;
    let digits: String = caps[1].chars().filter(|c| !c.is_whitespace()).collect();
    digits.parse::<u32>().ok().filter(|&p| p > 0)
}

/// First rule with a keyword contained in `name` wins; no match means `Entrance`.
pub fn categorize(name: &str, rules: &[CategoryRule]) -> Category {
    let name = name.to_lowercase();

    for rule in rules {
        for keyword in &rule.match_keywords {
            if name.contains(&keyword.to_lowercase()) {
                return rule.category;
            }
        }
    }

    Category::Entrance
}

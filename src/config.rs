use crate::model::Category;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One row of the ordered categorization table. Rows are tried top to bottom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: Category,
    pub match_keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub download: bool,
    pub dir: PathBuf,
    pub public_prefix: String,
    pub fallback_base: String,
    pub delay_ms: u64,
    pub concurrency: usize,
    pub timeout_secs: u64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            download: true,
            dir: PathBuf::from("images"),
            public_prefix: "/catalog-images".into(),
            fallback_base: "/works".into(),
            delay_ms: 300,
            concurrency: 1,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    Xlsx,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub prefix: String,
    pub formats: Vec<ExportFormat>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            prefix: "catalog".into(),
            formats: vec![ExportFormat::Json, ExportFormat::Csv, ExportFormat::Xlsx],
        }
    }
}

/// Static door attributes written into the generated JS module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    pub features: Vec<String>,
    pub acoustic: String,
    pub size: String,
    pub material: String,
    pub veneer_material: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            features: vec![
                "Скрытые петли".into(),
                "Магнитный замок".into(),
                "Доводчик".into(),
                "Звукоизоляция до 42 дБ".into(),
            ],
            acoustic: "42 дБ".into(),
            size: "900×2100 мм".into(),
            material: "Сталь + утеплитель".into(),
            veneer_material: "Шпон премиум".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub page_retries: u32,
    pub backoff_base_ms: u64,
    pub selector: String,
    pub min_text_chars: usize,
    pub name_max_chars: usize,
    pub link_keywords: Vec<String>,
    pub default_price: Option<u32>,
    pub categories: Vec<CategoryRule>,
    pub images: ImageConfig,
    pub output: OutputConfig,
    pub module: ModuleConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: "https://labirintdoors.ru/katalog2".into(),
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36".into(),
            request_timeout_secs: 30,
            page_retries: 3,
            backoff_base_ms: 1000,
            selector: "a[href]".into(),
            min_text_chars: 10,
            name_max_chars: 100,
            link_keywords: to_strings(&[
                "входн", "двер", "лабиринт", "labirint", "руб", "nord", "royal", "piano",
            ]),
            default_price: None,
            categories: default_category_rules(),
            images: ImageConfig::default(),
            output: OutputConfig::default(),
            module: ModuleConfig::default(),
        }
    }
}

/// Categorization table in priority order. `Entrance` is the implicit fallback
/// and has no row.
pub fn default_category_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule {
            category: Category::Invisible,
            match_keywords: to_strings(&["leolab", "skylab", "evolab"]),
        },
        CategoryRule {
            category: Category::Veneer,
            match_keywords: to_strings(&["piano", "royal", "issida", "storm"]),
        },
        CategoryRule {
            category: Category::Thermo,
            match_keywords: to_strings(&["nord", "tundra", "терморазрыв", "атлантик", "atlantic", "frost"]),
        },
        CategoryRule {
            category: Category::Glass,
            match_keywords: to_strings(&["white", "versal", "trendo", "белые"]),
        },
    ]
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Loads `path` if it exists, otherwise falls back to the built-in defaults.
pub fn load_config_or_default(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    if Path::new(path).exists() {
        load_config(path)
    } else {
        Ok(AppConfig::default())
    }
}

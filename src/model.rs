// Core structs: CatalogRecord, Category, RawCandidate
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog section a record is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Invisible,
    Veneer,
    Thermo,
    Glass,
    Entrance,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Invisible,
        Category::Veneer,
        Category::Thermo,
        Category::Glass,
        Category::Entrance,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Invisible => "invisible",
            Category::Veneer => "veneer",
            Category::Thermo => "thermo",
            Category::Glass => "glass",
            Category::Entrance => "entrance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Invisible => "Новинки 2025",
            Category::Veneer => "Хиты продаж",
            Category::Thermo => "С терморазрывом",
            Category::Glass => "Белые двери",
            Category::Entrance => "Основной каталог",
        }
    }
}

/// One candidate element as it came out of the HTML, before normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCandidate {
    pub text: String,
    pub href: Option<String>,
    pub image_src: Option<String>,
}

/// A normalized entry whose image has not been resolved to its final form yet.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftRecord {
    pub id: u32,
    pub name: String,
    pub price: Option<u32>,
    pub category: Category,
    pub image_url: Option<String>,
    pub url: Option<String>,
}

impl DraftRecord {
    pub fn finish(self, image: String) -> CatalogRecord {
        CatalogRecord {
            id: self.id,
            name: self.name,
            price: self.price,
            category: self.category,
            category_label: self.category.label().to_string(),
            image,
            image_url: self.image_url,
            url: self.url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: u32,
    pub name: String,
    pub price: Option<u32>,
    pub category: Category,
    pub category_label: String,
    pub image: String,
    pub image_url: Option<String>,
    pub url: Option<String>,
}

/// Where a record's final `image` value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOutcome {
    Downloaded,
    Remote,
    Fallback,
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("http error: {0}")]
    HttpError(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected response status {0}")]
    InvalidResponse(u16),
}

impl From<reqwest::Error> for ScraperError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ScraperError::Timeout
        } else {
            ScraperError::HttpError(e.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("html parse error: {0}")]
    HtmlParseError(String),
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image fetch failed: {0}")]
    Fetch(#[from] ScraperError),
    #[error("image write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("bad image url {0}")]
    BadUrl(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("catalog page fetch failed: {0}")]
    Fetch(#[from] ScraperError),
    #[error("catalog page parse failed: {0}")]
    Parse(#[from] ParserError),
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
    #[error("invalid catalog url {0}")]
    BadUrl(String),
}

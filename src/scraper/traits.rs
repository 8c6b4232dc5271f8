use crate::model::ScraperError;

#[async_trait::async_trait]
pub trait Scraper: Send + Sync {
    /// Fetches `url` and returns the body as text. Non-success statuses are errors.
    async fn fetch_page(&self, url: &str) -> Result<String, ScraperError>;

    /// Fetches `url` and returns the raw body bytes.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ScraperError>;
}

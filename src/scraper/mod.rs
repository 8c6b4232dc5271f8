pub mod fetcher;
pub mod traits;

pub use fetcher::{RetryPolicy, ScraperImpl, fetch_page_with_retry};
pub use traits::Scraper;

use crate::config::AppConfig;
use crate::model::ScraperError;
use crate::scraper::traits::Scraper;

use rand::Rng;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

pub struct ScraperImpl {
    client: Client,
    image_timeout: Duration,
}

impl ScraperImpl {
    pub fn new(config: &AppConfig) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("ru-RU,ru;q=0.9,en-US;q=0.8,en;q=0.7"),
        );

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            image_timeout: Duration::from_secs(config.images.timeout_secs),
        })
    }
}

#[async_trait::async_trait]
impl Scraper for ScraperImpl {
    async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ScraperError::InvalidResponse(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "image/*")
            .timeout(self.image_timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScraperError::InvalidResponse(response.status().as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Attempt budget and backoff for the catalog page request.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub backoff_base: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            attempts: config.page_retries.max(1),
            backoff_base: Duration::from_millis(config.backoff_base_ms),
        }
    }

    /// `base * 2^attempt` plus up to 10% jitter.
    fn delay(&self, attempt: u32) -> Duration {
        let exp = self.backoff_base.saturating_mul(2u32.saturating_pow(attempt));
        let jitter_cap = exp.as_millis() as u64 / 10;
        let jitter = if jitter_cap > 0 {
            rand::rng().random_range(0..=jitter_cap)
        } else {
            0
        };
        exp + Duration::from_millis(jitter)
    }
}

pub async fn fetch_page_with_retry(
    scraper: &dyn Scraper,
    url: &str,
    policy: &RetryPolicy,
) -> Result<String, ScraperError> {
    let mut attempt = 0;
    loop {
        match scraper.fetch_page(url).await {
            Ok(html) => {
                info!("Page loaded ({} bytes)", html.len());
                return Ok(html);
            }
            Err(e) => {
                warn!("Attempt {}/{} failed: {}", attempt + 1, policy.attempts, e);
                if attempt + 1 >= policy.attempts {
                    return Err(e);
                }
                sleep(policy.delay(attempt)).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FlakyScraper {
        failures: usize,
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Scraper for FlakyScraper {
        async fn fetch_page(&self, _url: &str) -> Result<String, ScraperError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                Err(ScraperError::InvalidResponse(503))
            } else {
                Ok("<html></html>".into())
            }
        }

        async fn fetch_bytes(&self, _url: &str) -> Result<Vec<u8>, ScraperError> {
            Err(ScraperError::Timeout)
        }
    }

    fn policy(attempts: u32) -> RetryPolicy {
        RetryPolicy {
            attempts,
            backoff_base: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn retries_until_success() {
        let scraper = FlakyScraper { failures: 2, calls: AtomicUsize::new(0) };

        let html = fetch_page_with_retry(&scraper, "http://x", &policy(3)).await.unwrap();

        assert_eq!(html, "<html></html>");
        assert_eq!(scraper.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_budget() {
        let scraper = FlakyScraper { failures: 10, calls: AtomicUsize::new(0) };

        let err = fetch_page_with_retry(&scraper, "http://x", &policy(3)).await.unwrap_err();

        assert!(matches!(err, ScraperError::InvalidResponse(503)));
        assert_eq!(scraper.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn backoff_doubles_with_bounded_jitter() {
        let p = RetryPolicy { attempts: 3, backoff_base: Duration::from_millis(1000) };
        let d0 = p.delay(0);
        let d2 = p.delay(2);
        assert!(d0 >= Duration::from_millis(1000) && d0 <= Duration::from_millis(1100));
        assert!(d2 >= Duration::from_millis(4000) && d2 <= Duration::from_millis(4400));
    }

    #[test]
    fn zero_retries_still_tries_once() {
        let cfg = AppConfig { page_retries: 0, ..AppConfig::default() };
        assert_eq!(RetryPolicy::from_config(&cfg).attempts, 1);
    }
}

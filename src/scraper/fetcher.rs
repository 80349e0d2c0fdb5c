use crate::config::ScraperConfig;
use crate::model::{ScrapeRequest, ScraperError};
use crate::scraper::traits::Scraper;

use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

pub struct ScraperImpl {
    pub client: Client,
    pub request_delay: Duration,
}

impl ScraperImpl {
    pub fn new(config: &ScraperConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ScraperError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            request_delay: Duration::from_millis(config.request_delay_ms),
        })
    }
}

#[async_trait::async_trait]
impl Scraper for ScraperImpl {
    async fn fetch(&self, req: &ScrapeRequest) -> Result<String, ScraperError> {
        if !self.request_delay.is_zero() {
            debug!("Waiting {:?} before requesting {}", self.request_delay, req.url);
            sleep(self.request_delay).await;
        }

        info!("Scraping content from: {}", req.url);
        let response = self.client.get(&req.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::BadStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ScraperConfig {
        ScraperConfig {
            request_delay_ms: 0,
            ..ScraperConfig::default()
        }
    }

    #[tokio::test]
    async fn fetch_returns_body_on_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/page")
            .match_header("user-agent", mockito::Matcher::Regex("Mozilla".into()))
            .with_status(200)
            .with_body("<p>hello</p>")
            .create_async()
            .await;

        let scraper = ScraperImpl::new(&test_config()).unwrap();
        let body = scraper
            .fetch(&ScrapeRequest::new(format!("{}/page", server.url())))
            .await
            .unwrap();

        assert_eq!(body, "<p>hello</p>");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_rejects_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let scraper = ScraperImpl::new(&test_config()).unwrap();
        let err = scraper
            .fetch(&ScrapeRequest::new(format!("{}/missing", server.url())))
            .await
            .unwrap_err();

        assert!(matches!(err, ScraperError::BadStatus(404)));
        assert!(err.is_request_error());
    }

    #[tokio::test]
    async fn fetch_rejects_malformed_url() {
        let scraper = ScraperImpl::new(&test_config()).unwrap();
        let err = scraper
            .fetch(&ScrapeRequest::new("not a url"))
            .await
            .unwrap_err();
        assert!(matches!(err, ScraperError::InvalidUrl(_)));
    }
}

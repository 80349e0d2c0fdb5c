use crate::model::{ScrapeRequest, ScraperError};

/// Source of raw page bodies. The HTTP client implements it; tests swap in
/// canned HTML.
#[async_trait::async_trait]
pub trait Scraper: Send + Sync {
    async fn fetch(&self, req: &ScrapeRequest) -> Result<String, ScraperError>;
}

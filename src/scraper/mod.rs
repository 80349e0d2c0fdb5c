// Scraper module: HTTP fetching and the web content tool built on top of it.

pub mod fetcher;
pub mod traits;
pub mod web_scraper;

pub use fetcher::ScraperImpl;
pub use traits::Scraper;
pub use web_scraper::WebScraper;

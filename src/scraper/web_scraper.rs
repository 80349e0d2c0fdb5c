// Web content tool: fetch a page, strip it to clean text, format the result
use crate::model::{ScrapeRequest, ScrapedPage, ScraperError};
use crate::parser::{HtmlParser, Parser};
use crate::scraper::traits::Scraper;
use crate::utils::truncate_chars;
use tracing::{error, info};

/// Links listed in a report before the rest are summarized.
const MAX_LISTED_LINKS: usize = 10;

pub struct WebScraper<S: Scraper> {
    scraper: S,
    parser: HtmlParser,
}

impl<S: Scraper> WebScraper<S> {
    pub fn new(scraper: S) -> Self {
        Self {
            scraper,
            parser: HtmlParser::new(),
        }
    }

    /// Fetches and cleans a page. Text is cut to `max_content_length`
    /// characters with a trailing `...` when it is longer.
    pub async fn scrape(&self, req: &ScrapeRequest) -> Result<ScrapedPage, ScraperError> {
        let html = self.scraper.fetch(req).await?;
        let content = self.parser.parse(&html)?;

        let mut text = content.text;
        if text.chars().count() > req.max_content_length {
            text = format!("{}...", truncate_chars(&text, req.max_content_length));
        }

        info!(
            "Successfully scraped {} characters from {}",
            text.chars().count(),
            req.url
        );

        Ok(ScrapedPage {
            url: req.url.clone(),
            text,
            links: if req.extract_links {
                content.links
            } else {
                Vec::new()
            },
        })
    }

    /// Like [`scrape`](Self::scrape) but always returns printable text;
    /// failures are logged and described in the returned string.
    pub async fn scrape_report(&self, req: &ScrapeRequest) -> String {
        match self.scrape(req).await {
            Ok(page) => format_page(&page),
            Err(e) => {
                let msg = failure_message(&req.url, &e);
                error!("{}", msg);
                msg
            }
        }
    }
}

/// Printable description of a failed scrape.
pub fn failure_message(url: &str, e: &ScraperError) -> String {
    if e.is_request_error() {
        format!("Failed to scrape {}: {}", url, e)
    } else {
        format!("Error processing content from {}: {}", url, e)
    }
}

pub fn format_page(page: &ScrapedPage) -> String {
    let mut out = format!("Content from {}:\n\n{}", page.url, page.text);

    if !page.links.is_empty() {
        out += &format!("\n\nFound {} links:\n", page.links.len());
        let listed: Vec<String> = page
            .links
            .iter()
            .take(MAX_LISTED_LINKS)
            .map(|l| format!("- {}: {}", l.text, l.href))
            .collect();
        out += &listed.join("\n");
        if page.links.len() > MAX_LISTED_LINKS {
            out += &format!("\n... and {} more links", page.links.len() - MAX_LISTED_LINKS);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticScraper(Result<String, u16>);

    #[async_trait::async_trait]
    impl Scraper for StaticScraper {
        async fn fetch(&self, _req: &ScrapeRequest) -> Result<String, ScraperError> {
            match &self.0 {
                Ok(html) => Ok(html.clone()),
                Err(code) => Err(ScraperError::BadStatus(*code)),
            }
        }
    }

    fn page_with_links(count: usize) -> String {
        let anchors: String = (0..count)
            .map(|i| format!(r#"<a href="https://example.com/{i}">link {i}</a> "#))
            .collect();
        format!("<html><body><p>Intro text</p>{anchors}</body></html>")
    }

    #[tokio::test]
    async fn truncates_long_content() {
        let tool = WebScraper::new(StaticScraper(Ok("<p>abcdefghij</p>".into())));
        let mut req = ScrapeRequest::new("https://example.com");
        req.max_content_length = 4;

        let page = tool.scrape(&req).await.unwrap();
        assert_eq!(page.text, "abcd...");
    }

    #[tokio::test]
    async fn links_only_when_requested() {
        let tool = WebScraper::new(StaticScraper(Ok(page_with_links(2))));
        let mut req = ScrapeRequest::new("https://example.com");

        assert!(tool.scrape(&req).await.unwrap().links.is_empty());

        req.extract_links = true;
        let report = tool.scrape_report(&req).await;
        assert!(report.starts_with("Content from https://example.com:\n\nIntro text"));
        assert!(report.contains("Found 2 links:\n- link 0: https://example.com/0\n- link 1: https://example.com/1"));
        assert!(!report.contains("more links"));
    }

    #[tokio::test]
    async fn lists_at_most_ten_links() {
        let tool = WebScraper::new(StaticScraper(Ok(page_with_links(13))));
        let mut req = ScrapeRequest::new("https://example.com");
        req.extract_links = true;

        let report = tool.scrape_report(&req).await;
        assert!(report.contains("Found 13 links:"));
        assert!(report.contains("- link 9: https://example.com/9"));
        assert!(!report.contains("- link 10:"));
        assert!(report.ends_with("... and 3 more links"));
    }

    #[test]
    fn processing_failure_message() {
        let e = ScraperError::HtmlParseError("bad selector".into());
        assert_eq!(
            failure_message("https://example.com", &e),
            "Error processing content from https://example.com: failed to parse HTML: bad selector"
        );
    }

    #[tokio::test]
    async fn request_failure_becomes_message() {
        let tool = WebScraper::new(StaticScraper(Err(503)));
        let report = tool
            .scrape_report(&ScrapeRequest::new("https://example.com"))
            .await;
        assert_eq!(
            report,
            "Failed to scrape https://example.com: unexpected status 503"
        );
    }
}

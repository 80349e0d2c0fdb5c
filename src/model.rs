// Core types: analysis requests, parsed data, scrape requests and errors
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Which report-generation routine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisType {
    #[default]
    Summary,
    Trends,
    Patterns,
    Statistics,
    Insights,
}

impl AnalysisType {
    pub const ALL: [AnalysisType; 5] = [
        AnalysisType::Summary,
        AnalysisType::Trends,
        AnalysisType::Patterns,
        AnalysisType::Statistics,
        AnalysisType::Insights,
    ];

    /// Resolves a selector string by exact match. Anything else,
    /// including padded or capitalized names, falls back to `Summary`.
    pub fn from_selector(selector: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == selector)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Summary => "summary",
            AnalysisType::Trends => "trends",
            AnalysisType::Patterns => "patterns",
            AnalysisType::Statistics => "statistics",
            AnalysisType::Insights => "insights",
        }
    }

    /// Title-cased label used in report headers.
    pub fn title(&self) -> &'static str {
        match self {
            AnalysisType::Summary => "Summary",
            AnalysisType::Trends => "Trends",
            AnalysisType::Patterns => "Patterns",
            AnalysisType::Statistics => "Statistics",
            AnalysisType::Insights => "Insights",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delimited table: headers plus rows of trimmed cells.
/// Rows may be shorter or longer than the header list.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Cell at `(row, col)` if the row is long enough.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Iterates over the cells present in column `col`, skipping short rows.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter_map(move |row| row.get(col).map(String::as_str))
    }
}

/// Shape a payload resolved to after parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedData {
    Json(Value),
    Table(Table),
    Text(String),
}

impl ParsedData {
    pub fn kind(&self) -> &'static str {
        match self {
            ParsedData::Json(_) => "json",
            ParsedData::Table(_) => "table",
            ParsedData::Text(_) => "text",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    pub url: String,
    pub max_content_length: usize,
    pub extract_links: bool,
}

impl ScrapeRequest {
    pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 5000;

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_content_length: Self::DEFAULT_MAX_CONTENT_LENGTH,
            extract_links: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone)]
pub struct ScrapedPage {
    pub url: String,
    pub text: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("JSON {0} has no top-level items to summarize")]
    UnsupportedJson(&'static str),
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected status {0}")]
    BadStatus(u16),
    #[error("failed to parse HTML: {0}")]
    HtmlParseError(String),
}

impl ScraperError {
    /// Whether the failure happened while talking to the server
    /// rather than while processing the response.
    pub fn is_request_error(&self) -> bool {
        !matches!(self, ScraperError::HtmlParseError(_))
    }
}

impl From<reqwest::Error> for ScraperError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ScraperError::Timeout
        } else if e.is_builder() {
            ScraperError::InvalidUrl(e.to_string())
        } else {
            ScraperError::HttpError(e.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("job '{0}' must set exactly one of `url` or `file`")]
    InvalidJob(String),
}

use crate::model::{AnalysisType, ConfigError, ScrapeRequest};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    /// Pause before every request.
    pub request_delay_ms: u64,
    pub max_content_length: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: 10,
            request_delay_ms: 1000,
            max_content_length: ScrapeRequest::DEFAULT_MAX_CONTENT_LENGTH,
        }
    }
}

/// One batch job: a source plus the analysis to run on it.
#[derive(Debug, Clone, Deserialize)]
pub struct JobConfig {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub analysis_type: String,
    #[serde(default)]
    pub focus_area: Option<String>,
}

pub enum JobSource<'a> {
    Url(&'a str),
    File(&'a Path),
}

impl JobConfig {
    pub fn analysis_type(&self) -> AnalysisType {
        AnalysisType::from_selector(&self.analysis_type)
    }

    pub fn source(&self) -> Result<JobSource<'_>, ConfigError> {
        match (&self.url, &self.file) {
            (Some(url), None) => Ok(JobSource::Url(url)),
            (None, Some(file)) => Ok(JobSource::File(Path::new(file))),
            _ => Err(ConfigError::InvalidJob(self.name.clone())),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scraper: ScraperConfig,
    pub jobs: Vec<JobConfig>,
}

impl AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for job in &self.jobs {
            job.source()?;
        }
        Ok(())
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

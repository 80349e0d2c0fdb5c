mod analyzer;
mod config;
mod model;
mod parser;
mod scraper;
mod utils;

use crate::analyzer::{Analyzer, AnalyzerImpl};
use crate::config::{load_config, AppConfig, JobConfig, JobSource};
use crate::model::{AnalysisType, ConfigError, ScrapeRequest};
use crate::scraper::web_scraper::{failure_message, format_page};
use crate::scraper::{ScraperImpl, WebScraper};
use clap::{Parser, Subcommand};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "config.json";

#[derive(Parser)]
#[command(name = "crew-tools", about = "Data analysis and web scraping tools for agent crews")]
struct Cli {
    /// Path to the JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a payload from a file, an argument or stdin
    Analyze {
        #[arg(long, conflicts_with = "data")]
        file: Option<PathBuf>,
        #[arg(long)]
        data: Option<String>,
        /// summary, trends, patterns, statistics or insights
        #[arg(long = "type", default_value = "summary")]
        analysis_type: String,
        #[arg(long)]
        focus: Option<String>,
    },
    /// Scrape a web page to clean text
    Scrape {
        url: String,
        #[arg(long)]
        max_length: Option<usize>,
        /// Also list outbound links
        #[arg(long)]
        links: bool,
        /// Run this analysis on the scraped text
        #[arg(long)]
        analyze: Option<String>,
        #[arg(long)]
        focus: Option<String>,
    },
    /// Run every job from the config file
    Run,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so reports on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match resolve_config(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let analyzer = AnalyzerImpl::new();

    match cli.command {
        Command::Analyze {
            file,
            data,
            analysis_type,
            focus,
        } => {
            let payload = match read_payload(file.as_deref(), data) {
                Ok(p) => p,
                Err(e) => {
                    error!("Failed to read input: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            let ty = AnalysisType::from_selector(&analysis_type);
            println!("{}", analyzer.analyze(&payload, ty, focus.as_deref()));
        }
        Command::Scrape {
            url,
            max_length,
            links,
            analyze,
            focus,
        } => {
            let Some(web) = build_web_scraper(&config) else {
                return ExitCode::FAILURE;
            };
            let req = ScrapeRequest {
                max_content_length: max_length.unwrap_or(config.scraper.max_content_length),
                extract_links: links,
                ..ScrapeRequest::new(url)
            };

            let Some(selector) = analyze else {
                println!("{}", web.scrape_report(&req).await);
                return ExitCode::SUCCESS;
            };

            match web.scrape(&req).await {
                Ok(page) => {
                    println!("{}", format_page(&page));
                    let ty = AnalysisType::from_selector(&selector);
                    println!("{}", analyzer.analyze(&page.text, ty, focus.as_deref()));
                }
                Err(e) => {
                    let msg = failure_message(&req.url, &e);
                    error!("{}", msg);
                    println!("{}", msg);
                    return ExitCode::FAILURE;
                }
            }
        }
        Command::Run => {
            let Some(web) = build_web_scraper(&config) else {
                return ExitCode::FAILURE;
            };
            info!("Jobs to process: {}", config.jobs.len());
            for job in &config.jobs {
                process_job(job, &web, &analyzer, &config).await;
            }
            info!("All jobs finished");
        }
    }

    ExitCode::SUCCESS
}

/// Loads the config file. A missing default file falls back to built-in
/// defaults; an explicitly named file must exist.
fn resolve_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG).exists() => load_config(DEFAULT_CONFIG),
        None => {
            info!("No {} found, using default settings", DEFAULT_CONFIG);
            Ok(AppConfig::default())
        }
    }
}

fn read_payload(file: Option<&Path>, data: Option<String>) -> io::Result<String> {
    match (file, data) {
        (Some(path), _) => fs::read_to_string(path),
        (None, Some(data)) => Ok(data),
        (None, None) => io::read_to_string(io::stdin()),
    }
}

fn build_web_scraper(config: &AppConfig) -> Option<WebScraper<ScraperImpl>> {
    match ScraperImpl::new(&config.scraper) {
        Ok(s) => Some(WebScraper::new(s)),
        Err(e) => {
            error!("Failed to initialize HTTP client: {}", e);
            None
        }
    }
}

/// Loads one job's source and prints its report. Failures are logged and
/// the job is skipped.
async fn process_job(
    job: &JobConfig,
    web: &WebScraper<ScraperImpl>,
    analyzer: &AnalyzerImpl,
    config: &AppConfig,
) {
    info!("Processing job: {}", job.name);

    let payload = match job.source() {
        Ok(JobSource::Url(url)) => {
            let req = ScrapeRequest {
                max_content_length: config.scraper.max_content_length,
                ..ScrapeRequest::new(url)
            };
            match web.scrape(&req).await {
                Ok(page) => page.text,
                Err(e) => {
                    warn!("Job {} skipped: {}", job.name, failure_message(url, &e));
                    return;
                }
            }
        }
        Ok(JobSource::File(path)) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Job {} skipped: cannot read {}: {}", job.name, path.display(), e);
                return;
            }
        },
        Err(e) => {
            warn!("Job {} skipped: {}", job.name, e);
            return;
        }
    };

    let report = analyzer.analyze(&payload, job.analysis_type(), job.focus_area.as_deref());
    println!("=== {} ===\n{}", job.name, report);
    info!("Finished job: {}", job.name);
}

use crate::analyzer::{insights, patterns, statistics, summary, trends};
use crate::model::{AnalysisError, AnalysisType, ParsedData};
use crate::parser::DataParser;
use chrono::{DateTime, Local};
use std::fmt;
use tracing::{debug, error, info};

const TIP: &str = "💡 Tip: Try different analysis types (summary, trends, patterns, statistics, insights) for deeper understanding.";

/// Trait defining the interface for a data analyzer.
pub trait Analyzer {
    /// Parses `data` and runs the selected routine.
    fn try_analyze(
        &self,
        data: &str,
        analysis_type: AnalysisType,
        focus_area: Option<&str>,
    ) -> Result<AnalysisReport, AnalysisError>;

    /// Always returns printable text. Failures are logged and replaced by
    /// a message starting with `Error analyzing data:`.
    fn analyze(&self, data: &str, analysis_type: AnalysisType, focus_area: Option<&str>) -> String {
        match self.try_analyze(data, analysis_type, focus_area) {
            Ok(report) => report.to_string(),
            Err(e) => {
                let msg = format!("Error analyzing data: {}", e);
                error!("{}", msg);
                msg
            }
        }
    }
}

/// A finished report. `body` holds the routine output; the header and
/// footer are added when the report is displayed.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Local>,
    pub analysis_type: AnalysisType,
    pub focus_area: Option<String>,
    pub body: String,
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n📊 Data Analysis Report\nGenerated: {}\nAnalysis Type: {}\nFocus Area: {}\n\n{}\n\n---\n{}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S"),
            self.analysis_type.title(),
            self.focus_area.as_deref().unwrap_or("General"),
            self.body,
            TIP
        )
    }
}

/// Implementation of the data analyzer.
pub struct AnalyzerImpl {
    parser: DataParser,
}

impl AnalyzerImpl {
    pub fn new() -> Self {
        Self {
            parser: DataParser::new(),
        }
    }

    /// Runs one routine against already parsed data.
    pub fn run_routine(
        &self,
        data: &ParsedData,
        analysis_type: AnalysisType,
        focus_area: Option<&str>,
    ) -> Result<String, AnalysisError> {
        match analysis_type {
            AnalysisType::Summary => summary::generate_summary(data, focus_area),
            AnalysisType::Trends => Ok(trends::analyze_trends(data)),
            AnalysisType::Patterns => Ok(patterns::identify_patterns(data)),
            AnalysisType::Statistics => Ok(statistics::calculate_statistics(data)),
            AnalysisType::Insights => insights::extract_insights(data, focus_area),
        }
    }
}

impl Analyzer for AnalyzerImpl {
    fn try_analyze(
        &self,
        data: &str,
        analysis_type: AnalysisType,
        focus_area: Option<&str>,
    ) -> Result<AnalysisReport, AnalysisError> {
        info!("Starting {} analysis on data", analysis_type);

        // An empty focus behaves like no focus at all.
        let focus_area = focus_area.filter(|f| !f.is_empty());
        let parsed = self.parser.parse(data);
        debug!("Running {} routine on {} data", analysis_type, parsed.kind());
        let body = self.run_routine(&parsed, analysis_type, focus_area)?;

        Ok(AnalysisReport {
            generated_at: Local::now(),
            analysis_type,
            focus_area: focus_area.map(str::to_string),
            body,
        })
    }
}

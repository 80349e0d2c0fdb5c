use crate::analyzer::{patterns, summary, trends};
use crate::model::{AnalysisError, ParsedData};

const RECOMMENDATIONS: [&str; 3] = [
    "Consider visualizing numeric trends with charts",
    "Look for correlations between different data points",
    "Validate data quality and handle missing values",
];

/// Summary, trends and patterns in one narrative, with an overview of the
/// data shape and fixed recommendations.
pub fn extract_insights(data: &ParsedData, focus_area: Option<&str>) -> Result<String, AnalysisError> {
    let mut insights = String::from("💡 Key Insights & Recommendations:\n\n");

    insights += "🔍 Data Overview:\n";
    match data {
        ParsedData::Table(table) => {
            insights += &format!("• Structured dataset with {} records\n", table.rows.len());
            insights += &format!(
                "• {} attributes available for analysis\n",
                table.headers.len()
            );
        }
        ParsedData::Json(_) => {
            insights += "• JSON data structure detected - good for API integration\n";
        }
        ParsedData::Text(_) => {
            insights += "• Unstructured text data - suitable for NLP analysis\n";
        }
    }

    insights += "\n";
    insights += &summary::generate_summary(data, focus_area)?;
    insights += "\n";
    insights += &trends::analyze_trends(data);
    insights += "\n";
    insights += &patterns::identify_patterns(data);

    insights += "\n🎯 Actionable Recommendations:\n";
    for rec in RECOMMENDATIONS {
        insights += &format!("• {}\n", rec);
    }
    if let Some(focus) = focus_area {
        insights += &format!("• Deep dive into {} for specialized insights\n", focus);
    }

    Ok(insights)
}

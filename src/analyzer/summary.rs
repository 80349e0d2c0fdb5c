use crate::analyzer::focus::analyze_focus_area;
use crate::model::{AnalysisError, ParsedData, Table};
use serde_json::Value;

const LISTED_KEYS: usize = 5;
const SAMPLE_KEYS: usize = 3;
const LISTED_HEADERS: usize = 3;

/// Size overview of the data, followed by the focus area section when given.
pub fn generate_summary(data: &ParsedData, focus_area: Option<&str>) -> Result<String, AnalysisError> {
    let mut summary = match data {
        ParsedData::Json(value) => json_summary(value)?,
        ParsedData::Table(table) => table_summary(table),
        ParsedData::Text(content) => text_summary(content),
    };

    if let Some(focus) = focus_area {
        summary += &format!("\n🎯 Focus Area Analysis: {}\n", focus);
        summary += &analyze_focus_area(data, focus);
    }

    Ok(summary)
}

fn json_summary(value: &Value) -> Result<String, AnalysisError> {
    let mut summary = String::from("📋 Data Summary:\n");

    match value {
        Value::Object(map) => {
            summary += &format!("• Data Type: JSON with {} top-level items\n", map.len());
            let keys: Vec<&str> = map.keys().take(LISTED_KEYS).map(String::as_str).collect();
            summary += &format!("• Keys: {}\n", keys.join(", "));
            if map.len() > LISTED_KEYS {
                summary += &format!("• ... and {} more keys\n", map.len() - LISTED_KEYS);
            }
        }
        Value::Array(items) => {
            summary += &format!("• Data Type: JSON with {} top-level items\n", items.len());
            summary += &format!("• List with {} items\n", items.len());
            if let Some(Value::Object(first)) = items.first() {
                let keys: Vec<&str> = first.keys().take(SAMPLE_KEYS).map(String::as_str).collect();
                summary += &format!("• Sample keys: {}\n", keys.join(", "));
            }
        }
        Value::Null => return Err(AnalysisError::UnsupportedJson("null")),
        Value::Bool(_) => return Err(AnalysisError::UnsupportedJson("boolean")),
        Value::Number(_) => return Err(AnalysisError::UnsupportedJson("number")),
        Value::String(s) => {
            summary += &format!(
                "• Data Type: JSON with {} top-level items\n",
                s.chars().count()
            );
        }
    }

    Ok(summary)
}

fn table_summary(table: &Table) -> String {
    let columns = table.headers.len();
    let rows = table.rows.len();
    let listed = table.headers[..columns.min(LISTED_HEADERS)].join(", ");
    let more = if columns > LISTED_HEADERS { "..." } else { "" };

    format!(
        "📊 Table Summary:\n• Columns: {} ({}{})\n• Rows: {}\n• Total Data Points: {}\n",
        columns,
        listed,
        more,
        rows,
        columns * rows
    )
}

fn text_summary(content: &str) -> String {
    format!(
        "📝 Text Summary:\n• Word Count: {}\n• Line Count: {}\n• Character Count: {}\n",
        content.split_whitespace().count(),
        content.split('\n').count(),
        content.chars().count()
    )
}

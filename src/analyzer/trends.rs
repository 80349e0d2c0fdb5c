use crate::model::{ParsedData, Table};
use crate::utils::parse_number;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"));

/// Rows inspected when deciding whether a column is numeric.
const SAMPLE_ROWS: usize = 10;
const MAX_TREND_COLUMNS: usize = 3;
const TOP_WORDS: usize = 5;

pub fn analyze_trends(data: &ParsedData) -> String {
    let mut trends = String::from("📈 Trend Analysis:\n\n");

    match data {
        ParsedData::Table(table) => trends += &table_trends(table),
        ParsedData::Text(content) => {
            trends += "• Top trending words:\n";
            for (word, count) in top_words(content, TOP_WORDS) {
                trends += &format!("  - {}: {} occurrences\n", word, count);
            }
        }
        ParsedData::Json(_) => {}
    }

    trends
}

/// Columns where more than half of the sampled rows hold a number.
pub fn numeric_columns(table: &Table) -> Vec<(usize, &str)> {
    let sample = table.rows.len().min(SAMPLE_ROWS);

    table
        .headers
        .iter()
        .enumerate()
        .filter(|(col, _)| {
            let numeric = (0..sample)
                .filter(|&row| table.cell(row, *col).and_then(parse_number).is_some())
                .count();
            numeric as f64 > sample as f64 * 0.5
        })
        .map(|(col, header)| (col, header.as_str()))
        .collect()
}

fn table_trends(table: &Table) -> String {
    let numeric = numeric_columns(table);
    if numeric.is_empty() {
        return "• No clear numeric trends detected in the data\n".to_string();
    }

    let mut out = format!(
        "• Found {} numeric columns for trend analysis\n",
        numeric.len()
    );
    for (col, name) in numeric.into_iter().take(MAX_TREND_COLUMNS) {
        let values: Vec<f64> = table.column(col).filter_map(parse_number).collect();
        if values.len() < 2 {
            continue;
        }
        let first = values[0];
        let last = values[values.len() - 1];
        let direction = if last > first {
            "📈 Increasing"
        } else if last < first {
            "📉 Decreasing"
        } else {
            "➡️ Stable"
        };
        out += &format!(
            "• {}: {} (from {:.2} to {:.2})\n",
            name, direction, first, last
        );
    }
    out
}

/// Most frequent lowercase words longer than three characters.
/// Ties keep the order in which words first appear.
pub fn top_words(content: &str, limit: usize) -> Vec<(String, usize)> {
    let lower = content.to_lowercase();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for word in WORD.find_iter(&lower).map(|m| m.as_str()) {
        if word.chars().count() <= 3 {
            continue;
        }
        let i = *index.entry(word).or_insert_with(|| {
            counts.push((word, 0));
            counts.len() - 1
        });
        counts[i].1 += 1;
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(word, count)| (word.to_string(), count))
        .collect()
}

use crate::model::{ParsedData, Table};
use crate::utils::split_sentences;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("date pattern is valid"));
static PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+%").expect("percentage pattern is valid"));
static CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\d+").expect("currency pattern is valid"));

/// A column repeats when its distinct values are fewer than this share of its cells.
const REPETITION_RATIO: f64 = 0.8;

pub fn identify_patterns(data: &ParsedData) -> String {
    let mut patterns = String::from("🔍 Pattern Analysis:\n\n");

    match data {
        ParsedData::Table(table) => {
            for (col, header) in table.headers.iter().enumerate() {
                if let Some((value, count)) = repeated_value(table, col) {
                    patterns += &format!(
                        "• {}: Most common value is '{}' ({} times)\n",
                        header, value, count
                    );
                }
            }
        }
        ParsedData::Text(content) => patterns += &text_patterns(content),
        ParsedData::Json(_) => {}
    }

    patterns
}

/// Most frequent non-empty value of a column that shows repetition.
/// Ties go to the value seen first.
fn repeated_value(table: &Table, col: usize) -> Option<(&str, usize)> {
    let values: Vec<&str> = table.column(col).filter(|v| !v.is_empty()).collect();
    if values.is_empty() {
        return None;
    }

    let distinct: HashSet<&str> = values.iter().copied().collect();
    if distinct.len() as f64 >= values.len() as f64 * REPETITION_RATIO {
        return None;
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &value in &values {
        *counts.entry(value).or_default() += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for value in values {
        let count = counts[&value];
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((value, count));
        }
    }
    best
}

fn text_patterns(content: &str) -> String {
    let mut out = String::new();

    let sentences = split_sentences(content);
    if sentences.len() > 1 {
        out += &format!("• Text structure: {} sentences detected\n", sentences.len());
    }
    if ISO_DATE.is_match(content) {
        out += "• Contains date patterns (YYYY-MM-DD format)\n";
    }
    if PERCENTAGE.is_match(content) {
        out += "• Contains percentage values\n";
    }
    if CURRENCY.is_match(content) {
        out += "• Contains currency values\n";
    }

    out
}

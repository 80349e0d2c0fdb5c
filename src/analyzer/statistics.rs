use crate::model::{ParsedData, Table};
use crate::utils::{parse_number, split_sentences};

/// Basic aggregates over the numeric cells of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl ColumnStats {
    /// `None` when no cell in the column parses as a number.
    pub fn from_column(table: &Table, col: usize) -> Option<Self> {
        let values: Vec<f64> = table.column(col).filter_map(parse_number).collect();
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        Some(Self {
            average: values.iter().sum::<f64>() / count as f64,
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            count,
        })
    }
}

pub fn calculate_statistics(data: &ParsedData) -> String {
    let mut stats = String::from("📊 Statistical Analysis:\n\n");

    match data {
        ParsedData::Table(table) => {
            for (col, header) in table.headers.iter().enumerate() {
                if let Some(s) = ColumnStats::from_column(table, col) {
                    stats += &format!(
                        "• {}:\n  - Average: {:.2}\n  - Range: {:.2} to {:.2}\n  - Count: {} values\n\n",
                        header, s.average, s.min, s.max, s.count
                    );
                }
            }
        }
        ParsedData::Text(content) => {
            let words = content.split_whitespace().count();
            let pieces = split_sentences(content);
            let sentences = pieces.iter().filter(|s| !s.trim().is_empty()).count();
            // Averaged over every split piece, blank trailing ones included.
            let per_sentence = words as f64 / pieces.len().max(1) as f64;

            stats += "• Text Statistics:\n";
            stats += &format!("  - Words: {}\n", words);
            stats += &format!("  - Sentences: {}\n", sentences);
            stats += &format!("  - Avg words per sentence: {:.1}\n", per_sentence);
            stats += &format!("  - Characters: {}\n", content.chars().count());
        }
        ParsedData::Json(_) => {}
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::DataParser;

    fn statistics(data: &str) -> String {
        calculate_statistics(&DataParser::new().parse(data))
    }

    #[test]
    fn skips_unparseable_cells() {
        let table = Table {
            headers: vec!["price".into()],
            rows: vec![
                vec!["10".into()],
                vec!["n/a".into()],
                vec![],
                vec!["-2.5".into()],
            ],
        };
        assert_eq!(
            ColumnStats::from_column(&table, 0),
            Some(ColumnStats {
                average: 3.75,
                min: -2.5,
                max: 10.0,
                count: 2,
            })
        );
    }

    #[test]
    fn non_numeric_columns_are_omitted() {
        let out = statistics("name,score,note\nAnn,1,x\nBen,2,y\nCid,4,");
        assert_eq!(
            out,
            "📊 Statistical Analysis:\n\n• score:\n  - Average: 2.33\n  - Range: 1.00 to 4.00\n  - Count: 3 values\n\n"
        );
    }

    #[test]
    fn text_counts_non_blank_sentences() {
        let out = statistics("The cat sat. The cat ran.");
        assert_eq!(
            out,
            "📊 Statistical Analysis:\n\n• Text Statistics:\n  - Words: 6\n  - Sentences: 2\n  - Avg words per sentence: 2.0\n  - Characters: 25\n"
        );
    }

    #[test]
    fn average_divides_by_all_split_pieces() {
        // Three pieces, all non-blank: "One two three", " Four five", " six"
        let out = statistics("One two three. Four five! six");
        assert!(out.contains("  - Sentences: 3\n  - Avg words per sentence: 2.0\n"));

        // Trailing terminator adds a blank piece to the divisor only.
        let out = statistics("One two three four.");
        assert!(out.contains("  - Sentences: 1\n  - Avg words per sentence: 2.0\n"));
    }

    #[test]
    fn empty_text_does_not_divide_by_zero() {
        let out = calculate_statistics(&ParsedData::Text(String::new()));
        assert!(out.contains("  - Sentences: 0\n  - Avg words per sentence: 0.0\n"));
    }
}

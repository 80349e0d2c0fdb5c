// Payload parsing: JSON first, then delimited table, then free text
use crate::model::{ParsedData, Table};
use serde_json::Value;
use tracing::debug;

pub struct DataParser;

impl DataParser {
    pub fn new() -> Self {
        Self
    }

    /// Resolves `data` to exactly one variant. Never fails; anything that is
    /// neither JSON nor a delimited table is returned verbatim as text.
    pub fn parse(&self, data: &str) -> ParsedData {
        if let Ok(value) = serde_json::from_str::<Value>(data) {
            debug!("Payload parsed as JSON");
            return ParsedData::Json(value);
        }

        if let Some(table) = Self::parse_table(data) {
            debug!(
                "Payload parsed as table: {} columns, {} rows",
                table.headers.len(),
                table.rows.len()
            );
            return ParsedData::Table(table);
        }

        debug!("Payload treated as free text");
        ParsedData::Text(data.to_string())
    }

    fn parse_table(data: &str) -> Option<Table> {
        let lines: Vec<&str> = data.trim().split('\n').collect();
        if lines.len() < 2 {
            return None;
        }

        let first = lines[0];
        let separator = if first.contains(',') {
            ','
        } else if first.contains('\t') {
            '\t'
        } else {
            return None;
        };

        let headers = split_cells(first, separator);
        let rows = lines[1..]
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| split_cells(line, separator))
            .collect();

        Some(Table { headers, rows })
    }
}

fn split_cells(line: &str, separator: char) -> Vec<String> {
    line.split(separator).map(|c| c.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &str) -> ParsedData {
        DataParser::new().parse(data)
    }

    #[test]
    fn valid_json_wins() {
        match parse(r#"{"a": 1, "b": [1, 2]}"#) {
            ParsedData::Json(v) => assert_eq!(v["b"][1], 2),
            other => panic!("expected JSON, got {:?}", other),
        }
        // A JSON array containing commas is still JSON, not a table.
        assert_eq!(parse("[1,\n2]").kind(), "json");
    }

    #[test]
    fn comma_table_headers_and_rows() {
        let parsed = parse("name, age\nAlice,30\n\nBob , 25\n");
        let ParsedData::Table(table) = parsed else {
            panic!("expected table");
        };
        assert_eq!(table.headers, vec!["name", "age"]);
        assert_eq!(
            table.rows,
            vec![vec!["Alice", "30"], vec!["Bob", "25"]]
        );
    }

    #[test]
    fn tab_separator_used_when_no_comma() {
        let ParsedData::Table(table) = parse("x\ty\n1\t2") else {
            panic!("expected table");
        };
        assert_eq!(table.headers, vec!["x", "y"]);
        assert_eq!(table.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn comma_takes_priority_over_tab() {
        let ParsedData::Table(table) = parse("a,b\tc\n1,2\t3") else {
            panic!("expected table");
        };
        assert_eq!(table.headers, vec!["a", "b\tc"]);
    }

    #[test]
    fn ragged_rows_are_kept() {
        let ParsedData::Table(table) = parse("a,b,c\n1\n1,2,3,4") else {
            panic!("expected table");
        };
        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(table.rows[1].len(), 4);
    }

    #[test]
    fn single_line_or_undelimited_text_is_verbatim() {
        let single = "a,b,c";
        assert_eq!(parse(single), ParsedData::Text(single.to_string()));

        let prose = "  The cat sat.\nThe cat ran.  ";
        assert_eq!(parse(prose), ParsedData::Text(prose.to_string()));

        assert_eq!(parse(""), ParsedData::Text(String::new()));
    }
}

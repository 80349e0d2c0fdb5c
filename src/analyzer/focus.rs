use crate::model::ParsedData;
use crate::utils::{split_sentences, truncate_chars};

const MAX_CONTEXT_SENTENCES: usize = 3;
const CONTEXT_CHARS: usize = 100;

/// Narrows the analysis to `focus_area`. Matching is case-insensitive.
/// JSON data yields nothing.
pub fn analyze_focus_area(data: &ParsedData, focus_area: &str) -> String {
    let focus_lower = focus_area.to_lowercase();
    let mut out = String::new();

    match data {
        ParsedData::Text(content) => {
            let content_lower = content.to_lowercase();
            if !content_lower.contains(&focus_lower) {
                return out;
            }

            let mentions = content_lower.matches(focus_lower.as_str()).count();
            out += &format!("• '{}' mentioned {} times in the text\n", focus_area, mentions);

            let relevant: Vec<&str> = split_sentences(content)
                .into_iter()
                .filter(|s| s.to_lowercase().contains(&focus_lower))
                .map(str::trim)
                .take(MAX_CONTEXT_SENTENCES)
                .collect();
            if !relevant.is_empty() {
                out += "• Relevant context:\n";
                for sentence in relevant {
                    out += &format!("  - {}...\n", truncate_chars(sentence, CONTEXT_CHARS));
                }
            }
        }
        ParsedData::Table(table) => {
            let relevant: Vec<&str> = table
                .headers
                .iter()
                .filter(|h| h.to_lowercase().contains(&focus_lower))
                .map(String::as_str)
                .collect();
            if !relevant.is_empty() {
                out += &format!("• Found relevant columns: {}\n", relevant.join(", "));
            }
        }
        ParsedData::Json(_) => {}
    }

    out
}

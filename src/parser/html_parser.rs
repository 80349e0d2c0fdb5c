// HTML to clean text, plus outbound link extraction
use crate::model::{Link, ScraperError};
use scraper::{Html, Node, Selector};

/// Elements whose text never reaches the cleaned output.
const SKIPPED_TAGS: [&str; 5] = ["script", "style", "nav", "footer", "header"];

pub trait Parser {
    fn parse(&self, html: &str) -> Result<HtmlContent, ScraperError>;
}

#[derive(Debug, Clone)]
pub struct HtmlContent {
    pub text: String,
    pub links: Vec<Link>,
}

pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for HtmlParser {
    fn parse(&self, html: &str) -> Result<HtmlContent, ScraperError> {
        let document = Html::parse_document(html);
        let anchor_selector =
            Selector::parse("a[href]").map_err(|e| ScraperError::HtmlParseError(e.to_string()))?;

        let mut raw = String::new();
        for node in document.tree.root().descendants() {
            if let Node::Text(text) = node.value() {
                if !node.ancestors().any(|a| is_skipped(a.value())) {
                    raw.push_str(text);
                }
            }
        }

        let mut links = Vec::new();
        for anchor in document.select(&anchor_selector) {
            if anchor.ancestors().any(|a| is_skipped(a.value())) {
                continue;
            }
            let href = anchor.value().attr("href").unwrap_or("");
            let text = anchor.text().collect::<String>().trim().to_string();
            if href.starts_with("http") && !text.is_empty() {
                links.push(Link {
                    text,
                    href: href.to_string(),
                });
            }
        }

        Ok(HtmlContent {
            text: clean_text(&raw),
            links,
        })
    }
}

fn is_skipped(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|e| SKIPPED_TAGS.contains(&e.name()))
}

/// Trims every line, breaks lines on double spaces and joins the
/// non-empty chunks with single spaces.
pub fn clean_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Quarterly</title><style>body { color: red; }</style></head>
<body>
  <header>Site header</header>
  <nav><a href="https://example.com/home">Home</a></nav>
  <main>
    <h1>Revenue   report</h1>
    <p>Revenue grew by 12% in 2024-03-31.</p>
    <a href="https://example.com/details">Details</a>
    <a href="/relative">Relative</a>
    <a href="http://example.com/empty">   </a>
  </main>
  <script>var tracking = true;</script>
  <footer>Copyright</footer>
</body>
</html>"#;

    #[test]
    fn strips_boilerplate_elements() {
        let content = HtmlParser::new().parse(PAGE).unwrap();
        assert!(content.text.contains("Revenue report"));
        assert!(content.text.contains("Revenue grew by 12% in 2024-03-31."));
        assert!(content.text.contains("Quarterly"));
        for hidden in ["Site header", "color: red", "tracking", "Copyright", "Home"] {
            assert!(!content.text.contains(hidden), "leaked {hidden}");
        }
    }

    #[test]
    fn keeps_only_absolute_links_with_text() {
        let content = HtmlParser::new().parse(PAGE).unwrap();
        assert_eq!(
            content.links,
            vec![Link {
                text: "Details".into(),
                href: "https://example.com/details".into(),
            }]
        );
    }

    #[test]
    fn clean_text_collapses_layout_whitespace() {
        assert_eq!(clean_text("  a  \n\n   b   c  \nd"), "a b c d");
        assert_eq!(clean_text(""), "");
    }
}

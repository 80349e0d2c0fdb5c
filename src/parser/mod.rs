// Parser module: turns raw payloads into structured data.

pub mod data_parser;
pub mod html_parser;

pub use data_parser::DataParser;
pub use html_parser::{HtmlParser, Parser};

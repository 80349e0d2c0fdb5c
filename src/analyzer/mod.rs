// Report routines (summary, trends, patterns, statistics, insights) and the
// entry point that parses a payload and dispatches to one of them.

pub mod data_analysis;
pub mod focus;
pub mod insights;
pub mod patterns;
pub mod statistics;
pub mod summary;
pub mod trends;

pub use data_analysis::{AnalysisReport, Analyzer, AnalyzerImpl};

// Analyzer module: run statistics over the finished record set.

pub mod summary;

pub use summary::{CatalogSummary, log_summary, summarize};

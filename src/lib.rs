pub mod analyzer;
pub mod config;
pub mod exporter;
pub mod images;
pub mod model;
pub mod normalizer;
pub mod parser;
pub mod pipeline;
pub mod scraper;
pub mod utils;

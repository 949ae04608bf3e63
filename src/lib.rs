//! jobscout: a polite job-listing fetcher
//!
//! This crate queries a paginated job search endpoint, parses each page of
//! listings into records, retries transient failures with exponential backoff,
//! and caches complete result sets in memory for a configurable time window.

pub mod cache;
pub mod config;
pub mod fetch;
pub mod parser;
pub mod query;
pub mod search;

use thiserror::Error;

/// Main error type for jobscout operations
///
/// Transient fetch failures (rate limits, bad statuses, timeouts) are retried
/// inside the fetch loop and never surface here. Only conditions the loop
/// cannot recover from are reported to the caller.
#[derive(Debug, Error)]
pub enum JobsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while constructing a query
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Start offset {start} is not a multiple of the page size {page_size}")]
    MisalignedStart { start: u32, page_size: u32 },

    #[error("Page {page} with start {start} overflows the result offset")]
    OffsetOverflow { page: u32, start: u32 },

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

/// Result type alias for jobscout operations
pub type Result<T> = std::result::Result<T, JobsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use cache::ResultCache;
pub use config::Settings;
pub use parser::JobRecord;
pub use query::{QuerySpec, SearchFilters};
pub use search::JobSearch;

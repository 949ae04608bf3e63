//! Configuration module for jobscout
//!
//! This module handles loading, parsing, and validating TOML settings files.
//!
//! # Example
//!
//! ```no_run
//! use jobscout::config::load_settings;
//! use std::path::Path;
//!
//! let settings = load_settings(Path::new("jobscout.toml")).unwrap();
//! println!("Requests time out after {}s", settings.http.timeout_seconds);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CacheSettings, HttpSettings, PacingSettings, RetrySettings, Settings, DEFAULT_BASE_URL,
    DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_settings, parse_settings};
pub use validation::validate;

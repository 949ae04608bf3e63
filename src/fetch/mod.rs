//! Fetch module for paginated result retrieval
//!
//! This module contains the retrieval logic, including:
//! - HTTP page fetching and response classification
//! - The fetch loop state machine
//! - Exponential backoff on errors and randomized pacing between pages

mod client;
mod driver;
mod state;
mod timing;

pub use client::{build_http_client, fetch_page, PageError};
pub use driver::{FetchLoop, FetchOutcome};
pub use state::{FetchPhase, FetchState};
pub use timing::{backoff_delay, pacing_delay};

//! Query construction
//!
//! This module translates search filters into request descriptors:
//! - `SearchFilters`: loose, optional free-text filters
//! - `QuerySpec`: the validated, strongly-typed query
//! - URL and cache key building for each page of a query

mod builder;
mod filters;
mod spec;

pub use builder::{build_page_url, cache_key, page_offset};
pub use filters::{DatePosted, ExperienceLevel, JobType, RemoteMode, SalaryBand, SortOrder};
pub use spec::{normalize_text, QuerySpec, QuerySpecBuilder, SearchFilters};

/// Number of listings the search endpoint returns per page
pub const PAGE_SIZE: u32 = 25;

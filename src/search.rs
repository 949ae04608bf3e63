//! Job search facade
//!
//! `JobSearch` owns the HTTP client, the settings and the result cache, and
//! ties them together: cache lookup, fetch loop on a miss, cache store.

use crate::cache::ResultCache;
use crate::config::{validate, Settings};
use crate::fetch::{build_http_client, FetchLoop};
use crate::parser::JobRecord;
use crate::query::{cache_key, QuerySpec, SearchFilters};
use crate::Result;
use reqwest::Client;
use url::Url;

/// Entry point for running job searches
///
/// Methods that touch the cache take `&mut self`; a `JobSearch` is meant to be
/// driven by one task at a time.
///
/// # Example
///
/// ```no_run
/// use jobscout::{JobSearch, QuerySpec, Settings};
///
/// # async fn example() -> jobscout::Result<()> {
/// let mut search = JobSearch::new(Settings::default())?;
/// let spec = QuerySpec::builder().keyword("rust").limit(10).build()?;
/// let jobs = search.query(&spec).await;
/// println!("{} jobs", jobs.len());
/// # Ok(())
/// # }
/// ```
pub struct JobSearch {
    client: Client,
    base_url: Url,
    settings: Settings,
    cache: ResultCache,
}

impl JobSearch {
    /// Creates a search client from validated settings
    ///
    /// # Errors
    ///
    /// Fails if the settings are invalid or the HTTP client cannot be built.
    pub fn new(settings: Settings) -> Result<Self> {
        validate(&settings)?;

        let base_url = Url::parse(&settings.http.base_url)?;
        let client = build_http_client(&settings.http)?;
        let cache = ResultCache::new(settings.cache.ttl(), settings.cache.capacity);

        Ok(Self {
            client,
            base_url,
            settings,
            cache,
        })
    }

    /// Runs a query, serving it from the cache when a fresh entry exists
    ///
    /// The returned list may be shorter than the requested limit, either
    /// because the endpoint ran out of results or because retries were
    /// exhausted part-way. Compare its length to the limit to tell whether it
    /// is complete.
    pub async fn query(&mut self, spec: &QuerySpec) -> Vec<JobRecord> {
        let key = cache_key(&self.base_url, spec);

        if let Some(cached) = self.cache.get(&key) {
            tracing::info!("Cache hit for '{}' ({} records)", spec.keyword(), cached.len());
            return cached.to_vec();
        }

        tracing::info!(
            "Searching '{}' in '{}' (limit {})",
            spec.keyword(),
            spec.location(),
            spec.limit()
        );

        let fetch_loop = FetchLoop::new(
            &self.client,
            &self.base_url,
            &self.settings.retry,
            &self.settings.pacing,
        );
        let outcome = fetch_loop.run(spec).await;

        if outcome.is_partial() {
            tracing::warn!(
                "Search for '{}' returned partial results ({} records)",
                spec.keyword(),
                outcome.records.len()
            );
        } else {
            tracing::info!(
                "Search for '{}' finished with {} records",
                spec.keyword(),
                outcome.records.len()
            );
        }

        if !outcome.records.is_empty() {
            self.cache.set(key, outcome.records.clone());
        }

        outcome.records
    }

    /// Runs a query described by loose filters
    ///
    /// # Errors
    ///
    /// Fails only if the filters cannot be turned into a valid query.
    pub async fn query_filters(&mut self, filters: &SearchFilters) -> Result<Vec<JobRecord>> {
        let spec = QuerySpec::from_filters(filters)?;
        Ok(self.query(&spec).await)
    }

    /// Removes cached result sets older than the TTL
    ///
    /// Fresh entries are kept. Use [`JobSearch::purge_cache`] to drop
    /// everything.
    ///
    /// # Returns
    ///
    /// The number of entries removed
    pub fn clear_cache(&mut self) -> usize {
        self.cache.sweep()
    }

    /// Removes every cached result set, fresh or not
    pub fn purge_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of cached result sets, including stale ones not yet evicted
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

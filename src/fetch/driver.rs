//! Paginated fetch loop
//!
//! Requests the pages of a query one at a time in increasing offset order,
//! parses each into records, and stops on an empty page, on reaching the
//! limit, or after too many consecutive errors.

use crate::config::{PacingSettings, RetrySettings};
use crate::fetch::client::fetch_page;
use crate::fetch::state::{FetchPhase, FetchState};
use crate::fetch::timing::{backoff_delay, pacing_delay};
use crate::parser::{parse_page, JobRecord};
use crate::query::{build_page_url, QuerySpec};
use reqwest::Client;
use url::Url;

/// How a fetch loop ended
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Records accumulated before the loop stopped
    pub records: Vec<JobRecord>,

    /// Number of successful page responses
    pub pages_fetched: u32,

    /// `Done` for a complete fetch, `Aborted` when the error budget ran out
    pub phase: FetchPhase,
}

impl FetchOutcome {
    /// Returns true if the loop gave up and the records may be incomplete
    pub fn is_partial(&self) -> bool {
        self.phase == FetchPhase::Aborted
    }
}

/// Drives paginated retrieval for one endpoint
pub struct FetchLoop<'a> {
    client: &'a Client,
    base_url: &'a Url,
    retry: &'a RetrySettings,
    pacing: &'a PacingSettings,
}

impl<'a> FetchLoop<'a> {
    pub fn new(
        client: &'a Client,
        base_url: &'a Url,
        retry: &'a RetrySettings,
        pacing: &'a PacingSettings,
    ) -> Self {
        Self {
            client,
            base_url,
            retry,
            pacing,
        }
    }

    /// Fetches every page of `spec` up to its limit
    ///
    /// Transient failures never escape: once the error budget is exhausted
    /// the records gathered so far are returned with phase `Aborted`.
    pub async fn run(&self, spec: &QuerySpec) -> FetchOutcome {
        let limit = spec.limit() as usize;
        let mut state = FetchState::new(spec.first_offset());

        while !state.phase.is_terminal() {
            let url = build_page_url(self.base_url, spec, state.offset);
            tracing::debug!("Requesting page at offset {}: {}", state.offset, url);

            match fetch_page(self.client, &url).await {
                Ok(body) => {
                    let page = parse_page(&body);
                    if page.is_empty() {
                        tracing::debug!(
                            "Offset {} has no usable listings ({} fragments), end of results",
                            state.offset,
                            page.fragments
                        );
                    } else {
                        tracing::debug!(
                            "Offset {} yielded {} records ({} discarded)",
                            state.offset,
                            page.records.len(),
                            page.discarded
                        );
                    }

                    state.record_page(page.records, limit);

                    if state.phase == FetchPhase::Fetching {
                        let delay = pacing_delay(self.pacing);
                        tracing::trace!("Pacing for {:?}", delay);
                        tokio::time::sleep(delay).await;
                    }
                }
                Err(error) => {
                    let count = state.record_error(self.retry.max_consecutive_errors);

                    if state.phase == FetchPhase::Aborted {
                        tracing::warn!(
                            "Giving up at offset {} after {} consecutive errors (last: {}), returning {} records",
                            state.offset,
                            count,
                            error,
                            state.records.len()
                        );
                        break;
                    }

                    let delay = backoff_delay(self.retry.backoff_unit(), count);
                    tracing::warn!(
                        "Page at offset {} failed ({}), retry {} in {:?}",
                        state.offset,
                        error,
                        count,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    state.resume();
                }
            }
        }

        tracing::debug!(
            "Fetch loop {} with {} records over {} pages",
            state.phase,
            state.records.len(),
            state.pages_fetched
        );

        FetchOutcome {
            records: state.records,
            pages_fetched: state.pages_fetched,
            phase: state.phase,
        }
    }
}

//! Fetch loop state definitions
//!
//! A fetch moves between these phases:
//!
//! ```text
//! Fetching --non-empty page--> Fetching
//! Fetching --empty page / limit reached--> Done
//! Fetching --error--> Backoff --retry--> Fetching
//! Backoff --error budget exhausted--> Aborted
//! ```

use crate::parser::JobRecord;
use crate::query::PAGE_SIZE;
use std::fmt;

/// Current phase of a fetch loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchPhase {
    /// Requesting the page at the current offset
    Fetching,

    /// Waiting before retrying the current offset
    Backoff,

    /// Finished normally (empty page, limit reached, or offsets exhausted)
    Done,

    /// Gave up after too many consecutive errors
    Aborted,
}

impl FetchPhase {
    /// Returns true if the loop has stopped
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Aborted)
    }
}

impl fmt::Display for FetchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetching => "fetching",
            Self::Backoff => "backoff",
            Self::Done => "done",
            Self::Aborted => "aborted",
        };
        write!(f, "{}", name)
    }
}

/// Transient state of one fetch loop invocation
#[derive(Debug, Clone)]
pub struct FetchState {
    /// Records accumulated so far, in page order
    pub records: Vec<JobRecord>,

    /// Offset of the page to request next
    pub offset: u32,

    /// Errors since the last successful page
    pub consecutive_errors: u32,

    /// Successful page responses so far
    pub pages_fetched: u32,

    pub phase: FetchPhase,
}

impl FetchState {
    pub fn new(first_offset: u32) -> Self {
        Self {
            records: Vec::new(),
            offset: first_offset,
            consecutive_errors: 0,
            pages_fetched: 0,
            phase: FetchPhase::Fetching,
        }
    }

    /// Applies a successfully fetched page
    ///
    /// Resets the error counter. An empty page ends the loop; otherwise the
    /// records are appended and, once `limit` (when non-zero) is reached, the
    /// accumulator is truncated to it and the loop ends.
    pub fn record_page(&mut self, records: Vec<JobRecord>, limit: usize) {
        self.consecutive_errors = 0;
        self.pages_fetched += 1;

        if records.is_empty() {
            self.phase = FetchPhase::Done;
            return;
        }

        self.records.extend(records);

        if limit > 0 && self.records.len() >= limit {
            self.records.truncate(limit);
            self.phase = FetchPhase::Done;
            return;
        }

        match self.offset.checked_add(PAGE_SIZE) {
            Some(next) => {
                self.offset = next;
                self.phase = FetchPhase::Fetching;
            }
            None => self.phase = FetchPhase::Done,
        }
    }

    /// Applies a failed page request
    ///
    /// # Returns
    ///
    /// The consecutive error count after this failure. The phase becomes
    /// `Aborted` once the count reaches `max_errors`, `Backoff` otherwise.
    pub fn record_error(&mut self, max_errors: u32) -> u32 {
        self.consecutive_errors += 1;

        self.phase = if self.consecutive_errors >= max_errors {
            FetchPhase::Aborted
        } else {
            FetchPhase::Backoff
        };

        self.consecutive_errors
    }

    /// Leaves backoff to retry the same offset
    pub fn resume(&mut self) {
        if self.phase == FetchPhase::Backoff {
            self.phase = FetchPhase::Fetching;
        }
    }
}

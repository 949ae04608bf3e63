//! Result page parser
//!
//! This module turns one page of search results into job records:
//! - Each `<li>` in the page is one listing fragment
//! - Fields are read with extract-or-default accessors, so a missing field
//!   never fails the fragment or the page
//! - Fragments with neither a title nor an organization are discarded

mod extract;
mod record;

pub use extract::{attr_or_default, text_or_default};
pub use record::JobRecord;

use scraper::{ElementRef, Html, Selector};

/// Records extracted from one result page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// Listings that carried a title or an organization
    pub records: Vec<JobRecord>,

    /// Number of listing fragments seen on the page
    pub fragments: usize,

    /// Number of fragments dropped for lacking identifying fields
    pub discarded: usize,
}

impl ParsedPage {
    /// Returns true if no listing survived parsing, which ends a fetch
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Compiled selectors for every field of a listing
struct ListingSelectors {
    fragment: Selector,
    position: Selector,
    company: Selector,
    location: Selector,
    posted_date: Selector,
    salary: Selector,
    job_url: Selector,
    company_logo: Selector,
    ago_time: Selector,
}

impl ListingSelectors {
    fn new() -> Option<Self> {
        Some(Self {
            fragment: Selector::parse("li").ok()?,
            position: Selector::parse(".base-search-card__title").ok()?,
            company: Selector::parse(".base-search-card__subtitle").ok()?,
            location: Selector::parse(".job-search-card__location").ok()?,
            posted_date: Selector::parse("time").ok()?,
            salary: Selector::parse(".job-search-card__salary-info").ok()?,
            job_url: Selector::parse(".base-card__full-link").ok()?,
            company_logo: Selector::parse(".artdeco-entity-image").ok()?,
            ago_time: Selector::parse(".job-search-card__listdate").ok()?,
        })
    }

    fn extract(&self, fragment: ElementRef<'_>) -> JobRecord {
        JobRecord {
            position: text_or_default(fragment, &self.position),
            company: text_or_default(fragment, &self.company),
            location: text_or_default(fragment, &self.location),
            posted_date: attr_or_default(fragment, &self.posted_date, "datetime"),
            salary: text_or_default(fragment, &self.salary),
            job_url: attr_or_default(fragment, &self.job_url, "href"),
            company_logo: attr_or_default(fragment, &self.company_logo, "data-delayed-url"),
            ago_time: text_or_default(fragment, &self.ago_time),
        }
    }
}

/// Parses one page of search results into job records
///
/// Parsing never fails: a page with no recognizable listings yields an
/// empty `ParsedPage`, which the fetch loop treats as the end of results.
///
/// # Example
///
/// ```
/// use jobscout::parser::parse_page;
///
/// let html = r#"<li>
///     <h3 class="base-search-card__title">Rust Engineer</h3>
///     <h4 class="base-search-card__subtitle">Acme</h4>
/// </li>"#;
/// let page = parse_page(html);
/// assert_eq!(page.records.len(), 1);
/// assert_eq!(page.records[0].company, "Acme");
/// ```
pub fn parse_page(html: &str) -> ParsedPage {
    let Some(selectors) = ListingSelectors::new() else {
        tracing::error!("Listing selectors failed to compile, treating page as empty");
        return ParsedPage::default();
    };

    let document = Html::parse_fragment(html);
    let mut page = ParsedPage::default();

    for fragment in document.select(&selectors.fragment) {
        page.fragments += 1;
        let record = selectors.extract(fragment);

        if record.is_identifiable() {
            page.records.push(record);
        } else {
            page.discarded += 1;
            tracing::debug!(
                "Skipping listing {} without title or organization",
                page.fragments
            );
        }
    }

    page
}

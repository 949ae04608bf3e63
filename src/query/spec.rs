use crate::query::filters::{
    DatePosted, ExperienceLevel, JobType, RemoteMode, SalaryBand, SortOrder,
};
use crate::query::builder::page_offset;
use crate::query::PAGE_SIZE;
use crate::QueryError;
use serde::Deserialize;

/// Loosely-typed search filters, as a caller or a config file supplies them
///
/// Every field is optional free text. Converting into a [`QuerySpec`]
/// validates numbers and maps enumerated labels; labels that are not
/// recognized drop the filter instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchFilters {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub date_since_posted: Option<String>,
    pub job_type: Option<String>,
    pub remote_filter: Option<String>,
    pub salary: Option<String>,
    pub experience_level: Option<String>,
    pub sort_by: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
    pub start: Option<String>,
    pub has_verification: bool,
    #[serde(rename = "under10Applicants")]
    pub under_10_applicants: bool,
}

/// A validated, immutable search query
///
/// Free-text fields are stored normalized (trimmed, inner whitespace runs
/// collapsed to one space) so that queries differing only in whitespace are
/// indistinguishable. Build one with [`QuerySpec::builder`] or
/// [`QuerySpec::from_filters`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QuerySpec {
    keyword: String,
    location: String,
    date_posted: Option<DatePosted>,
    job_type: Option<JobType>,
    remote: Option<RemoteMode>,
    salary: Option<SalaryBand>,
    experience: Option<ExperienceLevel>,
    sort: Option<SortOrder>,
    limit: u32,
    page: u32,
    start: u32,
    has_verification: bool,
    under_ten_applicants: bool,
}

impl QuerySpec {
    pub fn builder() -> QuerySpecBuilder {
        QuerySpecBuilder::default()
    }

    /// Converts loose filters into a validated query
    ///
    /// # Errors
    ///
    /// * `QueryError::InvalidNumber` - limit, page or start is not a
    ///   non-negative integer
    /// * `QueryError::MisalignedStart` - start is not a multiple of the page size
    /// * `QueryError::OffsetOverflow` - the first page offset does not fit in a `u32`
    pub fn from_filters(filters: &SearchFilters) -> Result<Self, QueryError> {
        let mut builder = Self::builder();

        if let Some(keyword) = &filters.keyword {
            builder = builder.keyword(keyword);
        }
        if let Some(location) = &filters.location {
            builder = builder.location(location);
        }

        builder.spec.date_posted = filters
            .date_since_posted
            .as_deref()
            .and_then(DatePosted::from_label);
        builder.spec.job_type = filters.job_type.as_deref().and_then(JobType::from_label);
        builder.spec.remote = filters
            .remote_filter
            .as_deref()
            .and_then(RemoteMode::from_label);
        builder.spec.salary = filters.salary.as_deref().and_then(SalaryBand::from_label);
        builder.spec.experience = filters
            .experience_level
            .as_deref()
            .and_then(ExperienceLevel::from_label);
        builder.spec.sort = filters.sort_by.as_deref().and_then(SortOrder::from_label);

        builder
            .limit(parse_count("limit", filters.limit.as_deref())?)
            .page(parse_count("page", filters.page.as_deref())?)
            .start(parse_count("start", filters.start.as_deref())?)
            .has_verification(filters.has_verification)
            .under_ten_applicants(filters.under_10_applicants)
            .build()
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn date_posted(&self) -> Option<DatePosted> {
        self.date_posted
    }

    pub fn job_type(&self) -> Option<JobType> {
        self.job_type
    }

    pub fn remote(&self) -> Option<RemoteMode> {
        self.remote
    }

    pub fn salary(&self) -> Option<SalaryBand> {
        self.salary
    }

    pub fn experience(&self) -> Option<ExperienceLevel> {
        self.experience
    }

    pub fn sort(&self) -> Option<SortOrder> {
        self.sort
    }

    /// Maximum number of records to return; 0 means no limit
    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn has_verification(&self) -> bool {
        self.has_verification
    }

    pub fn under_ten_applicants(&self) -> bool {
        self.under_ten_applicants
    }

    /// Offset of the first page this query requests
    ///
    /// Always a multiple of [`PAGE_SIZE`], since `start` is validated to be one.
    pub fn first_offset(&self) -> u32 {
        page_offset(self.page, self.start)
    }
}

/// Step-by-step constructor for [`QuerySpec`]
#[derive(Debug, Clone, Default)]
pub struct QuerySpecBuilder {
    spec: QuerySpec,
}

impl QuerySpecBuilder {
    pub fn keyword(mut self, keyword: &str) -> Self {
        self.spec.keyword = normalize_text(keyword);
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.spec.location = normalize_text(location);
        self
    }

    pub fn date_posted(mut self, date_posted: DatePosted) -> Self {
        self.spec.date_posted = Some(date_posted);
        self
    }

    pub fn job_type(mut self, job_type: JobType) -> Self {
        self.spec.job_type = Some(job_type);
        self
    }

    pub fn remote(mut self, remote: RemoteMode) -> Self {
        self.spec.remote = Some(remote);
        self
    }

    pub fn salary(mut self, salary: SalaryBand) -> Self {
        self.spec.salary = Some(salary);
        self
    }

    pub fn experience(mut self, experience: ExperienceLevel) -> Self {
        self.spec.experience = Some(experience);
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.spec.sort = Some(sort);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.spec.limit = limit;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.spec.page = page;
        self
    }

    pub fn start(mut self, start: u32) -> Self {
        self.spec.start = start;
        self
    }

    pub fn has_verification(mut self, enabled: bool) -> Self {
        self.spec.has_verification = enabled;
        self
    }

    pub fn under_ten_applicants(mut self, enabled: bool) -> Self {
        self.spec.under_ten_applicants = enabled;
        self
    }

    /// Validates the accumulated fields and returns the query
    pub fn build(self) -> Result<QuerySpec, QueryError> {
        if self.spec.start % PAGE_SIZE != 0 {
            return Err(QueryError::MisalignedStart {
                start: self.spec.start,
                page_size: PAGE_SIZE,
            });
        }

        let offset = self
            .spec
            .page
            .checked_mul(PAGE_SIZE)
            .and_then(|base| base.checked_add(self.spec.start));
        if offset.is_none() {
            return Err(QueryError::OffsetOverflow {
                page: self.spec.page,
                start: self.spec.start,
            });
        }

        Ok(self.spec)
    }
}

/// Trims free text and collapses inner whitespace runs to a single space
///
/// The URL encoder later renders each space as `+`.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_count(field: &'static str, value: Option<&str>) -> Result<u32, QueryError> {
    match value.map(str::trim) {
        None | Some("") => Ok(0),
        Some(raw) => raw.parse().map_err(|_| QueryError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}

use crate::query::filters::{
    DatePosted, ExperienceLevel, JobType, RemoteMode, SalaryBand, SortOrder,
};
use crate::query::spec::QuerySpec;
use crate::query::PAGE_SIZE;
use url::Url;

/// Builds the request URL for one page of a query
///
/// Parameters are appended in a fixed order and filters that are not set are
/// omitted, so equal queries always produce byte-identical URLs.
///
/// # Arguments
///
/// * `base` - The search endpoint
/// * `spec` - The query
/// * `offset` - Result offset of the requested page
///
/// # Example
///
/// ```
/// use jobscout::query::{build_page_url, QuerySpec};
/// use url::Url;
///
/// let base = Url::parse("https://jobs.example.com/search").unwrap();
/// let spec = QuerySpec::builder().keyword("rust  engineer").build().unwrap();
/// let url = build_page_url(&base, &spec, 25);
/// assert_eq!(url.as_str(), "https://jobs.example.com/search?keywords=rust+engineer&start=25");
/// ```
pub fn build_page_url(base: &Url, spec: &QuerySpec, offset: u32) -> Url {
    let mut url = base.clone();
    url.set_query(None);

    {
        let mut pairs = url.query_pairs_mut();

        if !spec.keyword().is_empty() {
            pairs.append_pair("keywords", spec.keyword());
        }
        if !spec.location().is_empty() {
            pairs.append_pair("location", spec.location());
        }
        if let Some(date_posted) = spec.date_posted() {
            pairs.append_pair(DatePosted::PARAM, date_posted.param_value());
        }
        if let Some(salary) = spec.salary() {
            pairs.append_pair(SalaryBand::PARAM, salary.param_value());
        }
        if let Some(remote) = spec.remote() {
            pairs.append_pair(RemoteMode::PARAM, remote.param_value());
        }
        if let Some(job_type) = spec.job_type() {
            pairs.append_pair(JobType::PARAM, job_type.param_value());
        }
        if let Some(experience) = spec.experience() {
            pairs.append_pair(ExperienceLevel::PARAM, experience.param_value());
        }
        if spec.has_verification() {
            pairs.append_pair("f_VJ", "true");
        }
        if spec.under_ten_applicants() {
            pairs.append_pair("f_EA", "true");
        }

        pairs.append_pair("start", &offset.to_string());

        if let Some(sort) = spec.sort() {
            pairs.append_pair(SortOrder::PARAM, sort.param_value());
        }
    }

    url
}

/// Returns the cache key for a query
///
/// The key is the first page's URL followed by `#limit=` and the requested
/// limit. The separator keeps the limit digits apart from the trailing
/// `start` value, so two queries that differ in offset or limit never share a
/// cache entry.
pub fn cache_key(base: &Url, spec: &QuerySpec) -> String {
    format!(
        "{}#limit={}",
        build_page_url(base, spec, spec.first_offset()),
        spec.limit()
    )
}

/// Offset of page `page_index`, shifted by an explicit start
pub fn page_offset(page_index: u32, explicit_start: u32) -> u32 {
    page_index * PAGE_SIZE + explicit_start
}

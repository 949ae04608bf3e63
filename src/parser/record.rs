use serde::Serialize;

/// One job listing extracted from a result page
///
/// Every field is plain text as it appeared in the listing; fields the
/// listing did not carry are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobRecord {
    /// Job title
    pub position: String,

    /// Hiring organization
    pub company: String,

    /// Location as displayed (city, region, "Remote", ...)
    pub location: String,

    /// Posting date from the listing's `datetime` attribute (e.g. `2024-05-01`)
    pub posted_date: String,

    /// Salary range text, or empty when not disclosed
    pub salary: String,

    /// Link to the full job posting
    pub job_url: String,

    /// Company logo image URL
    pub company_logo: String,

    /// Relative age text (e.g. "2 days ago")
    pub ago_time: String,
}

impl JobRecord {
    /// Returns true if the record carries enough to identify a listing
    ///
    /// A listing needs at least a title or an organization to be kept.
    pub fn is_identifiable(&self) -> bool {
        !self.position.is_empty() || !self.company.is_empty()
    }
}

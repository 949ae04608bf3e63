//! Enumerated search filters
//!
//! Each filter is parsed from the loose label a caller supplies
//! (case-insensitive, surrounding whitespace ignored) and knows the query
//! parameter value the search endpoint expects. Unknown labels parse to
//! `None`, which means the filter is simply not applied.

/// Age of postings to include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePosted {
    PastMonth,
    PastWeek,
    Past24Hours,
}

impl DatePosted {
    pub const PARAM: &'static str = "f_TPR";

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "past month" => Some(Self::PastMonth),
            "past week" => Some(Self::PastWeek),
            "24hr" => Some(Self::Past24Hours),
            _ => None,
        }
    }

    /// Time window in seconds, as the endpoint encodes it
    pub fn param_value(&self) -> &'static str {
        match self {
            Self::PastMonth => "r2592000",
            Self::PastWeek => "r604800",
            Self::Past24Hours => "r86400",
        }
    }
}

/// Seniority of the role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceLevel {
    Internship,
    EntryLevel,
    Associate,
    Senior,
    Director,
    Executive,
}

impl ExperienceLevel {
    pub const PARAM: &'static str = "f_E";

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "internship" => Some(Self::Internship),
            "entry level" => Some(Self::EntryLevel),
            "associate" => Some(Self::Associate),
            "senior" => Some(Self::Senior),
            "director" => Some(Self::Director),
            "executive" => Some(Self::Executive),
            _ => None,
        }
    }

    pub fn param_value(&self) -> &'static str {
        match self {
            Self::Internship => "1",
            Self::EntryLevel => "2",
            Self::Associate => "3",
            Self::Senior => "4",
            Self::Director => "5",
            Self::Executive => "6",
        }
    }
}

/// Employment arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Temporary,
    Volunteer,
    Internship,
}

impl JobType {
    pub const PARAM: &'static str = "f_JT";

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "full time" | "full-time" => Some(Self::FullTime),
            "part time" | "part-time" => Some(Self::PartTime),
            "contract" => Some(Self::Contract),
            "temporary" => Some(Self::Temporary),
            "volunteer" => Some(Self::Volunteer),
            "internship" => Some(Self::Internship),
            _ => None,
        }
    }

    pub fn param_value(&self) -> &'static str {
        match self {
            Self::FullTime => "F",
            Self::PartTime => "P",
            Self::Contract => "C",
            Self::Temporary => "T",
            Self::Volunteer => "V",
            Self::Internship => "I",
        }
    }
}

/// Where the work happens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteMode {
    OnSite,
    Remote,
    Hybrid,
}

impl RemoteMode {
    pub const PARAM: &'static str = "f_WT";

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "on-site" | "on site" => Some(Self::OnSite),
            "remote" => Some(Self::Remote),
            "hybrid" => Some(Self::Hybrid),
            _ => None,
        }
    }

    pub fn param_value(&self) -> &'static str {
        match self {
            Self::OnSite => "1",
            Self::Remote => "2",
            Self::Hybrid => "3",
        }
    }
}

/// Minimum yearly salary band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalaryBand {
    From40k,
    From60k,
    From80k,
    From100k,
    From120k,
}

impl SalaryBand {
    pub const PARAM: &'static str = "f_SB2";

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "40000" => Some(Self::From40k),
            "60000" => Some(Self::From60k),
            "80000" => Some(Self::From80k),
            "100000" => Some(Self::From100k),
            "120000" => Some(Self::From120k),
            _ => None,
        }
    }

    pub fn param_value(&self) -> &'static str {
        match self {
            Self::From40k => "1",
            Self::From60k => "2",
            Self::From80k => "3",
            Self::From100k => "4",
            Self::From120k => "5",
        }
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Recent,
    Relevant,
}

impl SortOrder {
    pub const PARAM: &'static str = "sortBy";

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "recent" => Some(Self::Recent),
            "relevant" => Some(Self::Relevant),
            _ => None,
        }
    }

    pub fn param_value(&self) -> &'static str {
        match self {
            Self::Recent => "DD",
            Self::Relevant => "R",
        }
    }
}

fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

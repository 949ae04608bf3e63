//! jobscout main entry point
//!
//! This is the command-line interface for the jobscout job-listing fetcher.

use anyhow::Context;
use clap::Parser;
use jobscout::config::{load_settings, Settings};
use jobscout::{JobRecord, JobSearch, SearchFilters};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// jobscout: a polite job-listing fetcher
///
/// Fetches job listings page by page, backing off when the endpoint rate
/// limits, and prints them as text or JSON.
#[derive(Parser, Debug)]
#[command(name = "jobscout")]
#[command(version = "1.0.0")]
#[command(about = "A polite job-listing fetcher", long_about = None)]
struct Cli {
    /// Search keywords
    #[arg(value_name = "KEYWORD")]
    keyword: String,

    /// Path to TOML settings file (defaults are used when omitted)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Location to search in
    #[arg(short, long)]
    location: Option<String>,

    /// Posting age: "past month", "past week" or "24hr"
    #[arg(long)]
    date_posted: Option<String>,

    /// Job type: "full time", "part time", "contract", "temporary", "volunteer", "internship"
    #[arg(long)]
    job_type: Option<String>,

    /// Work mode: "on-site", "remote" or "hybrid"
    #[arg(long)]
    remote: Option<String>,

    /// Minimum salary: 40000, 60000, 80000, 100000 or 120000
    #[arg(long)]
    salary: Option<String>,

    /// Experience: "internship", "entry level", "associate", "senior", "director", "executive"
    #[arg(long)]
    experience: Option<String>,

    /// Sort order: "recent" or "relevant"
    #[arg(long)]
    sort: Option<String>,

    /// Maximum number of jobs to return (0 = all)
    #[arg(long, default_value = "25")]
    limit: String,

    /// Result page to start from
    #[arg(long, default_value = "0")]
    page: String,

    /// Only verified job postings
    #[arg(long)]
    has_verification: bool,

    /// Only postings with fewer than 10 applicants
    #[arg(long)]
    under_10_applicants: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn filters(&self) -> SearchFilters {
        SearchFilters {
            keyword: Some(self.keyword.clone()),
            location: self.location.clone(),
            date_since_posted: self.date_posted.clone(),
            job_type: self.job_type.clone(),
            remote_filter: self.remote.clone(),
            salary: self.salary.clone(),
            experience_level: self.experience.clone(),
            sort_by: self.sort.clone(),
            limit: Some(self.limit.clone()),
            page: Some(self.page.clone()),
            start: None,
            has_verification: self.has_verification,
            under_10_applicants: self.under_10_applicants,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let settings = match &cli.config {
        Some(path) => {
            tracing::info!("Loading settings from: {}", path.display());
            load_settings(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?
        }
        None => Settings::default(),
    };

    let mut search = JobSearch::new(settings).context("failed to initialize search")?;
    let jobs = search
        .query_filters(&cli.filters())
        .await
        .context("invalid search filters")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&jobs)?);
    } else {
        print_jobs(&jobs);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("jobscout=info,warn"),
            1 => EnvFilter::new("jobscout=debug,info"),
            2 => EnvFilter::new("jobscout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_jobs(jobs: &[JobRecord]) {
    for job in jobs {
        println!("{} @ {}", job.position, job.company);

        if !job.location.is_empty() {
            println!("  Location: {}", job.location);
        }
        if !job.salary.is_empty() {
            println!("  Salary:   {}", job.salary);
        }
        if !job.ago_time.is_empty() {
            println!("  Posted:   {} ({})", job.ago_time, job.posted_date);
        }
        if !job.job_url.is_empty() {
            println!("  {}", job.job_url);
        }
        println!();
    }

    println!("{} jobs", jobs.len());
}

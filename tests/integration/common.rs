use jobscout::config::{PacingSettings, RetrySettings, Settings};
use wiremock::MockServer;

/// Settings pointing at the mock server, with millisecond backoff and no pacing
pub fn test_settings(server: &MockServer) -> Settings {
    let mut settings = Settings::default();
    settings.http.base_url = format!("{}/search", server.uri());
    settings.http.timeout_seconds = 5;
    settings.retry = RetrySettings {
        max_consecutive_errors: 3,
        backoff_unit_ms: 1,
    };
    settings.pacing = PacingSettings {
        min_delay_ms: 0,
        max_delay_ms: 0,
    };
    settings
}

/// One well-formed listing fragment
pub fn listing(title: &str, company: &str) -> String {
    format!(
        r#"<li>
            <div class="base-card">
                <a class="base-card__full-link" href="https://jobs.example.com/view/{title}">view</a>
                <img class="artdeco-entity-image" data-delayed-url="https://img.example.com/logo.png" />
                <h3 class="base-search-card__title">{title}</h3>
                <h4 class="base-search-card__subtitle">{company}</h4>
                <span class="job-search-card__location">Remote</span>
                <time class="job-search-card__listdate" datetime="2024-05-01">1 day ago</time>
            </div>
        </li>"#
    )
}

/// A page of `count` well-formed listings titled `<prefix> <n>`
pub fn page_of(prefix: &str, count: usize) -> String {
    (0..count)
        .map(|i| listing(&format!("{} {}", prefix, i), "Acme"))
        .collect()
}

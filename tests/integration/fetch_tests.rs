use crate::common::{page_of, test_settings};
use jobscout::fetch::{build_http_client, FetchLoop, FetchPhase};
use jobscout::query::QuerySpec;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run(server: &MockServer, spec: &QuerySpec) -> jobscout::fetch::FetchOutcome {
    let settings = test_settings(server);
    let client = build_http_client(&settings.http).expect("Failed to build client");
    let base_url = Url::parse(&settings.http.base_url).expect("Failed to parse base URL");

    FetchLoop::new(&client, &base_url, &settings.retry, &settings.pacing)
        .run(spec)
        .await
}

#[tokio::test]
async fn test_limit_reached_after_two_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_of("First", 25)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_of("Second", 25)))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Must never be requested once the limit is met
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_of("Third", 25)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let spec = QuerySpec::builder().keyword("rust").limit(50).build().unwrap();
    let outcome = run(&mock_server, &spec).await;

    assert_eq!(outcome.records.len(), 50);
    assert_eq!(outcome.pages_fetched, 2);
    assert_eq!(outcome.phase, FetchPhase::Done);
    assert_eq!(outcome.records[0].position, "First 0");
    assert_eq!(outcome.records[49].position, "Second 24");
}

#[tokio::test]
async fn test_limit_truncates_mid_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_of("Job", 25)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let spec = QuerySpec::builder().limit(10).build().unwrap();
    let outcome = run(&mock_server, &spec).await;

    assert_eq!(outcome.records.len(), 10);
    assert_eq!(outcome.phase, FetchPhase::Done);
}

#[tokio::test]
async fn test_unlimited_runs_until_empty_page() {
    let mock_server = MockServer::start().await;

    for start in ["0", "25", "50"] {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("start", start))
            .respond_with(ResponseTemplate::new(200).set_body_string(page_of("Job", 25)))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "75"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&mock_server)
        .await;

    let spec = QuerySpec::builder().keyword("rust").build().unwrap();
    let outcome = run(&mock_server, &spec).await;

    assert_eq!(outcome.records.len(), 75);
    assert_eq!(outcome.pages_fetched, 4);
    assert_eq!(outcome.phase, FetchPhase::Done);
}

#[tokio::test]
async fn test_rate_limited_three_times_aborts_without_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429))
        .expect(3)
        .mount(&mock_server)
        .await;

    let spec = QuerySpec::builder().keyword("rust").limit(50).build().unwrap();
    let outcome = run(&mock_server, &spec).await;

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.pages_fetched, 0);
    assert_eq!(outcome.phase, FetchPhase::Aborted);
    assert!(outcome.is_partial());
}

#[tokio::test]
async fn test_transient_error_is_retried_at_same_offset() {
    let mock_server = MockServer::start().await;

    // First request fails, later ones succeed
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_of("Job", 25)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let spec = QuerySpec::builder().limit(25).build().unwrap();
    let outcome = run(&mock_server, &spec).await;

    assert_eq!(outcome.records.len(), 25);
    assert_eq!(outcome.phase, FetchPhase::Done);
}

#[tokio::test]
async fn test_error_counter_resets_after_success() {
    let mock_server = MockServer::start().await;

    // Two failures on the first page, then success
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_of("First", 25)))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Two more failures on the second page would abort without the reset
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "25"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_of("Second", 25)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let spec = QuerySpec::builder().limit(50).build().unwrap();
    let outcome = run(&mock_server, &spec).await;

    assert_eq!(outcome.records.len(), 50);
    assert_eq!(outcome.phase, FetchPhase::Done);
}

#[tokio::test]
async fn test_partial_results_kept_when_later_page_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_of("Job", 25)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "25"))
        .respond_with(ResponseTemplate::new(502))
        .expect(3)
        .mount(&mock_server)
        .await;

    let spec = QuerySpec::builder().limit(100).build().unwrap();
    let outcome = run(&mock_server, &spec).await;

    assert_eq!(outcome.records.len(), 25);
    assert_eq!(outcome.phase, FetchPhase::Aborted);
}

#[tokio::test]
async fn test_malformed_listings_are_skipped() {
    let mock_server = MockServer::start().await;

    let body = format!(
        "{}<li><span class=\"job-search-card__location\">Nowhere</span></li><li></li>{}",
        page_of("Good", 3),
        page_of("Also good", 2)
    );

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&mock_server)
        .await;

    let spec = QuerySpec::builder().build().unwrap();
    let outcome = run(&mock_server, &spec).await;

    assert_eq!(outcome.records.len(), 5);
}

#[tokio::test]
async fn test_filters_are_sent_as_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("keywords", "rust engineer"))
        .and(query_param("location", "Berlin"))
        .and(query_param("f_WT", "2"))
        .and(query_param("f_JT", "F"))
        .and(query_param("sortBy", "DD"))
        .and(query_param("start", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_of("Job", 5)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let spec = QuerySpec::builder()
        .keyword("  rust   engineer ")
        .location("Berlin")
        .remote(jobscout::query::RemoteMode::Remote)
        .job_type(jobscout::query::JobType::FullTime)
        .sort(jobscout::query::SortOrder::Recent)
        .page(2)
        .limit(5)
        .build()
        .unwrap();
    let outcome = run(&mock_server, &spec).await;

    assert_eq!(outcome.records.len(), 5);
}

use crate::common::{page_of, test_settings};
use jobscout::{JobSearch, JobsError, QueryError, QuerySpec, SearchFilters};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts a two-page result set: 10 listings, then an empty page
async fn mount_short_result(server: &MockServer, expected_rounds: u64) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_of("Job", 10)))
        .expect(expected_rounds)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(expected_rounds)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_repeated_query_is_served_from_cache() {
    let mock_server = MockServer::start().await;
    mount_short_result(&mock_server, 1).await;

    let mut search = JobSearch::new(test_settings(&mock_server)).expect("Failed to create search");
    let spec = QuerySpec::builder().keyword("rust").build().unwrap();

    let first = search.query(&spec).await;
    let second = search.query(&spec).await;

    assert_eq!(first.len(), 10);
    assert_eq!(first, second);
    assert_eq!(search.cache_size(), 1);
}

#[tokio::test]
async fn test_whitespace_variants_share_cache_entry() {
    let mock_server = MockServer::start().await;
    mount_short_result(&mock_server, 1).await;

    let mut search = JobSearch::new(test_settings(&mock_server)).expect("Failed to create search");

    let a = QuerySpec::builder().keyword("rust engineer").build().unwrap();
    let b = QuerySpec::builder().keyword("  rust    engineer").build().unwrap();

    assert_eq!(search.query(&a).await.len(), 10);
    assert_eq!(search.query(&b).await.len(), 10);
    assert_eq!(search.cache_size(), 1);
}

#[tokio::test]
async fn test_different_limits_are_cached_separately() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_of("Job", 25)))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut search = JobSearch::new(test_settings(&mock_server)).expect("Failed to create search");

    let five = QuerySpec::builder().keyword("rust").limit(5).build().unwrap();
    let ten = QuerySpec::builder().keyword("rust").limit(10).build().unwrap();

    assert_eq!(search.query(&five).await.len(), 5);
    assert_eq!(search.query(&ten).await.len(), 10);
    assert_eq!(search.cache_size(), 2);
}

#[tokio::test]
async fn test_clear_cache_keeps_fresh_entries() {
    let mock_server = MockServer::start().await;
    mount_short_result(&mock_server, 1).await;

    let mut search = JobSearch::new(test_settings(&mock_server)).expect("Failed to create search");
    let spec = QuerySpec::builder().keyword("rust").build().unwrap();

    search.query(&spec).await;
    assert_eq!(search.clear_cache(), 0);
    assert_eq!(search.cache_size(), 1);

    // Still served from the cache
    assert_eq!(search.query(&spec).await.len(), 10);
}

#[tokio::test]
async fn test_clear_cache_drops_expired_entries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_of("Job", 10)))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut settings = test_settings(&mock_server);
    settings.cache.ttl_seconds = 1;
    let mut search = JobSearch::new(settings).expect("Failed to create search");

    let unlimited = QuerySpec::builder().keyword("rust").build().unwrap();
    let limited = QuerySpec::builder().keyword("rust").limit(5).build().unwrap();

    assert_eq!(search.query(&unlimited).await.len(), 10);
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    assert_eq!(search.query(&limited).await.len(), 5);
    assert_eq!(search.cache_size(), 2);

    assert_eq!(search.clear_cache(), 1);
    assert_eq!(search.cache_size(), 1);

    // The fresh entry survives the sweep
    assert_eq!(search.query(&limited).await.len(), 5);
}

#[tokio::test]
async fn test_purge_cache_forces_refetch() {
    let mock_server = MockServer::start().await;
    mount_short_result(&mock_server, 2).await;

    let mut search = JobSearch::new(test_settings(&mock_server)).expect("Failed to create search");
    let spec = QuerySpec::builder().keyword("rust").build().unwrap();

    search.query(&spec).await;
    assert_eq!(search.cache_size(), 1);

    search.purge_cache();
    assert_eq!(search.cache_size(), 0);

    assert_eq!(search.query(&spec).await.len(), 10);
    assert_eq!(search.cache_size(), 1);
}

#[tokio::test]
async fn test_empty_result_is_not_cached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut search = JobSearch::new(test_settings(&mock_server)).expect("Failed to create search");
    let spec = QuerySpec::builder().keyword("nothing").build().unwrap();

    assert!(search.query(&spec).await.is_empty());
    assert_eq!(search.cache_size(), 0);

    // A second call goes out again
    assert!(search.query(&spec).await.is_empty());
}

#[tokio::test]
async fn test_exhausted_retries_return_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429))
        .expect(3)
        .mount(&mock_server)
        .await;

    let mut search = JobSearch::new(test_settings(&mock_server)).expect("Failed to create search");
    let spec = QuerySpec::builder().keyword("rust").limit(50).build().unwrap();

    let jobs = search.query(&spec).await;
    assert!(jobs.is_empty());
    assert_eq!(search.cache_size(), 0);
}

#[tokio::test]
async fn test_query_filters_entry_point() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("keywords", "data engineer"))
        .and(query_param("f_TPR", "r86400"))
        .and(query_param("f_E", "2"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_of("Job", 25)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut search = JobSearch::new(test_settings(&mock_server)).expect("Failed to create search");

    let filters = SearchFilters {
        keyword: Some(" data engineer ".to_string()),
        date_since_posted: Some("24hr".to_string()),
        experience_level: Some("entry level".to_string()),
        job_type: Some("not a job type".to_string()),
        limit: Some("3".to_string()),
        ..SearchFilters::default()
    };

    let jobs = search.query_filters(&filters).await.expect("Query failed");
    assert_eq!(jobs.len(), 3);
}

#[tokio::test]
async fn test_query_filters_rejects_misaligned_start() {
    let mock_server = MockServer::start().await;
    let mut search = JobSearch::new(test_settings(&mock_server)).expect("Failed to create search");

    let filters = SearchFilters {
        start: Some("10".to_string()),
        ..SearchFilters::default()
    };

    let result = search.query_filters(&filters).await;
    assert!(matches!(
        result,
        Err(JobsError::Query(QueryError::MisalignedStart { start: 10, .. }))
    ));
}

#[tokio::test]
async fn test_invalid_settings_are_rejected() {
    let mock_server = MockServer::start().await;
    let mut settings = test_settings(&mock_server);
    settings.cache.capacity = 0;

    assert!(matches!(JobSearch::new(settings), Err(JobsError::Config(_))));
}

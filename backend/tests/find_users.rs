//! End-to-end search scenarios: the real HTTP app on an ephemeral port driven
//! through `search-client`.
#![expect(clippy::expect_used, reason = "test code asserts on setup failures")]

use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, rt, web};
use rstest::{fixture, rstest};
use search_backend::Trace;
use search_backend::domain::UserSearchService;
use search_backend::inbound::http::api_scope;
use search_backend::inbound::http::state::HttpState;
use search_backend::outbound::dataset::DatasetUserStore;
use search_client::{
    BadRequestCode, OrderDirection, OrderField, SearchClient, SearchClientConfig, SearchError,
    SearchQuery, SearchResult,
};
use user_dataset::bundled_fixture_path;

const FIXTURE_SIZE: usize = 25;

/// Start the search app over the bundled dataset and return its endpoint URL.
fn spawn_server() -> String {
    let store = DatasetUserStore::open(&bundled_fixture_path()).expect("fixture loads");
    let service = Arc::new(UserSearchService::new(Arc::new(store)));
    let http_state = web::Data::new(HttpState::new(service));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_state.clone())
            .wrap(Trace)
            .service(api_scope())
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind search server");
    let addr = *server.addrs().first().expect("bound address");
    rt::spawn(server.run());
    format!("http://{addr}/api/v1/search")
}

#[fixture]
fn endpoint() -> String {
    spawn_server()
}

fn client(endpoint: &str, token: &str) -> SearchClient {
    SearchClient::new(
        SearchClientConfig::new(endpoint, token).with_timeout(Duration::from_secs(2)),
    )
    .expect("client builds")
}

async fn find(endpoint: &str, query: SearchQuery) -> SearchResult {
    client(endpoint, "secret")
        .find_users(&query)
        .await
        .expect("search succeeds")
}

fn ids(result: &SearchResult) -> Vec<u32> {
    result.users.iter().map(|user| user.id).collect()
}

#[rstest]
#[actix_web::test]
async fn first_page_reports_more(endpoint: String) {
    let result = find(&endpoint, SearchQuery::new(5, 0)).await;

    assert_eq!(ids(&result), vec![0, 1, 2, 3, 4]);
    assert!(result.next_page);
    assert_eq!(result.users[0].name, "Boyd Wolf");
}

#[rstest]
#[actix_web::test]
async fn oversized_limit_returns_everything(endpoint: String) {
    let result = find(&endpoint, SearchQuery::new(45, 0)).await;

    assert_eq!(result.users.len(), FIXTURE_SIZE);
    assert!(!result.next_page);
}

#[rstest]
#[actix_web::test]
async fn largest_limit_returns_everything(endpoint: String) {
    let result = find(&endpoint, SearchQuery::new(i64::MAX, 0)).await;

    assert_eq!(result.users.len(), FIXTURE_SIZE);
    assert!(!result.next_page);
}

#[rstest]
#[actix_web::test]
async fn limit_equal_to_store_size_has_no_next_page(endpoint: String) {
    let result = find(&endpoint, SearchQuery::new(25, 0)).await;

    assert_eq!(result.users.len(), FIXTURE_SIZE);
    assert!(!result.next_page);
}

#[rstest]
#[actix_web::test]
async fn offset_pages_line_up_with_one_large_page(endpoint: String) {
    let whole = find(&endpoint, SearchQuery::new(10, 0)).await;
    let first = find(&endpoint, SearchQuery::new(5, 0)).await;
    let second = find(&endpoint, SearchQuery::new(5, 5)).await;

    let stitched: Vec<u32> = ids(&first).into_iter().chain(ids(&second)).collect();
    assert_eq!(stitched, ids(&whole));
    assert!(second.next_page);
}

#[rstest]
#[case::at_end(25)]
#[case::past_end(100)]
#[actix_web::test]
async fn offset_beyond_matches_is_empty(endpoint: String, #[case] offset: i64) {
    let result = find(&endpoint, SearchQuery::new(5, offset)).await;

    assert!(result.users.is_empty());
    assert!(!result.next_page);
}

#[rstest]
#[actix_web::test]
async fn last_partial_page_has_no_next_page(endpoint: String) {
    let result = find(&endpoint, SearchQuery::new(10, 20)).await;

    assert_eq!(ids(&result), vec![20, 21, 22, 23, 24]);
    assert!(!result.next_page);
}

#[rstest]
#[actix_web::test]
async fn zero_limit_still_detects_matches(endpoint: String) {
    let result = find(&endpoint, SearchQuery::new(0, 0)).await;

    assert!(result.users.is_empty());
    assert!(result.next_page);
}

#[rstest]
#[actix_web::test]
async fn text_filter_matches_case_insensitively(endpoint: String) {
    let result = find(&endpoint, SearchQuery::new(25, 0).with_text("NN")).await;

    assert_eq!(result.users.len(), 6);
    assert!(!result.next_page);
    for user in &result.users {
        let haystack = format!("{} {}", user.name, user.about).to_lowercase();
        assert!(haystack.contains("nn"), "{} should match", user.name);
    }
}

#[rstest]
#[actix_web::test]
async fn text_filter_with_no_matches_is_empty(endpoint: String) {
    let result = find(&endpoint, SearchQuery::new(25, 0).with_text("zzzzzz")).await;

    assert!(result.users.is_empty());
    assert!(!result.next_page);
}

#[rstest]
#[case::ascending(OrderDirection::Ascending)]
#[case::descending(OrderDirection::Descending)]
#[actix_web::test]
async fn age_ordering_is_stable(endpoint: String, #[case] direction: OrderDirection) {
    let result = find(
        &endpoint,
        SearchQuery::new(25, 0).with_order(OrderField::Age, direction),
    )
    .await;

    assert_eq!(result.users.len(), FIXTURE_SIZE);
    for pair in result.users.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        match direction {
            OrderDirection::Descending => assert!(a.age >= b.age),
            _ => assert!(a.age <= b.age),
        }
        if a.age == b.age {
            assert!(a.id < b.id, "ties keep dataset order: {} before {}", a.id, b.id);
        }
    }
}

#[rstest]
#[actix_web::test]
async fn empty_order_field_sorts_by_name(endpoint: String) {
    let result = find(
        &endpoint,
        SearchQuery::new(25, 0).with_order(OrderField::Unordered, OrderDirection::Ascending),
    )
    .await;

    let names: Vec<&str> = result.users.iter().map(|user| user.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert_eq!(names.first().copied(), Some("Allison Valdez"));
}

#[rstest]
#[actix_web::test]
async fn id_descending_pages_from_the_end(endpoint: String) {
    let result = find(
        &endpoint,
        SearchQuery::new(3, 0).with_order(OrderField::Id, OrderDirection::Descending),
    )
    .await;

    assert_eq!(ids(&result), vec![24, 23, 22]);
    assert!(result.next_page);
}

#[rstest]
#[actix_web::test]
async fn repeated_queries_are_identical(endpoint: String) {
    let query = SearchQuery::new(7, 3)
        .with_text("a")
        .with_order(OrderField::Name, OrderDirection::Descending);

    let first = find(&endpoint, query.clone()).await;
    let second = find(&endpoint, query).await;

    assert_eq!(first, second);
}

#[rstest]
#[case::bad_field(
    SearchQuery::new(5, 0).with_order(OrderField::Other("xxx".to_owned()), OrderDirection::Ascending),
    BadRequestCode::BadOrderField
)]
#[case::bad_direction(
    SearchQuery::new(5, 0).with_order(OrderField::Age, OrderDirection::Other(2)),
    BadRequestCode::BadOrderBy
)]
#[case::bad_field_and_direction(
    SearchQuery::new(5, 0).with_order(OrderField::Other("xxx".to_owned()), OrderDirection::Other(2)),
    BadRequestCode::BadOrderBy
)]
#[actix_web::test]
async fn server_rejections_carry_their_code(
    endpoint: String,
    #[case] query: SearchQuery,
    #[case] code: BadRequestCode,
) {
    let error = client(&endpoint, "secret")
        .find_users(&query)
        .await
        .expect_err("server rejects");

    assert_eq!(error, SearchError::BadRequest { code });
    assert!(!error.is_retryable());
}

#[rstest]
#[case::negative_limit(SearchQuery::new(-1, 0), SearchError::InvalidLimit { limit: -1 })]
#[case::negative_offset(SearchQuery::new(5, -1), SearchError::InvalidOffset { offset: -1 })]
#[actix_web::test]
async fn negative_windows_fail_before_sending(
    endpoint: String,
    #[case] query: SearchQuery,
    #[case] expected: SearchError,
) {
    let error = client(&endpoint, "secret")
        .find_users(&query)
        .await
        .expect_err("pre-flight rejects");

    assert_eq!(error, expected);
}

#[rstest]
#[actix_web::test]
async fn missing_credential_is_unauthorized(endpoint: String) {
    let error = client(&endpoint, "")
        .find_users(&SearchQuery::new(5, 0))
        .await
        .expect_err("credential rejected");

    assert_eq!(error, SearchError::Unauthorized);
}

#[rstest]
#[actix_web::test]
async fn server_answers_401_without_the_header(endpoint: String) {
    let response = reqwest::Client::new()
        .get(format!("{endpoint}?limit=5&offset=0&query=&order_field=&order_by=0"))
        .send()
        .await
        .expect("request completes");

    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key("trace-id"));
}

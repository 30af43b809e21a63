//! Integration tests for `PullPushClient` using wiremock HTTP mocks.

use redlens_pullpush::{PullPushClient, PullPushError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PullPushClient {
    PullPushClient::with_base_url(15, base_url).expect("client construction should not fail")
}

#[tokio::test]
async fn search_submissions_returns_parsed_posts() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "data": [
            {
                "id": "t3_abc123",
                "title": "Acme support is great",
                "selftext": "Their onboarding team answered in minutes.",
                "subreddit": "smallbusiness",
                "score": 412,
                "num_comments": 57,
                "permalink": "/r/smallbusiness/comments/abc123/acme_support/"
            },
            {
                "id": "def456",
                "title": "Anyone tried Acme?",
                "subreddit_prefixed": "r/startups",
                "score": 12
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/reddit/search/submission/"))
        .and(query_param("q", "Acme"))
        .and(query_param("size", "25"))
        .and(query_param("sort_type", "score"))
        .and(query_param("sort", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let posts = client
        .search_submissions("Acme", None, 25)
        .await
        .expect("should parse submissions");

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, "t3_abc123");
    assert_eq!(posts[0].title.as_deref(), Some("Acme support is great"));
    assert_eq!(posts[0].score, Some(412));
    assert_eq!(posts[0].num_comments, Some(57));
    assert_eq!(posts[1].id, "def456");
    assert_eq!(posts[1].subreddit_prefixed.as_deref(), Some("r/startups"));
    assert!(posts[1].selftext.is_none());
    assert!(posts[1].num_comments.is_none());
}

#[tokio::test]
async fn search_submissions_passes_subreddit_scope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reddit/search/submission/"))
        .and(query_param("q", "Acme"))
        .and(query_param("subreddit", "smallbusiness"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let posts = client
        .search_submissions("Acme", Some("smallbusiness"), 25)
        .await
        .expect("scoped search should succeed");

    assert!(posts.is_empty());
}

#[tokio::test]
async fn search_comments_returns_parsed_comments() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "data": [
            { "author": "user_one", "body": "Switched last year, no regrets.", "score": 88 },
            { "author": "user_two", "body": "[deleted]", "score": 3 }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/reddit/search/comment/"))
        .and(query_param("link_id", "abc123"))
        .and(query_param("size", "15"))
        .and(query_param("sort", "score"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let comments = client
        .search_comments("abc123", 15)
        .await
        .expect("should parse comments");

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].author.as_deref(), Some("user_one"));
    assert_eq!(comments[0].score, Some(88));
    // The client returns sentinels untouched; filtering is the pipeline's job.
    assert_eq!(comments[1].body.as_deref(), Some("[deleted]"));
}

#[tokio::test]
async fn http_error_status_surfaces_as_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reddit/search/submission/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.search_submissions("Acme", None, 25).await;

    assert!(matches!(result, Err(PullPushError::Http(_))));
}

#[tokio::test]
async fn malformed_body_surfaces_as_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reddit/search/comment/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.search_comments("abc123", 15).await;

    match result {
        Err(PullPushError::Deserialize { context, .. }) => {
            assert!(
                context.contains("/reddit/search/comment/"),
                "context should name the endpoint, got: {context}"
            );
        }
        other => panic!("expected Deserialize error, got: {other:?}"),
    }
}

#[tokio::test]
async fn missing_data_field_parses_as_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reddit/search/submission/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let posts = client
        .search_submissions("Acme", None, 25)
        .await
        .expect("empty envelope should parse");

    assert!(posts.is_empty());
}

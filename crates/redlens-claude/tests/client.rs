//! Integration tests for `ClaudeClient` using wiremock HTTP mocks.

use redlens_claude::{ClaudeClient, ClaudeError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> ClaudeClient {
    ClaudeClient::with_base_url("test-key", "claude-test-model", 8000, 120, base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn generate_returns_joined_text_and_usage() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "content": [
            { "type": "text", "text": "# Report" },
            { "type": "tool_use", "id": "x", "name": "noop", "input": {} },
            { "type": "text", "text": "## Section" }
        ],
        "usage": { "input_tokens": 1200, "output_tokens": 340 }
    });

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(serde_json::json!({
            "model": "claude-test-model",
            "max_tokens": 8000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let generation = client
        .generate("analyze this")
        .await
        .expect("should parse generation");

    assert_eq!(generation.text, "# Report\n## Section");
    assert_eq!(generation.usage.input_tokens, 1200);
    assert_eq!(generation.usage.output_tokens, 340);
}

#[tokio::test]
async fn generate_sends_prompt_as_user_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_partial_json(serde_json::json!({
            "messages": [ { "role": "user", "content": "the prompt" } ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [ { "type": "text", "text": "ok" } ],
            "usage": { "input_tokens": 1, "output_tokens": 1 }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let generation = client.generate("the prompt").await.expect("generation");
    assert_eq!(generation.text, "ok");
}

#[tokio::test]
async fn non_2xx_status_surfaces_as_api_error_with_body_snippet() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string(r#"{"error":{"message":"rate limited"}}"#),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.generate("analyze this").await;

    match result {
        Err(ClaudeError::Api { status, message }) => {
            assert_eq!(status, 429);
            assert!(
                message.contains("rate limited"),
                "expected body snippet in message, got: {message}"
            );
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_surfaces_as_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.generate("analyze this").await;

    assert!(matches!(result, Err(ClaudeError::Deserialize { .. })));
}

#[tokio::test]
async fn missing_usage_defaults_to_zero() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [ { "type": "text", "text": "bare" } ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let generation = client.generate("analyze this").await.expect("generation");
    assert_eq!(generation.usage.input_tokens, 0);
    assert_eq!(generation.usage.output_tokens, 0);
}

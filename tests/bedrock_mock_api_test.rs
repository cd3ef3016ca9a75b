//! Mock API tests for the Bedrock Titan Text client
//!
//! These tests use wiremock to stand in for the Bedrock runtime `InvokeModel`
//! endpoint. Bodies follow the Titan Text request/response format:
//! https://docs.aws.amazon.com/bedrock/latest/userguide/model-parameters-titan-text.html

use bedrock_chat::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INVOKE_PATH: &str = "/model/amazon.titan-text-express-v1/invoke";

fn create_titan_response(text: &str) -> serde_json::Value {
    json!({
        "inputTextTokenCount": 5,
        "results": [{
            "tokenCount": 2,
            "outputText": text,
            "completionReason": "FINISH"
        }]
    })
}

fn client_for(server: &MockServer) -> BedrockClient {
    let config = BedrockConfig::new()
        .with_api_key("test-api-key")
        .with_base_url(server.uri());
    BedrockClient::new(config).unwrap()
}

#[tokio::test]
async fn test_invoke_returns_first_output_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(INVOKE_PATH))
        .and(header("Authorization", "Bearer test-api-key"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .and(body_json(json!({
            "inputText": "Say hello",
            "textGenerationConfig": {
                "maxTokenCount": 256,
                "temperature": 0.7,
                "topP": 1.0,
                "stopSequences": []
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_titan_response("hello")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let text = client.respond("Say hello").await.unwrap();
    assert_eq!(text, "hello");
}

#[tokio::test]
async fn test_invoke_exposes_response_metadata() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(INVOKE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_titan_response("hi")))
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server).invoke("hello").await.unwrap();
    assert_eq!(response.input_text_token_count, Some(5));
    assert_eq!(response.results[0].token_count, Some(2));
    assert_eq!(
        response.results[0].completion_reason.as_deref(),
        Some("FINISH")
    );
}

#[tokio::test]
async fn test_custom_generation_config_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/model/amazon.titan-text-lite-v1/invoke"))
        .and(body_json(json!({
            "inputText": "",
            "textGenerationConfig": {
                "maxTokenCount": 64,
                "temperature": 0.0,
                "topP": 0.5,
                "stopSequences": ["User:"]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_titan_response("ok")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generation = TextGenerationConfig::new()
        .with_max_token_count(64)
        .with_temperature(0.0)
        .with_top_p(0.5)
        .with_stop_sequence("User:");
    let client = BedrockClient::new(
        BedrockConfig::new()
            .with_base_url(mock_server.uri())
            .with_model("amazon.titan-text-lite-v1")
            .with_generation_config(generation),
    )
    .unwrap();

    assert_eq!(client.respond("").await.unwrap(), "ok");
}

#[tokio::test]
async fn test_empty_results_is_malformed_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(INVOKE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "inputTextTokenCount": 1, "results": [] })),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).respond("hi").await.unwrap_err();
    assert!(matches!(err, ChatError::MalformedResponseError(_)));
}

#[tokio::test]
async fn test_non_json_body_is_malformed_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(INVOKE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).respond("hi").await.unwrap_err();
    assert!(matches!(err, ChatError::MalformedResponseError(_)));
}

#[tokio::test]
async fn test_access_denied_is_authorization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(INVOKE_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "You don't have access to the model with the specified model ID."
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).respond("hi").await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Authorization);
}

#[tokio::test]
async fn test_missing_api_key_sends_no_authorization_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(INVOKE_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "Missing Authentication Token",
            "__type": "MissingAuthenticationTokenException"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client =
        BedrockClient::new(BedrockConfig::new().with_base_url(mock_server.uri())).unwrap();
    let err = client.respond("hi").await.unwrap_err();
    assert!(matches!(err, ChatError::AuthorizationError(_)));

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(INVOKE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Internal server error",
            "__type": "InternalServerException"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).respond("hi").await.unwrap_err();
    match err {
        ChatError::ApiError { code, message, .. } => {
            assert_eq!(code, 500);
            assert_eq!(message, "Internal server error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = BedrockClient::new(
        BedrockConfig::new()
            .with_api_key("test-api-key")
            .with_base_url(format!("http://{addr}")),
    )
    .unwrap();

    let err = client.respond("hi").await.unwrap_err();
    assert!(matches!(err, ChatError::NetworkError(_)), "got {err:?}");
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let mock_server = MockServer::start().await;

    for prompt in ["one", "two", "three"] {
        Mock::given(method("POST"))
            .and(path(INVOKE_PATH))
            .and(body_json(json!({
                "inputText": prompt,
                "textGenerationConfig": {
                    "maxTokenCount": 256,
                    "temperature": 0.7,
                    "topP": 1.0,
                    "stopSequences": []
                }
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(create_titan_response(&prompt.to_uppercase())),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = client_for(&mock_server);
    let (a, b, c) = tokio::join!(
        client.respond("one"),
        client.respond("two"),
        client.respond("three")
    );
    assert_eq!(a.unwrap(), "ONE");
    assert_eq!(b.unwrap(), "TWO");
    assert_eq!(c.unwrap(), "THREE");
}

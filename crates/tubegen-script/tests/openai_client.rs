//! OpenAI client tests against a mock server.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tubegen_models::VideoStyle;
use tubegen_script::{
    fallback_script, OpenAiClient, OpenAiConfig, ScriptError, ScriptOutcome, ScriptService,
    TextGenerator,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> OpenAiConfig {
    OpenAiConfig {
        api_key: "sk-test".to_string(),
        base_url: format!("{}/v1", server.uri()),
        model: OpenAiConfig::DEFAULT_MODEL.to_string(),
        timeout: Duration::from_secs(5),
    }
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }
        ]
    })
}

#[tokio::test]
async fn test_complete_sends_chat_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo",
            "temperature": 0.8,
            "max_tokens": 1000,
            "messages": [
                { "role": "system", "content": "system text" },
                { "role": "user", "content": "user text" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Title: A")))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(config_for(&server)).unwrap();
    let text = client.complete("system text", "user text").await.unwrap();

    assert_eq!(text, "Title: A");
}

#[tokio::test]
async fn test_complete_maps_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(config_for(&server)).unwrap();
    let err = client.complete("s", "p").await.unwrap_err();

    match err {
        ScriptError::Api { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_complete_rejects_empty_choices() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(config_for(&server)).unwrap();
    let err = client.complete("s", "p").await.unwrap_err();

    assert!(matches!(err, ScriptError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_service_end_to_end_with_mock_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(
            "शीर्षक: पिरामिड का रहस्य\nविवरण: मिस्र के पिरामिड\nस्क्रिप्ट: नमस्कार! आज पिरामिड की बात।",
        )))
        .mount(&server)
        .await;

    let client: Arc<dyn TextGenerator> = Arc::new(OpenAiClient::new(config_for(&server)).unwrap());
    let service = ScriptService::new(Some(client));

    let outcome = service.generate("पिरामिड", VideoStyle::Educational).await;

    let ScriptOutcome::Generated(content) = outcome else {
        panic!("expected generated content");
    };
    assert_eq!(content.title, "पिरामिड का रहस्य");
    assert_eq!(content.description, "मिस्र के पिरामिड");
    assert_eq!(content.script, "नमस्कार! आज पिरामिड की बात।");
}

#[tokio::test]
async fn test_service_falls_back_when_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client: Arc<dyn TextGenerator> = Arc::new(OpenAiClient::new(config_for(&server)).unwrap());
    let service = ScriptService::new(Some(client));

    let outcome = service.generate("Rust", VideoStyle::Facts).await;

    assert_eq!(outcome, ScriptOutcome::Fallback(fallback_script("Rust")));
}

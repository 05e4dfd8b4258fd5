use std::time::Duration;

use isic_core::{
    classify, ClassificationRequest, ClassifierConfig, ClassifyError, Credential, GeminiClient,
    GenerationError, TextGenerator,
};
use mockito::Matcher;
use serde_json::json;

const MODEL: &str = "gemini-test";
const ENDPOINT: &str = "/v1beta/models/gemini-test:generateContent";
const API_KEY: &str = "AIza-test-key";

fn client_for(server: &mockito::Server) -> GeminiClient {
    let config = ClassifierConfig {
        base_url: server.url(),
        model: MODEL.to_string(),
        timeout: Duration::from_secs(10),
    };
    GeminiClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_generate_sends_key_path_and_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("x-goog-api-key", API_KEY)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "contents": [{"role": "user", "parts": [{"text": "classify this"}]}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Section J"}]},"finishReason":"STOP"}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let text = client
        .generate(&Credential::new(API_KEY), "classify this")
        .await
        .unwrap();

    assert_eq!(text, "Section J");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_classify_returns_provider_text_unchanged() {
    let text = "\n1. Section: J\n2. Division: 62\n3. Class: 6201 - Computer programming activities\n  ";
    let body = json!({"candidates": [{"content": {"parts": [{"text": text}]}}]});

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("x-goog-api-key", API_KEY)
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#""role":"user""#.to_string()),
            Matcher::Regex("Company Name: Tech Corp".to_string()),
            Matcher::Regex("Activity Description: Custom software development".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = classify(
        &client,
        ClassificationRequest::new(API_KEY, "Tech Corp", "Custom software development"),
    )
    .await
    .unwrap();

    assert_eq!(result.result_text, text);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_maps_to_api_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .generate(&Credential::new("bad-key"), "prompt")
        .await
        .unwrap_err();

    match err {
        GenerationError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "API key not valid. Please pass a valid API key. (INVALID_ARGUMENT)");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_quota_failure_reaches_user_as_external_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(429)
        .with_body(r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = classify(&client, ClassificationRequest::new(API_KEY, "Tech Corp", "Software"))
        .await
        .unwrap_err();

    match err {
        ClassifyError::ExternalCallFailed(detail) => {
            assert!(detail.contains("429"));
            assert!(detail.contains("Resource has been exhausted"));
            assert!(!detail.contains(API_KEY));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_success_body_maps_to_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .generate(&Credential::new(API_KEY), "prompt")
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Decode(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_blocked_prompt_maps_to_empty_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .generate(&Credential::new(API_KEY), "prompt")
        .await
        .unwrap_err();

    match err {
        GenerationError::EmptyResponse(reason) => assert!(reason.contains("SAFETY")),
        other => panic!("unexpected error: {other:?}"),
    }
}

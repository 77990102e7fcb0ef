//! HTTP behaviour of the generation client against a mock server.

use std::time::Duration;

use train_ml_client::{GeneratorConfig, HttpVideoGenerator, MlError, VideoGenerator};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpVideoGenerator {
    let config = GeneratorConfig {
        generator_url: server.uri(),
        hosted_url: format!("{}/default", server.uri()),
        finetune_id: "nova-test".to_string(),
        timeout: Some(Duration::from_secs(5)),
    };
    HttpVideoGenerator::new(config).unwrap()
}

#[tokio::test]
async fn test_generate_posts_prompt_and_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/run"))
        .and(body_json(serde_json::json!({
            "finetune_id": "nova-test",
            "prompt": "Previous scenario: x. Now, user action: compress.",
            "num_frames": 75
        })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"mp4-bytes".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let bytes = client_for(&server)
        .generate("Previous scenario: x. Now, user action: compress.", 75)
        .await
        .unwrap();

    assert_eq!(bytes, b"mp4-bytes");
}

#[tokio::test]
async fn test_generate_default_sends_finetune_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/default"))
        .and(query_param("finetune_id", "nova-test"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"combined".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let bytes = client_for(&server).generate_default().await.unwrap();
    assert_eq!(bytes, b"combined");
}

#[tokio::test]
async fn test_error_status_is_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/run"))
        .respond_with(ResponseTemplate::new(503).set_body_string("warming up"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).generate("prompt", 150).await.unwrap_err();
    match err {
        MlError::RequestFailed(msg) => {
            assert!(msg.contains("503"));
            assert!(msg.contains("warming up"));
        }
        other => panic!("expected RequestFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/default"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = client_for(&server).generate_default().await.unwrap_err();
    assert!(matches!(err, MlError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    let err = client.generate("prompt", 150).await.unwrap_err();
    assert!(matches!(err, MlError::Network(_)));
}

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .mount(&server)
        .await;

    assert!(client_for(&server).health_check().await);

    let down = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&down)
        .await;
    assert!(!client_for(&down).health_check().await);
}

//! Integration tests for newsletter draft publishing

use marketbrief::config::PublisherConfig;
use marketbrief::error::PublishError;
use marketbrief::report::Report;
use marketbrief::services::publisher::{BeehiivPublisher, Publisher};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn publisher(server: &MockServer) -> BeehiivPublisher {
    BeehiivPublisher::with_client(
        PublisherConfig {
            api_url: Url::parse(&server.uri()).expect("mock server uri"),
            api_key: "test-key".to_string(),
            publication_id: "pub_123".to_string(),
        },
        reqwest::Client::new(),
    )
}

fn report() -> Report {
    Report {
        title: "Daily Market Movers - 15/03/2024 | Top Movers".to_string(),
        html: "<html><body>movers</body></html>".to_string(),
    }
}

#[tokio::test]
async fn creates_draft_with_bearer_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/posts"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "publication_id": "pub_123",
            "title": "Daily Market Movers - 15/03/2024 | Top Movers",
            "status": "draft",
            "send_at": null
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "data": { "id": "post_42" } })))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = publisher(&server).publish_draft(&report()).await.expect("draft created");
    assert_eq!(receipt.id, "post_42");
}

#[tokio::test]
async fn missing_post_id_is_reported_as_na() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .mount(&server)
        .await;

    let receipt = publisher(&server).publish_draft(&report()).await.expect("draft created");
    assert_eq!(receipt.id, "N/A");
}

#[tokio::test]
async fn retries_transient_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/posts"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/posts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "data": { "id": "post_7" } })))
        .mount(&server)
        .await;

    let receipt = publisher(&server).publish_draft(&report()).await.expect("draft created");
    assert_eq!(receipt.id, "post_7");
    assert_eq!(server.received_requests().await.expect("requests").len(), 2);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/posts"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad publication"))
        .expect(1)
        .mount(&server)
        .await;

    let err = publisher(&server).publish_draft(&report()).await.unwrap_err();
    match err {
        PublishError::Status { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "bad publication");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn gives_up_after_max_retries() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/posts"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let err = publisher(&server)
        .with_max_retries(1)
        .publish_draft(&report())
        .await
        .unwrap_err();
    assert!(err.is_transient());
}

use reqwest::Method;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_config::AppConfig;
use shared_feed::ehr::EhrFeedClient;

fn client_for(mock_server: &MockServer) -> EhrFeedClient {
    EhrFeedClient::new(&AppConfig {
        ehr_feed_base_url: mock_server.uri(),
        ehr_feed_api_key: "test-api-key".to_string(),
        practice_timezone: "America/Los_Angeles".to_string(),
    })
}

#[tokio::test]
async fn test_request_sends_api_key_and_parses_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/schedule"))
        .and(query_param("start", "2024-06-10"))
        .and(query_param("end", "2024-06-14"))
        .and(header("x-api-key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "schedule": {},
            "practitioner_names": { "p1": "Jane Doe" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body: Value = client
        .request(Method::GET, "/schedule?start=2024-06-10&end=2024-06-14")
        .await
        .unwrap();

    assert_eq!(body["practitioner_names"]["p1"], "Jane Doe");
}

#[tokio::test]
async fn test_auth_failures_are_descriptive() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/schedule"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .request::<Value>(Method::GET, "/schedule")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Authentication error"));
}

#[tokio::test]
async fn test_missing_resource_is_descriptive() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such route"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .request::<Value>(Method::GET, "/nope")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Resource not found"));
}

#[tokio::test]
async fn test_server_errors_carry_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/schedule"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .request::<Value>(Method::GET, "/schedule")
        .await
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("503"));
    assert!(msg.contains("maintenance"));
}

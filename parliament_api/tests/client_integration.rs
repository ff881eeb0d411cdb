use parliament_api::types::{ChatRequest, ContactMessage, Engagement};
use std::time::Duration;

use parliament_api::{
    BillQuery, Client, ClientConfig, Error, MpQuery, Operation, PageQuery, Query,
};
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

async fn client_for(server: &MockServer) -> Client {
    Client::with_base_url(&format!("{}/api", server.uri())).unwrap()
}

#[tokio::test]
async fn get_bills_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/trackers/bills/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("bills.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let page = client.get_bills(&BillQuery::default()).await.unwrap();

    assert_eq!(page.count, 42);
    assert!(page.has_next());
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].readings.len(), 2);
}

#[tokio::test]
async fn list_requests_echo_page_and_size() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/trackers/mps/"))
        .and(query_param("page", "3"))
        .and(query_param("page_size", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("mps.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let query = MpQuery::default()
        .with_page(3)
        .with_page_size(7)
        .with_party("")
        .with_district("  ");
    client.get_mps(&query).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let pairs: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("page".to_string(), "3".to_string()),
            ("page_size".to_string(), "7".to_string()),
        ]
    );
}

#[tokio::test]
async fn server_error_names_the_operation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/news/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client
        .get_news(&Default::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::RequestFailed(Operation::FetchNews)));
    assert_eq!(err.to_string(), "Failed to fetch news");
}

#[tokio::test]
async fn client_error_is_not_distinguished_from_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/trackers/bills/"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"detail": "bad page"}"#))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.get_bills(&BillQuery::default()).await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed(Operation::FetchBills)));
}

#[tokio::test]
async fn missing_detail_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/trackers/mps/999/"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"detail": "Not found."}"#))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.get_mp(999).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.operation(), Some(Operation::FetchMp));
}

#[tokio::test]
async fn malformed_json_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/resources/loans/11/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.get_loan(11).await.unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidResponse {
            operation: Operation::FetchLoan,
            ..
        }
    ));
}

#[tokio::test]
async fn response_failing_validation_is_rejected() {
    let mock_server = MockServer::start().await;

    let mut committee: serde_json::Value =
        serde_json::from_str(&load_fixture("committee.json")).unwrap();
    committee["begin_date"] = "2025-01-01".into();
    committee["end_date"] = "2020-01-01".into();

    Mock::given(method("GET"))
        .and(path("/api/resources/committees/3/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(committee))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.get_committee(3).await.unwrap_err();
    match err {
        Error::InvalidResponse { reason, .. } => assert!(reason.contains("term begins")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn like_returns_updated_counter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/trackers/bills/17/like/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"likes": 13})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    assert_eq!(client.like_bill(17).await.unwrap(), 13);
    // Not idempotent: a second call is a second POST.
    assert_eq!(client.engage_bill(17, Engagement::Like).await.unwrap(), 13);
}

#[tokio::test]
async fn share_without_counter_is_invalid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/trackers/bills/17/share/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.share_bill(17).await.unwrap_err();
    assert_eq!(err.operation(), Some(Operation::ShareBill));
}

#[tokio::test]
async fn engagement_404_is_a_plain_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/trackers/bills/5/comment/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.comment_bill(5).await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed(Operation::CommentBill)));
}

#[tokio::test]
async fn chat_sends_query_without_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chatbot/"))
        .and(body_json(serde_json::json!({"query": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "answer": "hi",
            "document_name": "Standing Orders",
            "document_url": "/media/so.pdf",
            "session_id": "abc"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let reply = client.chat(&ChatRequest::new("hello", None)).await.unwrap();
    assert_eq!(reply.answer, "hi");
    assert_eq!(reply.session_id, "abc");
    assert_eq!(reply.document_name.as_deref(), Some("Standing Orders"));
}

#[tokio::test]
async fn contact_returns_confirmation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contact/"))
        .and(body_partial_json(serde_json::json!({"subject": "Hello"})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!({"message": "Thank you for contacting us."})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let message = ContactMessage {
        name: "Ada".into(),
        email: "ada@example.org".into(),
        subject: "Hello".into(),
        message: "Question about a bill".into(),
    };
    let confirmation = client.submit_contact(&message).await.unwrap();
    assert_eq!(confirmation, "Thank you for contacting us.");
}

#[tokio::test]
async fn unreachable_backend_is_request_failed() {
    // Nothing listens on port 9 (discard) on test hosts.
    let client = Client::with_base_url("http://127.0.0.1:9/api").unwrap();
    let err = client.get_hot_items(&PageQuery::default()).await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed(Operation::FetchHotItems)));
}

#[tokio::test]
async fn slow_backend_times_out_as_request_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/trackers/mps/4/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": 4, "first_name": "Grace", "last_name": "Banda",
                    "party": "UTM", "constituency": "Lilongwe City Centre", "district": "Lilongwe"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(ClientConfig {
        base_url: format!("{}/api", mock_server.uri()),
        timeout: Duration::from_millis(200),
    })
    .unwrap();

    let err = client.get_mp(4).await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed(Operation::FetchMp)));
    assert!(!err.is_not_found());
    assert_eq!(err.to_string(), "Failed to fetch MP");
}

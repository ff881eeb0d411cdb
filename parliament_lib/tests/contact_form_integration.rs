use parliament_lib::{Client, ContactForm, FormStatus};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::with_base_url(&format!("{}/api", server.uri())).unwrap()
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.name = "Ada Phiri".to_string();
    form.email = "ada@example.org".to_string();
    form.subject = "Loan documents".to_string();
    form.message = "Where is the 2023 energy loan agreement?".to_string();
    form
}

#[tokio::test]
async fn success_resets_fields_and_shows_confirmation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact/"))
        .and(body_json(json!({
            "name": "Ada Phiri",
            "email": "ada@example.org",
            "subject": "Loan documents",
            "message": "Where is the 2023 energy loan agreement?"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Message sent successfully"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut form = filled_form();
    let confirmation = form.submit(&client).await.unwrap();

    assert_eq!(confirmation, "Message sent successfully");
    assert!(form.is_blank());
    assert_eq!(
        form.status(),
        &FormStatus::Sent("Message sent successfully".to_string())
    );
}

#[tokio::test]
async fn backend_failure_keeps_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"email": ["Enter a valid email address."]})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut form = filled_form();
    assert!(form.submit(&client).await.is_err());

    assert_eq!(form.name, "Ada Phiri");
    assert_eq!(form.email, "ada@example.org");
    assert_eq!(form.subject, "Loan documents");
    assert!(form.message.starts_with("Where is"));
    assert_eq!(
        form.status(),
        &FormStatus::Failed("Failed to send message".to_string())
    );
}

#[tokio::test]
async fn invalid_email_is_caught_before_sending() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let mut form = filled_form();
    form.email = "not-an-email".to_string();
    assert!(form.submit(&client).await.is_err());

    assert!(server.received_requests().await.unwrap().is_empty());
    assert_eq!(form.email, "not-an-email");
    match form.status() {
        FormStatus::Failed(msg) => assert!(msg.contains("not a valid email")),
        other => panic!("unexpected status {other:?}"),
    }
}

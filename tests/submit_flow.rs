//! Integration tests for the publish flow: validate, submit, classify.
//!
//! Each test runs against its own wiremock server. The guarded flow mirrors
//! what the compose view does on publish: local validation first, then
//! exactly one POST, then outcome classification. Tests that fail validation
//! assert the server saw no request at all.

use pretty_assertions::assert_eq;
use quill::draft::{Draft, CATEGORIES, MAX_CATEGORIES};
use quill::submit::{submit, Outcome, SubmitError};
use quill::validate::validate;
use secrecy::SecretString;
use wiremock::matchers::{body_json_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn complete_draft() -> Draft {
    let mut draft = Draft::new(Some("Jane Doe"));
    draft.title = "A Week in the Alps".into();
    draft.image_link = "https://images.example.com/alps.webp".into();
    draft.description = "Trains, trails, and too much cheese.".into();
    draft.toggle_category("Travel");
    draft.toggle_category("Nature");
    draft
}

fn credential() -> SecretString {
    SecretString::from("integration-token")
}

/// The publish flow as the UI runs it: no request unless validation passes.
async fn guarded_submit(
    client: &reqwest::Client,
    base_url: &str,
    draft: &Draft,
) -> Option<Result<Outcome, SubmitError>> {
    if validate(draft).is_err() {
        return None;
    }
    Some(submit(client, base_url, &credential(), draft).await)
}

// ============================================================================
// Happy Path
// ============================================================================

#[tokio::test]
async fn test_valid_draft_posts_once_and_is_accepted() {
    let draft = complete_draft();
    let expected_body = serde_json::to_string(&draft).unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts/"))
        .and(header("access_token", "Bearer integration-token"))
        .and(body_json_string(&expected_body))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::new();
    let result = guarded_submit(&client, &mock_server.uri(), &draft).await;

    assert_eq!(result.unwrap().unwrap(), Outcome::Accepted);
}

#[tokio::test]
async fn test_wire_body_uses_camel_case_field_names() {
    let draft = complete_draft();
    let body = serde_json::to_value(&draft).unwrap();

    assert!(body.get("authorName").is_some());
    assert!(body.get("imageLink").is_some());
    assert!(body.get("isFeaturedPost").is_some());
    assert!(body.get("author_name").is_none());
    assert_eq!(body["categories"], serde_json::json!(["Travel", "Nature"]));
}

// ============================================================================
// Validation Gate
// ============================================================================

#[tokio::test]
async fn test_incomplete_draft_sends_no_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut draft = complete_draft();
    draft.title.clear();

    let client = reqwest::Client::new();
    let result = guarded_submit(&client, &mock_server.uri(), &draft).await;

    assert!(result.is_none());
    // expect(0) verified on mock_server drop
}

#[tokio::test]
async fn test_overfull_categories_send_no_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    // The toggle API caps at three, so force the invalid state directly the
    // way an outside mutation would.
    let mut draft = complete_draft();
    draft.categories = CATEGORIES
        .iter()
        .take(MAX_CATEGORIES + 1)
        .map(|s| s.to_string())
        .collect();

    let err = validate(&draft).unwrap_err();
    assert_eq!(err.to_string(), "Select up to three categories");

    let client = reqwest::Client::new();
    assert!(guarded_submit(&client, &mock_server.uri(), &draft)
        .await
        .is_none());
}

#[tokio::test]
async fn test_whitespace_only_fields_send_no_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut draft = complete_draft();
    draft.description = "   \n  ".into();

    let client = reqwest::Client::new();
    assert!(guarded_submit(&client, &mock_server.uri(), &draft)
        .await
        .is_none());
}

// ============================================================================
// Outcome Classification
// ============================================================================

#[tokio::test]
async fn test_403_classifies_as_auth_expired() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::new();
    let result = guarded_submit(&client, &mock_server.uri(), &complete_draft()).await;

    assert_eq!(result.unwrap().unwrap(), Outcome::AuthExpired);
}

#[tokio::test]
async fn test_401_classifies_as_unauthorized() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::new();
    let result = guarded_submit(&client, &mock_server.uri(), &complete_draft()).await;

    assert_eq!(result.unwrap().unwrap(), Outcome::Unauthorized);
}

#[tokio::test]
async fn test_server_rejection_carries_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(422).set_body_string(r#"{"message":"title already taken"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::new();
    let result = guarded_submit(&client, &mock_server.uri(), &complete_draft()).await;

    assert_eq!(
        result.unwrap().unwrap(),
        Outcome::Rejected {
            status: 422,
            message: "title already taken".into()
        }
    );
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    let client = reqwest::Client::new();
    let result = guarded_submit(&client, "http://127.0.0.1:1", &complete_draft()).await;

    assert!(matches!(result, Some(Err(SubmitError::Network(_)))));
}

//! Request-contract tests for the REST wrappers
//!
//! Each wrapper issues exactly one request with a fixed method, path and
//! encoding, attaches the bearer token where required, and normalizes
//! backend errors. These tests pin that contract against a mock backend.

mod helpers;

use assert_matches::assert_matches;
use base64ct::{Base64, Encoding};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use eventpass::models::{Credentials, EventPatch};
use eventpass::services::ServiceFactory;
use eventpass::session::SessionStore;
use eventpass::{ApiErrorKind, EventPassError};

use helpers::backend_mock::{event_json, BackendMock, TEST_TOKEN};

fn logged_in_factory(mock: &BackendMock, dir: &TempDir) -> ServiceFactory {
    let settings = mock.settings(dir);
    let store = mock.logged_in_store(&settings);
    ServiceFactory::new(&settings, store).unwrap()
}

#[tokio::test]
async fn test_login_posts_the_password_grant_form() {
    let mock = BackendMock::new().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("username=ivanovii25"))
        .and(body_string_contains("password=secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "issued-token",
            "token_type": "bearer",
        })))
        .expect(1)
        .mount(&mock.server)
        .await;

    let services = logged_in_factory(&mock, &dir);
    let token = services
        .auth_service
        .login("ivanovii25", "secret")
        .await
        .unwrap();
    assert_eq!(token.access_token, "issued-token");
}

#[tokio::test]
async fn test_login_failure_surfaces_the_backend_detail() {
    let mock = BackendMock::new().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Incorrect username or password",
        })))
        .mount(&mock.server)
        .await;

    let services = logged_in_factory(&mock, &dir);
    let err = services
        .auth_service
        .login("ivanovii25", "wrong")
        .await
        .unwrap_err();
    assert_matches!(err, EventPassError::Api(api) => {
        assert_eq!(api.kind, ApiErrorKind::Unauthenticated);
        assert_eq!(api.message, "Incorrect username or password");
    });
}

#[tokio::test]
async fn test_register_posts_json_credentials() {
    let mock = BackendMock::new().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({"username": "newcomer", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "User registered successfully",
            "user_id": 12,
        })))
        .expect(1)
        .mount(&mock.server)
        .await;

    let services = logged_in_factory(&mock, &dir);
    let registered = services
        .auth_service
        .register(&Credentials {
            username: "newcomer".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(registered.user_id, 12);
}

#[tokio::test]
async fn test_protected_wrappers_attach_the_bearer_token() {
    let mock = BackendMock::new().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/events/"))
        .and(header("Authorization", format!("Bearer {TEST_TOKEN}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([event_json(7, "Open air", "14.08.2026", Some(18))])),
        )
        .expect(1)
        .mount(&mock.server)
        .await;

    let services = logged_in_factory(&mock, &dir);
    let events = services.event_service.list().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].participants.len(), 1);
}

#[tokio::test]
async fn test_missing_token_fails_fast_without_a_request() {
    let mock = BackendMock::new().await;
    let dir = TempDir::new().unwrap();
    mock.expect_no_request("GET", "/events/").await;

    let settings = mock.settings(&dir);
    let store = SessionStore::at_path(&settings.session.token_path);
    let services = ServiceFactory::new(&settings, store).unwrap();

    let err = services.event_service.list().await.unwrap_err();
    assert_matches!(err, EventPassError::NoSession);
}

#[tokio::test]
async fn test_validation_detail_array_is_joined() {
    let mock = BackendMock::new().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("PATCH"))
        .and(path("/events/7"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                {"loc": ["body", "date"], "msg": "bad date", "type": "value_error"},
                {"loc": ["body", "time"], "msg": "bad time", "type": "value_error"},
            ],
        })))
        .mount(&mock.server)
        .await;

    let services = logged_in_factory(&mock, &dir);
    let patch = EventPatch {
        date: Some("garbage".to_string()),
        ..EventPatch::default()
    };
    let err = services.event_service.update(7, &patch).await.unwrap_err();
    assert_matches!(err, EventPassError::Api(api) => {
        assert_eq!(api.kind, ApiErrorKind::Validation);
        assert_eq!(api.message, "bad date, bad time");
    });
}

#[tokio::test]
async fn test_update_sends_only_the_set_fields() {
    let mock = BackendMock::new().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("PATCH"))
        .and(path("/events/7"))
        .and(body_json(json!({"place": "Main hall"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Event updated",
            "event": event_json(7, "Open air", "14.08.2026", Some(18)),
        })))
        .expect(1)
        .mount(&mock.server)
        .await;

    let services = logged_in_factory(&mock, &dir);
    let patch = EventPatch {
        place: Some("Main hall".to_string()),
        ..EventPatch::default()
    };
    let reply = services.event_service.update(7, &patch).await.unwrap();
    assert_eq!(reply.message, "Event updated");
    assert_eq!(reply.event.id, 7);
}

#[tokio::test]
async fn test_missing_event_maps_to_not_found() {
    let mock = BackendMock::new().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/events/99"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Event not found"})),
        )
        .mount(&mock.server)
        .await;

    let services = logged_in_factory(&mock, &dir);
    let err = services.event_service.get(99).await.unwrap_err();
    assert_matches!(err, EventPassError::Api(api) => {
        assert_eq!(api.kind, ApiErrorKind::NotFound);
        assert_eq!(api.message, "Event not found");
    });
}

#[tokio::test]
async fn test_qr_code_is_reencoded_to_base64() {
    let mock = BackendMock::new().await;
    let dir = TempDir::new().unwrap();
    let png_bytes = b"\x89PNG\r\n\x1a\nfake-qr-payload".to_vec();

    Mock::given(method("GET"))
        .and(path("/events/7/qrcode"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(png_bytes.clone(), "image/png"))
        .expect(1)
        .mount(&mock.server)
        .await;

    let services = logged_in_factory(&mock, &dir);
    let encoded = services.ticket_service.qr_code(7).await.unwrap();
    assert_eq!(Base64::decode_vec(&encoded).unwrap(), png_bytes);
}

#[tokio::test]
async fn test_second_unregister_surfaces_the_backend_error() {
    let mock = BackendMock::new().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("DELETE"))
        .and(path("/events/7/unregister"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "ivanovii25 unregistered",
        })))
        .up_to_n_times(1)
        .mount(&mock.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/events/7/unregister"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "User is not registered for this event",
        })))
        .mount(&mock.server)
        .await;

    let services = logged_in_factory(&mock, &dir);
    let first = services.ticket_service.unregister(7).await.unwrap();
    assert_eq!(first.message, "ivanovii25 unregistered");

    let second = services.ticket_service.unregister(7).await.unwrap_err();
    assert_matches!(second, EventPassError::Api(api) => {
        assert_eq!(api.kind, ApiErrorKind::Validation);
        assert_eq!(api.message, "User is not registered for this event");
    });
}

#[tokio::test]
async fn test_parse_image_accepts_a_string_encoded_reply() {
    let mock = BackendMock::new().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/events/parse_image"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!("{\"title\": \"Jazz night\", \"place\": \"Cellar\"}")),
        )
        .mount(&mock.server)
        .await;

    let services = logged_in_factory(&mock, &dir);
    let prefill = services
        .event_service
        .parse_image("poster.png", "image/png", b"png".to_vec())
        .await
        .unwrap();
    assert_eq!(prefill.title.as_deref(), Some("Jazz night"));
    assert_eq!(prefill.place.as_deref(), Some("Cellar"));
}

#[tokio::test]
async fn test_register_for_event_posts_with_empty_body() {
    let mock = BackendMock::new().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/events/7/register"))
        .and(header("Authorization", format!("Bearer {TEST_TOKEN}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "ivanovii25 registered for 'Open air'",
        })))
        .expect(1)
        .mount(&mock.server)
        .await;

    let services = logged_in_factory(&mock, &dir);
    let reply = services.ticket_service.register(7).await.unwrap();
    assert!(reply.message.contains("registered"));
}

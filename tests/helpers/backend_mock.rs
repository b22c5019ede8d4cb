//! Mock EventPass backend for testing
//!
//! This module provides a mock HTTP server that simulates the backend
//! REST API for testing purposes. It uses wiremock to create
//! configurable mock responses and to assert which requests were (or
//! were not) issued.

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use eventpass::config::Settings;
use eventpass::session::SessionStore;

pub const TEST_TOKEN: &str = "test-session-token";

/// Mock backend server for testing
pub struct BackendMock {
    pub server: MockServer,
}

impl BackendMock {
    /// Create a new mock backend server
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Settings pointing the client at this mock server
    pub fn settings(&self, dir: &tempfile::TempDir) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = self.server.uri();
        settings.api.timeout_seconds = 5;
        settings.session.token_path = dir
            .path()
            .join("token")
            .to_string_lossy()
            .into_owned();
        settings.ui.qr_dir = dir.path().join("qr").to_string_lossy().into_owned();
        settings.ui.debounce_ms = 20;
        settings
    }

    /// A session store matching `settings`, preloaded with the test token
    pub fn logged_in_store(&self, settings: &Settings) -> SessionStore {
        let store = SessionStore::at_path(&settings.session.token_path);
        store.save_token(TEST_TOKEN).unwrap();
        store
    }

    /// Mount a 200 response for the current-user endpoint
    pub async fn mock_profile(&self, username: &str, role: &str, registered: Value) {
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .and(header("Authorization", format!("Bearer {TEST_TOKEN}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 3,
                "username": username,
                "role": role,
                "registered_events": registered,
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a 401 rejection for the current-user endpoint
    pub async fn mock_profile_unauthorized(&self) {
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "detail": "Could not validate credentials",
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a 200 response for the event list
    pub async fn mock_events_list(&self, events: Value) {
        Mock::given(method("GET"))
            .and(path("/events/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(events))
            .mount(&self.server)
            .await;
    }

    /// Assert that an endpoint is never called
    pub async fn expect_no_request(&self, http_method: &str, endpoint: &str) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }
}

/// Build an event JSON object the way the list endpoint shapes it
pub fn event_json(id: i64, title: &str, date: &str, age_limit: Option<i64>) -> Value {
    json!({
        "id": id,
        "title": title,
        "date": date,
        "time": "19:00",
        "place": "Main hall",
        "capacity": 100,
        "description": null,
        "age_limit": age_limit,
        "event_type": null,
        "image_url": null,
        "registration_count": 1,
        "participants": [{"id": 1, "username": "ivanovii25"}],
    })
}

/// Build a registered-event summary the way the profile embeds it
pub fn summary_json(id: i64, title: &str, date: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "date": date,
        "time": "19:00",
        "place": "Main hall",
    })
}

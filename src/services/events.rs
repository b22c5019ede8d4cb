//! Event API wrappers
//!
//! Listing and fetching are available to every authenticated user;
//! create, update, delete and poster parsing are admin operations. The
//! backend enforces that, the client only reflects the resulting errors.

use serde::Deserialize;
use tracing::debug;

use crate::models::{ApiMessage, Event, EventDraft, EventPatch, EventPrefill};
use crate::services::http::ApiClient;
use crate::utils::errors::Result;

/// Reply to an event update
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReply {
    pub message: String,
    pub event: Event,
}

/// Event catalog and admin management
#[derive(Debug, Clone)]
pub struct EventService {
    client: ApiClient,
}

impl EventService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the full event list, participants included
    pub async fn list(&self) -> Result<Vec<Event>> {
        self.client.get("/events/").await
    }

    /// Fetch one event by id
    pub async fn get(&self, event_id: i64) -> Result<Event> {
        self.client.get(&format!("/events/{event_id}")).await
    }

    /// Create an event (admin)
    pub async fn create(&self, draft: &EventDraft) -> Result<Event> {
        debug!(title = %draft.title, "Creating event");
        self.client.post("/events/create", draft).await
    }

    /// Partially update an event (admin); unset fields are not sent
    pub async fn update(&self, event_id: i64, patch: &EventPatch) -> Result<UpdateReply> {
        debug!(event_id = event_id, "Updating event");
        self.client.patch(&format!("/events/{event_id}"), patch).await
    }

    /// Delete an event (admin)
    pub async fn delete(&self, event_id: i64) -> Result<ApiMessage> {
        debug!(event_id = event_id, "Deleting event");
        self.client.delete(&format!("/events/{event_id}")).await
    }

    /// Have the backend extract event fields from a poster image (admin)
    ///
    /// The parser sometimes replies with a JSON object and sometimes with
    /// a JSON string that itself encodes the object; both are accepted.
    pub async fn parse_image(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<EventPrefill> {
        debug!(file_name = file_name, "Parsing event poster");
        let raw: serde_json::Value = self
            .client
            .post_file("/events/parse_image", file_name, mime, bytes)
            .await?;

        let prefill = match raw {
            serde_json::Value::String(encoded) => serde_json::from_str(&encoded)?,
            value => serde_json::from_value(value)?,
        };
        Ok(prefill)
    }
}

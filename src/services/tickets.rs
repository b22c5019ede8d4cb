//! Ticket API wrappers
//!
//! Joining and leaving events, and fetching the per-registration QR code.
//! The QR endpoint answers with a binary PNG; the wrapper re-encodes it to
//! base64 so callers handle one opaque string, matching how the rest of
//! the client treats QR codes: fetched and displayed, never generated.

use base64ct::{Base64, Encoding};
use tracing::debug;

use crate::models::ApiMessage;
use crate::services::http::ApiClient;
use crate::utils::errors::Result;

/// Event registration tickets
#[derive(Debug, Clone)]
pub struct TicketService {
    client: ApiClient,
}

impl TicketService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Register the current user for an event
    pub async fn register(&self, event_id: i64) -> Result<ApiMessage> {
        debug!(event_id = event_id, "Registering for event");
        self.client
            .post_empty(&format!("/events/{event_id}/register"))
            .await
    }

    /// Cancel the current user's registration
    pub async fn unregister(&self, event_id: i64) -> Result<ApiMessage> {
        debug!(event_id = event_id, "Unregistering from event");
        self.client
            .delete(&format!("/events/{event_id}/unregister"))
            .await
    }

    /// Fetch the registration QR code as a base64-encoded PNG
    pub async fn qr_code(&self, event_id: i64) -> Result<String> {
        debug!(event_id = event_id, "Fetching ticket QR code");
        let bytes = self
            .client
            .get_bytes(&format!("/events/{event_id}/qrcode"))
            .await?;
        Ok(Base64::encode_string(&bytes))
    }
}

//! Event models
//!
//! Dates and times travel as plain text (`dd.mm.yyyy` / `hh:mm`); the
//! backend validates the formats, the client only parses dates where the
//! list pages need ordering and range filtering.

use serde::{Deserialize, Serialize};

/// An event as returned by the backend
///
/// `registration_count` and `participants` are only populated by some
/// endpoints (the create/update replies omit the count, only the list
/// endpoint embeds participants).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub time: String,
    pub place: String,
    pub capacity: i64,
    pub description: Option<String>,
    pub age_limit: Option<i64>,
    pub event_type: Option<String>,
    pub image_url: Option<String>,
    pub registration_count: Option<i64>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Event {
    /// Derived display state: every seat is taken
    ///
    /// The client only reflects this, the backend enforces it.
    pub fn sold_out(&self) -> bool {
        self.registration_count.unwrap_or(0) >= self.capacity
    }
}

/// A participant entry embedded in the event list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: Option<i64>,
    pub username: String,
}

/// The denormalized event subset embedded in the user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub time: String,
    pub place: String,
}

/// Payload for creating an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub time: String,
    pub place: String,
    pub capacity: i64,
    pub description: Option<String>,
    pub age_limit: Option<i64>,
    pub event_type: Option<String>,
    pub image_url: Option<String>,
}

/// Partial payload for updating an event; unset fields are not sent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

impl EventPatch {
    /// Whether the patch carries any field at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.place.is_none()
            && self.description.is_none()
            && self.age_limit.is_none()
            && self.event_type.is_none()
    }
}

/// Partial event data recovered from a poster image by the backend parser
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPrefill {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub capacity: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub age_limit: Option<i64>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserialization_from_list_endpoint() {
        let json = r#"{
            "id": 7,
            "title": "Open air",
            "date": "14.08.2026",
            "time": "19:30",
            "place": "Riverside park",
            "capacity": 2,
            "description": null,
            "age_limit": 18,
            "event_type": "concert",
            "image_url": null,
            "registration_count": 2,
            "participants": [{"id": 1, "username": "ivanovii25"}, {"id": 4, "username": "petrov"}]
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.participants.len(), 2);
        assert!(event.sold_out());
    }

    #[test]
    fn test_event_without_count_or_participants() {
        // the create reply carries neither field
        let json = r#"{
            "id": 8,
            "title": "Swing workshop",
            "date": "01.09.2026",
            "time": "18:00",
            "place": "Studio 3",
            "capacity": 20
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.participants.is_empty());
        assert!(!event.sold_out());
    }

    #[test]
    fn test_patch_skips_unset_fields() {
        let patch = EventPatch {
            place: Some("Main hall".to_string()),
            ..EventPatch::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"place":"Main hall"}"#);
        assert!(!patch.is_empty());
        assert!(EventPatch::default().is_empty());
    }

    #[test]
    fn test_prefill_tolerates_partial_payload() {
        let prefill: EventPrefill = serde_json::from_str(r#"{"title": "Jazz night", "place": "Cellar"}"#).unwrap();
        assert_eq!(prefill.title.as_deref(), Some("Jazz night"));
        assert!(prefill.date.is_none());
    }
}

//! Shared create/edit event form
//!
//! One form backs both admin flows: creating an event (optionally
//! prefilled from a parsed poster) and editing an existing one. Title,
//! date, time, place and capacity are required; submission is blocked
//! with a validation message before any network call when one is missing.
//! Date and time formats are checked locally with the same patterns the
//! backend enforces.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Event, EventDraft, EventPatch, EventPrefill};

fn date_format() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("literal pattern"))
}

fn time_format() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:[01]\d|2[0-3]):[0-5]\d$").expect("literal pattern"))
}

/// Form state for the create and edit event flows
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub place: Option<String>,
    pub capacity: Option<i64>,
    pub description: Option<String>,
    pub age_limit: Option<i64>,
    pub event_type: Option<String>,
    pub image_url: Option<String>,
}

impl EventForm {
    /// Empty form for the create flow
    pub fn new() -> Self {
        Self::default()
    }

    /// Form initialized from an existing event, for the edit flow
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: Some(event.title.clone()),
            date: Some(event.date.clone()),
            time: Some(event.time.clone()),
            place: Some(event.place.clone()),
            capacity: Some(event.capacity),
            description: event.description.clone(),
            age_limit: event.age_limit,
            event_type: event.event_type.clone(),
            image_url: event.image_url.clone(),
        }
    }

    /// Merge fields recovered from a parsed poster; parsed values win
    pub fn apply_prefill(&mut self, prefill: EventPrefill) {
        if prefill.title.is_some() {
            self.title = prefill.title;
        }
        if prefill.date.is_some() {
            self.date = prefill.date;
        }
        if prefill.time.is_some() {
            self.time = prefill.time;
        }
        if prefill.place.is_some() {
            self.place = prefill.place;
        }
        if prefill.capacity.is_some() {
            self.capacity = prefill.capacity;
        }
        if prefill.description.is_some() {
            self.description = prefill.description;
        }
        if prefill.age_limit.is_some() {
            self.age_limit = prefill.age_limit;
        }
        if prefill.event_type.is_some() {
            self.event_type = prefill.event_type;
        }
        if prefill.image_url.is_some() {
            self.image_url = prefill.image_url;
        }
    }

    /// Gate the submission: every required field present, formats sane
    ///
    /// Returns the ready-to-send payload, or the validation message shown
    /// instead of issuing a request.
    pub fn validate(&self) -> Result<EventDraft, String> {
        let mut missing = Vec::new();
        if self.title.as_deref().map_or(true, str::is_empty) {
            missing.push("title");
        }
        if self.date.as_deref().map_or(true, str::is_empty) {
            missing.push("date");
        }
        if self.time.as_deref().map_or(true, str::is_empty) {
            missing.push("time");
        }
        if self.place.as_deref().map_or(true, str::is_empty) {
            missing.push("place");
        }
        if self.capacity.is_none() {
            missing.push("capacity");
        }
        if !missing.is_empty() {
            return Err(format!(
                "Please fill in all required fields: {}",
                missing.join(", ")
            ));
        }

        let date = self.date.clone().unwrap_or_default();
        if !date_format().is_match(&date) {
            return Err("Date must look like dd.mm.yyyy (for example 31.12.2026)".to_string());
        }

        let time = self.time.clone().unwrap_or_default();
        if !time_format().is_match(&time) {
            return Err("Time must look like hh:mm (for example 19:30)".to_string());
        }

        Ok(EventDraft {
            title: self.title.clone().unwrap_or_default(),
            date,
            time,
            place: self.place.clone().unwrap_or_default(),
            capacity: self.capacity.unwrap_or_default(),
            description: self.description.clone(),
            age_limit: self.age_limit,
            event_type: self.event_type.clone(),
            image_url: self.image_url.clone(),
        })
    }

    /// The edit flow submits the whole form as a partial update
    pub fn validate_as_patch(&self) -> Result<EventPatch, String> {
        let draft = self.validate()?;
        Ok(EventPatch {
            title: Some(draft.title),
            date: Some(draft.date),
            time: Some(draft.time),
            place: Some(draft.place),
            description: draft.description,
            age_limit: draft.age_limit,
            event_type: draft.event_type,
        })
    }
}

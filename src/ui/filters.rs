//! Client-side event list filtering
//!
//! Filters are recomputed over the full fetched event set; nothing is
//! cached between page loads. Event dates travel as `dd.mm.yyyy` text and
//! are parsed with that fixed format only; a malformed date silently
//! fails every date comparison instead of raising.

use chrono::NaiveDate;

use crate::models::Event;

/// Parse the backend's `dd.mm.yyyy` date text
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%d.%m.%Y").ok()
}

/// Whether a date string falls on or after `today`
///
/// Malformed dates are neither upcoming nor past.
pub fn is_upcoming(raw: &str, today: NaiveDate) -> bool {
    parse_event_date(raw).is_some_and(|date| date >= today)
}

/// Whether a date string falls strictly before `today`
pub fn is_past(raw: &str, today: NaiveDate) -> bool {
    parse_event_date(raw).is_some_and(|date| date < today)
}

/// In-memory predicates over the fetched event list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Keep events whose age limit is defined and at most this value
    pub max_age: Option<i64>,
    /// Case-insensitive substring match on the title; empty matches all
    pub query: String,
    /// Inclusive lower bound on the event date
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the event date
    pub to: Option<NaiveDate>,
}

impl EventFilter {
    pub fn is_empty(&self) -> bool {
        self.max_age.is_none() && self.query.is_empty() && self.from.is_none() && self.to.is_none()
    }

    /// Whether one event passes every active predicate
    pub fn matches(&self, event: &Event) -> bool {
        let matches_age = match self.max_age {
            None => true,
            Some(threshold) => event.age_limit.is_some_and(|limit| limit <= threshold),
        };

        let matches_query = self.query.is_empty()
            || event
                .title
                .to_lowercase()
                .contains(&self.query.to_lowercase());

        let date = parse_event_date(&event.date);
        let matches_from = match self.from {
            None => true,
            Some(from) => date.is_some_and(|d| d >= from),
        };
        let matches_to = match self.to {
            None => true,
            Some(to) => date.is_some_and(|d| d <= to),
        };

        matches_age && matches_query && matches_from && matches_to
    }

    /// Filter the full set down to the matching events
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|event| self.matches(event)).collect()
    }
}

//! Data models module
//!
//! This module contains the wire types transferred to and from the
//! EventPass backend. The backend is authoritative for all of them; the
//! client fetches fresh copies per page and never caches across pages.

pub mod auth;
pub mod event;
pub mod user;

// Re-export commonly used models
pub use auth::{ApiMessage, Credentials, Registered, TokenResponse};
pub use event::{Event, EventDraft, EventPatch, EventPrefill, EventSummary, Participant};
pub use user::{Role, UserProfile};

//! EventPass terminal client
//!
//! A terminal client for the EventPass event registration service.
//! This library provides the session store, the REST request wrappers for
//! the backend API (auth, events, tickets, users), the session gate that
//! protects pages, and the terminal pages themselves.

pub mod cli;
pub mod config;
pub mod models;
pub mod services;
pub mod session;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ApiError, ApiErrorKind, EventPassError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use session::{SessionGate, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}

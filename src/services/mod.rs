//! Services module
//!
//! This module contains the REST request wrappers around the backend API.
//! Every wrapper issues exactly one request, attaches the bearer token
//! where the operation requires it, and normalizes errors; no wrapper
//! mutates local state.

pub mod auth;
pub mod events;
pub mod http;
pub mod tickets;
pub mod users;

// Re-export commonly used services
pub use auth::AuthService;
pub use events::{EventService, UpdateReply};
pub use http::ApiClient;
pub use tickets::TicketService;
pub use users::UserService;

use crate::config::Settings;
use crate::session::store::SessionStore;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub event_service: EventService,
    pub ticket_service: TicketService,
    pub user_service: UserService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services sharing one client
    pub fn new(settings: &Settings, store: SessionStore) -> Result<Self> {
        let client = ApiClient::new(&settings.api, store)?;

        Ok(Self {
            auth_service: AuthService::new(client.clone()),
            event_service: EventService::new(client.clone()),
            ticket_service: TicketService::new(client.clone()),
            user_service: UserService::new(client),
        })
    }
}

//! Session gate for protected pages
//!
//! Before a protected page renders, the gate confirms the stored session
//! by fetching the current-user profile. The check runs once per page
//! entry; it is not a background watcher. A missing token short-circuits
//! to unauthorized without issuing any request, and any failed check
//! clears the stored token, the single error side effect in the client.
//! The gate never navigates by itself: it reports an outcome and the
//! dispatcher acts on it.

use tracing::{debug, warn};

use crate::models::UserProfile;
use crate::services::users::UserService;
use crate::session::store::SessionStore;

/// Where the dispatcher should send the user when the gate denies entry
///
/// Destinations differ per page on purpose: ordinary protected pages fall
/// back to the login page, while the admin create page keeps its own
/// home/events split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    Home,
    Events,
}

/// Gate lifecycle: unknown until checked, then authorized or not
#[derive(Debug, Clone)]
pub enum GateState {
    Unknown,
    Authorized(UserProfile),
    Unauthorized,
}

/// What the dispatcher observes after a check
#[derive(Debug, Clone)]
pub enum GateOutcome {
    Authorized(UserProfile),
    Redirect(Destination),
}

/// Component-level gate in front of protected pages
pub struct SessionGate {
    users: UserService,
    store: SessionStore,
    fallback: Destination,
    state: GateState,
}

impl SessionGate {
    pub fn new(users: UserService, store: SessionStore, fallback: Destination) -> Self {
        Self {
            users,
            store,
            fallback,
            state: GateState::Unknown,
        }
    }

    /// Current gate state
    pub fn state(&self) -> &GateState {
        &self.state
    }

    /// Run the session check and settle the gate
    ///
    /// Absence of a token is decided locally; with a token present the
    /// backend has the final word via the current-user endpoint.
    pub async fn check(&mut self) -> GateOutcome {
        if !self.store.has_token() {
            debug!("No session token, gate closed without a request");
            self.state = GateState::Unauthorized;
            return GateOutcome::Redirect(self.fallback);
        }

        match self.users.current_user().await {
            Ok(profile) => {
                debug!(user_id = profile.id, username = %profile.username, "Session confirmed");
                self.state = GateState::Authorized(profile.clone());
                GateOutcome::Authorized(profile)
            }
            Err(e) => {
                if e.is_unauthenticated() {
                    warn!("Backend rejected the stored session token");
                } else {
                    warn!(error = %e, "Session check failed");
                }
                if let Err(clear_err) = self.store.clear_token() {
                    warn!(error = %clear_err, "Failed to clear rejected session token");
                }
                self.state = GateState::Unauthorized;
                GateOutcome::Redirect(self.fallback)
            }
        }
    }
}

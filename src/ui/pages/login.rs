//! Login page
//!
//! Successful login stores the bearer token and moves on to the events
//! list; a rejected login shows the backend's message and stores nothing.

use tracing::info;

use crate::config::Settings;
use crate::services::ServiceFactory;
use crate::session::store::SessionStore;
use crate::ui::filters::EventFilter;
use crate::ui::pages::events;
use crate::ui::{notify, prompt};
use crate::utils::errors::Result;

pub async fn run(
    services: &ServiceFactory,
    store: &SessionStore,
    settings: &Settings,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let username = prompt::or_ask(username, "Username")?;
    let password = prompt::or_ask(password, "Password")?;

    match services.auth_service.login(&username, &password).await {
        Ok(token) => {
            store.save_token(&token.access_token)?;
            info!(username = %username, "Login succeeded");
            notify::notice(&format!("Logged in as {username}"));
            events::open(services, store, settings, EventFilter::default(), false).await
        }
        Err(e) => {
            notify::failure(&e);
            Ok(())
        }
    }
}

/// Drop the stored session
pub fn logout(store: &SessionStore) -> Result<()> {
    store.clear_token()?;
    notify::notice("Logged out");
    Ok(())
}

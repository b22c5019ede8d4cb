//! Profile page
//!
//! Shows the account, the registered events split into upcoming and past,
//! and the ticket QR codes, fetched one per registration, sequentially,
//! in list order. Leaving an event mutates the local list by id without
//! refetching the profile; a second leave for the same id surfaces the
//! backend's error and the list stays as it was.

use tracing::info;

use crate::config::Settings;
use crate::models::{EventSummary, UserProfile};
use crate::services::ServiceFactory;
use crate::session::guard::{Destination, GateOutcome, SessionGate};
use crate::session::store::SessionStore;
use crate::ui::pages::detail::save_qr;
use crate::ui::pages::events::redirect_hint;
use crate::ui::{notify, prompt};
use crate::utils::errors::Result;
use crate::utils::helpers;

async fn gate(services: &ServiceFactory, store: &SessionStore) -> Option<UserProfile> {
    let mut gate = SessionGate::new(
        services.user_service.clone(),
        store.clone(),
        Destination::Login,
    );
    match gate.check().await {
        GateOutcome::Authorized(profile) => Some(profile),
        GateOutcome::Redirect(destination) => {
            redirect_hint(destination);
            None
        }
    }
}

/// Render the profile with tickets
pub async fn open(services: &ServiceFactory, store: &SessionStore, settings: &Settings) -> Result<()> {
    let Some(profile) = gate(services, store).await else {
        return Ok(());
    };

    render_profile(&profile);

    // one QR per registration, awaited in order; the first failure stops
    // the remaining fetches, matching the source page
    for event in &profile.registered_events {
        match services.ticket_service.qr_code(event.id).await {
            Ok(qr) => match save_qr(&settings.ui.qr_dir, event.id, &qr).await {
                Ok(path) => println!("      ticket for #{}: {path}", event.id),
                Err(e) => {
                    notify::failure(&e);
                    break;
                }
            },
            Err(e) => {
                notify::failure(&e);
                break;
            }
        }
    }
    Ok(())
}

fn render_profile(profile: &UserProfile) {
    let role = if profile.is_admin() { "admin" } else { "user" };
    println!("{} ({role})", profile.username);

    let today = helpers::today();
    let (upcoming, past): (Vec<_>, Vec<_>) = profile
        .registered_events
        .iter()
        .partition(|event| crate::ui::filters::is_upcoming(&event.date, today));

    println!("Upcoming events:");
    render_summaries(&upcoming);
    if !past.is_empty() {
        println!("Past events:");
        render_summaries(&past);
    }
}

fn render_summaries(events: &[&EventSummary]) {
    if events.is_empty() {
        println!("      (none)");
    }
    for event in events {
        println!(
            "  #{:<4} {} — {} {} @ {}",
            event.id, event.title, event.date, event.time, event.place
        );
    }
}

/// Remove an event from the local registration list by id
fn remove_registration(events: &mut Vec<EventSummary>, event_id: i64) -> bool {
    let before = events.len();
    events.retain(|event| event.id != event_id);
    events.len() != before
}

/// Cancel a registration and update the local list without refetching
pub async fn leave(services: &ServiceFactory, store: &SessionStore, event_id: i64) -> Result<()> {
    let Some(mut profile) = gate(services, store).await else {
        return Ok(());
    };

    match services.ticket_service.unregister(event_id).await {
        Ok(reply) => {
            info!(event_id = event_id, "Unregistered from event");
            notify::notice(&reply.message);
            remove_registration(&mut profile.registered_events, event_id);
        }
        Err(e) => notify::failure(&e),
    }

    render_profile(&profile);
    Ok(())
}

/// Change the account password
pub async fn change_password(
    services: &ServiceFactory,
    store: &SessionStore,
    old_password: Option<String>,
    new_password: Option<String>,
) -> Result<()> {
    if gate(services, store).await.is_none() {
        return Ok(());
    }

    let old_password = prompt::or_ask(old_password, "Current password")?;
    let new_password = prompt::or_ask(new_password, "New password")?;

    match services
        .user_service
        .change_password(&old_password, &new_password)
        .await
    {
        Ok(reply) => notify::notice(&reply.message),
        Err(e) => notify::failure(&e),
    }
    Ok(())
}

/// Delete the account and drop the session
pub async fn delete_account(
    services: &ServiceFactory,
    store: &SessionStore,
    assume_yes: bool,
) -> Result<()> {
    if gate(services, store).await.is_none() {
        return Ok(());
    }

    if !assume_yes && !prompt::confirm("Delete your account permanently?")? {
        notify::notice("Account kept");
        return Ok(());
    }

    match services.user_service.delete_account().await {
        Ok(reply) => {
            store.clear_token()?;
            info!("Account deleted, session cleared");
            notify::notice(&reply.message);
        }
        Err(e) => notify::failure(&e),
    }
    Ok(())
}

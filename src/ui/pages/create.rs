//! Create event page (admin)
//!
//! Keeps the source application's double redirect: an unauthenticated
//! visitor is sent home, an authenticated non-admin back to the events
//! list. An optional poster image is parsed by the backend and merged
//! into the form before the required-field gate runs; a form that fails
//! validation never reaches the network.

use std::path::Path;

use tracing::info;

use crate::services::ServiceFactory;
use crate::session::guard::{Destination, GateOutcome, SessionGate};
use crate::session::store::SessionStore;
use crate::ui::event_form::EventForm;
use crate::ui::notify;
use crate::ui::pages::detail::EventFields;
use crate::ui::pages::events::{redirect_hint, render_card};
use crate::utils::errors::Result;

pub async fn open(
    services: &ServiceFactory,
    store: &SessionStore,
    image: Option<String>,
    fields: EventFields,
) -> Result<()> {
    let mut gate = SessionGate::new(
        services.user_service.clone(),
        store.clone(),
        Destination::Home,
    );
    let profile = match gate.check().await {
        GateOutcome::Authorized(profile) => profile,
        GateOutcome::Redirect(destination) => {
            redirect_hint(destination);
            return Ok(());
        }
    };

    if !profile.is_admin() {
        notify::notice("Creating events needs admin rights");
        redirect_hint(Destination::Events);
        return Ok(());
    }

    let mut form = EventForm::new();

    if let Some(image_path) = image {
        match parse_poster(services, &image_path).await {
            Ok(prefill) => form.apply_prefill(prefill),
            Err(e) => {
                notify::failure(&e);
                return Ok(());
            }
        }
    }

    fields.apply_to(&mut form);

    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(message) => {
            notify::problem(&message);
            return Ok(());
        }
    };

    match services.event_service.create(&draft).await {
        Ok(event) => {
            info!(event_id = event.id, title = %event.title, "Event created");
            notify::notice("Event created");
            render_card(&event);
        }
        Err(e) => notify::failure(&e),
    }
    Ok(())
}

async fn parse_poster(
    services: &ServiceFactory,
    image_path: &str,
) -> Result<crate::models::EventPrefill> {
    let path = Path::new(image_path);
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("poster");
    services
        .event_service
        .parse_image(file_name, mime_for(path), bytes)
        .await
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/png",
    }
}

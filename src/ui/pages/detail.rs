//! Event detail page
//!
//! Shows one event, lets a user join it (registration followed by the
//! ticket QR fetch), and gives admins the edit and delete actions backed
//! by the shared form. The backend decides who may do what; this page
//! only relays its answers.

use base64ct::{Base64, Encoding};
use tracing::info;

use crate::config::Settings;
use crate::models::Event;
use crate::services::ServiceFactory;
use crate::session::guard::{Destination, GateOutcome, SessionGate};
use crate::session::store::SessionStore;
use crate::ui::event_form::EventForm;
use crate::ui::pages::events::{redirect_hint, render_card};
use crate::ui::{notify, prompt};
use crate::utils::errors::{ApiErrorKind, EventPassError, Result};

/// Field overrides collected from the command line
#[derive(Debug, Clone, Default)]
pub struct EventFields {
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

impl EventFields {
    /// Lay the provided fields over a form
    pub fn apply_to(&self, form: &mut EventForm) {
        if self.title.is_some() {
            form.title = self.title.clone();
        }
        if self.date.is_some() {
            form.date = self.date.clone();
        }
        if self.time.is_some() {
            form.time = self.time.clone();
        }
        if self.place.is_some() {
            form.place = self.place.clone();
        }
        if self.capacity.is_some() {
            form.capacity = self.capacity;
        }
        if self.description.is_some() {
            form.description = self.description.clone();
        }
        if self.age_limit.is_some() {
            form.age_limit = self.age_limit;
        }
        if self.event_type.is_some() {
            form.event_type = self.event_type.clone();
        }
        if self.image_url.is_some() {
            form.image_url = self.image_url.clone();
        }
    }
}

async fn gate(services: &ServiceFactory, store: &SessionStore) -> Option<crate::models::UserProfile> {
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

/// Show one event
pub async fn show(services: &ServiceFactory, store: &SessionStore, event_id: i64) -> Result<()> {
    if gate(services, store).await.is_none() {
        return Ok(());
    }

    match services.event_service.get(event_id).await {
        Ok(event) => render_detail(&event),
        Err(e) => render_fetch_failure(&e),
    }
    Ok(())
}

fn render_detail(event: &Event) {
    render_card(event);
    if let Some(description) = &event.description {
        println!("      {description}");
    }
    if let Some(image_url) = &event.image_url {
        println!("      poster: {image_url}");
    }
    if !event.participants.is_empty() {
        println!("      {} registered", event.participants.len());
    }
}

fn render_fetch_failure(err: &EventPassError) {
    match err {
        EventPassError::Api(api) if api.kind == ApiErrorKind::NotFound => {
            notify::notice("No such event — head back to the list with `eventpass events`");
        }
        other => notify::failure(other),
    }
}

/// Register for an event and fetch the ticket QR code
pub async fn join(
    services: &ServiceFactory,
    store: &SessionStore,
    settings: &Settings,
    event_id: i64,
) -> Result<()> {
    if gate(services, store).await.is_none() {
        return Ok(());
    }

    match services.ticket_service.register(event_id).await {
        Ok(reply) => {
            info!(event_id = event_id, "Registered for event");
            notify::notice(&reply.message);
        }
        Err(e) => {
            notify::failure(&e);
            return Ok(());
        }
    }

    // registration succeeded; the QR fetch is a separate second request
    match services.ticket_service.qr_code(event_id).await {
        Ok(qr) => match save_qr(&settings.ui.qr_dir, event_id, &qr).await {
            Ok(path) => notify::notice(&format!(
                "Ticket QR saved to {path} — it also stays available on your profile"
            )),
            Err(e) => notify::failure(&e),
        },
        Err(e) => notify::failure(&e),
    }
    Ok(())
}

/// Decode a base64 QR payload back into a PNG file
pub(crate) async fn save_qr(qr_dir: &str, event_id: i64, encoded: &str) -> Result<String> {
    let bytes = Base64::decode_vec(encoded)
        .map_err(|e| EventPassError::InvalidInput(format!("QR payload is not base64: {e}")))?;
    let dir = std::path::Path::new(qr_dir);
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(format!("ticket-{event_id}.png"));
    tokio::fs::write(&path, bytes).await?;
    Ok(path.display().to_string())
}

/// Edit an event through the shared form (admin)
pub async fn edit(
    services: &ServiceFactory,
    store: &SessionStore,
    event_id: i64,
    fields: EventFields,
) -> Result<()> {
    if gate(services, store).await.is_none() {
        return Ok(());
    }

    let event = match services.event_service.get(event_id).await {
        Ok(event) => event,
        Err(e) => {
            render_fetch_failure(&e);
            return Ok(());
        }
    };

    let mut form = EventForm::from_event(&event);
    fields.apply_to(&mut form);

    let patch = match form.validate_as_patch() {
        Ok(patch) => patch,
        Err(message) => {
            notify::problem(&message);
            return Ok(());
        }
    };

    match services.event_service.update(event_id, &patch).await {
        Ok(reply) => {
            info!(event_id = event_id, "Event updated");
            notify::notice(&reply.message);
            render_card(&reply.event);
        }
        Err(e) => notify::failure(&e),
    }
    Ok(())
}

/// Delete an event (admin)
pub async fn delete(
    services: &ServiceFactory,
    store: &SessionStore,
    event_id: i64,
    assume_yes: bool,
) -> Result<()> {
    if gate(services, store).await.is_none() {
        return Ok(());
    }

    if !assume_yes && !prompt::confirm(&format!("Delete event #{event_id}?"))? {
        notify::notice("Nothing deleted");
        return Ok(());
    }

    match services.event_service.delete(event_id).await {
        Ok(reply) => {
            info!(event_id = event_id, "Event deleted");
            notify::notice(&reply.message);
        }
        Err(e) => notify::failure(&e),
    }
    Ok(())
}

//! EventPass terminal client
//!
//! Main application entry point

use anyhow::Result;
use tracing::info;

use eventpass::{
    cli::{self, Action},
    config::Settings,
    services::ServiceFactory,
    session::SessionStore,
    ui::filters::EventFilter,
    ui::pages::{create, detail, events, login, profile, register},
    utils::logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = cli::parse();

    // Load configuration
    let mut settings = Settings::from_file(&cli.config)?;
    if cli.verbosity > 0 {
        settings.logging.level = logging::level_for_verbosity(cli.verbosity).to_string();
    }
    settings.validate()?;

    // Initialize logging; the guard flushes the file sink on drop
    let _log_guard = logging::init_logging(&settings.logging)?;
    info!("{} starting", eventpass::info());

    let store = SessionStore::new(&settings.session)?;
    let services = ServiceFactory::new(&settings, store.clone())?;

    dispatch(cli.action, &settings, &store, &services).await?;

    Ok(())
}

/// Route the parsed action to its page
async fn dispatch(
    action: Action,
    settings: &Settings,
    store: &SessionStore,
    services: &ServiceFactory,
) -> Result<()> {
    match action {
        Action::Register { username, password } => {
            register::run(services, username, password).await?;
        }
        Action::Login { username, password } => {
            login::run(services, store, settings, username, password).await?;
        }
        Action::Logout => login::logout(store)?,
        Action::Events {
            age,
            find,
            from,
            to,
            interactive,
        } => {
            let filter = EventFilter {
                max_age: age,
                query: find.unwrap_or_default(),
                from: parse_bound(from)?,
                to: parse_bound(to)?,
            };
            events::open(services, store, settings, filter, interactive).await?;
        }
        Action::Show { event_id } => detail::show(services, store, event_id).await?,
        Action::Join { event_id } => detail::join(services, store, settings, event_id).await?,
        Action::Leave { event_id } => profile::leave(services, store, event_id).await?,
        Action::Create { image, fields } => {
            create::open(services, store, image, fields).await?;
        }
        Action::Edit { event_id, fields } => {
            detail::edit(services, store, event_id, fields).await?;
        }
        Action::Delete { event_id, yes } => {
            detail::delete(services, store, event_id, yes).await?;
        }
        Action::Profile => profile::open(services, store, settings).await?,
        Action::Passwd {
            old_password,
            new_password,
        } => {
            profile::change_password(services, store, old_password, new_password).await?;
        }
        Action::AccountDelete { yes } => {
            profile::delete_account(services, store, yes).await?;
        }
    }
    Ok(())
}

fn parse_bound(raw: Option<String>) -> Result<Option<chrono::NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(raw) => events::parse_filter_date(&raw)
            .map(Some)
            .map_err(|message| anyhow::anyhow!(message)),
    }
}

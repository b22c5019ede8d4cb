//! Account registration page

use tracing::info;

use crate::models::Credentials;
use crate::services::ServiceFactory;
use crate::ui::{notify, prompt};
use crate::utils::errors::Result;

pub async fn run(
    services: &ServiceFactory,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let credentials = Credentials {
        username: prompt::or_ask(username, "Username")?,
        password: prompt::or_ask(password, "Password")?,
    };

    match services.auth_service.register(&credentials).await {
        Ok(registered) => {
            info!(user_id = registered.user_id, "Account registered");
            notify::notice(&registered.message);
            notify::notice("Log in with `eventpass login` to browse events");
        }
        Err(e) => notify::failure(&e),
    }
    Ok(())
}

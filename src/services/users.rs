//! User account API wrappers

use serde::Serialize;
use tracing::debug;

use crate::models::{ApiMessage, UserProfile};
use crate::services::http::ApiClient;
use crate::utils::errors::Result;

#[derive(Debug, Serialize)]
struct PasswordChange<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

/// Current-user profile and account management
#[derive(Debug, Clone)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the authenticated user's profile with registered events
    pub async fn current_user(&self) -> Result<UserProfile> {
        self.client.get("/users/me").await
    }

    /// Change the account password
    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Result<ApiMessage> {
        debug!("Changing account password");
        self.client
            .patch(
                "/users/me/password",
                &PasswordChange {
                    old_password,
                    new_password,
                },
            )
            .await
    }

    /// Delete the account permanently
    pub async fn delete_account(&self) -> Result<ApiMessage> {
        debug!("Deleting account");
        self.client.delete("/users/me").await
    }
}

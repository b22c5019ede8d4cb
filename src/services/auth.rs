//! Authentication API wrappers
//!
//! Register and login are the two unauthenticated operations. Login uses
//! the backend's OAuth2 password form (`grant_type=password`); the token
//! it returns is opaque to the client and is stored by the login page,
//! never by the wrapper itself.

use tracing::debug;

use crate::models::{Credentials, Registered, TokenResponse};
use crate::services::http::ApiClient;
use crate::utils::errors::Result;

/// Account registration and login
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create a new account
    pub async fn register(&self, credentials: &Credentials) -> Result<Registered> {
        debug!(username = %credentials.username, "Registering account");
        self.client.post_public("/auth/register", credentials).await
    }

    /// Exchange credentials for a bearer token
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse> {
        debug!(username = username, "Logging in");
        let form = [
            ("grant_type", "password"),
            ("username", username),
            ("password", password),
        ];
        self.client.post_form_public("/auth/login", &form).await
    }
}

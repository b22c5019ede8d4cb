//! Session token persistence
//!
//! The bearer token is the only client state that survives between runs.
//! It lives in a single file under the configured path; absence means "not
//! authenticated", and presence never implies the token is still valid.
//! The backend is the sole authority on validity.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::SessionConfig;
use crate::utils::errors::{EventPassError, Result};

/// File-backed store for the session token
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store from configuration
    ///
    /// An empty `token_path` resolves to `$HOME/.eventpass/token`.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        if !config.token_path.is_empty() {
            return Ok(Self::at_path(&config.token_path));
        }

        let home = std::env::var_os("HOME").ok_or_else(|| {
            EventPassError::Config(
                "HOME is not set, configure session.token_path explicitly".to_string(),
            )
        })?;

        Ok(Self {
            path: PathBuf::from(home).join(".eventpass").join("token"),
        })
    }

    /// Create a store at an explicit path
    pub fn at_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Persist the token, replacing any previous one
    pub fn save_token(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        debug!(path = %self.path.display(), "Session token saved");
        Ok(())
    }

    /// Read the stored token, if any
    pub fn load_token(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim().to_string();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Forget the stored token; clearing an absent token is a no-op
    pub fn clear_token(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Session token cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Whether a token is currently stored
    pub fn has_token(&self) -> bool {
        matches!(self.load_token(), Ok(Some(_)))
    }
}

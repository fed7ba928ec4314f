// src/config/auth.rs
// DOCUMENTATION: Explicit authentication context
// PURPOSE: Carry the bearer token and user id into every client

use crate::config::Config;

/// Credentials attached to every backend request
/// DOCUMENTATION: Built once by the caller and threaded into ApiClient::new
#[derive(Clone)]
pub struct AuthContext {
    token: String,
    user_id: i64,
}

impl AuthContext {
    pub fn new(token: impl Into<String>, user_id: i64) -> Self {
        Self {
            token: token.into(),
            user_id,
        }
    }

    /// Build from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.token.clone(), config.user_id)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Id of the authenticated user
    pub fn user_id(&self) -> i64 {
        self.user_id
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("token", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}

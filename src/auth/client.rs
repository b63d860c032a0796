//! Token lifecycle: acquire, persist, read, clear.
//!
//! ERROR HANDLING
//! ==============
//! `login` logs failures and returns them to the caller; nothing is written
//! to storage unless the server issued a token. `logout`, `token` and
//! `is_authenticated` cannot fail. Token expiry is the server's concern and
//! only surfaces as a rejected later request.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use super::storage::{KeyValueStore, TOKEN_KEY};
use super::AuthError;
use crate::config::ApiConfig;
use crate::net::transport::LoginTransport;
use crate::net::types::LoginRequest;

/// Auth helper over an injected store and transport.
pub struct AuthClient<S, T> {
    config: ApiConfig,
    storage: S,
    transport: T,
}

impl<S: KeyValueStore, T: LoginTransport> AuthClient<S, T> {
    pub fn new(config: ApiConfig, storage: S, transport: T) -> Self {
        Self { config, storage, transport }
    }

    /// Exchange credentials for a token and persist it.
    ///
    /// Returns `Ok(true)` when a token was issued and stored, `Ok(false)`
    /// when the server answered without one.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the request fails, the server rejects the
    /// credentials, the body is malformed, or the token cannot be stored.
    pub async fn login(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        match self.try_login(username, password).await {
            Ok(stored) => Ok(stored),
            Err(e) => {
                match e.server_detail() {
                    Some(detail) => log::error!("login error: {e} ({detail})"),
                    None => log::error!("login error: {e}"),
                }
                Err(e)
            }
        }
    }

    async fn try_login(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        let request = LoginRequest::new(username, password);
        let response = self
            .transport
            .post_login(&self.config.login_url(), &request)
            .await?;

        let Some(token) = response.issued_token() else {
            log::warn!("login response carried no token");
            return Ok(false);
        };
        self.storage.set(TOKEN_KEY, token)?;
        log::info!("login succeeded for {username}");
        Ok(true)
    }

    /// Forget the stored token. Safe to call when already logged out.
    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
    }

    /// `true` iff a non-empty token is stored.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// The stored token, or `None` when logged out.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// `Authorization` header value for authenticated API requests.
    pub fn authorization_header(&self) -> Option<String> {
        self.token().map(|t| format!("Token {t}"))
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

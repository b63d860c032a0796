//! Auth client error type.

use thiserror::Error;

use crate::net::types::error_detail;

/// Errors surfaced by [`super::AuthClient::login`].
#[derive(Debug, Error)]
pub enum AuthError {
    /// The request never produced a response (network, CORS, DNS).
    #[error("login request failed: {0}")]
    Request(String),

    /// The server answered with a non-success HTTP status.
    #[error("login rejected: status {status}")]
    Status { status: u16, body: String },

    /// The response body was not a valid login response.
    #[error("login response parse failed: {0}")]
    Parse(String),

    /// The token could not be written to persistent storage.
    #[error("token storage failed: {0}")]
    Storage(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl AuthError {
    /// Server-provided explanation for a rejected login, if the body has one.
    pub fn server_detail(&self) -> Option<String> {
        match self {
            Self::Status { body, .. } => error_detail(body),
            _ => None,
        }
    }

    /// Message suitable for showing next to the login form.
    pub fn user_message(&self) -> String {
        self.server_detail().unwrap_or_else(|| self.to_string())
    }
}

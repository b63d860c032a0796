//! Wire DTOs for `POST /login/`.
//!
//! The backend is a Django REST Framework `obtain_auth_token` view: success
//! bodies carry `token`, validation failures carry field-keyed arrays of
//! messages (`non_field_errors` for bad credentials) or a `detail` string.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::auth::AuthError;

/// Credentials posted to the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self { username: username.to_owned(), password: password.to_owned() }
    }
}

/// Login response body. Any other fields the server sends are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

impl LoginResponse {
    /// The issued token, treating an empty string as absent.
    pub fn issued_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Parse a raw login response body.
///
/// # Errors
///
/// Returns [`AuthError::Parse`] when the body is not a JSON object or `token`
/// is present but not a string.
pub fn parse_login_response(body: &str) -> Result<LoginResponse, AuthError> {
    serde_json::from_str(body).map_err(|e| AuthError::Parse(e.to_string()))
}

/// Pull a human-readable message out of a DRF error body.
///
/// Prefers `detail`, then `non_field_errors`, then the first message of any
/// other field.
pub fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let obj = value.as_object()?;

    if let Some(detail) = obj.get("detail").and_then(first_message) {
        return Some(detail);
    }
    if let Some(msg) = obj.get("non_field_errors").and_then(first_message) {
        return Some(msg);
    }
    obj.iter()
        .find_map(|(field, v)| first_message(v).map(|msg| format!("{field}: {msg}")))
}

fn first_message(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => items.iter().find_map(first_message),
        _ => None,
    }
}

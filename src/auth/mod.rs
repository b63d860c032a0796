//! Client-side token authentication.
//!
//! ARCHITECTURE
//! ============
//! `AuthClient` owns the token lifecycle (acquire, persist, read, clear) and
//! is generic over where the token lives (`KeyValueStore`) and how the login
//! request travels (`LoginTransport`). Pages build one per interaction with
//! [`browser_client`]; tests build one over `MemoryStorage` and a fake or
//! local transport.

pub mod client;
pub mod error;
pub mod storage;

pub use client::AuthClient;
pub use error::AuthError;
pub use storage::{KeyValueStore, LocalStorage, MemoryStorage, TOKEN_KEY};

use crate::config::ApiConfig;
use crate::net::transport::{DefaultTransport, default_transport};

/// Auth client backed by `localStorage` and the target's HTTP transport.
pub type BrowserAuthClient = AuthClient<LocalStorage, DefaultTransport>;

/// Build the auth client pages use.
///
/// # Errors
///
/// Returns [`AuthError::HttpClientBuild`] if the transport cannot be built.
pub fn browser_client(config: ApiConfig) -> Result<BrowserAuthClient, AuthError> {
    Ok(AuthClient::new(config, LocalStorage, default_transport()?))
}

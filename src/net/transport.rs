//! HTTP transports for the login call.
//!
//! Client-side (hydrate): `BrowserTransport` posts through `gloo-net`.
//! Native targets (SSR, tests): `NativeTransport` posts through `reqwest`.
//!
//! Both map a non-2xx status to [`AuthError::Status`] and parse the body
//! with [`parse_login_response`], so the auth client sees identical
//! outcomes regardless of where it runs.

#[cfg(all(test, not(target_arch = "wasm32")))]
#[path = "transport_test.rs"]
mod transport_test;

use super::types::{LoginRequest, LoginResponse};
#[cfg(any(feature = "hydrate", not(target_arch = "wasm32")))]
use super::types::parse_login_response;
use crate::auth::AuthError;

/// Sends login credentials and returns the parsed response. Enables mocking
/// in tests.
#[async_trait::async_trait(?Send)]
pub trait LoginTransport {
    /// POST `request` as JSON to `url`.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the request cannot be sent, the server
    /// answers with a non-success status, or the body is malformed.
    async fn post_login(&self, url: &str, request: &LoginRequest) -> Result<LoginResponse, AuthError>;
}

// =============================================================================
// BROWSER
// =============================================================================

/// `fetch`-backed transport for the hydrated client.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl LoginTransport for BrowserTransport {
    async fn post_login(&self, url: &str, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
        let resp = gloo_net::http::Request::post(url)
            .json(request)
            .map_err(|e| AuthError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;
        let body = resp.text().await.map_err(|e| AuthError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(AuthError::Status { status: resp.status(), body });
        }
        parse_login_response(&body)
    }
}

// =============================================================================
// NATIVE
// =============================================================================

/// `reqwest`-backed transport for native targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct NativeTransport {
    http: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl NativeTransport {
    /// Build a transport with reqwest's default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::HttpClientBuild`] if the TLS backend fails to
    /// initialize.
    pub fn new() -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AuthError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http })
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait(?Send)]
impl LoginTransport for NativeTransport {
    async fn post_login(&self, url: &str, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
        let resp = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| AuthError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(AuthError::Status { status: status.as_u16(), body });
        }
        parse_login_response(&body)
    }
}

// =============================================================================
// DEFAULT
// =============================================================================

#[cfg(feature = "hydrate")]
pub type DefaultTransport = BrowserTransport;

#[cfg(all(not(feature = "hydrate"), not(target_arch = "wasm32")))]
pub type DefaultTransport = NativeTransport;

/// Transport for the current build target.
///
/// # Errors
///
/// Returns [`AuthError::HttpClientBuild`] if the native HTTP client cannot be
/// constructed.
#[cfg(feature = "hydrate")]
#[allow(clippy::unnecessary_wraps)]
pub fn default_transport() -> Result<DefaultTransport, AuthError> {
    Ok(BrowserTransport)
}

/// Transport for the current build target.
///
/// # Errors
///
/// Returns [`AuthError::HttpClientBuild`] if the native HTTP client cannot be
/// constructed.
#[cfg(all(not(feature = "hydrate"), not(target_arch = "wasm32")))]
pub fn default_transport() -> Result<DefaultTransport, AuthError> {
    NativeTransport::new()
}

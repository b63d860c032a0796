//! API configuration resolved at build time.
//!
//! The browser has no process environment, so the API base URL is baked in
//! from `AUTHDASH_API_URL` when the crate is compiled and falls back to the
//! hosted backend otherwise.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "https://djangobackend-d2fx.onrender.com/api";

/// Base URL of the remote token-auth API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_url: String,
}

impl ApiConfig {
    /// Build a config for an explicit base URL. Trailing slashes are trimmed.
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        Self { api_url: api_url.trim_end_matches('/').to_owned() }
    }

    /// Build config from the `AUTHDASH_API_URL` value captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("AUTHDASH_API_URL"))
    }

    fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Token login endpoint, `{api_url}/login/`.
    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}/login/", self.api_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

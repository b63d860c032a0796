//! Shared auth route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: protected pages bounce
//! to `/login` without a token, the login page bounces to `/` with one. The
//! auth client never redirects on its own.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::auth::{AuthClient, KeyValueStore, browser_client};
use crate::config::ApiConfig;
use crate::net::transport::LoginTransport;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/";

/// Which way a route guard should send the user, if anywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Page requires a token.
    Protected,
    /// Page only makes sense without a token (the login form).
    GuestOnly,
}

/// Redirect target for `guard` given the current session, or `None` to stay.
pub fn redirect_target(guard: Guard, authenticated: bool) -> Option<&'static str> {
    match (guard, authenticated) {
        (Guard::Protected, false) => Some(LOGIN_PATH),
        (Guard::GuestOnly, true) => Some(DASHBOARD_PATH),
        _ => None,
    }
}

/// Evaluate `guard` against the session held by `client`.
pub fn guard_redirect<S, T>(guard: Guard, client: &AuthClient<S, T>) -> Option<&'static str>
where
    S: KeyValueStore,
    T: LoginTransport,
{
    redirect_target(guard, client.is_authenticated())
}

/// Check `guard` once on mount and navigate away if it fails.
pub fn install_guard<F>(guard: Guard, config: ApiConfig, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let client = match browser_client(config.clone()) {
            Ok(client) => client,
            Err(e) => {
                log::error!("auth client unavailable: {e}");
                return;
            }
        };
        if let Some(target) = guard_redirect(guard, &client) {
            navigate(target, NavigateOptions::default());
        }
    });
}

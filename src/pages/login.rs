//! Login page posting username + password to the token endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::auth::AuthError;
use crate::config::ApiConfig;
use crate::util::auth::{Guard, install_guard};

const MISSING_FIELDS: &str = "Enter both username and password.";
#[cfg(any(test, feature = "hydrate"))]
const NO_TOKEN: &str = "Login failed: no token returned.";

/// Trim the username and require both fields. Passwords are sent verbatim.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// What the page does once a login attempt settles.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, PartialEq, Eq)]
enum LoginStep {
    /// Token stored; leave for the dashboard without touching page state.
    Navigate,
    /// Stay on the form, show the message and re-enable submit.
    Retry(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn login_step(outcome: &Result<bool, AuthError>) -> LoginStep {
    match outcome {
        Ok(true) => LoginStep::Navigate,
        Ok(false) => LoginStep::Retry(NO_TOKEN.to_owned()),
        Err(e) => LoginStep::Retry(format!("Login failed: {}", e.user_message())),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    install_guard(Guard::GuestOnly, config.clone(), navigate.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get(), &password.get()) {
            Ok(creds) => creds,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = match crate::auth::browser_client(config) {
                    Ok(client) => client.login(&user, &pass).await,
                    Err(e) => Err(e),
                };
                match login_step(&outcome) {
                    LoginStep::Navigate => navigate(crate::util::auth::DASHBOARD_PATH, NavigateOptions::default()),
                    LoginStep::Retry(msg) => {
                        info.set(msg);
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass, &config, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign In"</h1>
                <p class="login-card__subtitle">"Django REST Framework Token Authentication"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

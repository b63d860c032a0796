//! Dashboard page shown after a successful login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::browser_client;
use crate::components::auth_flow::AuthFlow;
use crate::components::scenario_list::ScenarioList;
use crate::components::token_card::TokenCard;
use crate::config::ApiConfig;
use crate::state::dashboard::{COPIED_INDICATOR_MS, DashboardState};
use crate::util::auth::{Guard, LOGIN_PATH, install_guard};
use crate::util::browser;

/// Dashboard page — shows the stored token, the token flow walkthrough and
/// the security test scenarios. Redirects to `/login` without a token.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();
    let state = RwSignal::new(DashboardState::default());

    install_guard(Guard::Protected, config.clone(), navigate.clone());

    // Read the token once on mount.
    {
        let config = config.clone();
        Effect::new(move || match browser_client(config.clone()) {
            Ok(client) => state.set(DashboardState::with_token(client.token())),
            Err(e) => log::error!("auth client unavailable: {e}"),
        });
    }

    let on_logout = move |_| {
        match browser_client(config.clone()) {
            Ok(client) => client.logout(),
            Err(e) => log::error!("auth client unavailable: {e}"),
        }
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    let on_copy = Callback::new(move |()| {
        let token = state.with_untracked(|s| s.token.clone());
        browser::copy_to_clipboard(&token);
        let generation = state.try_update(DashboardState::mark_copied).unwrap_or_default();
        browser::run_after(COPIED_INDICATOR_MS, move || {
            state.update(|s| s.expire_copied(generation));
        });
    });

    view! {
        <main class="dashboard-page">
            <section class="panel">
                <h1>"Authentication Success!"</h1>
                <p>
                    "You have successfully authenticated using Django REST Framework's Token Authentication."
                </p>
                <div class="alert alert--success">
                    "This page is protected and can only be accessed with a valid authentication token."
                </div>
                <button class="btn btn--primary" on:click=on_logout>
                    "Logout"
                </button>
            </section>

            <section class="panel">
                <h2>"Technical Details"</h2>
                <hr/>
                <TokenCard state=state on_copy=on_copy/>
                <AuthFlow state=state/>
                <ScenarioList state=state/>
            </section>
        </main>
    }
}

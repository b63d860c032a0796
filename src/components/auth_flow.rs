//! "How It Works" card walking through the token flow.

use leptos::prelude::*;

use crate::content::AUTH_FLOW_STEPS;
use crate::state::dashboard::DashboardState;

#[component]
pub fn AuthFlow(state: RwSignal<DashboardState>) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card__title">"How It Works"</h3>
            {AUTH_FLOW_STEPS
                .iter()
                .map(|step| view! { <p class="card__paragraph">{*step}</p> })
                .collect::<Vec<_>>()}
            <code class="auth-flow__header">{move || state.with(DashboardState::header_preview)}</code>
        </div>
    }
}

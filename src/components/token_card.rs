//! Card showing the current token with a copy button.

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;

/// Token display with a "Copy" button whose tooltip flips to "Copied!" while
/// the copy indicator is on.
#[component]
pub fn TokenCard(state: RwSignal<DashboardState>, on_copy: Callback<()>) -> impl IntoView {
    let token = move || state.with(|s| s.token.clone());
    let tooltip = move || state.with(DashboardState::copy_tooltip);

    view! {
        <div class="card">
            <h3 class="card__title">"Authentication Token"</h3>
            <div class="token-card__row">
                <code class="token-card__value">{token}</code>
                <button
                    class="btn btn--outlined btn--small"
                    title=tooltip
                    on:click=move |_| on_copy.run(())
                >
                    "Copy"
                </button>
                <Show when=move || state.with(DashboardState::copied)>
                    <span class="token-card__copied">"Copied!"</span>
                </Show>
            </div>
        </div>
    }
}

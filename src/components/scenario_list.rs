//! Collapsible list of manual security test scenarios.

use leptos::prelude::*;

use crate::content::{TEST_SCENARIOS, TestScenario};
use crate::state::dashboard::DashboardState;

/// Scenario card with a Show/Hide toggle. Toggling is purely local.
#[component]
pub fn ScenarioList(state: RwSignal<DashboardState>) -> impl IntoView {
    let on_toggle = move |_| state.update(DashboardState::toggle_tests);

    view! {
        <div class="card">
            <div class="scenario-list__header">
                <h3 class="card__title">"Security Test Scenarios"</h3>
                <button class="btn btn--outlined" on:click=on_toggle>
                    {move || state.with(DashboardState::tests_button_label)}
                </button>
            </div>
            <Show when=move || state.with(|s| s.show_tests)>
                <ul class="scenario-list">
                    {TEST_SCENARIOS.iter().copied().map(scenario_item).collect::<Vec<_>>()}
                </ul>
            </Show>
        </div>
    }
}

fn scenario_item(scenario: TestScenario) -> impl IntoView {
    view! {
        <li class="scenario-list__item">
            <span class="scenario-list__title">{scenario.title}</span>
            <ul class="scenario-list__steps">
                {scenario.steps.iter().map(|step| view! { <li>{*step}</li> }).collect::<Vec<_>>()}
            </ul>
        </li>
    }
}

//! Reusable dashboard UI components.
//!
//! ARCHITECTURE
//! ============
//! Components render slices of `DashboardState` and report user actions
//! through callbacks; the page owns the state and all side effects.

pub mod auth_flow;
pub mod scenario_list;
pub mod token_card;

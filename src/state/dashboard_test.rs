use super::*;

#[test]
fn indicator_window_is_two_seconds() {
    assert_eq!(COPIED_INDICATOR_MS, 2000);
}

// =============================================================
// Construction
// =============================================================

#[test]
fn with_token_stores_value() {
    let state = DashboardState::with_token(Some("abc123".into()));
    assert_eq!(state.token, "abc123");
    assert!(!state.copied());
    assert!(!state.show_tests);
}

#[test]
fn with_missing_token_is_empty() {
    assert_eq!(DashboardState::with_token(None).token, "");
}

// =============================================================
// Copy indicator
// =============================================================

#[test]
fn copy_sets_indicator() {
    let mut state = DashboardState::default();
    state.mark_copied();
    assert!(state.copied());
    assert_eq!(state.copy_tooltip(), "Copied!");
}

#[test]
fn indicator_clears_when_its_timer_fires() {
    let mut state = DashboardState::default();
    let generation = state.mark_copied();
    state.expire_copied(generation);
    assert!(!state.copied());
    assert_eq!(state.copy_tooltip(), "Copy token");
}

#[test]
fn single_timer_always_clears_indicator() {
    // One copy schedules exactly one timer; that timer alone must clear it.
    let mut state = DashboardState::with_token(Some("abc123".into()));
    let generation = state.mark_copied();
    assert!(state.copied());
    state.expire_copied(generation);
    assert!(!state.copied());
}

#[test]
fn repeated_copy_restarts_window() {
    let mut state = DashboardState::default();
    let first = state.mark_copied();
    let second = state.mark_copied();
    assert_ne!(first, second);

    // The first copy's timer fires; the second copy keeps the indicator on.
    state.expire_copied(first);
    assert!(state.copied());

    state.expire_copied(second);
    assert!(!state.copied());
}

#[test]
fn stale_timer_after_clear_is_noop() {
    let mut state = DashboardState::default();
    let first = state.mark_copied();
    let second = state.mark_copied();
    state.expire_copied(second);
    state.expire_copied(first);
    assert!(!state.copied());
}

#[test]
fn expire_without_copy_is_noop() {
    let mut state = DashboardState::default();
    state.expire_copied(0);
    assert!(!state.copied());
}

// =============================================================
// Test scenario toggle
// =============================================================

#[test]
fn toggle_twice_restores_visibility() {
    let mut state = DashboardState::default();
    assert_eq!(state.tests_button_label(), "Show Tests");
    state.toggle_tests();
    assert!(state.show_tests);
    assert_eq!(state.tests_button_label(), "Hide Tests");
    state.toggle_tests();
    assert!(!state.show_tests);
}

#[test]
fn toggle_does_not_touch_token() {
    let mut state = DashboardState::with_token(Some("abc123".into()));
    state.toggle_tests();
    assert_eq!(state.token, "abc123");
}

// =============================================================
// Header preview
// =============================================================

#[test]
fn header_preview_truncates_to_eight_chars() {
    let state = DashboardState::with_token(Some("9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b".into()));
    assert_eq!(state.header_preview(), "Authorization: Token 9944b091...");
}

#[test]
fn header_preview_short_token() {
    let state = DashboardState::with_token(Some("abc".into()));
    assert_eq!(state.header_preview(), "Authorization: Token abc...");
}

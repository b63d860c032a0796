//! Dashboard view state: token display, copy indicator, scenario toggle.
//!
//! The copy indicator is generation-based. Each copy bumps a counter and
//! schedules an expiry for that generation; an expiry for an older
//! generation is ignored, so only the timer of the latest copy clears it.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// How long the "copied" indicator stays visible.
pub const COPIED_INDICATOR_MS: u32 = 2000;

const HEADER_PREVIEW_CHARS: usize = 8;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    /// Token read once on mount; empty when none is stored.
    pub token: String,
    pub show_tests: bool,
    copied: bool,
    copy_generation: u64,
}

impl DashboardState {
    pub fn with_token(token: Option<String>) -> Self {
        Self { token: token.unwrap_or_default(), ..Self::default() }
    }

    /// Turn the indicator on and return the generation its timer must pass
    /// to [`Self::expire_copied`].
    pub fn mark_copied(&mut self) -> u64 {
        self.copy_generation = self.copy_generation.wrapping_add(1);
        self.copied = true;
        self.copy_generation
    }

    /// Clear the indicator unless a later copy superseded `generation`.
    pub fn expire_copied(&mut self, generation: u64) {
        if generation == self.copy_generation {
            self.copied = false;
        }
    }

    pub fn copied(&self) -> bool {
        self.copied
    }

    pub fn toggle_tests(&mut self) {
        self.show_tests = !self.show_tests;
    }

    pub fn copy_tooltip(&self) -> &'static str {
        if self.copied() { "Copied!" } else { "Copy token" }
    }

    pub fn tests_button_label(&self) -> &'static str {
        if self.show_tests { "Hide Tests" } else { "Show Tests" }
    }

    /// Example header with the token truncated, e.g. `Authorization: Token abcd1234...`.
    pub fn header_preview(&self) -> String {
        let prefix: String = self.token.chars().take(HEADER_PREVIEW_CHARS).collect();
        format!("Authorization: Token {prefix}...")
    }
}

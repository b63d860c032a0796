//! Browser clipboard and timer glue.
//!
//! TRADE-OFFS
//! ==========
//! These are best-effort browser-only calls; SSR and native paths no-op so
//! server rendering stays deterministic.

/// Write `text` to the system clipboard. Failures are ignored.
pub fn copy_to_clipboard(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Some(clipboard) = window.navigator().clipboard() {
                let _ = clipboard.write_text(text);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}

/// Run `f` once after `delay_ms`. Outside the browser `f` is dropped unrun.
pub fn run_after<F>(delay_ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(delay_ms, f).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay_ms, f);
    }
}

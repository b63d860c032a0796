//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (clipboard, timers, route guards)
//! from page logic so the pages compile and test outside the browser.

pub mod auth;
pub mod browser;

//! Persistent key/value storage for the auth token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build persists to `localStorage` so a session survives page
//! reloads within the origin. SSR and native tests have no such store:
//! `LocalStorage` reads nothing and refuses writes there, and `MemoryStorage`
//! stands in.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use super::AuthError;

/// Storage key holding the raw token string.
pub const TOKEN_KEY: &str = "token";

/// String key/value store. All access is synchronous and single-threaded.
pub trait KeyValueStore {
    /// Read the value for `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] when the backing store refuses the
    /// write (quota exceeded, storage disabled).
    fn set(&self, key: &str, value: &str) -> Result<(), AuthError>;

    /// Remove `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn unavailable() -> AuthError {
    AuthError::Storage("localStorage unavailable".to_owned())
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or_else(unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| AuthError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(unavailable())
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process store for SSR and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `key` already holding `value`.
    #[must_use]
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        storage
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

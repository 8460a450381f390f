//! Browser-local persistence of the login session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives reloads as two `localStorage` string keys:
//! `isAuthenticated` (`"true"` or absent) and `userRole` (`"citizen"`,
//! `"government"` or absent). Only `AuthGate` talks to this module.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. Any backend error switches the store to an
//! in-memory map for the rest of the page lifetime, so a disabled or full
//! `localStorage` costs persistence across reloads but never breaks login.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::state::auth::{AuthState, Role};

pub const AUTH_FLAG_KEY: &str = "isAuthenticated";
pub const ROLE_KEY: &str = "userRole";

const AUTH_FLAG_VALUE: &str = "true";

/// Failure reported by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage is reachable (no window, storage disabled by the browser).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend rejected the operation (e.g. quota exceeded).
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// Minimal string key-value backend.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// BACKENDS
// =============================================================================

/// `window.localStorage`.
///
/// Outside a hydrated browser build there is nothing to read: `get` yields
/// `None` and writes report `Unavailable`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.get_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.set_item(key, value).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.remove_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Shared in-memory map. Clones see the same entries, which lets a fresh
/// `SessionStore` over a clone stand in for a page reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> R {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut entries)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.with_entries(|e| e.get(key).cloned()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_entries(|e| e.insert(key.to_owned(), value.to_owned()));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.with_entries(|e| e.remove(key));
        Ok(())
    }
}

// =============================================================================
// SESSION STORE
// =============================================================================

/// Reads and writes the session key pair on a backend.
pub struct SessionStore {
    backend: Box<dyn KeyValueStore>,
    fallback: MemoryStorage,
    degraded: bool,
}

impl SessionStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self { backend: Box::new(backend), fallback: MemoryStorage::new(), degraded: false }
    }

    /// Store over `window.localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    /// `true` once a backend failure forced the in-memory fallback.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Restore the persisted session. Missing, malformed or inconsistent keys
    /// read as `Unauthenticated`.
    pub fn load(&mut self) -> AuthState {
        let flag = self.read(AUTH_FLAG_KEY);
        let role = self.read(ROLE_KEY);
        decode_session(flag.as_deref(), role.as_deref())
    }

    /// Persist an authenticated session for `role`.
    ///
    /// The role is written first. If either write fails, both keys are
    /// removed from the backend so neither half a session nor an older
    /// session survives the in-memory one.
    pub fn save(&mut self, role: Role) {
        if !self.degraded {
            match self.write_pair(role) {
                Ok(()) => return,
                Err(err) => self.degrade(&err),
            }
        }
        let _ = self.fallback.set(ROLE_KEY, role.as_str());
        let _ = self.fallback.set(AUTH_FLAG_KEY, AUTH_FLAG_VALUE);
    }

    /// Remove both session keys.
    ///
    /// The backend is always tried, even when degraded, so a pair restored
    /// before a failure cannot outlive a logout.
    pub fn clear(&mut self) {
        if let Err(err) = self.remove_pair() {
            if !self.degraded {
                self.degrade(&err);
            }
        }
        let _ = self.fallback.remove(AUTH_FLAG_KEY);
        let _ = self.fallback.remove(ROLE_KEY);
    }

    fn write_pair(&self, role: Role) -> Result<(), StorageError> {
        let written = self
            .backend
            .set(ROLE_KEY, role.as_str())
            .and_then(|()| self.backend.set(AUTH_FLAG_KEY, AUTH_FLAG_VALUE));
        if written.is_err() {
            let _ = self.remove_pair();
        }
        written
    }

    /// Flag first: a pair missing only its flag already reads as signed out.
    fn remove_pair(&self) -> Result<(), StorageError> {
        let flag = self.backend.remove(AUTH_FLAG_KEY);
        let role = self.backend.remove(ROLE_KEY);
        flag.and(role)
    }

    fn read(&mut self, key: &str) -> Option<String> {
        if !self.degraded {
            match self.backend.get(key) {
                Ok(value) => return value,
                Err(err) => self.degrade(&err),
            }
        }
        self.fallback.get(key).ok().flatten()
    }

    fn degrade(&mut self, err: &StorageError) {
        leptos::logging::warn!("session storage disabled for this page: {err}");
        self.degraded = true;
    }
}

/// Map the raw key pair onto a session, rejecting anything but an exact,
/// consistent pair.
pub(crate) fn decode_session(flag: Option<&str>, role: Option<&str>) -> AuthState {
    match (flag, role.and_then(Role::parse)) {
        (Some(AUTH_FLAG_VALUE), Some(role)) => AuthState::Authenticated(role),
        _ => AuthState::Unauthenticated,
    }
}

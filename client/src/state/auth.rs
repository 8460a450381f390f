//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and role-aware chrome to coordinate login redirects
//! and role-dependent rendering.
//!
//! DESIGN
//! ======
//! `AuthGate` is the only owner of the persisted session. It holds the whole
//! `AuthState` in one signal, so subscribers always see the authenticated
//! flag and the role change together. The gate is provided once by the root
//! component; consumers fetch it with `expect_context`, which fails loudly if
//! the provider is missing instead of degrading to an implicit guest.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::routes::{CITIZEN_HOME, GOVERNMENT_HOME};
use crate::util::session_store::SessionStore;

/// Persona a user signs in as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Citizen,
    Government,
}

impl Role {
    /// Storage and wire form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::Government => "government",
        }
    }

    /// Parse the storage form. Anything else is not a role.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "citizen" => Some(Self::Citizen),
            "government" => Some(Self::Government),
            _ => None,
        }
    }

    /// Capitalized display name used by the top bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Citizen => "Citizen",
            Self::Government => "Government",
        }
    }

    /// Landing route after a successful login.
    #[must_use]
    pub const fn home_path(self) -> &'static str {
        match self {
            Self::Citizen => CITIZEN_HOME,
            Self::Government => GOVERNMENT_HOME,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Login state. `Unauthenticated` doubles as the guest state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated(Role),
}

impl AuthState {
    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub const fn role(self) -> Option<Role> {
        match self {
            Self::Authenticated(role) => Some(role),
            Self::Unauthenticated => None,
        }
    }
}

/// Reactive owner of the session for the lifetime of the app instance.
///
/// Cheap to copy; every copy refers to the same signal and store.
#[derive(Clone, Copy)]
pub struct AuthGate {
    state: RwSignal<AuthState>,
    store: StoredValue<SessionStore>,
}

impl AuthGate {
    /// Build a gate, restoring any previous session from `store`.
    ///
    /// This is the only read of persisted state.
    pub fn new(mut store: SessionStore) -> Self {
        let restored = store.load();
        if let AuthState::Authenticated(role) = restored {
            leptos::logging::log!("restored {role} session");
        }
        Self { state: RwSignal::new(restored), store: StoredValue::new(store) }
    }

    /// Current state, tracked by the surrounding reactive scope.
    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    /// Current state without subscribing.
    pub fn state_untracked(&self) -> AuthState {
        self.state.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    pub fn role(&self) -> Option<Role> {
        self.state().role()
    }

    /// Record a successful login. Credentials are checked by the caller.
    pub fn login(&self, username: &str, role: Role) {
        self.store.update_value(|store| store.save(role));
        self.state.set(AuthState::Authenticated(role));
        leptos::logging::log!("{username} signed in as {role}");
    }

    /// Drop the session from any state.
    pub fn logout(&self) {
        self.store.update_value(SessionStore::clear);
        self.state.set(AuthState::Unauthenticated);
    }
}

//! Route authorization decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components must apply identical redirect behavior, so the decision
//! lives here as a pure function of auth state and the route table. It keeps
//! no state and is re-evaluated on every navigation.
//!
//! An authenticated user asking for another role's route is sent to
//! `/login`, same as a guest. The session itself is left untouched.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::routes::{Access, CITIZEN_HOME, GOVERNMENT_HOME, LOGIN_PATH, match_path};
use crate::state::auth::{AuthState, Role};

/// Outcome of one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Redirect(&'static str),
    NotFound,
}

/// Decide whether `access` lets `state` through.
#[must_use]
pub fn authorize(state: AuthState, access: &Access) -> RouteDecision {
    match access {
        Access::Public => RouteDecision::Render,
        Access::RoleHome => RouteDecision::Redirect(root_redirect(state)),
        Access::Roles(allowed) => match state {
            AuthState::Authenticated(role) if allowed.contains(&role) => RouteDecision::Render,
            _ => RouteDecision::Redirect(LOGIN_PATH),
        },
    }
}

/// Decide a navigation to a concrete `path`.
#[must_use]
pub fn decide(state: AuthState, path: &str) -> RouteDecision {
    match_path(path).map_or(RouteDecision::NotFound, |m| authorize(state, &m.route.access))
}

/// Target of `/`. Only citizens go to the citizen home; everyone else,
/// guests included, is sent to the government home and gated there.
#[must_use]
pub fn root_redirect(state: AuthState) -> &'static str {
    match state.role() {
        Some(Role::Citizen) => CITIZEN_HOME,
        Some(Role::Government) | None => GOVERNMENT_HOME,
    }
}

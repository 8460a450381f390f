//! Role-derived navigation sets for the top bar and side panel.
//!
//! Guests get empty sets; nothing here fails for a missing role.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::auth::{AuthState, Role};

/// One navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const fn item(label: &'static str, path: &'static str) -> NavItem {
    NavItem { label, path }
}

const CITIZEN_TOP: &[NavItem] = &[
    item("Dashboard", "/citizen"),
    item("Usage", "/citizen/usage/electricity"),
    item("Alerts", "/citizen/alerts"),
    item("Sustainability", "/citizen/sustainability"),
];

const GOVERNMENT_TOP: &[NavItem] = &[
    item("Dashboard", "/government"),
    item("Resources", "/government/resource/electricity"),
    item("Analytics", "/government/analytics"),
    item("Sustainability", "/government/sustainability"),
    item("Alerts", "/government/alerts"),
];

const CITIZEN_SIDE: &[NavItem] = &[
    item("Dashboard", "/citizen"),
    item("Electricity", "/citizen/usage/electricity"),
    item("Water", "/citizen/usage/water"),
    item("Waste", "/citizen/usage/waste"),
    item("Sustainability", "/citizen/sustainability"),
    item("Alerts", "/citizen/alerts"),
];

const GOVERNMENT_SIDE: &[NavItem] = &[
    item("Dashboard", "/government"),
    item("Electricity", "/government/resource/electricity"),
    item("Water", "/government/resource/water"),
    item("Waste", "/government/resource/waste"),
    item("Analytics", "/government/analytics"),
    item("Sustainability", "/government/sustainability"),
    item("Alerts", "/government/alerts"),
    item("Smart Surveillance", "/government/smart-surveillance"),
];

#[must_use]
pub fn navbar_items(state: AuthState) -> &'static [NavItem] {
    match state.role() {
        Some(Role::Citizen) => CITIZEN_TOP,
        Some(Role::Government) => GOVERNMENT_TOP,
        None => &[],
    }
}

#[must_use]
pub fn sidebar_items(state: AuthState) -> &'static [NavItem] {
    match state.role() {
        Some(Role::Citizen) => CITIZEN_SIDE,
        Some(Role::Government) => GOVERNMENT_SIDE,
        None => &[],
    }
}

/// Name shown next to the user icon.
#[must_use]
pub fn role_label(state: AuthState) -> &'static str {
    state.role().map_or("Guest", Role::label)
}

/// Whether the logout control is offered. Shared by the bar and the mobile menu.
#[must_use]
pub fn shows_logout(state: AuthState) -> bool {
    state.is_authenticated()
}

/// CSS class for a side panel link.
#[must_use]
pub fn sidebar_link_class(item: &NavItem, current_path: &str) -> &'static str {
    if item.path == current_path { "sidebar__link sidebar__link--active" } else { "sidebar__link" }
}

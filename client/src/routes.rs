//! Static route table.
//!
//! DESIGN
//! ======
//! Every navigable path is listed once with the roles allowed to view it.
//! The Leptos `<Routes>` tree in `app` mirrors this table (checked by the
//! server route tests); guards look paths up here instead of carrying their
//! own role lists.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use serde::{Deserialize, Serialize};

use crate::state::auth::Role;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const CITIZEN_HOME: &str = "/citizen";
pub const GOVERNMENT_HOME: &str = "/government";

const CITIZEN_ONLY: &[Role] = &[Role::Citizen];
const GOVERNMENT_ONLY: &[Role] = &[Role::Government];

/// Who may view a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone, signed in or not.
    Public,
    /// Not a page: forwards to the home route of the current role.
    RoleHome,
    /// Only the listed roles. Never empty.
    Roles(&'static [Role]),
}

/// A path pattern and its access rule. Patterns may hold `:param` segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub title: &'static str,
    pub access: Access,
}

pub static ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor { path: ROOT_PATH, title: "Smart City Platform", access: Access::RoleHome },
    RouteDescriptor { path: LOGIN_PATH, title: "Log In", access: Access::Public },
    RouteDescriptor { path: CITIZEN_HOME, title: "Citizen Dashboard", access: Access::Roles(CITIZEN_ONLY) },
    RouteDescriptor { path: "/citizen/usage/:resource", title: "Usage", access: Access::Roles(CITIZEN_ONLY) },
    RouteDescriptor { path: "/citizen/alerts", title: "Alerts and Notifications", access: Access::Roles(CITIZEN_ONLY) },
    RouteDescriptor {
        path: "/citizen/sustainability",
        title: "Sustainability Metrics",
        access: Access::Roles(CITIZEN_ONLY),
    },
    RouteDescriptor { path: GOVERNMENT_HOME, title: "Government Dashboard", access: Access::Roles(GOVERNMENT_ONLY) },
    RouteDescriptor {
        path: "/government/resource/:resource",
        title: "Resource Management",
        access: Access::Roles(GOVERNMENT_ONLY),
    },
    RouteDescriptor {
        path: "/government/analytics",
        title: "Predictive Analytics",
        access: Access::Roles(GOVERNMENT_ONLY),
    },
    RouteDescriptor {
        path: "/government/sustainability",
        title: "Sustainability Metrics",
        access: Access::Roles(GOVERNMENT_ONLY),
    },
    RouteDescriptor {
        path: "/government/alerts",
        title: "Alerts and Notifications",
        access: Access::Roles(GOVERNMENT_ONLY),
    },
    RouteDescriptor {
        path: "/government/smart-surveillance",
        title: "Smart Surveillance",
        access: Access::Roles(GOVERNMENT_ONLY),
    },
];

/// A concrete path resolved against the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'static RouteDescriptor,
    /// Value bound to the pattern's `:param` segment, if it has one.
    pub param: Option<&'a str>,
}

/// Resolve `path` against the table. Query string, fragment and a trailing
/// slash are ignored.
#[must_use]
pub fn match_path(path: &str) -> Option<RouteMatch<'_>> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    let path = if trimmed.is_empty() { ROOT_PATH } else { trimmed };

    ROUTES.iter().find_map(|route| match_pattern(route.path, path).map(|param| RouteMatch { route, param }))
}

/// Outer `Option` is the match; inner is the bound parameter.
#[allow(clippy::option_option)]
fn match_pattern<'a>(pattern: &str, path: &'a str) -> Option<Option<&'a str>> {
    let mut want = pattern.split('/');
    let mut have = path.split('/');
    let mut param = None;
    loop {
        match (want.next(), have.next()) {
            (None, None) => return Some(param),
            (Some(w), Some(h)) if w.starts_with(':') => {
                if h.is_empty() {
                    return None;
                }
                param = Some(h);
            }
            (Some(w), Some(h)) if w == h => {}
            _ => return None,
        }
    }
}

/// Value space of the `:resource` segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Electricity,
    Water,
    Waste,
}

impl Resource {
    pub const ALL: [Self; 3] = [Self::Electricity, Self::Water, Self::Waste];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electricity => "electricity",
            Self::Water => "water",
            Self::Waste => "waste",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electricity => "Electricity",
            Self::Water => "Water",
            Self::Waste => "Waste",
        }
    }
}

/// Document title for a concrete path.
#[must_use]
pub fn page_title(path: &str) -> String {
    let Some(matched) = match_path(path) else {
        return "Page not found".to_owned();
    };
    match matched.param.and_then(Resource::parse) {
        Some(resource) if matched.route.path.starts_with(CITIZEN_HOME) => format!("{} Usage", resource.label()),
        Some(resource) => format!("{} Management", resource.label()),
        None => matched.route.title.to_owned(),
    }
}

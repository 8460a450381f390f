use super::*;

// =============================================================
// Table invariants
// =============================================================

#[test]
fn protected_routes_have_roles() {
    for route in ROUTES {
        if let Access::Roles(roles) = route.access {
            assert!(!roles.is_empty(), "{} has an empty role set", route.path);
        }
    }
}

#[test]
fn login_and_root_are_unrestricted() {
    assert_eq!(match_path(LOGIN_PATH).unwrap().route.access, Access::Public);
    assert_eq!(match_path(ROOT_PATH).unwrap().route.access, Access::RoleHome);
}

#[test]
fn paths_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for route in ROUTES {
        assert!(seen.insert(route.path), "duplicate route {}", route.path);
    }
}

#[test]
fn citizen_and_government_trees_are_role_scoped() {
    for route in ROUTES {
        let Access::Roles(roles) = route.access else { continue };
        if route.path.starts_with(CITIZEN_HOME) {
            assert_eq!(roles, &[Role::Citizen], "{}", route.path);
        } else if route.path.starts_with(GOVERNMENT_HOME) {
            assert_eq!(roles, &[Role::Government], "{}", route.path);
        }
    }
}

// =============================================================
// match_path
// =============================================================

#[test]
fn match_static_path() {
    let matched = match_path("/government/analytics").unwrap();
    assert_eq!(matched.route.path, "/government/analytics");
    assert_eq!(matched.param, None);
}

#[test]
fn match_binds_resource_param() {
    let matched = match_path("/citizen/usage/water").unwrap();
    assert_eq!(matched.route.path, "/citizen/usage/:resource");
    assert_eq!(matched.param, Some("water"));

    let matched = match_path("/government/resource/waste").unwrap();
    assert_eq!(matched.route.path, "/government/resource/:resource");
    assert_eq!(matched.param, Some("waste"));
}

#[test]
fn match_ignores_query_fragment_and_trailing_slash() {
    assert_eq!(match_path("/citizen/").unwrap().route.path, CITIZEN_HOME);
    assert_eq!(match_path("/citizen?tab=1").unwrap().route.path, CITIZEN_HOME);
    assert_eq!(match_path("/government/alerts#top").unwrap().route.path, "/government/alerts");
    assert_eq!(match_path("").unwrap().route.path, ROOT_PATH);
}

#[test]
fn match_rejects_unknown_and_partial_paths() {
    assert!(match_path("/admin").is_none());
    assert!(match_path("/citizen/usage").is_none());
    assert!(match_path("/citizen/usage/water/extra").is_none());
    assert!(match_path("/citizen/usage//").is_none());
}

#[test]
fn match_does_not_validate_param_value() {
    let matched = match_path("/citizen/usage/gas").unwrap();
    assert_eq!(matched.param, Some("gas"));
}

// =============================================================
// Resource
// =============================================================

#[test]
fn resource_parse_known_names() {
    assert_eq!(Resource::parse("electricity"), Some(Resource::Electricity));
    assert_eq!(Resource::parse("water"), Some(Resource::Water));
    assert_eq!(Resource::parse("waste"), Some(Resource::Waste));
    assert_eq!(Resource::parse("Water"), None);
    assert_eq!(Resource::parse("gas"), None);
}

#[test]
fn resource_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Resource::Electricity).unwrap(), "\"electricity\"");
}

// =============================================================
// page_title
// =============================================================

#[test]
fn page_title_uses_route_title() {
    assert_eq!(page_title("/government/smart-surveillance"), "Smart Surveillance");
    assert_eq!(page_title("/citizen"), "Citizen Dashboard");
}

#[test]
fn page_title_names_resource_pages() {
    assert_eq!(page_title("/citizen/usage/water"), "Water Usage");
    assert_eq!(page_title("/government/resource/electricity"), "Electricity Management");
    assert_eq!(page_title("/government/resource/gas"), "Resource Management");
}

#[test]
fn page_title_for_unknown_path() {
    assert_eq!(page_title("/nowhere"), "Page not found");
}

use super::*;

// =============================================================
// Route table
// =============================================================

#[test]
fn every_path_is_listed_once() {
    for entry in ROUTES {
        let hits = ROUTES.iter().filter(|r| r.path == entry.path).count();
        assert_eq!(hits, 1, "duplicate route {}", entry.path);
    }
}

#[test]
fn lookup_returns_layout_role() {
    assert_eq!(lookup("/admin/users").map(|r| r.layout), Some(Layout::Admin));
    assert_eq!(lookup("/authority/reports").map(|r| r.layout), Some(Layout::Authority));
    assert_eq!(lookup("/transport/history").map(|r| r.layout), Some(Layout::Transport));
    assert_eq!(lookup("/contact").map(|r| r.layout), Some(Layout::Public));
}

#[test]
fn lookup_ignores_single_trailing_slash() {
    assert_eq!(lookup("/admin/alerts/").map(|r| r.title), Some("Alert Management"));
    assert_eq!(lookup("/").map(|r| r.title), Some("Home"));
}

#[test]
fn lookup_unknown_path_is_none() {
    assert!(lookup("/admin/unknown").is_none());
    assert!(lookup("/farmer").is_none());
}

#[test]
fn layouts_require_matching_roles() {
    assert_eq!(Layout::Public.required_role(), None);
    assert_eq!(Layout::Admin.required_role(), Some(UserRole::Admin));
    assert_eq!(Layout::Authority.required_role(), Some(UserRole::AgriculturalAuthority));
    assert_eq!(Layout::Transport.required_role(), Some(UserRole::TransportProvider));
}

#[test]
fn role_home_paths_are_dashboard_routes() {
    for role in UserRole::ALL {
        if let Some(home) = role.home_path() {
            let entry = lookup(home).expect("home route");
            assert_eq!(entry.layout.required_role(), Some(role));
        }
    }
}

#[test]
fn layout_for_prefers_route_table() {
    assert_eq!(layout_for("/authority/alerts", Layout::Admin), Layout::Authority);
    assert_eq!(layout_for("/transport/", Layout::Admin), Layout::Transport);
    assert_eq!(layout_for("/admin/unknown", Layout::Admin), Layout::Admin);
}

// =============================================================
// Router declarations
// =============================================================

/// `(path, layout)` for every `<Route>` in `App`, read from its source.
fn declared_routes() -> Vec<(String, Layout)> {
    let source = include_str!("app.rs");
    let body = source.split("</Routes>").next().unwrap_or(source);
    body.split("<Route")
        .skip(1)
        .filter(|chunk| chunk.starts_with(char::is_whitespace))
        .map(|chunk| {
            let segments: Vec<&str> = chunk
                .split("StaticSegment(\"")
                .skip(1)
                .filter_map(|rest| rest.split('"').next())
                .filter(|segment| !segment.is_empty())
                .collect();
            let path = format!("/{}", segments.join("/"));
            let layout = match chunk.split("layout=Layout::").nth(1) {
                None => Layout::Public,
                Some(rest) if rest.starts_with("Admin") => Layout::Admin,
                Some(rest) if rest.starts_with("Authority") => Layout::Authority,
                Some(rest) if rest.starts_with("Transport") => Layout::Transport,
                Some(rest) => panic!("unknown layout in route {path}: {rest}"),
            };
            (path, layout)
        })
        .collect()
}

#[test]
fn router_declares_every_table_route_with_its_layout() {
    let declared = declared_routes();
    assert_eq!(declared.len(), ROUTES.len());
    for (path, layout) in &declared {
        let entry = lookup(path).unwrap_or_else(|| panic!("{path} missing from route table"));
        assert_eq!(entry.layout, *layout, "{path}");
    }
    for entry in ROUTES {
        assert!(declared.iter().any(|(path, _)| path == entry.path), "{} not routed", entry.path);
    }
}

// =============================================================
// Menus
// =============================================================

#[test]
fn menu_links_point_at_routes_of_same_layout() {
    for layout in [Layout::Admin, Layout::Authority, Layout::Transport] {
        for item in layout.menu() {
            let paths: Vec<&str> = match item {
                MenuItem::Link(link) => vec![link.path],
                MenuItem::Group { links, .. } => links.iter().map(|l| l.path).collect(),
            };
            for path in paths {
                let entry = lookup(path).expect("menu path in route table");
                assert_eq!(entry.layout, layout, "{path}");
            }
        }
    }
}

#[test]
fn register_group_contains_its_links() {
    let group = Layout::Admin
        .menu()
        .iter()
        .find(|item| item.label() == "Register")
        .expect("register group");
    assert!(group.contains("/admin/register-farmer"));
    assert!(!group.contains("/admin/users"));
}

#[test]
fn public_layout_has_no_menu() {
    assert!(Layout::Public.menu().is_empty());
}

//! Route table shared by the router, the sidebars and the role guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every path the app serves is listed once in `ROUTES` with the layout it
//! renders inside. `App` registers the same paths with `leptos_router`; the
//! sidebar menus below only link to paths present in the table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::UserRole;

/// Layout shell a route renders inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Public,
    Admin,
    Authority,
    Transport,
}

impl Layout {
    /// Role a session must carry to see this layout.
    pub fn required_role(self) -> Option<UserRole> {
        match self {
            Layout::Public => None,
            Layout::Admin => Some(UserRole::Admin),
            Layout::Authority => Some(UserRole::AgriculturalAuthority),
            Layout::Transport => Some(UserRole::TransportProvider),
        }
    }

    /// Sidebar heading.
    pub fn brand(self) -> &'static str {
        match self {
            Layout::Public => "ChapFarm",
            Layout::Admin => "ChapFarm Admin",
            Layout::Authority => "ChapFarm Authority",
            Layout::Transport => "ChapFarm Transport",
        }
    }

    pub fn menu(self) -> &'static [MenuItem] {
        match self {
            Layout::Public => &[],
            Layout::Admin => ADMIN_MENU,
            Layout::Authority => AUTHORITY_MENU,
            Layout::Transport => TRANSPORT_MENU,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub layout: Layout,
    pub title: &'static str,
}

const fn route(path: &'static str, layout: Layout, title: &'static str) -> RouteEntry {
    RouteEntry { path, layout, title }
}

pub const ROUTES: &[RouteEntry] = &[
    route("/", Layout::Public, "Home"),
    route("/about", Layout::Public, "About"),
    route("/contact", Layout::Public, "Contact"),
    route("/login", Layout::Public, "Login"),
    route("/register", Layout::Public, "Register"),
    route("/admin", Layout::Admin, "Dashboard"),
    route("/admin/users", Layout::Admin, "User Management"),
    route("/admin/register-admin", Layout::Admin, "Register Admin"),
    route("/admin/register-officer", Layout::Admin, "Register Agric Officer"),
    route("/admin/register-transport", Layout::Admin, "Register Transport Provider"),
    route("/admin/register-farmer", Layout::Admin, "Register Farmer"),
    route("/admin/farmer-reports", Layout::Admin, "Farmer Reports"),
    route("/admin/transport-request", Layout::Admin, "Transport Requests"),
    route("/admin/alerts", Layout::Admin, "Alert Management"),
    route("/admin/messages", Layout::Admin, "Messaging"),
    route("/admin/analytics", Layout::Admin, "Analytics"),
    route("/authority", Layout::Authority, "Dashboard"),
    route("/authority/reports", Layout::Authority, "Farmer Reports"),
    route("/authority/alerts", Layout::Authority, "Alert Management"),
    route("/transport", Layout::Transport, "Dashboard"),
    route("/transport/requests", Layout::Transport, "Transport Requests"),
    route("/transport/history", Layout::Transport, "Transport History"),
];

/// Table entry for `path`. A single trailing slash is ignored.
pub fn lookup(path: &str) -> Option<&'static RouteEntry> {
    let path = match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    };
    ROUTES.iter().find(|r| r.path == path)
}

/// Layout the table assigns to `path`, or `fallback` for paths it does not list.
pub fn layout_for(path: &str, fallback: Layout) -> Layout {
    lookup(path).map_or(fallback, |r| r.layout)
}

// =============================================================
// Sidebar menus
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// A sidebar entry: a plain link or a collapsible group of links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Link(NavLink),
    Group { label: &'static str, links: &'static [NavLink] },
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Link(link) => link.label,
            MenuItem::Group { label, .. } => *label,
        }
    }

    /// Whether `current` is this link or one of the group's links.
    pub fn contains(&self, current: &str) -> bool {
        match self {
            MenuItem::Link(link) => link.path == current,
            MenuItem::Group { links, .. } => links.iter().any(|l| l.path == current),
        }
    }
}

const fn link(label: &'static str, path: &'static str) -> MenuItem {
    MenuItem::Link(NavLink { label, path })
}

const REGISTER_LINKS: &[NavLink] = &[
    NavLink { label: "Admin", path: "/admin/register-admin" },
    NavLink { label: "Agric Officer", path: "/admin/register-officer" },
    NavLink { label: "Transport Provider", path: "/admin/register-transport" },
    NavLink { label: "Farmer", path: "/admin/register-farmer" },
];

const ADMIN_MENU: &[MenuItem] = &[
    link("Dashboard", "/admin"),
    link("Users", "/admin/users"),
    MenuItem::Group { label: "Register", links: REGISTER_LINKS },
    link("Farmer Reports", "/admin/farmer-reports"),
    link("Transport Requests", "/admin/transport-request"),
    link("Alerts", "/admin/alerts"),
    link("Messages", "/admin/messages"),
    link("Analytics", "/admin/analytics"),
];

const AUTHORITY_MENU: &[MenuItem] = &[
    link("Dashboard", "/authority"),
    link("Farmer Reports", "/authority/reports"),
    link("Alerts", "/authority/alerts"),
];

const TRANSPORT_MENU: &[MenuItem] = &[
    link("Dashboard", "/transport"),
    link("Requests", "/transport/requests"),
    link("History", "/transport/history"),
];

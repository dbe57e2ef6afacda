//! User-management list state for the admin users page.
//!
//! Besides the account list, the page keeps the per-role directories
//! (farmers, transport providers, authorities) so the role tabs can show the
//! profile records behind the accounts.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use std::collections::HashSet;

use crate::net::types::{AgricultureAuthority, Farmer, RoleChangeResponse, TransportProvider, UserRead, UserRole};
use crate::util::format;
use crate::util::filter::{Tab, count_in_tab, matches_search};

pub type RoleTab = Tab<UserRole>;

#[derive(Clone, Debug, Default)]
pub struct UsersState {
    pub items: Vec<UserRead>,
    pub loading: bool,
    pub tab: RoleTab,
    pub search: String,
    /// User ids with a role change or deactivation in flight.
    pub pending: HashSet<i64>,
    pub directory: Directory,
}

impl UsersState {
    pub fn tabs() -> Vec<RoleTab> {
        std::iter::once(Tab::All).chain(UserRole::ALL.into_iter().map(Tab::Only)).collect()
    }

    pub fn tab_label(tab: &RoleTab) -> &'static str {
        match tab {
            Tab::All => "All",
            Tab::Only(role) => role.label(),
        }
    }

    /// Users matching the role tab and search term (username, email).
    pub fn visible(&self) -> Vec<UserRead> {
        self.items
            .iter()
            .filter(|u| self.tab.accepts(&u.role))
            .filter(|u| matches_search(&self.search, [Some(u.username.as_str()), Some(u.email.as_str())]))
            .cloned()
            .collect()
    }

    pub fn tab_count(&self, tab: &RoleTab) -> usize {
        count_in_tab(&self.items, tab, |u| &u.role)
    }

    pub fn replace(&mut self, items: Vec<UserRead>) {
        self.items = items;
        self.loading = false;
    }

    /// Settle a list fetch. A failed fetch (`None`) keeps the previous items.
    pub fn finish_load(&mut self, items: Option<Vec<UserRead>>) {
        match items {
            Some(items) => self.replace(items),
            None => self.loading = false,
        }
    }

    /// Mark a user as having a mutation in flight. Returns `false` when one
    /// already is.
    pub fn begin_change(&mut self, id: i64) -> bool {
        self.pending.insert(id)
    }

    /// Settle a role change. Returns the role now shown for the user.
    pub fn finish_role_change(&mut self, id: i64, outcome: Option<RoleChangeResponse>) -> Option<UserRole> {
        self.pending.remove(&id);
        let resp = outcome?;
        self.apply_role(resp.user_id, resp.new_role);
        Some(resp.new_role)
    }

    /// Settle a deactivation. Returns `true` when the local copy changed.
    pub fn finish_deactivate<T>(&mut self, id: i64, outcome: Option<T>) -> bool {
        self.pending.remove(&id);
        outcome.is_some() && self.mark_deactivated(id)
    }

    /// Role whose directory the active tab shows, if any.
    pub fn directory_role(&self) -> Option<UserRole> {
        match self.tab {
            Tab::Only(role) if Directory::detail_label(role).is_some() => Some(role),
            _ => None,
        }
    }

    pub fn apply_role(&mut self, id: i64, role: UserRole) -> bool {
        match self.items.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.role = role;
                true
            }
            None => false,
        }
    }

    /// The backend soft-deletes, so the row stays and reads as inactive.
    pub fn mark_deactivated(&mut self, id: i64) -> bool {
        match self.items.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.is_active = false;
                true
            }
            None => false,
        }
    }
}

/// Profile records behind the non-admin accounts.
#[derive(Clone, Debug, Default)]
pub struct Directory {
    pub farmers: Vec<Farmer>,
    pub transporters: Vec<TransportProvider>,
    pub authorities: Vec<AgricultureAuthority>,
}

/// One directory row, flattened across the three record shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileRow {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub detail: String,
}

impl Directory {
    /// Column heading for the role-specific detail; `None` for roles without
    /// a directory.
    pub fn detail_label(role: UserRole) -> Option<&'static str> {
        match role {
            UserRole::Farmer => Some("Registered"),
            UserRole::TransportProvider => Some("Vehicle"),
            UserRole::AgriculturalAuthority => Some("Institution"),
            UserRole::Admin => None,
        }
    }

    /// Rows for `role` matching `search` on name, phone or location.
    pub fn rows(&self, role: UserRole, search: &str) -> Vec<ProfileRow> {
        let rows: Vec<ProfileRow> = match role {
            UserRole::Farmer => self
                .farmers
                .iter()
                .map(|f| ProfileRow {
                    id: f.id,
                    name: f.name.clone(),
                    phone: f.phone.clone(),
                    location: f.location.clone(),
                    detail: f.registered_at.as_deref().map(format::short_date).unwrap_or_default(),
                })
                .collect(),
            UserRole::TransportProvider => self
                .transporters
                .iter()
                .map(|t| ProfileRow {
                    id: t.id,
                    name: t.name.clone(),
                    phone: t.phone.clone(),
                    location: t.location.clone().unwrap_or_default(),
                    detail: t.vehicle_type.clone().unwrap_or_default(),
                })
                .collect(),
            UserRole::AgriculturalAuthority => self
                .authorities
                .iter()
                .map(|a| ProfileRow {
                    id: a.id,
                    name: a.name.clone(),
                    phone: a.phone.clone(),
                    location: a.location.clone().unwrap_or_default(),
                    detail: a.institution_name.clone(),
                })
                .collect(),
            UserRole::Admin => Vec::new(),
        };
        rows.into_iter()
            .filter(|r| {
                matches_search(search, [Some(r.name.as_str()), Some(r.phone.as_str()), Some(r.location.as_str())])
            })
            .collect()
    }
}

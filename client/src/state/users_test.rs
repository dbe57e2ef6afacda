use super::*;

use crate::net::error::ApiError;
use crate::state::toast::{ToastKind, ToastState};

fn make_user(id: i64, username: &str, email: &str, role: UserRole) -> UserRead {
    UserRead {
        id,
        email: email.to_owned(),
        username: username.to_owned(),
        role,
        is_active: true,
    }
}

fn make_state() -> UsersState {
    let mut state = UsersState::default();
    state.replace(vec![
        make_user(1, "okello", "john@example.com", UserRole::Farmer),
        make_user(2, "apio", "sarah@example.com", UserRole::Farmer),
        make_user(3, "mugisha", "robert@example.com", UserRole::TransportProvider),
        make_user(4, "namukwaya", "joy@example.com", UserRole::AgriculturalAuthority),
    ]);
    state
}

fn ids(users: &[UserRead]) -> Vec<i64> {
    users.iter().map(|u| u.id).collect()
}

#[test]
fn role_tab_filters_exact_role() {
    let mut state = make_state();
    state.tab = Tab::Only(UserRole::Farmer);
    assert_eq!(ids(&state.visible()), vec![1, 2]);
    state.tab = Tab::Only(UserRole::Admin);
    assert!(state.visible().is_empty());
}

#[test]
fn search_matches_username_or_email() {
    let mut state = make_state();
    state.search = "ROBERT".to_owned();
    assert_eq!(ids(&state.visible()), vec![3]);
    state.search = "example.com".to_owned();
    assert_eq!(ids(&state.visible()), vec![1, 2, 3, 4]);
}

#[test]
fn apply_role_moves_user_between_tabs() {
    let mut state = make_state();
    assert!(state.apply_role(2, UserRole::Admin));
    assert_eq!(state.items[1].role, UserRole::Admin);
    assert_eq!(state.tab_count(&Tab::Only(UserRole::Farmer)), 1);
    assert_eq!(state.tab_count(&Tab::Only(UserRole::Admin)), 1);
}

#[test]
fn mark_deactivated_keeps_row() {
    let mut state = make_state();
    assert!(state.mark_deactivated(3));
    assert_eq!(state.items.len(), 4);
    assert!(!state.items[2].is_active);
    assert!(!state.mark_deactivated(99));
}

#[test]
fn tabs_list_all_roles() {
    let tabs = UsersState::tabs();
    assert_eq!(tabs.len(), 5);
    assert_eq!(UsersState::tab_label(&tabs[0]), "All");
    assert_eq!(UsersState::tab_label(&Tab::Only(UserRole::TransportProvider)), "Transport Provider");
}

// =============================================================
// Request outcomes
// =============================================================

#[test]
fn failed_load_keeps_previous_users_and_queues_error() {
    let mut state = make_state();
    state.loading = true;
    let before = state.items.clone();
    let mut toasts = ToastState::default();

    let err = ApiError::Status { status: 403, detail: Some("Admin access required".to_owned()) };
    state.finish_load(toasts.settle("Failed to load users", Err(err)).ok());

    assert_eq!(state.items, before);
    assert!(!state.loading);
    assert_eq!(toasts.items[0].kind, ToastKind::Error);
    assert_eq!(toasts.items[0].message, "Failed to load users: Admin access required");
}

#[test]
fn failed_role_change_keeps_role_and_clears_pending() {
    let mut state = make_state();
    assert!(state.begin_change(3));
    assert!(!state.begin_change(3));
    let before = state.items.clone();
    let mut toasts = ToastState::default();

    let outcome = toasts.settle("Role change failed", Err(ApiError::Network("offline".to_owned()))).ok();
    assert_eq!(state.finish_role_change(3, outcome), None);

    assert_eq!(state.items, before);
    assert!(state.pending.is_empty());
    assert_eq!(toasts.items.len(), 1);
}

#[test]
fn role_change_applies_backend_role() {
    let mut state = make_state();
    assert!(state.begin_change(3));
    let resp = RoleChangeResponse {
        message: "Role updated".to_owned(),
        user_id: 3,
        new_role: UserRole::AgriculturalAuthority,
    };
    assert_eq!(state.finish_role_change(3, Some(resp)), Some(UserRole::AgriculturalAuthority));
    assert_eq!(state.items[2].role, UserRole::AgriculturalAuthority);
}

#[test]
fn failed_deactivation_leaves_user_active() {
    let mut state = make_state();
    assert!(state.begin_change(1));
    let mut toasts = ToastState::default();
    let outcome = toasts.settle::<()>("Deactivation failed", Err(ApiError::Unavailable)).ok();
    assert!(!state.finish_deactivate(1, outcome));
    assert!(state.items[0].is_active);
    assert!(state.pending.is_empty());
}

// =============================================================
// Directory
// =============================================================

fn make_directory() -> Directory {
    Directory {
        farmers: vec![Farmer {
            id: 1,
            name: "Okello John".to_owned(),
            phone: "+256700000001".to_owned(),
            location: "Mbale".to_owned(),
            registered_at: Some("2025-06-01T09:30:00".to_owned()),
            user_id: Some(1),
        }],
        transporters: vec![TransportProvider {
            id: 2,
            name: "Gulu Movers".to_owned(),
            phone: "0772123456".to_owned(),
            vehicle_type: Some("Truck".to_owned()),
            location: None,
            user_id: Some(3),
        }],
        authorities: vec![AgricultureAuthority {
            id: 3,
            institution_name: "MAAIF".to_owned(),
            name: "Namukwaya Joy".to_owned(),
            phone: "+256700000009".to_owned(),
            location: Some("Entebbe".to_owned()),
            user_id: Some(4),
        }],
    }
}

#[test]
fn directory_rows_carry_role_detail() {
    let directory = make_directory();
    let farmers = directory.rows(UserRole::Farmer, "");
    assert_eq!(farmers[0].detail, "Jun 1, 2025");
    let transporters = directory.rows(UserRole::TransportProvider, "");
    assert_eq!(transporters[0].detail, "Truck");
    assert_eq!(transporters[0].location, "");
    let authorities = directory.rows(UserRole::AgriculturalAuthority, "");
    assert_eq!(authorities[0].detail, "MAAIF");
    assert!(directory.rows(UserRole::Admin, "").is_empty());
}

#[test]
fn directory_search_matches_name_phone_or_location() {
    let directory = make_directory();
    assert_eq!(directory.rows(UserRole::Farmer, "mbale").len(), 1);
    assert_eq!(directory.rows(UserRole::Farmer, "0001").len(), 1);
    assert!(directory.rows(UserRole::Farmer, "gulu").is_empty());
}

#[test]
fn directory_follows_role_tab() {
    let mut state = make_state();
    assert_eq!(state.directory_role(), None);
    state.tab = Tab::Only(UserRole::TransportProvider);
    assert_eq!(state.directory_role(), Some(UserRole::TransportProvider));
    state.tab = Tab::Only(UserRole::Admin);
    assert_eq!(state.directory_role(), None);
}

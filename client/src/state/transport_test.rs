use super::*;

use crate::net::error::ApiError;
use crate::state::toast::{ToastKind, ToastState};

// =============================================================
// Helpers
// =============================================================

fn make_request(id: i64, farmer: &str, pickup: Option<&str>, dropoff: Option<&str>, status: TransportStatus, ts: &str) -> TransportRequest {
    TransportRequest {
        id,
        farmer_id: id,
        farmer_name: farmer.to_owned(),
        farmer_phone: None,
        transport_type: Some("Truck".to_owned()),
        pickup_location: pickup.map(str::to_owned),
        dropoff_location: dropoff.map(str::to_owned),
        status,
        timestamp: ts.to_owned(),
    }
}

fn make_items() -> Vec<TransportRequest> {
    vec![
        make_request(1, "Treasure", Some("Kampala"), Some("Kampala Main Market"), TransportStatus::Pending, "2025-06-20"),
        make_request(2, "Okello", Some("Mbale"), Some("Jinja Market"), TransportStatus::Accepted, "2025-06-21"),
        make_request(3, "Sarah", Some("Lira"), Some("Gulu Market"), TransportStatus::Rejected, "2025-06-19"),
        make_request(4, "Ayaan", None, Some("Mbale Market"), TransportStatus::Completed, "2025-06-18"),
        make_request(5, "Joy", Some("Masaka"), None, TransportStatus::InTransit, "2025-06-22"),
    ]
}

fn ids(rows: &[TransportRequest]) -> Vec<i64> {
    rows.iter().map(|r| r.id).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn tab_filters_by_exact_status() {
    let items = make_items();
    assert_eq!(ids(&filter_requests(&items, &Tab::Only(TransportStatus::InTransit), "")), vec![5]);
    assert_eq!(ids(&filter_requests(&items, &Tab::All, "")), vec![1, 2, 3, 4, 5]);
}

#[test]
fn search_covers_farmer_pickup_and_dropoff() {
    let items = make_items();
    assert_eq!(ids(&filter_requests(&items, &Tab::All, "mbale")), vec![2, 4]);
    assert_eq!(ids(&filter_requests(&items, &Tab::All, "GULU")), vec![3]);
    assert_eq!(ids(&filter_requests(&items, &Tab::All, "joy")), vec![5]);
}

#[test]
fn state_visible_uses_tab_and_search() {
    let mut state = TransportState::default();
    state.replace(make_items());
    state.tab = Tab::Only(TransportStatus::Accepted);
    state.search = "jinja".to_owned();
    assert_eq!(ids(&state.visible()), vec![2]);
}

#[test]
fn tab_counts_cover_every_tab() {
    let mut state = TransportState::default();
    state.replace(make_items());
    let tabs = TransportState::tabs();
    assert_eq!(tabs.len(), 6);
    assert_eq!(state.tab_count(&Tab::All), 5);
    assert_eq!(state.tab_count(&Tab::Only(TransportStatus::Pending)), 1);
    assert_eq!(state.tab_count(&Tab::Only(TransportStatus::Cancelled)), 0);
    assert_eq!(TransportState::tab_label(&tabs[3]), "In Transit");
}

// =============================================================
// Status updates
// =============================================================

#[test]
fn apply_status_updates_record_in_place() {
    let mut state = TransportState::default();
    state.replace(make_items());
    assert!(state.apply_status(1, TransportStatus::Accepted));
    assert_eq!(state.items[0].status, TransportStatus::Accepted);
    assert_eq!(state.tab_count(&Tab::Only(TransportStatus::Accepted)), 2);
}

#[test]
fn apply_status_unknown_id_leaves_list_untouched() {
    let mut state = TransportState::default();
    state.replace(make_items());
    let before = state.items.clone();
    assert!(!state.apply_status(42, TransportStatus::Completed));
    assert_eq!(state.items, before);
}

// =============================================================
// History and recent
// =============================================================

#[test]
fn history_keeps_terminal_requests_newest_first() {
    assert_eq!(ids(&history(&make_items())), vec![3, 4]);
}

#[test]
fn recent_limits_and_sorts() {
    assert_eq!(ids(&recent(&make_items(), 3)), vec![5, 2, 1]);
    assert_eq!(recent(&[], 3).len(), 0);
}

// =============================================================
// Request outcomes
// =============================================================

#[test]
fn failed_load_keeps_previous_requests_and_queues_error() {
    let mut state = TransportState::default();
    state.replace(make_items());
    state.loading = true;
    let before = state.items.clone();
    let mut toasts = ToastState::default();

    state.finish_load(toasts.settle("Failed to load transport requests", Err(ApiError::Network("offline".to_owned()))).ok());

    assert_eq!(state.items, before);
    assert!(!state.loading);
    assert_eq!(toasts.items[0].kind, ToastKind::Error);
}

#[test]
fn only_one_status_update_in_flight() {
    let mut state = TransportState::default();
    state.replace(make_items());
    assert!(state.begin_update(1));
    assert!(!state.begin_update(2));
    assert_eq!(state.updating, Some(1));
}

#[test]
fn failed_status_update_keeps_status_and_frees_slot() {
    let mut state = TransportState::default();
    state.replace(make_items());
    assert!(state.begin_update(1));
    let before = state.items.clone();
    let mut toasts = ToastState::default();

    let err = ApiError::Status { status: 400, detail: Some("Invalid status transition".to_owned()) };
    let outcome = toasts.settle("Status update failed", Err(err)).ok();
    assert_eq!(state.finish_update(1, TransportStatus::Accepted, outcome), None);

    assert_eq!(state.items, before);
    assert_eq!(state.updating, None);
    assert_eq!(toasts.items[0].message, "Status update failed: Invalid status transition");
}

#[test]
fn status_update_prefers_backend_status() {
    let mut state = TransportState::default();
    state.replace(make_items());
    assert!(state.begin_update(1));
    let resp = TransportUpdateResponse {
        message: "updated".to_owned(),
        request_id: Some(1),
        new_status: Some(TransportStatus::InTransit),
    };
    assert_eq!(
        state.finish_update(1, TransportStatus::Accepted, Some(resp)),
        Some(TransportStatus::InTransit)
    );
    assert_eq!(state.items[0].status, TransportStatus::InTransit);
}

#[test]
fn status_update_without_backend_status_applies_requested() {
    let mut state = TransportState::default();
    state.replace(make_items());
    assert!(state.begin_update(1));
    let resp = TransportUpdateResponse { message: String::new(), request_id: None, new_status: None };
    assert_eq!(state.finish_update(1, TransportStatus::Accepted, Some(resp)), Some(TransportStatus::Accepted));
    assert_eq!(state.items[0].status, TransportStatus::Accepted);
}

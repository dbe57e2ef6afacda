use super::*;

use crate::net::error::ApiError;
use crate::state::toast::{ToastKind, ToastState};

// =============================================================
// Helpers
// =============================================================

fn make_report(id: i64, name: Option<&str>, issue: &str, location: Option<&str>, status: ReportStatus) -> FarmerReport {
    FarmerReport {
        id,
        farmer_id: id * 10,
        farmer_name: name.map(str::to_owned),
        farmer_phone: None,
        issue_type: issue.to_owned(),
        description: None,
        location: location.map(str::to_owned),
        status,
        timestamp: "2025-06-20T08:00:00".to_owned(),
    }
}

fn make_state() -> ReportsState {
    let mut state = ReportsState::default();
    state.replace(vec![
        make_report(1, Some("Okello John"), "Pests", Some("Mbale"), ReportStatus::Pending),
        make_report(2, Some("Apio Sarah"), "Flooding", Some("Lira"), ReportStatus::InProgress),
        make_report(3, None, "Drought", Some("Soroti"), ReportStatus::Resolved),
        make_report(4, Some("Mugisha Robert"), "Pests", None, ReportStatus::Pending),
    ]);
    state
}

fn ids(reports: &[FarmerReport]) -> Vec<i64> {
    reports.iter().map(|r| r.id).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn all_tab_without_search_shows_everything() {
    let state = make_state();
    assert_eq!(ids(&state.visible()), vec![1, 2, 3, 4]);
}

#[test]
fn status_tab_shows_exact_matches() {
    let mut state = make_state();
    state.tab = Tab::Only(ReportStatus::Pending);
    assert_eq!(ids(&state.visible()), vec![1, 4]);
    state.tab = Tab::Only(ReportStatus::Resolved);
    assert_eq!(ids(&state.visible()), vec![3]);
}

#[test]
fn search_matches_name_issue_or_location() {
    let mut state = make_state();
    state.search = "PEST".to_owned();
    assert_eq!(ids(&state.visible()), vec![1, 4]);
    state.search = "lira".to_owned();
    assert_eq!(ids(&state.visible()), vec![2]);
    state.search = "sarah".to_owned();
    assert_eq!(ids(&state.visible()), vec![2]);
}

#[test]
fn tab_and_search_combine() {
    let mut state = make_state();
    state.tab = Tab::Only(ReportStatus::Pending);
    state.search = "mugisha".to_owned();
    assert_eq!(ids(&state.visible()), vec![4]);
}

#[test]
fn tab_counts_ignore_search() {
    let mut state = make_state();
    state.search = "nothing matches this".to_owned();
    assert!(state.visible().is_empty());
    assert_eq!(state.tab_count(&Tab::All), 4);
    assert_eq!(state.tab_count(&Tab::Only(ReportStatus::Pending)), 2);
    assert_eq!(state.tab_count(&Tab::Only(ReportStatus::InProgress)), 1);
}

#[test]
fn tabs_start_with_all() {
    let tabs = ReportsState::tabs();
    assert_eq!(tabs.len(), 4);
    assert_eq!(tabs[0], Tab::All);
    assert_eq!(ReportsState::tab_label(&tabs[2]), "In Progress");
}

// =============================================================
// Resolve
// =============================================================

#[test]
fn mark_resolved_patches_local_copy() {
    let mut state = make_state();
    assert!(state.mark_resolved(1));
    assert_eq!(state.items[0].status, ReportStatus::Resolved);
    assert_eq!(state.tab_count(&Tab::Only(ReportStatus::Resolved)), 2);
}

#[test]
fn mark_resolved_unknown_id_is_noop() {
    let mut state = make_state();
    let before = state.items.clone();
    assert!(!state.mark_resolved(99));
    assert_eq!(state.items, before);
}

#[test]
fn begin_resolve_rejects_duplicate_in_flight() {
    let mut state = make_state();
    assert!(state.begin_resolve(1));
    assert!(!state.begin_resolve(1));
    state.end_resolve(1);
    assert!(state.begin_resolve(1));
}

// =============================================================
// Request outcomes
// =============================================================

#[test]
fn failed_load_keeps_previous_reports_and_queues_error() {
    let mut state = make_state();
    state.loading = true;
    let before = state.items.clone();
    let mut toasts = ToastState::default();

    let err = ApiError::Status { status: 404, detail: Some("No Reports found".to_owned()) };
    state.finish_load(toasts.settle("Failed to load reports", Err(err)).ok());

    assert_eq!(state.items, before);
    assert!(!state.loading);
    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].kind, ToastKind::Error);
    assert!(toasts.items[0].message.contains("No Reports found"));
}

#[test]
fn successful_load_replaces_reports() {
    let mut state = make_state();
    state.finish_load(Some(vec![make_report(9, None, "Drought", None, ReportStatus::Pending)]));
    assert_eq!(ids(&state.items), vec![9]);
}

#[test]
fn failed_resolve_keeps_status_and_releases_button() {
    let mut state = make_state();
    assert!(state.begin_resolve(1));
    let before = state.items.clone();
    let mut toasts = ToastState::default();

    let err = ApiError::Status { status: 404, detail: Some("Report not found".to_owned()) };
    let outcome = toasts.settle::<()>("Could not resolve report", Err(err)).ok();
    assert!(!state.finish_resolve(1, outcome));

    assert_eq!(state.items, before);
    assert!(!state.resolving.contains(&1));
    assert_eq!(toasts.items[0].message, "Could not resolve report: Report not found");
}

#[test]
fn successful_resolve_patches_in_place() {
    let mut state = make_state();
    assert!(state.begin_resolve(1));
    assert!(state.finish_resolve(1, Some(())));
    assert_eq!(state.items[0].status, ReportStatus::Resolved);
    assert!(state.resolving.is_empty());
}

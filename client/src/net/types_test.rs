use super::*;

// =============================================================
// UserRole
// =============================================================

#[test]
fn user_role_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&UserRole::AgriculturalAuthority).unwrap(),
        "\"agricultural_authority\""
    );
    assert_eq!(serde_json::to_string(&UserRole::TransportProvider).unwrap(), "\"transport_provider\"");
}

#[test]
fn user_role_parse_matches_wire_value() {
    for role in UserRole::ALL {
        assert_eq!(UserRole::parse(role.as_str()), Some(role));
    }
    assert_eq!(UserRole::parse("superuser"), None);
}

#[test]
fn user_role_home_paths() {
    assert_eq!(UserRole::Admin.home_path(), Some("/admin"));
    assert_eq!(UserRole::AgriculturalAuthority.home_path(), Some("/authority"));
    assert_eq!(UserRole::TransportProvider.home_path(), Some("/transport"));
    assert_eq!(UserRole::Farmer.home_path(), None);
}

#[test]
fn user_read_defaults_active_when_missing() {
    let user: UserRead = serde_json::from_value(serde_json::json!({
        "id": 4,
        "email": "joy@example.com",
        "username": "joy",
        "role": "farmer"
    }))
    .unwrap();
    assert!(user.is_active);
    assert_eq!(user.role, UserRole::Farmer);
}

// =============================================================
// Role directories
// =============================================================

#[test]
fn farmer_row_decodes_backend_record() {
    let farmer: Farmer = serde_json::from_value(serde_json::json!({
        "id": 3,
        "name": "Okello John",
        "phone": "+256700000001",
        "location": "Mbale",
        "registered_at": "2025-06-01T09:30:00",
        "user_id": 11
    }))
    .unwrap();
    assert_eq!(farmer.name, "Okello John");
    assert_eq!(farmer.location, "Mbale");
    assert_eq!(farmer.user_id, Some(11));
}

#[test]
fn transport_provider_row_tolerates_missing_optionals() {
    let provider: TransportProvider = serde_json::from_value(serde_json::json!({
        "id": 2,
        "name": "Gulu Movers",
        "phone": "0772123456"
    }))
    .unwrap();
    assert_eq!(provider.vehicle_type, None);
    assert_eq!(provider.location, None);
    assert_eq!(provider.user_id, None);
}

#[test]
fn authority_row_keeps_institution_name() {
    let authority: AgricultureAuthority = serde_json::from_value(serde_json::json!({
        "id": 5,
        "institution_name": "MAAIF",
        "name": "Apio Sarah",
        "phone": "+256700000009",
        "location": "Entebbe",
        "user_id": 8
    }))
    .unwrap();
    assert_eq!(authority.institution_name, "MAAIF");
    assert_eq!(authority.location.as_deref(), Some("Entebbe"));
}

// =============================================================
// Summaries
// =============================================================

#[test]
fn dashboard_summary_fills_missing_counters_with_zero() {
    let summary: DashboardSummary = serde_json::from_value(serde_json::json!({
        "total_users": 12,
        "total_farmers": 7
    }))
    .unwrap();
    assert_eq!(summary.total_users, 12);
    assert_eq!(summary.total_farmers, 7);
    assert_eq!(summary.total_transport_requests, 0);
}

// =============================================================
// ReportStatus
// =============================================================

#[test]
fn report_status_parses_loose_spellings() {
    assert_eq!(ReportStatus::parse("pending"), ReportStatus::Pending);
    assert_eq!(ReportStatus::parse("In Progress"), ReportStatus::InProgress);
    assert_eq!(ReportStatus::parse("in_progress"), ReportStatus::InProgress);
    assert_eq!(ReportStatus::parse("RESOLVED"), ReportStatus::Resolved);
    assert_eq!(ReportStatus::parse("Escalated"), ReportStatus::Other("Escalated".to_owned()));
}

#[test]
fn report_status_serializes_label() {
    assert_eq!(serde_json::to_string(&ReportStatus::InProgress).unwrap(), "\"In Progress\"");
}

#[test]
fn farmer_report_without_status_defaults_to_pending() {
    let report: FarmerReport = serde_json::from_value(serde_json::json!({
        "id": 1,
        "farmer_id": 9,
        "issue_type": "Pests",
        "timestamp": "2025-06-20T08:00:00"
    }))
    .unwrap();
    assert_eq!(report.status, ReportStatus::Pending);
    assert_eq!(report.display_name(), "Farmer ID: 9");
}

#[test]
fn farmer_report_display_name_prefers_name() {
    let report: FarmerReport = serde_json::from_value(serde_json::json!({
        "id": 1,
        "farmer_id": 9,
        "farmer_name": "Okello John",
        "issue_type": "Flood",
        "status": "Resolved"
    }))
    .unwrap();
    assert_eq!(report.display_name(), "Okello John");
    assert_eq!(report.status, ReportStatus::Resolved);
}

#[test]
fn issue_tag_class_groups_synonyms() {
    assert_eq!(issue_tag_class("Pest"), issue_tag_class("Pests"));
    assert_eq!(issue_tag_class("Flood"), issue_tag_class("Flooding"));
    assert_eq!(issue_tag_class("Hail"), "tag");
}

// =============================================================
// TransportStatus
// =============================================================

#[test]
fn transport_status_parses_snake_and_title_case() {
    assert_eq!(TransportStatus::parse("in_transit"), TransportStatus::InTransit);
    assert_eq!(TransportStatus::parse("In Transit"), TransportStatus::InTransit);
    assert_eq!(TransportStatus::parse("accepted"), TransportStatus::Accepted);
    assert_eq!(TransportStatus::parse("Canceled"), TransportStatus::Cancelled);
}

#[test]
fn transport_status_update_serializes_title_case() {
    let body = TransportStatusUpdate { status: TransportStatus::InTransit };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "status": "In Transit" })
    );
}

#[test]
fn transport_status_lifecycle_actions() {
    assert_eq!(
        TransportStatus::Pending.next_actions(),
        vec![TransportStatus::Accepted, TransportStatus::Rejected]
    );
    assert_eq!(TransportStatus::Accepted.next_actions(), vec![TransportStatus::InTransit]);
    assert_eq!(TransportStatus::InTransit.next_actions(), vec![TransportStatus::Completed]);
    assert!(TransportStatus::Completed.next_actions().is_empty());
    assert!(TransportStatus::Rejected.next_actions().is_empty());
}

#[test]
fn transport_status_terminal_states() {
    assert!(TransportStatus::Completed.is_terminal());
    assert!(TransportStatus::Rejected.is_terminal());
    assert!(TransportStatus::Cancelled.is_terminal());
    assert!(!TransportStatus::InTransit.is_terminal());
}

#[test]
fn transport_request_tolerates_missing_optional_fields() {
    let req: TransportRequest = serde_json::from_value(serde_json::json!({
        "id": 3,
        "farmer_id": 2,
        "status": "Pending"
    }))
    .unwrap();
    assert_eq!(req.farmer_name, "");
    assert_eq!(req.pickup_location, None);
    assert_eq!(req.status, TransportStatus::Pending);
}

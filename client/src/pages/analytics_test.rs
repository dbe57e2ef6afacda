use super::*;

fn report(id: i64, issue: &str, status: ReportStatus) -> FarmerReport {
    FarmerReport {
        id,
        farmer_id: id,
        farmer_name: None,
        farmer_phone: None,
        issue_type: issue.to_owned(),
        description: None,
        location: None,
        status,
        timestamp: String::new(),
    }
}

fn request(id: i64, status: TransportStatus) -> TransportRequest {
    TransportRequest {
        id,
        farmer_id: id,
        farmer_name: String::new(),
        farmer_phone: None,
        transport_type: None,
        pickup_location: None,
        dropoff_location: None,
        status,
        timestamp: String::new(),
    }
}

#[test]
fn report_status_series_counts_each_tab() {
    let reports = vec![
        report(1, "Pest", ReportStatus::Pending),
        report(2, "Flood", ReportStatus::Pending),
        report(3, "Drought", ReportStatus::Resolved),
        report(4, "Pest", ReportStatus::Other("Escalated".to_owned())),
    ];
    assert_eq!(
        report_status_series(&reports),
        vec![("Pending".to_owned(), 2), ("In Progress".to_owned(), 0), ("Resolved".to_owned(), 1)]
    );
}

#[test]
fn transport_status_series_covers_lifecycle() {
    let requests = vec![
        request(1, TransportStatus::InTransit),
        request(2, TransportStatus::Completed),
        request(3, TransportStatus::Completed),
    ];
    let series = transport_status_series(&requests);
    assert_eq!(series.len(), 6);
    assert_eq!(series[2], ("In Transit".to_owned(), 1));
    assert_eq!(series[3], ("Completed".to_owned(), 2));
}

#[test]
fn transport_status_series_counts_cancelled_requests() {
    let requests = vec![
        request(1, TransportStatus::Cancelled),
        request(2, TransportStatus::Cancelled),
        request(3, TransportStatus::Pending),
    ];
    let series = transport_status_series(&requests);
    assert_eq!(series.last(), Some(&("Cancelled".to_owned(), 2)));
    let total: u64 = series.iter().map(|(_, n)| n).sum();
    assert_eq!(total, requests.len() as u64);
}

#[test]
fn issue_type_series_merges_case_and_sorts_by_count() {
    let reports = vec![
        report(1, "Flood", ReportStatus::Pending),
        report(2, "pest", ReportStatus::Pending),
        report(3, "Pest", ReportStatus::Pending),
        report(4, " ", ReportStatus::Pending),
        report(5, "Drought", ReportStatus::Pending),
    ];
    assert_eq!(
        issue_type_series(&reports),
        vec![("pest".to_owned(), 2), ("Drought".to_owned(), 1), ("Flood".to_owned(), 1)]
    );
}

#[test]
fn empty_inputs_give_zero_or_empty_series() {
    assert!(report_status_series(&[]).iter().all(|(_, n)| *n == 0));
    assert!(issue_type_series(&[]).is_empty());
}

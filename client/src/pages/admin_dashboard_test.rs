use super::*;

#[test]
fn summary_series_keeps_counter_order() {
    let summary = DashboardSummary {
        total_farmers: 120,
        total_transport_providers: 8,
        total_agriculture_authorities: 3,
        total_transport_requests: 45,
        total_reports: 30,
        ..DashboardSummary::default()
    };
    let series = summary_series(&summary);
    let values: Vec<u64> = series.iter().map(|(_, v)| *v).collect();
    assert_eq!(values, vec![120, 8, 3, 45, 30]);
    assert_eq!(series[0].0, "Farmers");
}

#[test]
fn missing_counters_chart_as_zero() {
    let summary: DashboardSummary = serde_json::from_str(r#"{"total_farmers": 4}"#).expect("summary");
    let series = summary_series(&summary);
    assert_eq!(series[0].1, 4);
    assert!(series[1..].iter().all(|(_, v)| *v == 0));
}

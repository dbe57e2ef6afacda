//! Admin analytics: charts derived from the summary, reports and requests.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use leptos::prelude::*;

use crate::components::bar_chart::BarChart;
use crate::net::api;
use crate::net::types::{DashboardSummary, FarmerReport, ReportStatus, TransportRequest, TransportStatus};
use crate::pages::admin_dashboard::summary_series;
use crate::state::toast::{ToastState, notify_error};
use crate::util::filter::{Tab, count_in_tab};

/// Report counts per review status, in tab order.
pub fn report_status_series(reports: &[FarmerReport]) -> Vec<(String, u64)> {
    ReportStatus::TABS
        .iter()
        .map(|status| {
            let count = count_in_tab(reports, &Tab::Only(status.clone()), |r| &r.status);
            (status.label().to_owned(), count as u64)
        })
        .collect()
}

/// Request counts per lifecycle status, in tab order, with Cancelled last.
pub fn transport_status_series(requests: &[TransportRequest]) -> Vec<(String, u64)> {
    TransportStatus::TABS
        .iter()
        .chain([TransportStatus::Cancelled].iter())
        .map(|status| {
            let count = count_in_tab(requests, &Tab::Only(status.clone()), |r| &r.status);
            (status.label().to_owned(), count as u64)
        })
        .collect()
}

/// Report counts per issue type, most frequent first.
pub fn issue_type_series(reports: &[FarmerReport]) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    for report in reports {
        let key = report.issue_type.trim();
        if key.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
            Some((_, n)) => *n += 1,
            None => counts.push((key.to_owned(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let summary = RwSignal::new(DashboardSummary::default());
    let reports = RwSignal::new(Vec::<FarmerReport>::new());
    let requests = RwSignal::new(Vec::<TransportRequest>::new());

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let (summary_res, reports_res, requests_res) = futures::join!(
                api::fetch_dashboard_summary(),
                api::fetch_reports(),
                api::fetch_transport_requests()
            );
            match summary_res {
                Ok(data) => summary.set(data),
                Err(err) => notify_error(toasts, "Failed to load summary", &err),
            }
            match reports_res {
                Ok(items) => reports.set(items),
                Err(err) => notify_error(toasts, "Failed to load reports", &err),
            }
            match requests_res {
                Ok(items) => requests.set(items),
                Err(err) => notify_error(toasts, "Failed to load transport requests", &err),
            }
        });
    });

    view! {
        <div class="dashboard-page analytics">
            <BarChart title="Platform overview" series=Signal::derive(move || summary.with(summary_series)) />
            <BarChart
                title="Farmer reports by status"
                series=Signal::derive(move || reports.with(|r| report_status_series(r)))
            />
            <BarChart
                title="Farmer reports by issue"
                series=Signal::derive(move || reports.with(|r| issue_type_series(r)))
            />
            <BarChart
                title="Transport requests by status"
                series=Signal::derive(move || requests.with(|r| transport_status_series(r)))
            />
        </div>
    }
}

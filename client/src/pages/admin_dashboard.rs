//! Admin landing dashboard: platform counters and an overview chart.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::components::bar_chart::BarChart;
use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::types::DashboardSummary;
use crate::state::toast::{ToastState, notify_error};
use crate::util::format;

/// Account and activity counters charted on the dashboard.
pub fn summary_series(summary: &DashboardSummary) -> Vec<(String, u64)> {
    vec![
        ("Farmers".to_owned(), summary.total_farmers),
        ("Transporters".to_owned(), summary.total_transport_providers),
        ("Authorities".to_owned(), summary.total_agriculture_authorities),
        ("Requests".to_owned(), summary.total_transport_requests),
        ("Reports".to_owned(), summary.total_reports),
    ]
}

pub(crate) fn load_summary(
    summary: RwSignal<Option<DashboardSummary>>,
    loading: RwSignal<bool>,
    toasts: RwSignal<ToastState>,
) {
    loading.set(true);
    leptos::task::spawn_local(async move {
        match api::fetch_dashboard_summary().await {
            Ok(data) => summary.set(Some(data)),
            Err(err) => notify_error(toasts, "Failed to load dashboard summary", &err),
        }
        loading.set(false);
    });
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let summary = RwSignal::new(None::<DashboardSummary>);
    let loading = RwSignal::new(false);

    Effect::new(move || load_summary(summary, loading, toasts));

    let counter = move |pick: fn(&DashboardSummary) -> u64| {
        Signal::derive(move || summary.with(|s| format::count_or_dash(s.as_ref().map(pick))))
    };
    let series = Signal::derive(move || summary.with(|s| s.as_ref().map(summary_series).unwrap_or_default()));

    view! {
        <div class="dashboard-page">
            <div class="panel__toolbar">
                <p class="panel__lead">"Platform overview"</p>
                <button
                    class="btn"
                    on:click=move |_| load_summary(summary, loading, toasts)
                    disabled=move || loading.get()
                >
                    {move || if loading.get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>
            <div class="stat-grid">
                <StatCard label="Total Users" value=counter(|s| s.total_users) accent="green" />
                <StatCard label="Farmers" value=counter(|s| s.total_farmers) />
                <StatCard label="Transport Providers" value=counter(|s| s.total_transport_providers) />
                <StatCard label="Agric Authorities" value=counter(|s| s.total_agriculture_authorities) />
                <StatCard
                    label="Transport Requests"
                    value=counter(|s| s.total_transport_requests)
                    hint="all time"
                />
                <StatCard
                    label="Pending Requests"
                    value=counter(|s| s.pending_transport_requests)
                    accent="amber"
                />
                <StatCard label="Pending Reports" value=counter(|s| s.pending_reports) accent="amber" />
                <StatCard
                    label="Alerts Sent"
                    value=counter(|s| s.total_weather_alerts + s.total_agriculture_alerts)
                />
            </div>
            <BarChart title="Platform activity" series=series />
        </div>
    }
}

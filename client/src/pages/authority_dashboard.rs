//! Agricultural-authority landing dashboard.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::types::{AlertCount, AuthoritySummary};
use crate::state::toast::{ToastState, settle};
use crate::util::format;

pub(crate) fn load_overview(
    summary: RwSignal<Option<AuthoritySummary>>,
    alerts: RwSignal<Option<AlertCount>>,
    loading: RwSignal<bool>,
    toasts: RwSignal<ToastState>,
) {
    loading.set(true);
    leptos::task::spawn_local(async move {
        let (summary_res, alerts_res) = futures::join!(api::fetch_report_summary(), api::fetch_alert_count());
        if let Some(data) = settle(toasts, "Failed to load report summary", summary_res) {
            summary.set(Some(data));
        }
        if let Some(data) = settle(toasts, "Failed to load alert count", alerts_res) {
            alerts.set(Some(data));
        }
        loading.set(false);
    });
}

#[component]
pub fn AuthorityDashboardPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let summary = RwSignal::new(None::<AuthoritySummary>);
    let alerts = RwSignal::new(None::<AlertCount>);
    let loading = RwSignal::new(false);

    Effect::new(move || load_overview(summary, alerts, loading, toasts));

    let stat = move |pick: fn(&AuthoritySummary) -> u64| {
        Signal::derive(move || summary.with(|s| format::count_or_dash(s.as_ref().map(pick))))
    };
    let alert_total = Signal::derive(move || alerts.with(|a| format::count_or_dash(a.as_ref().map(|a| a.count))));

    view! {
        <div class="dashboard-page">
            <div class="panel__toolbar">
                <p class="panel__lead">"Farmer reports and advisories"</p>
                <button
                    class="btn"
                    on:click=move |_| load_overview(summary, alerts, loading, toasts)
                    disabled=move || loading.get()
                >
                    {move || if loading.get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>
            <div class="stat-grid">
                <StatCard label="Total Reports" value=stat(|s| s.total_reports) accent="green" />
                <StatCard label="Pending" value=stat(|s| s.pending_reports) accent="amber" />
                <StatCard label="In Progress" value=stat(|s| s.in_progress_reports) />
                <StatCard label="Resolved" value=stat(|s| s.resolved_reports) />
                <StatCard label="Alerts Sent" value=alert_total hint="advisories issued" />
            </div>
            <section class="quick-actions">
                <h2>"Quick actions"</h2>
                <a class="btn btn--primary" href="/authority/reports">
                    "Review farmer reports"
                </a>
                <a class="btn" href="/authority/alerts">
                    "Send an alert"
                </a>
            </section>
        </div>
    }
}

//! Transport-provider landing dashboard: counters and the latest requests.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::types::{TransportRequest, TransportSummary};
use crate::state::toast::{ToastState, settle};
use crate::state::transport::recent;
use crate::util::format;

/// Requests listed under "Recent requests".
const RECENT_LIMIT: usize = 5;

pub(crate) fn load_overview(
    summary: RwSignal<Option<TransportSummary>>,
    latest: RwSignal<Vec<TransportRequest>>,
    loading: RwSignal<bool>,
    toasts: RwSignal<ToastState>,
) {
    loading.set(true);
    leptos::task::spawn_local(async move {
        let (summary_res, requests_res) =
            futures::join!(api::fetch_transport_summary(), api::fetch_transport_requests());
        if let Some(data) = settle(toasts, "Failed to load transport summary", summary_res) {
            summary.set(Some(data));
        }
        if let Some(items) = settle(toasts, "Failed to load transport requests", requests_res) {
            latest.set(recent(&items, RECENT_LIMIT));
        }
        loading.set(false);
    });
}

#[component]
pub fn TransportDashboardPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let summary = RwSignal::new(None::<TransportSummary>);
    let latest = RwSignal::new(Vec::<TransportRequest>::new());
    let loading = RwSignal::new(false);

    Effect::new(move || load_overview(summary, latest, loading, toasts));

    let stat = move |pick: fn(&TransportSummary) -> u64| {
        Signal::derive(move || summary.with(|s| format::count_or_dash(s.as_ref().map(pick))))
    };

    view! {
        <div class="dashboard-page">
            <div class="panel__toolbar">
                <p class="panel__lead">"Your transport activity"</p>
                <button
                    class="btn"
                    on:click=move |_| load_overview(summary, latest, loading, toasts)
                    disabled=move || loading.get()
                >
                    {move || if loading.get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>
            <div class="stat-grid">
                <StatCard label="Active Requests" value=stat(|s| s.active_requests) accent="green" />
                <StatCard label="Pending Requests" value=stat(|s| s.pending_requests) accent="amber" />
                <StatCard label="Completed Trips" value=stat(|s| s.completed_trips) />
            </div>
            <section class="panel">
                <div class="panel__toolbar">
                    <h2 class="panel__title">"Recent requests"</h2>
                    <a class="btn" href="/transport/requests">
                        "View all"
                    </a>
                </div>
                <Show
                    when=move || !latest.with(Vec::is_empty)
                    fallback=|| view! { <p class="panel__empty">"No transport requests yet."</p> }
                >
                    <ul class="request-list">
                        <For
                            each=move || latest.get()
                            key=|r| r.id
                            children=|request: TransportRequest| {
                                view! {
                                    <li class="request-list__item">
                                        <span class="request-list__farmer">{request.farmer_name.clone()}</span>
                                        <span class="request-list__route">
                                            {format::or_placeholder(request.pickup_location.as_deref(), "?")}
                                            " → "
                                            {format::or_placeholder(request.dropoff_location.as_deref(), "?")}
                                        </span>
                                        <span class="request-list__date">{format::short_date(&request.timestamp)}</span>
                                        <span class=request.status.badge_class()>{request.status.label().to_owned()}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </section>
        </div>
    }
}

//! Farmer report review, shared by the admin and authority layouts.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{FarmerReport, ReportStatus, issue_tag_class};
use crate::state::reports::ReportsState;
use crate::state::toast::{ToastState, notify_success, settle};
use crate::util::format;

fn load_reports(reports: RwSignal<ReportsState>, toasts: RwSignal<ToastState>) {
    reports.update(|s| s.loading = true);
    leptos::task::spawn_local(async move {
        let items = settle(toasts, "Failed to load reports", api::fetch_reports().await);
        reports.update(|s| s.finish_load(items));
    });
}

fn resolve(reports: RwSignal<ReportsState>, toasts: RwSignal<ToastState>, report_id: i64) {
    if !reports.try_update(|s| s.begin_resolve(report_id)).unwrap_or(false) {
        return;
    }
    leptos::task::spawn_local(async move {
        let outcome = settle(toasts, "Could not resolve report", api::resolve_report(report_id).await);
        if reports.try_update(|s| s.finish_resolve(report_id, outcome)).unwrap_or(false) {
            notify_success(toasts, "Report marked as resolved");
        }
    });
}

#[component]
pub fn FarmerReportsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let reports = RwSignal::new(ReportsState::default());

    Effect::new(move || load_reports(reports, toasts));

    let tabs = ReportsState::tabs()
        .into_iter()
        .map(|tab| {
            let label = ReportsState::tab_label(&tab);
            let is_active = {
                let tab = tab.clone();
                move || reports.with(|s| s.tab == tab)
            };
            let count = {
                let tab = tab.clone();
                move || reports.with(|s| s.tab_count(&tab))
            };
            view! {
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=is_active
                    on:click=move |_| reports.update(|s| s.tab = tab.clone())
                >
                    {label}
                    <span class="tabs__count">{count}</span>
                </button>
            }
        })
        .collect_view();

    let card = move |report: FarmerReport| {
        let id = report.id;
        let resolving = move || reports.with(|s| s.resolving.contains(&id));
        let resolved = report.status == ReportStatus::Resolved;
        view! {
            <article class="report-card">
                <header class="report-card__header">
                    <h3 class="report-card__farmer">{report.display_name()}</h3>
                    <span class=report.status.badge_class()>{report.status.label().to_owned()}</span>
                </header>
                <span class=issue_tag_class(&report.issue_type)>{report.issue_type.clone()}</span>
                <p class="report-card__description">
                    {format::or_placeholder(report.description.as_deref(), "No description provided.")}
                </p>
                <dl class="report-card__meta">
                    <dt>"Location"</dt>
                    <dd>{format::or_placeholder(report.location.as_deref(), "Unknown")}</dd>
                    <dt>"Phone"</dt>
                    <dd>{format::or_placeholder(report.farmer_phone.as_deref(), "N/A")}</dd>
                    <dt>"Reported"</dt>
                    <dd>{format::short_date(&report.timestamp)}</dd>
                </dl>
                <Show when=move || !resolved>
                    <button
                        class="btn btn--primary btn--small"
                        disabled=resolving
                        on:click=move |_| resolve(reports, toasts, id)
                    >
                        {move || if resolving() { "Resolving..." } else { "Mark Resolved" }}
                    </button>
                </Show>
            </article>
        }
    };

    view! {
        <div class="panel">
            <div class="panel__toolbar">
                <input
                    class="search"
                    type="search"
                    placeholder="Search by farmer, issue or location"
                    prop:value=move || reports.with(|s| s.search.clone())
                    on:input=move |ev| reports.update(|s| s.search = event_target_value(&ev))
                />
                <button
                    class="btn"
                    on:click=move |_| load_reports(reports, toasts)
                    disabled=move || reports.with(|s| s.loading)
                >
                    "Refresh"
                </button>
            </div>
            <div class="tabs">{tabs}</div>
            <Show
                when=move || !reports.with(|s| s.loading)
                fallback=|| view! { <p class="panel__empty">"Loading reports..."</p> }
            >
                <Show
                    when=move || !reports.with(|s| s.visible().is_empty())
                    fallback=|| view! { <p class="panel__empty">"No reports found."</p> }
                >
                    <div class="report-grid">
                        <For
                            each=move || reports.with(ReportsState::visible)
                            key=|r| (r.id, r.status.clone())
                            children=card
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}

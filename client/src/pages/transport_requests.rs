//! Transport request management, shared by the admin and transport layouts.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{TransportRequest, TransportStatus};
use crate::state::toast::{ToastState, notify_success, settle};
use crate::state::transport::TransportState;
use crate::util::format;

fn load_requests(requests: RwSignal<TransportState>, toasts: RwSignal<ToastState>) {
    requests.update(|s| s.loading = true);
    leptos::task::spawn_local(async move {
        let items = settle(toasts, "Failed to load transport requests", api::fetch_transport_requests().await);
        requests.update(|s| s.finish_load(items));
    });
}

fn update_status(
    requests: RwSignal<TransportState>,
    toasts: RwSignal<ToastState>,
    request_id: i64,
    status: TransportStatus,
) {
    if !requests.try_update(|s| s.begin_update(request_id)).unwrap_or(false) {
        return;
    }
    leptos::task::spawn_local(async move {
        let outcome = settle(
            toasts,
            "Status update failed",
            api::update_transport_status(request_id, status.clone()).await,
        );
        if let Some(applied) = requests.try_update(|s| s.finish_update(request_id, status, outcome)).flatten() {
            notify_success(toasts, format!("Request marked {}", applied.label()));
        }
    });
}

#[component]
pub fn TransportRequestsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let requests = RwSignal::new(TransportState::default());

    Effect::new(move || load_requests(requests, toasts));

    let tabs = TransportState::tabs()
        .into_iter()
        .map(|tab| {
            let label = TransportState::tab_label(&tab);
            let is_active = {
                let tab = tab.clone();
                move || requests.with(|s| s.tab == tab)
            };
            let count = {
                let tab = tab.clone();
                move || requests.with(|s| s.tab_count(&tab))
            };
            view! {
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=is_active
                    on:click=move |_| requests.update(|s| s.tab = tab.clone())
                >
                    {label}
                    <span class="tabs__count">{count}</span>
                </button>
            }
        })
        .collect_view();

    let row = move |request: TransportRequest| {
        let id = request.id;
        let busy = move || requests.with(|s| s.updating.is_some());
        let actions = request
            .status
            .next_actions()
            .into_iter()
            .map(|next| {
                let class = if next == TransportStatus::Rejected {
                    "btn btn--danger btn--small"
                } else {
                    "btn btn--primary btn--small"
                };
                let label = next.action_label();
                view! {
                    <button class=class disabled=busy on:click=move |_| update_status(requests, toasts, id, next.clone())>
                        {label}
                    </button>
                }
            })
            .collect_view();
        view! {
            <tr>
                <td>{request.farmer_name.clone()}</td>
                <td>{format::or_placeholder(request.farmer_phone.as_deref(), "N/A")}</td>
                <td>{format::or_placeholder(request.transport_type.as_deref(), "N/A")}</td>
                <td>{format::or_placeholder(request.pickup_location.as_deref(), "N/A")}</td>
                <td>{format::or_placeholder(request.dropoff_location.as_deref(), "N/A")}</td>
                <td>{format::short_date(&request.timestamp)}</td>
                <td>
                    <span class=request.status.badge_class()>{request.status.label().to_owned()}</span>
                </td>
                <td class="table__actions">{actions}</td>
            </tr>
        }
    };

    view! {
        <div class="panel">
            <div class="panel__toolbar">
                <input
                    class="search"
                    type="search"
                    placeholder="Search by farmer, pickup or dropoff"
                    prop:value=move || requests.with(|s| s.search.clone())
                    on:input=move |ev| requests.update(|s| s.search = event_target_value(&ev))
                />
                <button
                    class="btn"
                    on:click=move |_| load_requests(requests, toasts)
                    disabled=move || requests.with(|s| s.loading)
                >
                    "Refresh"
                </button>
            </div>
            <div class="tabs">{tabs}</div>
            <Show
                when=move || !requests.with(|s| s.loading)
                fallback=|| view! { <p class="panel__empty">"Loading transport requests..."</p> }
            >
                <Show
                    when=move || !requests.with(|s| s.visible().is_empty())
                    fallback=|| view! { <p class="panel__empty">"No transport requests found."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Farmer"</th>
                                <th>"Phone"</th>
                                <th>"Type"</th>
                                <th>"Pickup"</th>
                                <th>"Dropoff"</th>
                                <th>"Date"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || requests.with(TransportState::visible)
                                key=|r| (r.id, r.status.clone())
                                children=row
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}

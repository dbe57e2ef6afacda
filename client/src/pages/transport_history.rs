//! Read-only history of finished transport requests.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::TransportRequest;
use crate::state::toast::{ToastState, settle};
use crate::state::transport::{TransportState, filter_requests, history};
use crate::util::filter::Tab;
use crate::util::format;

#[component]
pub fn TransportHistoryPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(TransportState { loading: true, ..TransportState::default() });

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let items = settle(toasts, "Failed to load transport history", api::fetch_transport_history().await);
            state.update(|s| s.finish_load(items.map(|items| history(&items))));
        });
    });

    let rows = move || state.with(|s| filter_requests(&s.items, &Tab::All, &s.search));

    view! {
        <div class="panel">
            <div class="panel__toolbar">
                <input
                    class="search"
                    type="search"
                    placeholder="Search history"
                    prop:value=move || state.with(|s| s.search.clone())
                    on:input=move |ev| state.update(|s| s.search = event_target_value(&ev))
                />
            </div>
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <p class="panel__empty">"Loading history..."</p> }
            >
                <Show
                    when=move || !rows().is_empty()
                    fallback=|| view! { <p class="panel__empty">"No completed or rejected trips yet."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Farmer"</th>
                                <th>"Pickup"</th>
                                <th>"Dropoff"</th>
                                <th>"Date"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=rows
                                key=|r| r.id
                                children=|request: TransportRequest| {
                                    view! {
                                        <tr>
                                            <td>{request.farmer_name.clone()}</td>
                                            <td>{format::or_placeholder(request.pickup_location.as_deref(), "N/A")}</td>
                                            <td>{format::or_placeholder(request.dropoff_location.as_deref(), "N/A")}</td>
                                            <td>{format::short_date(&request.timestamp)}</td>
                                            <td>
                                                <span class=request.status.badge_class()>
                                                    {request.status.label().to_owned()}
                                                </span>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}

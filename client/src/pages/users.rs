//! Admin user management: search, role tabs, role change and deactivation.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{UserRead, UserRole};
use crate::state::toast::{ToastState, notify_success, settle};
use crate::state::users::{Directory, ProfileRow, UsersState};

fn load_users(users: RwSignal<UsersState>, toasts: RwSignal<ToastState>) {
    users.update(|s| s.loading = true);
    leptos::task::spawn_local(async move {
        let (accounts, farmers, transporters, authorities) = futures::join!(
            api::list_users(),
            api::list_farmers(),
            api::list_transport_providers(),
            api::list_authorities(),
        );
        let accounts = settle(toasts, "Failed to load users", accounts);
        let farmers = settle(toasts, "Failed to load farmers", farmers);
        let transporters = settle(toasts, "Failed to load transport providers", transporters);
        let authorities = settle(toasts, "Failed to load authorities", authorities);
        users.update(|s| {
            s.finish_load(accounts);
            if let Some(rows) = farmers {
                s.directory.farmers = rows;
            }
            if let Some(rows) = transporters {
                s.directory.transporters = rows;
            }
            if let Some(rows) = authorities {
                s.directory.authorities = rows;
            }
        });
    });
}

fn change_role(users: RwSignal<UsersState>, toasts: RwSignal<ToastState>, user_id: i64, role: UserRole) {
    if !users.try_update(|s| s.begin_change(user_id)).unwrap_or(false) {
        return;
    }
    leptos::task::spawn_local(async move {
        let outcome = settle(toasts, "Role change failed", api::change_user_role(user_id, role).await);
        if let Some(applied) = users.try_update(|s| s.finish_role_change(user_id, outcome)).flatten() {
            notify_success(toasts, format!("Role changed to {}", applied.label()));
        }
    });
}

fn deactivate(users: RwSignal<UsersState>, toasts: RwSignal<ToastState>, user_id: i64) {
    if !users.try_update(|s| s.begin_change(user_id)).unwrap_or(false) {
        return;
    }
    leptos::task::spawn_local(async move {
        let outcome = settle(toasts, "Deactivation failed", api::deactivate_user(user_id).await);
        if users.try_update(|s| s.finish_deactivate(user_id, outcome)).unwrap_or(false) {
            notify_success(toasts, "User deactivated");
        }
    });
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let users = RwSignal::new(UsersState::default());

    Effect::new(move || load_users(users, toasts));

    let tabs = UsersState::tabs()
        .into_iter()
        .map(|tab| {
            let label = UsersState::tab_label(&tab);
            let is_active = {
                let tab = tab.clone();
                move || users.with(|s| s.tab == tab)
            };
            let count = {
                let tab = tab.clone();
                move || users.with(|s| s.tab_count(&tab))
            };
            view! {
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=is_active
                    on:click=move |_| users.update(|s| s.tab = tab.clone())
                >
                    {label}
                    <span class="tabs__count">{count}</span>
                </button>
            }
        })
        .collect_view();

    let row = move |user: UserRead| {
        let id = user.id;
        let current_role = user.role;
        let busy = move || users.with(|s| s.pending.contains(&id));
        let options = UserRole::ALL
            .into_iter()
            .map(|role| {
                view! {
                    <option value=role.as_str() selected={role == current_role}>
                        {role.label()}
                    </option>
                }
            })
            .collect_view();
        view! {
            <tr class:table__row--inactive={!user.is_active}>
                <td>{user.username}</td>
                <td>{user.email}</td>
                <td>
                    <select
                        class="table__select"
                        disabled=move || busy() || !user.is_active
                        on:change=move |ev| {
                            if let Some(role) = UserRole::parse(&event_target_value(&ev)) {
                                if role != current_role {
                                    change_role(users, toasts, id, role);
                                }
                            }
                        }
                    >
                        {options}
                    </select>
                </td>
                <td>
                    <span class={if user.is_active { "badge badge--resolved" } else { "badge badge--rejected" }}>
                        {if user.is_active { "Active" } else { "Inactive" }}
                    </span>
                </td>
                <td>
                    <button
                        class="btn btn--danger btn--small"
                        disabled=move || busy() || !user.is_active
                        on:click=move |_| deactivate(users, toasts, id)
                    >
                        "Deactivate"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <div class="panel">
            <div class="panel__toolbar">
                <input
                    class="search"
                    type="search"
                    placeholder="Search by username or email"
                    prop:value=move || users.with(|s| s.search.clone())
                    on:input=move |ev| users.update(|s| s.search = event_target_value(&ev))
                />
                <button class="btn" on:click=move |_| load_users(users, toasts) disabled=move || users.with(|s| s.loading)>
                    "Refresh"
                </button>
            </div>
            <div class="tabs">{tabs}</div>
            <Show
                when=move || !users.with(|s| s.loading)
                fallback=|| view! { <p class="panel__empty">"Loading users..."</p> }
            >
                <Show
                    when=move || !users.with(|s| s.visible().is_empty())
                    fallback=|| view! { <p class="panel__empty">"No users match."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Username"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || users.with(UsersState::visible) key=|u| (u.id, u.role, u.is_active) children=row />
                        </tbody>
                    </table>
                </Show>
            </Show>
            {move || users.with(UsersState::directory_role).map(|role| view! { <DirectoryTable users=users role=role /> })}
        </div>
    }
}

/// Profile records for one role, shown under the account table.
#[component]
fn DirectoryTable(users: RwSignal<UsersState>, role: UserRole) -> impl IntoView {
    let detail = Directory::detail_label(role).unwrap_or_default();
    let rows = move || users.with(|s| s.directory.rows(role, &s.search));
    view! {
        <section class="directory">
            <h3 class="panel__title">{format!("{} profiles", role.label())}</h3>
            <Show
                when=move || !rows().is_empty()
                fallback=|| view! { <p class="panel__empty">"No profiles recorded."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Phone"</th>
                            <th>"Location"</th>
                            <th>{detail}</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|r| r.id
                            children=|r: ProfileRow| {
                                view! {
                                    <tr>
                                        <td>{r.name}</td>
                                        <td>{r.phone}</td>
                                        <td>{r.location}</td>
                                        <td>{r.detail}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

//! Dashboard sidebar with the role menu and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::UserRole;
use crate::routes::{Layout, MenuItem};
use crate::state::auth::{AuthState, logout};

#[component]
pub fn Sidebar(layout: Layout) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let identity = move || {
        auth.get()
            .role()
            .map_or("Signed in", UserRole::label)
    };

    let on_logout = move |_| {
        logout(auth);
        navigate("/", NavigateOptions::default());
    };

    let items = layout
        .menu()
        .iter()
        .copied()
        .map(|item| match item {
            MenuItem::Link(link) => view! {
                <li>
                    <a
                        class="sidebar__link"
                        class:sidebar__link--active=move || pathname.get() == link.path
                        href=link.path
                    >
                        {link.label}
                    </a>
                </li>
            }
            .into_any(),
            MenuItem::Group { label, links } => {
                let open = RwSignal::new(item.contains(&pathname.get_untracked()));
                view! {
                    <li class="sidebar__group" class:sidebar__group--open=move || open.get()>
                        <button
                            class="sidebar__link sidebar__group-toggle"
                            class:sidebar__link--active=move || item.contains(&pathname.get())
                            aria-expanded=move || open.get().to_string()
                            on:click=move |_| open.update(|o| *o = !*o)
                        >
                            {label}
                            <span class="sidebar__caret" aria-hidden="true">
                                {move || if open.get() { "▾" } else { "▸" }}
                            </span>
                        </button>
                        <Show when=move || open.get()>
                            <ul class="sidebar__submenu">
                                {links
                                    .iter()
                                    .map(|sub| {
                                        let path = sub.path;
                                        view! {
                                            <li>
                                                <a
                                                    class="sidebar__sublink"
                                                    class:sidebar__link--active=move || pathname.get() == path
                                                    href=path
                                                >
                                                    {sub.label}
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </Show>
                    </li>
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">{layout.brand()}</div>
            <nav class="sidebar__nav">
                <ul class="sidebar__menu">{items}</ul>
            </nav>
            <div class="sidebar__footer">
                <span class="sidebar__identity">{identity}</span>
                <button class="btn sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}

//! Role-guarded dashboard shell: sidebar plus titled content area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin, authority and transport route renders inside this shell. It
//! waits for the session to restore, redirects anonymous visitors to
//! `/login`, and shows an "Access denied" panel to sessions of another role.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::sidebar::Sidebar;
use crate::routes::{Layout, layout_for, lookup};
use crate::state::auth::AuthState;
use crate::util::auth::{Access, check_access, install_unauth_redirect};

#[component]
pub fn DashboardLayout(
    /// Used only when the current path is missing from the route table.
    layout: Layout,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let pathname = use_location().pathname;
    let title = move || lookup(&pathname.get()).map_or("ChapFarm", |r| r.title);
    let layout = Memo::new(move |_| layout_for(&pathname.get(), layout));
    let access = Memo::new(move |_| check_access(&auth.get(), layout.get()));

    move || match access.get() {
        Access::Granted => {
            let children = children.clone();
            view! {
                <div class="dashboard">
                    <Sidebar layout=layout.get() />
                    <main class="dashboard__main">
                        <header class="dashboard__header">
                            <h1 class="dashboard__title">{title}</h1>
                        </header>
                        <section class="dashboard__content">{children()}</section>
                    </main>
                </div>
            }
            .into_any()
        }
        Access::Denied => {
            let home = auth.get_untracked().home_path();
            view! {
                <div class="dashboard-gate">
                    <h2>"Access denied"</h2>
                    <p>"Your account does not have access to this area."</p>
                    <a class="btn btn--primary" href=home>
                        "Go to your dashboard"
                    </a>
                </div>
            }
            .into_any()
        }
        Access::Loading => view! {
            <div class="dashboard-gate">
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        Access::Redirect => view! {
            <div class="dashboard-gate">
                <p>"Redirecting to login..."</p>
            </div>
        }
        .into_any(),
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::DashboardLayout;
use crate::components::toast_host::ToastHost;
use crate::config::{API_BASE_META_NAME, ApiBaseUrl};
use crate::pages::{
    about::AboutPage,
    admin_dashboard::AdminDashboardPage,
    alerts::AlertsPage,
    analytics::AnalyticsPage,
    authority_dashboard::AuthorityDashboardPage,
    contact::ContactPage,
    farmer_reports::FarmerReportsPage,
    home::HomePage,
    login::LoginPage,
    messaging::MessagingPage,
    register::RegisterPage,
    register_accounts::{RegisterAdminPage, RegisterFarmerPage, RegisterOfficerPage, RegisterTransportPage},
    transport_dashboard::TransportDashboardPage,
    transport_history::TransportHistoryPage,
    transport_requests::TransportRequestsPage,
    users::UsersPage,
};
use crate::routes::Layout;
use crate::state::auth::{AuthState, logout};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let api_base = use_context::<ApiBaseUrl>().unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META_NAME content=api_base.0/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts and sets up routing. The session
/// starts as pending on both server and browser; the browser restores the
/// stored token once hydrated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    Effect::new(move || auth.set(AuthState::restore()));

    // A 401 from any request ends the session; dashboard layouts then
    // redirect to `/login`.
    Effect::new(move || {
        if toasts.with(|t| t.session_expired) {
            toasts.update_untracked(|t| t.session_expired = false);
            logout(auth);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/chapfarm.css"/>
        <Title text="ChapFarm Dashboard"/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>

                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <DashboardLayout layout=Layout::Admin><AdminDashboardPage/></DashboardLayout> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("users"))
                    view=|| view! { <DashboardLayout layout=Layout::Admin><UsersPage/></DashboardLayout> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("register-admin"))
                    view=|| view! { <DashboardLayout layout=Layout::Admin><RegisterAdminPage/></DashboardLayout> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("register-officer"))
                    view=|| view! { <DashboardLayout layout=Layout::Admin><RegisterOfficerPage/></DashboardLayout> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("register-transport"))
                    view=|| view! { <DashboardLayout layout=Layout::Admin><RegisterTransportPage/></DashboardLayout> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("register-farmer"))
                    view=|| view! { <DashboardLayout layout=Layout::Admin><RegisterFarmerPage/></DashboardLayout> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("farmer-reports"))
                    view=|| view! { <DashboardLayout layout=Layout::Admin><FarmerReportsPage/></DashboardLayout> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("transport-request"))
                    view=|| view! { <DashboardLayout layout=Layout::Admin><TransportRequestsPage/></DashboardLayout> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("alerts"))
                    view=|| view! { <DashboardLayout layout=Layout::Admin><AlertsPage/></DashboardLayout> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("messages"))
                    view=|| view! { <DashboardLayout layout=Layout::Admin><MessagingPage/></DashboardLayout> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("analytics"))
                    view=|| view! { <DashboardLayout layout=Layout::Admin><AnalyticsPage/></DashboardLayout> }
                />

                <Route
                    path=StaticSegment("authority")
                    view=|| view! { <DashboardLayout layout=Layout::Authority><AuthorityDashboardPage/></DashboardLayout> }
                />
                <Route
                    path=(StaticSegment("authority"), StaticSegment("reports"))
                    view=|| view! { <DashboardLayout layout=Layout::Authority><FarmerReportsPage/></DashboardLayout> }
                />
                <Route
                    path=(StaticSegment("authority"), StaticSegment("alerts"))
                    view=|| view! { <DashboardLayout layout=Layout::Authority><AlertsPage/></DashboardLayout> }
                />

                <Route
                    path=StaticSegment("transport")
                    view=|| view! { <DashboardLayout layout=Layout::Transport><TransportDashboardPage/></DashboardLayout> }
                />
                <Route
                    path=(StaticSegment("transport"), StaticSegment("requests"))
                    view=|| view! { <DashboardLayout layout=Layout::Transport><TransportRequestsPage/></DashboardLayout> }
                />
                <Route
                    path=(StaticSegment("transport"), StaticSegment("history"))
                    view=|| view! { <DashboardLayout layout=Layout::Transport><TransportHistoryPage/></DashboardLayout> }
                />
            </Routes>
        </Router>
        <ToastHost/>
    }
}

//! Navbar and footer around the public pages.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="public">
            <header class="navbar">
                <a class="navbar__brand" href="/">
                    "ChapFarm"
                </a>
                <nav class="navbar__links">
                    <a href="/">"Home"</a>
                    <a href="/about">"About"</a>
                    <a href="/contact">"Contact"</a>
                    <Show
                        when=move || auth.get().is_authenticated()
                        fallback=|| {
                            view! {
                                <a class="btn btn--primary" href="/login">
                                    "Login"
                                </a>
                            }
                        }
                    >
                        <a class="btn btn--primary" href=move || auth.get().home_path()>
                            "Dashboard"
                        </a>
                    </Show>
                </nav>
            </header>
            <main class="public__main">{children()}</main>
            <footer class="footer">
                <p>"ChapFarm connects farmers, transporters and agricultural officers."</p>
                <p class="footer__links">
                    <a href="/about">"About"</a>
                    <a href="/contact">"Contact"</a>
                    <a href="/register">"Create an account"</a>
                </p>
            </footer>
        </div>
    }
}

//! Login page: username/password with a remember-me flag.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::public_layout::PublicLayout;
use crate::config::REMEMBER_ME_STORAGE_KEY;
use crate::net::types::LoginData;
use crate::state::auth::{self, AuthState};
use crate::state::toast::{ToastKind, ToastState, notify, notify_success};
use crate::util::storage;
use crate::util::validation::{self, FieldError};

/// Validate the login fields. The password is sent untrimmed.
///
/// # Errors
///
/// Fails when either field is blank.
pub fn build_login(username: &str, password: &str) -> Result<LoginData, FieldError> {
    let username = validation::required("Username", username)?;
    if password.is_empty() {
        return Err(FieldError("Password is required.".to_owned()));
    }
    Ok(LoginData { username, password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move || remember.set(storage::load_flag(REMEMBER_ME_STORAGE_KEY)));

    // Already signed in: go straight to the role's dashboard.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        let state = auth_state.get();
        if !state.loading && state.is_authenticated() && !busy.get_untracked() {
            navigate_home(state.home_path(), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let data = match build_login(&username.get(), &password.get()) {
            Ok(data) => data,
            Err(err) => {
                error.set(Some(err.0));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let remember_me = remember.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth::login(auth_state, data, remember_me).await {
                Ok(session) => {
                    if session.role().and_then(|r| r.home_path()).is_some() {
                        notify_success(toasts, "Login successful");
                    } else {
                        notify(toasts, ToastKind::Info, "This account has no dashboard; use the USSD service.");
                    }
                    navigate(session.home_path(), NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("login failed: {err}");
                    error.set(Some(err.to_string()));
                    password.set(String::new());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <PublicLayout>
            <div class="login-page">
                <div class="login-card">
                    <h1>"Welcome back"</h1>
                    <p class="login-card__subtitle">"Sign in to your ChapFarm dashboard"</p>
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="text"
                            autocomplete="username"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="current-password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <label class="login-remember">
                            <input
                                type="checkbox"
                                prop:checked=move || remember.get()
                                on:change=move |ev| remember.set(event_target_checked(&ev))
                            />
                            "Remember me"
                        </label>
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <p class="login-card__footer">
                        "No account yet? " <a href="/register">"Register"</a>
                    </p>
                </div>
            </div>
        </PublicLayout>
    }
}

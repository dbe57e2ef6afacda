//! Public self-registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::public_layout::PublicLayout;
use crate::net::api;
use crate::net::types::RegisterData;
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::validation::{self, FieldError, MAX_USERNAME};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validate the form. The full name doubles as the account username.
///
/// # Errors
///
/// Returns the first failing field's message, including a password mismatch.
pub fn build_register(form: &RegisterForm) -> Result<RegisterData, FieldError> {
    let username = validation::required_max("Full name", &form.full_name, MAX_USERNAME)?;
    let email = validation::email(&form.email)?;
    let password = validation::password(&form.password)?;
    validation::password_confirmation(&form.password, &form.confirm_password)?;
    Ok(RegisterData { username, email, password, role: None })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match build_register(&form.get()) {
            Ok(payload) => payload,
            Err(err) => {
                error.set(Some(err.0));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::register(&payload).await {
                Ok(_) => {
                    notify_success(toasts, "Account created. You can now log in.");
                    form.set(RegisterForm::default());
                    navigate("/login", NavigateOptions::default());
                }
                Err(err) => notify_error(toasts, "Registration failed", &err),
            }
            busy.set(false);
        });
    };

    view! {
        <PublicLayout>
            <div class="login-page">
                <div class="login-card">
                    <h1>"Create Your ChapFarm Account"</h1>
                    <p class="login-card__subtitle">"Join our growing network of farmers and partners."</p>
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Full name"
                            prop:value=move || form.get().full_name
                            on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="email"
                            placeholder="Email address"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Confirm password"
                            prop:value=move || form.get().confirm_password
                            on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                        </button>
                    </form>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <p class="login-card__footer">
                        "Already have an account? " <a href="/login">"Login"</a>
                    </p>
                </div>
            </div>
        </PublicLayout>
    }
}

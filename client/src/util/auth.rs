//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboard layouts apply identical redirect and role-check behavior, so the
//! decision lives here as a pure function over `AuthState`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::Layout;
use crate::state::auth::AuthState;

/// Outcome of checking a session against a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Session not restored yet.
    Loading,
    /// No token; the layout sends the user to `/login`.
    Redirect,
    /// Signed in, but with a role this layout does not serve.
    Denied,
    Granted,
}

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

pub fn check_access(state: &AuthState, layout: Layout) -> Access {
    if state.loading {
        return Access::Loading;
    }
    if !state.is_authenticated() {
        return Access::Redirect;
    }
    match layout.required_role() {
        None => Access::Granted,
        Some(required) if state.role() == Some(required) => Access::Granted,
        Some(_) => Access::Denied,
    }
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

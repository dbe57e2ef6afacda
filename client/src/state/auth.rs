//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and role layouts to coordinate login redirects and
//! role-dependent rendering. The token lives in `localStorage`; claims are
//! decoded from the JWT payload for display and routing only.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use leptos::prelude::*;

use crate::config::{REMEMBER_ME_STORAGE_KEY, TOKEN_STORAGE_KEY};
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{LoginData, TokenClaims, UserRole};
use crate::util::storage;

/// Authentication state: the bearer token, its decoded claims, and whether
/// the persisted session has been restored yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub claims: Option<TokenClaims>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the browser session is restored. SSR renders
    /// with this so hydration sees the same markup.
    pub fn pending() -> Self {
        Self { token: None, claims: None, loading: true }
    }

    /// Session built from a freshly issued or restored token.
    pub fn from_token(token: &str) -> Self {
        Self {
            token: Some(token.to_owned()),
            claims: decode_claims(token),
            loading: false,
        }
    }

    /// Restore the session persisted in browser storage.
    pub fn restore() -> Self {
        match stored_token() {
            Some(token) => Self::from_token(&token),
            None => Self::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.claims.as_ref().and_then(|c| c.role)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.claims.as_ref().map(|c| c.sub.as_str())
    }

    /// Where to go after login; falls back to `/` for roles without a dashboard.
    pub fn home_path(&self) -> &'static str {
        self.role().and_then(UserRole::home_path).unwrap_or("/")
    }
}

/// Token persisted by a previous login, if any.
pub fn stored_token() -> Option<String> {
    storage::load(TOKEN_STORAGE_KEY).filter(|t| !t.trim().is_empty())
}

/// Decode the (unverified) claims segment of a JWT.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Log in with username/password, persist the token, and publish the session.
///
/// # Errors
///
/// Returns the backend error (for example `Invalid credentials`) unchanged;
/// the current session is left untouched on failure.
pub async fn login(auth: RwSignal<AuthState>, data: LoginData, remember: bool) -> Result<AuthState, ApiError> {
    let token = api::login(&data).await?;
    storage::save(TOKEN_STORAGE_KEY, &token.access_token);
    storage::save_flag(REMEMBER_ME_STORAGE_KEY, remember);
    let session = AuthState::from_token(&token.access_token);
    log::info!("signed in as user {}", session.user_id().unwrap_or("?"));
    auth.set(session.clone());
    Ok(session)
}

/// Drop the persisted token and clear the session.
pub fn logout(auth: RwSignal<AuthState>) {
    storage::remove(TOKEN_STORAGE_KEY);
    storage::remove(REMEMBER_ME_STORAGE_KEY);
    auth.set(AuthState::default());
}

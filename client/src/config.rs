//! REST backend location and browser storage keys.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders the configured backend URL into a
//! `<meta name="chapfarm-api-base">` tag; the browser reads it back here so a
//! single WASM bundle can target different backends.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when neither the server nor the build provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Name of the `<meta>` tag carrying the backend URL.
pub const API_BASE_META_NAME: &str = "chapfarm-api-base";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// `localStorage` key holding the remember-me flag.
pub const REMEMBER_ME_STORAGE_KEY: &str = "rememberMe";

/// Backend base URL injected into SSR rendering via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl(pub String);

impl Default for ApiBaseUrl {
    fn default() -> Self {
        Self(compiled_api_base_url().to_owned())
    }
}

/// Backend base URL baked in at compile time, falling back to the default.
pub fn compiled_api_base_url() -> &'static str {
    option_env!("CHAPFARM_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// Resolve the backend base URL for the running page.
pub fn api_base_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        let from_meta = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| {
                doc.query_selector(&format!("meta[name=\"{API_BASE_META_NAME}\"]"))
                    .ok()
                    .flatten()
            })
            .and_then(|el| el.get_attribute("content"));
        if let Some(url) = from_meta.as_deref().and_then(normalize_base_url) {
            return url;
        }
    }
    normalize_base_url(compiled_api_base_url()).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
}

/// Join the backend base URL with an absolute endpoint path.
pub fn endpoint(path: &str) -> String {
    join_url(&api_base_url(), path)
}

/// Trim whitespace and trailing slashes; `None` for an empty value.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

//! Server configuration from environment variables.
//!
//! `PORT` picks the listen port (default 3000). `CHAPFARM_API_BASE_URL`
//! names the backend the browser talks to; it is written into the HTML shell
//! so one wasm build can target any backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::{DEFAULT_API_BASE_URL, normalize_base_url};

pub const DEFAULT_PORT: u16 = 3000;
pub const PORT_VAR: &str = "PORT";
pub const API_BASE_VAR: &str = "CHAPFARM_API_BASE_URL";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid CHAPFARM_API_BASE_URL: {0:?}")]
    InvalidApiBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub api_base_url: String,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Blank values fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is not a port number,
    /// and [`ConfigError::InvalidApiBaseUrl`] when the API base is not an
    /// `http(s)://` URL.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_blank(lookup(PORT_VAR)) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_base_url = match non_blank(lookup(API_BASE_VAR)) {
            Some(raw) => normalize_base_url(&raw)
                .filter(|url| url.starts_with("http://") || url.starts_with("https://"))
                .ok_or(ConfigError::InvalidApiBaseUrl(raw))?,
            None => DEFAULT_API_BASE_URL.to_owned(),
        };

        Ok(Self { port, api_base_url })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

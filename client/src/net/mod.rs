//! Networking modules for the external REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps each backend endpoint, `error` normalizes failures, and `types`
//! defines the JSON schema shared with the backend.

pub mod api;
pub mod error;
pub mod types;

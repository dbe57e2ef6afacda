//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure page logic
//! (filtering, validation, chart layout) from components so they stay
//! testable without a browser.

pub mod auth;
pub mod chart;
pub mod filter;
pub mod format;
pub mod storage;
pub mod validation;

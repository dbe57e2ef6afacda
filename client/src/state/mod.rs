//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`, and one list model per
//! management page) so pages depend on small focused models and the
//! filtering/patching rules stay testable without a browser.

pub mod auth;
pub mod reports;
pub mod toast;
pub mod transport;
pub mod users;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetching and form orchestration and delegates
//! chrome to `components`. Dashboard pages render inside `DashboardLayout`,
//! which `App` wraps around them per role, so one page can serve several
//! layouts.

pub mod about;
pub mod admin_dashboard;
pub mod alerts;
pub mod analytics;
pub mod authority_dashboard;
pub mod contact;
pub mod farmer_reports;
pub mod home;
pub mod login;
pub mod messaging;
pub mod register;
pub mod register_accounts;
pub mod transport_dashboard;
pub mod transport_history;
pub mod transport_requests;
pub mod users;

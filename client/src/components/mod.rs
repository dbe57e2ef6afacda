//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome (layout shell, sidebar, toasts)
//! and the presentational pieces pages share (stat cards, charts).

pub mod bar_chart;
pub mod layout;
pub mod public_layout;
pub mod sidebar;
pub mod stat_card;
pub mod toast_host;

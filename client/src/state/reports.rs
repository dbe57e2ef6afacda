//! Farmer-report list state for the review pages.
//!
//! DESIGN
//! ======
//! The fetched list is kept whole; the tab and search term only shape the
//! derived `visible()` view so per-tab counts always reflect the full list.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use std::collections::HashSet;

use crate::net::types::{FarmerReport, ReportStatus};
use crate::util::filter::{Tab, count_in_tab, matches_search};

pub type ReportTab = Tab<ReportStatus>;

#[derive(Clone, Debug, Default)]
pub struct ReportsState {
    pub items: Vec<FarmerReport>,
    pub loading: bool,
    pub tab: ReportTab,
    pub search: String,
    /// Report ids with a resolve request in flight.
    pub resolving: HashSet<i64>,
}

impl ReportsState {
    /// Tabs shown above the list, `All` first.
    pub fn tabs() -> Vec<ReportTab> {
        std::iter::once(Tab::All)
            .chain(ReportStatus::TABS.iter().cloned().map(Tab::Only))
            .collect()
    }

    pub fn tab_label(tab: &ReportTab) -> String {
        match tab {
            Tab::All => "All".to_owned(),
            Tab::Only(status) => status.label().to_owned(),
        }
    }

    /// Reports matching the active tab and search term (farmer name, issue
    /// type, location).
    pub fn visible(&self) -> Vec<FarmerReport> {
        self.items
            .iter()
            .filter(|r| self.tab.accepts(&r.status))
            .filter(|r| {
                matches_search(
                    &self.search,
                    [r.farmer_name.as_deref(), Some(r.issue_type.as_str()), r.location.as_deref()],
                )
            })
            .cloned()
            .collect()
    }

    pub fn tab_count(&self, tab: &ReportTab) -> usize {
        count_in_tab(&self.items, tab, |r| &r.status)
    }

    /// Replace the list after a successful fetch.
    pub fn replace(&mut self, items: Vec<FarmerReport>) {
        self.items = items;
        self.loading = false;
    }

    /// Settle a list fetch. A failed fetch (`None`) keeps the previous items.
    pub fn finish_load(&mut self, items: Option<Vec<FarmerReport>>) {
        match items {
            Some(items) => self.replace(items),
            None => self.loading = false,
        }
    }

    /// Flag a report as being resolved. Returns `false` when a request for it
    /// is already in flight.
    pub fn begin_resolve(&mut self, id: i64) -> bool {
        self.resolving.insert(id)
    }

    pub fn end_resolve(&mut self, id: i64) {
        self.resolving.remove(&id);
    }

    /// Patch the local copy after the backend accepted the resolution.
    pub fn mark_resolved(&mut self, id: i64) -> bool {
        match self.items.iter_mut().find(|r| r.id == id) {
            Some(report) => {
                report.status = ReportStatus::Resolved;
                true
            }
            None => false,
        }
    }

    /// Settle a resolve request. Returns `true` when the local copy changed.
    pub fn finish_resolve<T>(&mut self, id: i64, outcome: Option<T>) -> bool {
        self.end_resolve(id);
        outcome.is_some() && self.mark_resolved(id)
    }
}

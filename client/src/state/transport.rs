//! Transport-request list state for provider and admin views.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use crate::net::types::{TransportRequest, TransportStatus, TransportUpdateResponse};
use crate::util::filter::{Tab, count_in_tab, matches_search};

pub type TransportTab = Tab<TransportStatus>;

#[derive(Clone, Debug, Default)]
pub struct TransportState {
    pub items: Vec<TransportRequest>,
    pub loading: bool,
    pub tab: TransportTab,
    pub search: String,
    /// Request id with a status update in flight.
    pub updating: Option<i64>,
}

impl TransportState {
    pub fn tabs() -> Vec<TransportTab> {
        std::iter::once(Tab::All)
            .chain(TransportStatus::TABS.iter().cloned().map(Tab::Only))
            .collect()
    }

    pub fn tab_label(tab: &TransportTab) -> String {
        match tab {
            Tab::All => "All".to_owned(),
            Tab::Only(status) => status.label().to_owned(),
        }
    }

    /// Requests matching the active tab and search term (farmer name,
    /// pickup, dropoff).
    pub fn visible(&self) -> Vec<TransportRequest> {
        filter_requests(&self.items, &self.tab, &self.search)
    }

    pub fn tab_count(&self, tab: &TransportTab) -> usize {
        count_in_tab(&self.items, tab, |r| &r.status)
    }

    pub fn replace(&mut self, items: Vec<TransportRequest>) {
        self.items = items;
        self.loading = false;
    }

    /// Settle a list fetch. A failed fetch (`None`) keeps the previous items.
    pub fn finish_load(&mut self, items: Option<Vec<TransportRequest>>) {
        match items {
            Some(items) => self.replace(items),
            None => self.loading = false,
        }
    }

    /// Claim the single update slot. Returns `false` while another update is
    /// in flight.
    pub fn begin_update(&mut self, id: i64) -> bool {
        if self.updating.is_some() {
            return false;
        }
        self.updating = Some(id);
        true
    }

    /// Settle a status update and release the slot. Returns the status now
    /// shown, which is the backend's `new_status` when it sent one.
    pub fn finish_update(
        &mut self,
        id: i64,
        requested: TransportStatus,
        outcome: Option<TransportUpdateResponse>,
    ) -> Option<TransportStatus> {
        self.updating = None;
        let applied = outcome?.new_status.unwrap_or(requested);
        self.apply_status(id, applied.clone());
        Some(applied)
    }

    /// Patch the local copy after the backend accepted a status change.
    pub fn apply_status(&mut self, id: i64, status: TransportStatus) -> bool {
        match self.items.iter_mut().find(|r| r.id == id) {
            Some(request) => {
                request.status = status;
                true
            }
            None => false,
        }
    }
}

pub fn filter_requests(items: &[TransportRequest], tab: &TransportTab, search: &str) -> Vec<TransportRequest> {
    items
        .iter()
        .filter(|r| tab.accepts(&r.status))
        .filter(|r| {
            matches_search(
                search,
                [Some(r.farmer_name.as_str()), r.pickup_location.as_deref(), r.dropoff_location.as_deref()],
            )
        })
        .cloned()
        .collect()
}

/// Finished requests for the history view, newest first.
pub fn history(items: &[TransportRequest]) -> Vec<TransportRequest> {
    let mut rows = items.iter().filter(|r| r.status.is_terminal()).cloned().collect::<Vec<_>>();
    rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    rows
}

/// The `limit` newest requests, regardless of status.
pub fn recent(items: &[TransportRequest], limit: usize) -> Vec<TransportRequest> {
    let mut rows = items.to_vec();
    rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    rows.truncate(limit);
    rows
}

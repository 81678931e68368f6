//! Drill-down session state with a stale-fetch guard.
//!
//! In-flight fetches are never cancelled, so a slow response for an
//! abandoned branch can arrive after the admin has navigated elsewhere.
//! Every navigation issues a [`FetchTicket`] capturing where the fetch was
//! aimed; [`ExplorerSession::apply`] only accepts a result whose ticket
//! still matches the current position, so late arrivals for old branches
//! are discarded instead of flashing wrong rows.

use crate::domains::explorer::path::BreadcrumbPath;
use crate::domains::explorer::resolver::{ExplorerLevel, Taxonomy};

/// Where a fetch was aimed when it was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    taxonomy: Taxonomy,
    segments: Vec<String>,
}

#[derive(Debug)]
pub struct ExplorerSession {
    taxonomy: Taxonomy,
    path: BreadcrumbPath,
    /// Rows for the current position; None while a fetch is outstanding.
    level: Option<ExplorerLevel>,
}

impl ExplorerSession {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self {
            taxonomy,
            path: BreadcrumbPath::new(),
            level: None,
        }
    }

    pub fn taxonomy(&self) -> Taxonomy {
        self.taxonomy
    }

    pub fn path(&self) -> &BreadcrumbPath {
        &self.path
    }

    /// The rows currently on screen, if any fetch has landed.
    pub fn level(&self) -> Option<&ExplorerLevel> {
        self.level.as_ref()
    }

    fn ticket(&self) -> FetchTicket {
        FetchTicket {
            taxonomy: self.taxonomy,
            segments: self.path.segments().to_vec(),
        }
    }

    /// Switch tabs: path and held rows are cleared.
    pub fn switch_taxonomy(&mut self, taxonomy: Taxonomy) -> FetchTicket {
        self.taxonomy = taxonomy;
        self.path = BreadcrumbPath::new();
        self.level = None;
        self.ticket()
    }

    /// Drill one level deeper. Held rows are cleared until the fetch lands.
    pub fn push(&mut self, segment: impl Into<String>) -> FetchTicket {
        self.path.push(segment);
        self.level = None;
        self.ticket()
    }

    /// Breadcrumb click (see [`BreadcrumbPath::click`]).
    pub fn click(&mut self, index: i32) -> FetchTicket {
        self.path.click(index);
        self.level = None;
        self.ticket()
    }

    /// Accept a fetch result if it was aimed at the current position.
    /// Returns whether the result was taken.
    pub fn apply(&mut self, ticket: &FetchTicket, level: ExplorerLevel) -> bool {
        if *ticket != self.ticket() {
            return false;
        }
        self.level = Some(level);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_for_current_position_is_accepted() {
        let mut session = ExplorerSession::new(Taxonomy::Services);
        let ticket = session.push("car");

        assert!(session.apply(&ticket, ExplorerLevel::default()));
        assert!(session.level().is_some());
    }

    #[test]
    fn late_result_for_an_abandoned_branch_is_discarded() {
        let mut session = ExplorerSession::new(Taxonomy::Services);
        let slow = session.push("car");
        // Admin navigates away before the fetch lands.
        let _fast = session.click(-1);

        assert!(!session.apply(&slow, ExplorerLevel::default()));
        assert!(session.level().is_none());
    }

    #[test]
    fn navigation_clears_previous_rows() {
        let mut session = ExplorerSession::new(Taxonomy::Services);
        let ticket = session.push("car");
        session.apply(&ticket, ExplorerLevel::default());
        assert!(session.level().is_some());

        session.push("Fiat");
        assert!(session.level().is_none());
    }

    #[test]
    fn switching_taxonomy_resets_path_and_rows() {
        let mut session = ExplorerSession::new(Taxonomy::Services);
        let ticket = session.push("car");
        session.apply(&ticket, ExplorerLevel::default());

        session.switch_taxonomy(Taxonomy::Bookings);
        assert!(session.path().is_root());
        assert!(session.level().is_none());
    }

    #[test]
    fn ticket_from_before_a_taxonomy_switch_is_rejected() {
        let mut session = ExplorerSession::new(Taxonomy::Services);
        let old = session.push("car");
        session.switch_taxonomy(Taxonomy::Users);

        assert!(!session.apply(&old, ExplorerLevel::default()));
    }
}

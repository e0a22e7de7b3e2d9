//! Statistic event model for asynchronous impression/click recording.

use chrono::NaiveDate;

/// Kind of counter a [`StatEvent`] increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Impression,
    Click,
}

/// An in-memory impression or click event awaiting persistence.
///
/// Created in the serve/click handlers and pushed onto a bounded channel so
/// the HTTP response never waits on the statistics write. Selection and
/// recording are deliberately decoupled: a failed or dropped stat write must
/// never prevent a selected banner from rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatEvent {
    pub kind: StatKind,
    pub banner_id: i64,
    pub placement_id: i64,
    /// Calendar day the event is attributed to.
    pub occurred_on: NaiveDate,
}

impl StatEvent {
    pub fn impression(banner_id: i64, placement_id: i64, occurred_on: NaiveDate) -> Self {
        Self {
            kind: StatKind::Impression,
            banner_id,
            placement_id,
            occurred_on,
        }
    }

    pub fn click(banner_id: i64, placement_id: i64, occurred_on: NaiveDate) -> Self {
        Self {
            kind: StatKind::Click,
            banner_id,
            placement_id,
            occurred_on,
        }
    }
}

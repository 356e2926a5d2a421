//! Aggregation of per-game fetch results into one session snapshot.

use std::collections::BTreeMap;

use tracing::debug;

use crate::facets;
use crate::model::{Game, MatchRecord};

/// Concatenate per-game batches in fetch order and sort ascending by
/// scheduled time. The sort is stable, so records with equal timestamps
/// keep their fetch order (earlier-fetched games first).
pub fn merge(batches: Vec<Vec<MatchRecord>>) -> Vec<MatchRecord> {
    let mut merged: Vec<MatchRecord> = batches.into_iter().flatten().collect();
    merged.sort_by_key(|record| record.scheduled_at);
    merged
}

/// The authoritative record collection for one refresh cycle, plus the
/// facet index derived from it. Replaced wholesale on every refresh.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub matches: Vec<MatchRecord>,
    /// Per game, the sorted distinct localized group labels observed.
    pub facets: BTreeMap<Game, Vec<String>>,
}

impl Snapshot {
    pub fn build(matches: Vec<MatchRecord>) -> Self {
        let facets = facets::facet_index(&matches);
        Self { matches, facets }
    }
}

/// Opaque handle for one refresh cycle, issued by [`Session::begin_refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshCycle(u64);

/// Holds the current snapshot and serializes overlapping refreshes.
///
/// Refreshes are not cancelled once started; instead each one carries a
/// cycle number and only the most recently begun cycle is allowed to
/// commit. A slow older refresh that completes after a newer one began is
/// discarded rather than clobbering fresher data.
#[derive(Debug, Default)]
pub struct Session {
    seq: u64,
    current: Option<Snapshot>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh cycle. Any cycle begun earlier becomes stale.
    pub fn begin_refresh(&mut self) -> RefreshCycle {
        self.seq += 1;
        RefreshCycle(self.seq)
    }

    /// Install `snapshot` if `cycle` is still the latest one begun.
    /// Returns whether the snapshot was accepted.
    pub fn commit(&mut self, cycle: RefreshCycle, snapshot: Snapshot) -> bool {
        if cycle.0 != self.seq {
            debug!(cycle = cycle.0, latest = self.seq, "discarding stale refresh");
            return false;
        }
        debug!(
            cycle = cycle.0,
            matches = snapshot.matches.len(),
            "committed refresh"
        );
        self.current = Some(snapshot);
        true
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    /// Drop all session data (logout).
    pub fn clear(&mut self) {
        self.current = None;
    }
}

//! Day + group-label filtering over the aggregated schedule.

use std::collections::BTreeSet;

use chrono::TimeZone;

use crate::calendar::DateKey;
use crate::facets::group_label;
use crate::model::{Game, MatchRecord};

/// The user's current selection: which games to fetch, which group labels
/// to restrict to (empty = unrestricted), and exactly one selected day.
/// The game set may transiently be empty while toggling.
#[derive(Debug, Clone)]
pub struct FilterState {
    pub games: Vec<Game>,
    pub labels: BTreeSet<String>,
    pub date: DateKey,
}

impl FilterState {
    /// All games selected, no label restriction, on the given day.
    pub fn for_date(date: DateKey) -> Self {
        Self {
            games: Game::all().to_vec(),
            labels: BTreeSet::new(),
            date,
        }
    }

    /// Apply this selection's day and label restriction to the aggregated
    /// records.
    pub fn day_matches<'a, Tz: TimeZone>(
        &self,
        records: &'a [MatchRecord],
        tz: &Tz,
    ) -> Vec<&'a MatchRecord> {
        matches_for_day(records, self.date, &self.labels, tz)
    }
}

/// Records on `date` whose group label is in `labels` (all of the day's
/// records when `labels` is empty). Aggregate order is preserved.
pub fn matches_for_day<'a, Tz: TimeZone>(
    records: &'a [MatchRecord],
    date: DateKey,
    labels: &BTreeSet<String>,
    tz: &Tz,
) -> Vec<&'a MatchRecord> {
    records
        .iter()
        .filter(|record| DateKey::of(record.scheduled_at, tz) == date)
        .filter(|record| labels.is_empty() || labels.contains(&group_label(record)))
        .collect()
}

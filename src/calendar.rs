//! Calendar-day bucketing of the aggregated schedule.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Days, Local, NaiveDate, TimeZone, Utc};

use crate::model::MatchRecord;

/// How many records a calendar cell previews before collapsing the rest
/// into a count.
pub const CELL_PREVIEW_LIMIT: usize = 2;

/// A calendar-day key in the viewer's time zone. Two records on the same
/// local day share a key regardless of time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// The day `instant` falls on in the given time zone.
    pub fn of<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> Self {
        DateKey(instant.with_timezone(tz).date_naive())
    }

    /// The day `instant` falls on in the system-local time zone.
    pub fn local(instant: DateTime<Utc>) -> Self {
        Self::of(instant, &Local)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        DateKey(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Bucket records by their local calendar day, preserving aggregate order
/// within each bucket. Every record lands in exactly one bucket.
pub fn group_by_day<'a, Tz: TimeZone>(
    records: &'a [MatchRecord],
    tz: &Tz,
) -> BTreeMap<DateKey, Vec<&'a MatchRecord>> {
    let mut buckets: BTreeMap<DateKey, Vec<&MatchRecord>> = BTreeMap::new();
    for record in records {
        buckets
            .entry(DateKey::of(record.scheduled_at, tz))
            .or_default()
            .push(record);
    }
    buckets
}

/// What a calendar cell shows for one day: the first few records and a
/// count of the rest.
#[derive(Debug)]
pub struct DayCell<'a> {
    pub preview: Vec<&'a MatchRecord>,
    pub overflow: usize,
}

impl<'a> DayCell<'a> {
    pub fn from_bucket(bucket: &[&'a MatchRecord]) -> Self {
        let preview = bucket.iter().take(CELL_PREVIEW_LIMIT).copied().collect();
        Self {
            preview,
            overflow: bucket.len().saturating_sub(CELL_PREVIEW_LIMIT),
        }
    }
}

/// The nominal UI window around `today`: 7 days back, 60 days ahead.
/// Informational only; the fetch itself is never date-parameterized.
pub fn nominal_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (
        today - Days::new(7),
        today + Days::new(60),
    )
}

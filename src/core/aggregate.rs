//! Grouping of play events into ranked tables.

use crate::models::{AggregateRow, AggregateTable, GroupBy, PlayEvent};
use std::collections::BTreeMap;

/// Group `events` by `group_by`, count plays and sum hours.
///
/// Groups are enumerated in key order, then stably sorted by count
/// descending: equal counts stay in key order. Hours are rounded to
/// two decimals at the end.
pub fn aggregate(events: &[PlayEvent], group_by: GroupBy) -> AggregateTable {
    let mut groups: BTreeMap<String, (usize, f64)> = BTreeMap::new();

    for event in events {
        let slot = groups.entry(group_by.key(event)).or_insert((0, 0.0));
        slot.0 += 1;
        slot.1 += event.hours_played;
    }

    let mut rows: Vec<AggregateRow> = groups
        .into_iter()
        .map(|(key, (count, hours))| AggregateRow {
            key,
            count,
            hours_played: hours,
        })
        .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count));

    for row in &mut rows {
        row.hours_played = round2(row.hours_played);
    }

    AggregateTable { group_by, rows }
}

pub fn by_track(events: &[PlayEvent]) -> AggregateTable {
    aggregate(events, GroupBy::Track)
}

pub fn by_artist(events: &[PlayEvent]) -> AggregateTable {
    aggregate(events, GroupBy::Artist)
}

pub fn by_album(events: &[PlayEvent]) -> AggregateTable {
    aggregate(events, GroupBy::Album)
}

/// Round half to even at two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Events whose play time falls in calendar year `year` (UTC).
pub fn events_in_year(events: &[PlayEvent], year: i32) -> Vec<PlayEvent> {
    events.iter().filter(|e| e.year() == year).cloned().collect()
}

/// The three all-time tables.
#[derive(Debug, Clone, PartialEq)]
pub struct AllTimeTables {
    pub tracks: AggregateTable,
    pub artists: AggregateTable,
    pub albums: AggregateTable,
}

impl AllTimeTables {
    pub fn build(events: &[PlayEvent]) -> Self {
        Self {
            tracks: by_track(events),
            artists: by_artist(events),
            albums: by_album(events),
        }
    }

    /// Apply the same search to every table.
    pub fn filtered(&self, query: &str) -> Self {
        Self {
            tracks: super::search::filter_table(&self.tracks, query),
            artists: super::search::filter_table(&self.artists, query),
            albums: super::search::filter_table(&self.albums, query),
        }
    }

    pub fn tables(&self) -> [&AggregateTable; 3] {
        [&self.tracks, &self.artists, &self.albums]
    }
}

/// Year-in-review: track and artist tables restricted to one year.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedTables {
    pub year: i32,
    pub tracks: AggregateTable,
    pub artists: AggregateTable,
}

impl WrappedTables {
    /// Build the wrapped view for `year`. Only years in `selectable` are
    /// computed; any other year gives empty tables.
    pub fn build(events: &[PlayEvent], year: i32, selectable: &[i32]) -> Self {
        if !selectable.contains(&year) {
            return Self {
                year,
                tracks: AggregateTable::empty(GroupBy::Track),
                artists: AggregateTable::empty(GroupBy::Artist),
            };
        }

        let scoped = events_in_year(events, year);
        Self {
            year,
            tracks: by_track(&scoped),
            artists: by_artist(&scoped),
        }
    }
}

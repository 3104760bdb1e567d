use crate::archive::HistoryArchive;
use crate::config::Config;
use crate::core::{loader, normalize};
use crate::errors::AppResult;
use crate::models::PlayEvent;
use chrono::{DateTime, Utc};
use std::path::Path;

/// Bookkeeping of one load, shown above the tables.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub entries: Vec<String>,
    pub raw_records: usize,
    pub retained: usize,
    pub first_play: Option<DateTime<Utc>>,
    pub last_play: Option<DateTime<Utc>>,
}

/// Normalized play events of one archive.
#[derive(Debug, Clone)]
pub struct ListeningHistory {
    pub events: Vec<PlayEvent>,
    pub report: LoadReport,
}

#[derive(Debug)]
pub enum LoadOutcome {
    /// The archive holds no `Streaming_History_Audio*.json` entry.
    NoMatchingEntries,
    Loaded(ListeningHistory),
}

pub struct Core;

impl Core {
    /// Open the archive at `path` and run loader + normalizer over it.
    pub fn load_history(path: &Path, cfg: &Config) -> AppResult<LoadOutcome> {
        let mut archive = HistoryArchive::open(path)?;

        let entries = archive.matching_entries(&cfg.entry_prefix, &cfg.entry_suffix)?;
        if entries.is_empty() {
            return Ok(LoadOutcome::NoMatchingEntries);
        }

        let records = loader::load_records(&mut archive, &entries)?;
        let raw_records = records.len();

        let events = normalize::normalize(records, cfg.min_ms_played)?;

        let report = LoadReport {
            entries,
            raw_records,
            retained: events.len(),
            first_play: events.first().map(|e| e.time),
            last_play: events.last().map(|e| e.time),
        };

        Ok(LoadOutcome::Loaded(ListeningHistory { events, report }))
    }
}

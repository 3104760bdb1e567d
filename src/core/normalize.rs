//! Normalizer/filter: raw records → clean, sorted, de-duplicated play events.

use crate::errors::{AppError, AppResult};
use crate::models::{PlayEvent, RawPlayRecord};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::collections::HashSet;

/// Plays of one minute or less are treated as skips.
pub const MIN_MS_PLAYED: u64 = 60_000;

/// Layouts accepted for `ts` besides RFC 3339 (older exports).
const LEGACY_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// A record after null filling, before the timestamp is parsed.
struct Row {
    ts: String,
    ms_played: u64,
    track: String,
    artist: String,
    album: String,
    reason_end: String,
}

/// Run the full normalization over `records`.
///
/// Steps, in order: fill nulls with "", drop plays `<= min_ms_played`,
/// drop untitled plays, stable sort by `ts`, drop duplicates on
/// (ts, track, artist, album) keeping the first, parse `ts`.
pub fn normalize(records: Vec<RawPlayRecord>, min_ms_played: u64) -> AppResult<Vec<PlayEvent>> {
    let mut rows: Vec<Row> = records
        .into_iter()
        .filter_map(|r| {
            // a null duration can never pass the threshold
            let ms_played = r.ms_played?;
            Some(Row {
                ts: r.ts.unwrap_or_default(),
                ms_played,
                track: r.track.unwrap_or_default(),
                artist: r.artist.unwrap_or_default(),
                album: r.album.unwrap_or_default(),
                reason_end: r.reason_end.unwrap_or_default(),
            })
        })
        .filter(|r| r.ms_played > min_ms_played)
        .filter(|r| !r.track.is_empty())
        .collect();

    rows.sort_by(|a, b| a.ts.cmp(&b.ts));

    let mut seen: HashSet<(String, String, String, String)> = HashSet::new();
    rows.retain(|r| {
        seen.insert((
            r.ts.clone(),
            r.track.clone(),
            r.artist.clone(),
            r.album.clone(),
        ))
    });

    rows.into_iter()
        .map(|r| {
            Ok(PlayEvent {
                time: parse_timestamp(&r.ts)?,
                hours_played: ms_to_hours(r.ms_played),
                track: r.track,
                artist: r.artist,
                album: r.album,
                reason_end: r.reason_end,
            })
        })
        .collect()
}

pub fn ms_to_hours(ms: u64) -> f64 {
    ms as f64 / 1000.0 / 60.0 / 60.0
}

/// Parse a play timestamp. Values without offset are taken as UTC.
pub fn parse_timestamp(ts: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Ok(dt.with_timezone(&Utc));
    }

    LEGACY_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(ts, layout).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AppError::InvalidTimestamp(ts.to_string()))
}

//! Record loader: matched archive entries → one combined record table.

use crate::archive::HistoryArchive;
use crate::errors::{AppError, AppResult};
use crate::models::RawPlayRecord;

/// Parse one entry as a JSON array of play objects.
///
/// Unknown keys (platform, ip address, skip flags, ...) are dropped, while a
/// missing required key or a wrongly typed value fails the whole entry.
pub fn parse_entry(entry: &str, bytes: &[u8]) -> AppResult<Vec<RawPlayRecord>> {
    serde_json::from_slice(bytes).map_err(|e| AppError::parse(entry, e))
}

/// Load `entries` from `archive`, concatenated in entry order.
pub fn load_records(
    archive: &mut HistoryArchive,
    entries: &[String],
) -> AppResult<Vec<RawPlayRecord>> {
    let mut records = Vec::new();

    for entry in entries {
        let bytes = archive.read_entry(entry)?;
        records.extend(parse_entry(entry, &bytes)?);
    }

    Ok(records)
}

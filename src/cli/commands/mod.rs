pub mod alltime;
pub mod config;
pub mod export;
pub mod init;
pub mod wrapped;
pub mod years;

use crate::config::Config;
use crate::core::{Core, ListeningHistory, LoadOutcome};
use crate::errors::AppResult;
use crate::models::AggregateTable;
use crate::ui::messages::{header, info, note, warning};
use crate::utils::format_hours;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};

/// Widest key column printed before truncation.
const KEY_WIDTH: usize = 60;

/// Load the archive, or print the no-match warning and return `None`.
pub(crate) fn load_or_warn(archive: &str, cfg: &Config) -> AppResult<Option<ListeningHistory>> {
    let path = expand_tilde(archive);

    match Core::load_history(&path, cfg)? {
        LoadOutcome::NoMatchingEntries => {
            warning(format!(
                "No matching JSON files ({}*{}) found.",
                cfg.entry_prefix, cfg.entry_suffix
            ));
            Ok(None)
        }
        LoadOutcome::Loaded(history) => {
            let r = &history.report;
            info(format!(
                "Loaded {} plays ({} records) from {} file(s)",
                r.retained,
                r.raw_records,
                r.entries.len()
            ));
            if let (Some(first), Some(last)) = (r.first_play, r.last_play) {
                note(format!(
                    "History from {} to {}",
                    first.format("%Y-%m-%d"),
                    last.format("%Y-%m-%d")
                ));
            }
            Ok(Some(history))
        }
    }
}

/// Print one aggregate table, at most `limit` rows (0 = all).
pub(crate) fn print_table(title: &str, table: &AggregateTable, limit: usize, cfg: &Config) {
    header(title);

    if table.is_empty() {
        note("(no rows)");
        return;
    }

    let [key, count, hours] = table.headers();
    let mut t = Table::new(vec![
        Column::left(key, KEY_WIDTH),
        Column::right(count, 8),
        Column::right(hours, 12),
    ]);

    let shown = if limit == 0 { table.len() } else { limit.min(table.len()) };

    for row in &table.rows[..shown] {
        t.add_row(vec![
            row.key.clone(),
            row.count.to_string(),
            format_hours(row.hours_played),
        ]);
    }

    print!("{}", t.render(&cfg.separator_char));

    if shown < table.len() {
        note(format!(
            "... {} more rows (use --limit 0 to show all)",
            table.len() - shown
        ));
    }
}

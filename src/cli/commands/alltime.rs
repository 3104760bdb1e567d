use super::{load_or_warn, print_table};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::AllTimeTables;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `alltime` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Alltime {
        archive,
        search,
        limit,
    } = cmd
    {
        let Some(history) = load_or_warn(archive, cfg)? else {
            return Ok(());
        };

        let mut tables = AllTimeTables::build(&history.events);

        if let Some(query) = search.as_deref().filter(|q| !q.is_empty()) {
            tables = tables.filtered(query);
            info(format!("Search: \"{query}\""));
        }

        let limit = limit.unwrap_or(cfg.max_rows);
        for table in tables.tables() {
            print_table(table.group_by.title(), table, limit, cfg);
        }
    }
    Ok(())
}

use super::{load_or_warn, print_table};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::WrappedTables;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `wrapped` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Wrapped {
        archive,
        year,
        limit,
    } = cmd
    {
        let year = match year {
            Some(y) => *y,
            None => cfg.default_wrapped_year()?,
        };

        if !cfg.is_wrapped_year(year) {
            warning(format!(
                "{year} is not a selectable year (see `hiasify years`), tables will be empty."
            ));
        }

        let Some(history) = load_or_warn(archive, cfg)? else {
            return Ok(());
        };

        let wrapped = WrappedTables::build(&history.events, year, &cfg.wrapped_years);

        let limit = limit.unwrap_or(cfg.max_rows);
        print_table(&format!("Wrapped {year} - top tracks"), &wrapped.tracks, limit, cfg);
        print_table(&format!("Wrapped {year} - top artists"), &wrapped.artists, limit, cfg);
    }
    Ok(())
}

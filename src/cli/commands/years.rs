use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `years` command: the configured list, not the years present
/// in any archive.
pub fn handle(cfg: &Config) -> AppResult<()> {
    println!("Selectable years:");
    for year in &cfg.wrapped_years {
        println!("  {year}");
    }
    Ok(())
}

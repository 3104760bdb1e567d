use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command: write the default configuration file.
///
/// An existing file is left untouched unless `--force` is given.
pub fn handle(cli: &Cli, force: bool) -> AppResult<()> {
    let path = Config::resolve_path(cli.config.as_deref());

    if path.exists() && !force {
        warning(format!(
            "Configuration file already exists: {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    Config::default().save(&path)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}

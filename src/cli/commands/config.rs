use crate::cli::parser::Commands;
use crate::config::{Config, check};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check: check_keys,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if *check_keys {
            check::check_file(path)?;
        }

        if *migrate {
            check::migrate_file(path)?;
        }

        if *edit_config {
            edit(path, editor.as_deref())?;
        }
    }

    Ok(())
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open `path` in the requested editor, falling back to the default one.
fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "{} does not exist, run `hiasify init` first",
            path.display()
        )));
    }

    let fallback = default_editor();
    let first = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

    match Command::new(&first).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using '{first}'"));
            return Ok(());
        }
        _ if first == fallback => {}
        _ => warning(format!(
            "Editor '{first}' not available, falling back to '{fallback}'"
        )),
    }

    if first != fallback
        && let Ok(s) = Command::new(&fallback).arg(path).status()
        && s.success()
    {
        success(format!("Configuration file edited using fallback '{fallback}'"));
        return Ok(());
    }

    Err(AppError::Config(format!(
        "failed to edit configuration file with '{fallback}'"
    )))
}

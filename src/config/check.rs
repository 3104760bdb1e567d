use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys every configuration file is expected to carry.
pub const EXPECTED_KEYS: [&str; 6] = [
    "entry_prefix",
    "entry_suffix",
    "min_ms_played",
    "wrapped_years",
    "max_rows",
    "separator_char",
];

/// Return the expected keys that are absent from a YAML document.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content)
        .map_err(|e| AppError::Config(format!("invalid YAML: {e}")))?;

    let mapping = match yaml {
        Value::Mapping(m) => m,
        // an empty file parses as null: everything is missing
        Value::Null => return Ok(EXPECTED_KEYS.to_vec()),
        _ => return Err(AppError::Config("top level is not a mapping".to_string())),
    };

    Ok(EXPECTED_KEYS
        .iter()
        .copied()
        .filter(|k| !mapping.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Report missing keys and unreadable values of the file at `path`.
/// Returns the missing keys so callers can decide what to do with them.
/// A file that does not parse is a diagnostic here, not an error.
pub fn check_file(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        warning(format!(
            "Configuration file not found: {} (defaults in use)",
            path.display()
        ));
        return Ok(EXPECTED_KEYS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    let missing = match missing_keys(&content) {
        Ok(missing) => missing,
        Err(e) => {
            warning(format!("{e} in {}", path.display()));
            return Ok(Vec::new());
        }
    };

    for key in &missing {
        warning(format!("Missing key '{key}' (default will be used)"));
    }

    // keys may all be there and still hold values of the wrong type
    match Config::from_file(path) {
        Err(e) => warning(e),
        Ok(_) if missing.is_empty() => {
            success(format!("Configuration is complete: {}", path.display()))
        }
        Ok(_) => {}
    }

    Ok(missing)
}

/// Rewrite the file at `path` with every missing key filled with its default.
pub fn migrate_file(path: &Path) -> AppResult<()> {
    let missing = if path.exists() {
        missing_keys(&fs::read_to_string(path)?)?
    } else {
        EXPECTED_KEYS.to_vec()
    };

    if missing.is_empty() {
        info("Configuration already up to date.");
        return Ok(());
    }

    // load() fills the gaps through the serde defaults
    let cfg = if path.exists() {
        Config::from_file(path)?
    } else {
        Config::default()
    };
    cfg.save(path)?;

    success(format!(
        "Configuration migrated ({} key(s) added): {}",
        missing.len(),
        path.display()
    ));
    Ok(())
}
